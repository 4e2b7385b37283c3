use crate::app::Route;
use crate::components::input_value;
use crate::hooks::use_user_id::use_user_id;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub route: Route,
    pub on_navigate: Callback<Route>,
    #[prop_or_default]
    pub children: Html,
}

/// Sidebar with the identity field and navigation, page content on the right
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let user = use_user_id();

    let on_user_id = {
        let set_user_id = user.set_user_id.clone();
        Callback::from(move |e: InputEvent| set_user_id.emit(input_value(&e)))
    };

    html! {
        <div class="app-container">
            <aside class="sidebar">
                <h1 class="app-title">{"PlantulasBot"}</h1>

                <label class="field sidebar-user">
                    <span>{"Usuario de Telegram ID"}</span>
                    <input
                        type="text"
                        placeholder="0"
                        value={user.user_id.clone()}
                        oninput={on_user_id}
                    />
                </label>

                <nav class="sidebar-nav">
                    {
                        Route::NAV.iter().map(|route| {
                            let active = props.route.section() == route.section();
                            let onclick = {
                                let on_navigate = props.on_navigate.clone();
                                let route = route.clone();
                                Callback::from(move |_| on_navigate.emit(route.clone()))
                            };
                            html! {
                                <button class={classes!("nav-link", active.then_some("active"))} {onclick}>
                                    {route.title()}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </nav>
            </aside>

            <main class="app-main">
                {props.children.clone()}
            </main>
        </div>
    }
}

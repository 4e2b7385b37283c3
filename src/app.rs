use crate::components::{ErrorBlock, layout::Layout};
use crate::hooks::use_api::ApiContext;
use crate::pages::{ChatbotTest, IndoorDetailPage, Indoors, Panel};
use crate::services::{api::ApiClient, identity::LocalStorageIdentity};
use std::rc::Rc;
use yew::prelude::*;

/// Page currently shown, held in `App` state
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Route {
    #[default]
    Panel,
    Indoors,
    IndoorDetail(AttrValue),
    ChatbotTest,
}

impl Route {
    /// Entries shown in the sidebar, in order
    pub const NAV: [Self; 3] = [Self::Panel, Self::Indoors, Self::ChatbotTest];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Panel => "Panel",
            Self::Indoors => "Indoors",
            Self::IndoorDetail(_) => "Detalle de Indoor",
            Self::ChatbotTest => "Chatbot Test",
        }
    }

    /// Sidebar entry highlighted for this route
    pub fn section(&self) -> Self {
        match self {
            Self::IndoorDetail(_) => Self::Indoors,
            other => other.clone(),
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(Route::default);
    let context = use_memo((), |_| {
        ApiClient::new(Rc::new(LocalStorageIdentity::new())).map(ApiContext::new)
    });

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| route.set(next))
    };

    let content = match &*context {
        Ok(context) => {
            let page = match &*route {
                Route::Panel => html! { <Panel /> },
                Route::Indoors => {
                    let on_select = on_navigate.reform(Route::IndoorDetail);
                    html! { <Indoors {on_select} /> }
                }
                Route::IndoorDetail(id) => {
                    let on_back = on_navigate.reform(|()| Route::Indoors);
                    html! { <IndoorDetailPage key={id.to_string()} indoor_id={id.clone()} {on_back} /> }
                }
                Route::ChatbotTest => html! { <ChatbotTest /> },
            };

            html! {
                <ContextProvider<ApiContext> context={context.clone()}>
                    <Layout route={(*route).clone()} on_navigate={on_navigate.clone()}>
                        {page}
                    </Layout>
                </ContextProvider<ApiContext>>
            }
        }
        Err(err) => html! {
            <ErrorBlock prefix="No se pudo iniciar la aplicación: " message={err.to_string()} />
        },
    };

    html! {
        <>
            {content}
            <style>
                {include_str!("style.css")}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_route_highlights_indoors() {
        let route = Route::IndoorDetail("abc".into());
        assert_eq!(route.section(), Route::Indoors);
        assert_eq!(Route::ChatbotTest.section(), Route::ChatbotTest);
    }

    #[test]
    fn nav_lists_top_level_pages() {
        let titles: Vec<_> = Route::NAV.iter().map(Route::title).collect();
        assert_eq!(titles, ["Panel", "Indoors", "Chatbot Test"]);
        assert_eq!(Route::default(), Route::Panel);
    }
}

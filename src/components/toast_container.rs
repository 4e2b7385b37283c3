use crate::hooks::use_toasts::Toast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastContainerProps {
    pub toasts: Vec<Toast>,
    pub on_remove: Callback<u64>,
}

#[function_component(ToastContainer)]
pub fn toast_container(props: &ToastContainerProps) -> Html {
    html! {
        <div class="toast-container" aria-live="polite">
            {
                props.toasts.iter().map(|toast| {
                    let onclick = {
                        let on_remove = props.on_remove.clone();
                        let id = toast.id;
                        Callback::from(move |_| on_remove.emit(id))
                    };

                    html! {
                        <div key={toast.id} class={classes!("toast", toast.kind.css_class())}>
                            <span>{&toast.message}</span>
                            <button class="toast-close" {onclick} aria-label="Cerrar">{"✕"}</button>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

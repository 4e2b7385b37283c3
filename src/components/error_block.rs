use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBlockProps {
    /// Text shown before the error message, e.g. "Error al cargar panel: "
    #[prop_or_default]
    pub prefix: AttrValue,
    pub message: AttrValue,
}

/// Inline error shown in place of content when a read hook fails
#[function_component(ErrorBlock)]
pub fn error_block(props: &ErrorBlockProps) -> Html {
    html! {
        <div class="status error" role="alert">
            <p>{"❌ "}{&props.prefix}{&props.message}</p>
        </div>
    }
}

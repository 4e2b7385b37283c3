use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    #[prop_or_else(|| AttrValue::from("📭"))]
    pub icon: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Button label and handler, rendered only when both are set
    #[prop_or_default]
    pub action_label: Option<AttrValue>,
    #[prop_or_default]
    pub on_action: Option<Callback<()>>,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    let action = match (&props.action_label, &props.on_action) {
        (Some(label), Some(on_action)) => {
            let on_action = on_action.clone();
            let onclick = Callback::from(move |_| on_action.emit(()));
            html! { <button class="btn btn-primary" {onclick}>{label}</button> }
        }
        _ => html! {},
    };

    html! {
        <div class="empty-state">
            <div class="empty-state-icon">{&props.icon}</div>
            <h3>{&props.title}</h3>
            if let Some(description) = &props.description {
                <p class="empty-state-description">{description}</p>
            }
            {action}
        </div>
    }
}

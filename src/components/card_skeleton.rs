use yew::prelude::*;

/// Loading placeholder for stat and indoor cards
#[function_component(CardSkeleton)]
pub fn card_skeleton() -> Html {
    html! {
        <div class="card skeleton">
            <div class="skeleton-line short"></div>
            <div class="skeleton-line value"></div>
        </div>
    }
}

pub mod card_skeleton;
pub mod create_indoor_modal;
pub mod create_plant_modal;
pub mod empty_state;
pub mod error_block;
pub mod layout;
pub mod toast_container;
pub mod upcoming_item;
pub mod water_modal;

pub use card_skeleton::CardSkeleton;
pub use empty_state::EmptyState;
pub use error_block::ErrorBlock;
pub use toast_container::ToastContainer;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Current value of the `<input>` that fired the event
pub(crate) fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

/// Current value of the `<textarea>` that fired the event
pub(crate) fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

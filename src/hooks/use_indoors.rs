use crate::hooks::use_resource::{ResourceHandle, use_resource};
use crate::models::indoor::IndoorListItem;
use yew::prelude::*;

#[hook]
pub fn use_indoors() -> ResourceHandle<Vec<IndoorListItem>> {
    use_resource((), |client, ()| {
        Some(async move { client.fetch_indoors().await })
    })
}

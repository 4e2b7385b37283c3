use crate::hooks::use_resource::{ResourceHandle, use_resource};
use crate::models::indoor::IndoorDetailResponse;
use yew::prelude::*;

/// Detail of a single indoor. A blank id issues no request and leaves the state idle.
#[hook]
pub fn use_indoor_detail(indoor_id: AttrValue) -> ResourceHandle<IndoorDetailResponse> {
    use_resource(indoor_id, |client, indoor_id| {
        (!indoor_id.trim().is_empty())
            .then(|| async move { client.fetch_indoor_detail(&indoor_id).await })
    })
}

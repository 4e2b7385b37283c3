use crate::hooks::use_resource::{ResourceHandle, use_resource};
use crate::models::dashboard::DashboardSummary;
use yew::prelude::*;

/// Dashboard summary and upcoming waterings
#[hook]
pub fn use_dashboard() -> ResourceHandle<DashboardSummary> {
    use_resource((), |client, ()| {
        Some(async move { client.fetch_dashboard().await })
    })
}

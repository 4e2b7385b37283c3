use crate::services::api::ApiClient;
use std::rc::Rc;
use yew::prelude::*;

/// Context value carrying the shared API client
#[derive(Clone)]
pub struct ApiContext(Rc<ApiClient>);

impl ApiContext {
    pub fn new(client: ApiClient) -> Self {
        Self(Rc::new(client))
    }

    pub fn client(&self) -> Rc<ApiClient> {
        self.0.clone()
    }
}

impl PartialEq for ApiContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Returns the client provided by the nearest `ContextProvider<ApiContext>`.
///
/// # Panics
///
/// Panics when rendered outside the provider set up by `App`.
#[hook]
pub fn use_api_client() -> Rc<ApiClient> {
    use_context::<ApiContext>()
        .expect("ApiContext provider missing")
        .client()
}

use crate::hooks::use_api::use_api_client;
use crate::models::error::AppError;
use crate::services::api::ApiClient;
use crate::utils::cancel::CancelToken;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use yew::prelude::*;

pub type MutationFuture<T> = Pin<Box<dyn Future<Output = Result<T, AppError>>>>;

/// Loading/error state of a mutation hook
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MutationState {
    pub loading: bool,
    pub error: Option<AppError>,
}

#[derive(Debug)]
pub enum MutationAction {
    Begin,
    Settle(Option<AppError>),
}

impl MutationState {
    pub fn apply(&self, action: MutationAction) -> Self {
        match action {
            MutationAction::Begin => Self {
                loading: true,
                error: None,
            },
            MutationAction::Settle(error) => Self {
                loading: false,
                error,
            },
        }
    }
}

impl Reducible for MutationState {
    type Action = MutationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Handle returned by mutation hooks
pub struct MutationHandle<A, T> {
    pub state: MutationState,
    run: Rc<dyn Fn(A) -> MutationFuture<T>>,
}

impl<A, T> MutationHandle<A, T> {
    /// Issues the request. The error, if any, is both stored in `state` and returned.
    pub fn run(&self, args: A) -> MutationFuture<T> {
        (self.run)(args)
    }

    pub const fn loading(&self) -> bool {
        self.state.loading
    }

    pub const fn error(&self) -> Option<&AppError> {
        self.state.error.as_ref()
    }
}

impl<A, T> Clone for MutationHandle<A, T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            run: self.run.clone(),
        }
    }
}

impl<A, T> PartialEq for MutationHandle<A, T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && Rc::ptr_eq(&self.run, &other.run)
    }
}

/// Token cancelled when the calling component unmounts
#[hook]
fn use_unmount_token() -> CancelToken {
    let token = use_memo((), |_| CancelToken::new());

    {
        let token = (*token).clone();
        use_effect_with((), move |_| move || token.cancel());
    }

    (*token).clone()
}

/// Wraps an API call that only runs when explicitly invoked.
#[hook]
pub fn use_mutation<A, T, F, Fut>(action: F) -> MutationHandle<A, T>
where
    A: 'static,
    T: 'static,
    F: Fn(Rc<ApiClient>, A) -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let client = use_api_client();
    let state = use_reducer(MutationState::default);
    let mounted = use_unmount_token();

    let dispatcher = state.dispatcher();
    let action = Rc::new(action);
    let run: Rc<dyn Fn(A) -> MutationFuture<T>> = Rc::new(move |args: A| -> MutationFuture<T> {
        let dispatcher = dispatcher.clone();
        let client = client.clone();
        let action = action.clone();
        let mounted = mounted.clone();

        Box::pin(async move {
            dispatcher.dispatch(MutationAction::Begin);
            let result = action(client, args).await;
            mounted.deliver(result.as_ref().err().cloned(), |error| {
                dispatcher.dispatch(MutationAction::Settle(error));
            });
            result
        })
    });

    MutationHandle {
        state: (*state).clone(),
        run,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_spans_begin_to_settle() {
        let idle = MutationState::default();
        assert!(!idle.loading);

        let running = idle.apply(MutationAction::Begin);
        assert!(running.loading);

        let done = running.apply(MutationAction::Settle(None));
        assert!(!done.loading);
        assert_eq!(done.error, None);
    }

    #[test]
    fn test_failure_clears_loading_and_keeps_error() {
        let error = AppError::Http {
            message: "Plant not found".to_string(),
            status: 404,
        };

        let failed = MutationState::default()
            .apply(MutationAction::Begin)
            .apply(MutationAction::Settle(Some(error.clone())));
        assert!(!failed.loading);
        assert_eq!(failed.error, Some(error));

        let retry = failed.apply(MutationAction::Begin);
        assert!(retry.loading);
        assert_eq!(retry.error, None);
    }
}

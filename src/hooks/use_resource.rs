use crate::hooks::use_api::use_api_client;
use crate::models::error::AppError;
use crate::services::api::ApiClient;
use crate::utils::cancel::CancelToken;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Loading/error/data state of a read hook
#[derive(Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<Rc<T>>,
    pub loading: bool,
    pub error: Option<AppError>,
}

impl<T> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            loading: self.loading,
            error: self.error.clone(),
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

#[derive(Debug)]
pub enum FetchAction<T> {
    /// A request was issued
    Begin,
    Succeed(Rc<T>),
    Fail(AppError),
    /// Nothing to fetch for the current inputs
    Reset,
}

impl<T> FetchState<T> {
    /// Nothing requested yet
    pub const fn idle() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }

    /// Initial state of a hook that fetches on mount
    pub const fn pending() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<T>> {
        self.data.as_ref()
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Applies a transition. Data is only ever replaced wholesale.
    pub fn apply(&self, action: FetchAction<T>) -> Self {
        match action {
            FetchAction::Begin => Self {
                data: self.data.clone(),
                loading: true,
                error: None,
            },
            FetchAction::Succeed(data) => Self {
                data: Some(data),
                loading: false,
                error: None,
            },
            FetchAction::Fail(error) => Self {
                data: self.data.clone(),
                loading: false,
                error: Some(error),
            },
            FetchAction::Reset => Self::idle(),
        }
    }
}

impl<T: 'static> Reducible for FetchState<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Refetch counter. Each dispatched action bumps the value current at dispatch time, so
/// every refetch produces a distinct generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefetchGeneration(u32);

impl RefetchGeneration {
    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl Reducible for RefetchGeneration {
    type Action = ();

    fn reduce(self: Rc<Self>, (): Self::Action) -> Rc<Self> {
        Rc::new(self.next())
    }
}

/// Handle returned by read hooks
#[derive(PartialEq)]
pub struct ResourceHandle<T> {
    pub state: FetchState<T>,
    pub refetch: Callback<()>,
}

impl<T> Clone for ResourceHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            refetch: self.refetch.clone(),
        }
    }
}

/// Fetches once on activation and again whenever `deps` change or `refetch` is emitted.
///
/// `fetch` returns `None` when there is nothing to request for the given deps. Every request
/// gets its own cancel token, cancelled by the effect cleanup, so only the newest request
/// still mounted can write state.
#[hook]
pub fn use_resource<T, D, F, Fut>(deps: D, fetch: F) -> ResourceHandle<T>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(Rc<ApiClient>, D) -> Option<Fut> + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let client = use_api_client();
    let state = use_reducer(FetchState::pending);
    let generation = use_reducer(RefetchGeneration::default);

    {
        let dispatcher = state.dispatcher();

        use_effect_with((deps, *generation), move |(deps, _)| {
            let token = CancelToken::new();

            match fetch(client, deps.clone()) {
                Some(request) => {
                    dispatcher.dispatch(FetchAction::Begin);
                    let token = token.clone();

                    spawn_local(async move {
                        let result = request.await;
                        token.deliver(result, |result| match result {
                            Ok(data) => dispatcher.dispatch(FetchAction::Succeed(Rc::new(data))),
                            Err(e) => dispatcher.dispatch(FetchAction::Fail(e)),
                        });
                    });
                }
                None => dispatcher.dispatch(FetchAction::Reset),
            }

            move || token.cancel()
        });
    }

    let refetch = {
        let dispatcher = generation.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(()))
    };

    ResourceHandle {
        state: (*state).clone(),
        refetch,
    }
}

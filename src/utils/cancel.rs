use std::cell::Cell;
use std::rc::Rc;

/// Shared flag marking an in-flight request as abandoned.
///
/// Hooks hand a fresh token to every fetch and cancel it from the effect cleanup, so a response
/// that lands after unmount, a dependency change or a newer refetch is dropped instead of
/// overwriting state.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Runs `f` with `value` unless the token was cancelled. Returns whether `f` ran.
    pub fn deliver<T>(&self, value: T, f: impl FnOnce(T)) -> bool {
        if self.is_cancelled() {
            false
        } else {
            f(value);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let token = CancelToken::new();
        let observer = token.clone();
        assert!(!observer.is_cancelled());

        token.cancel();
        assert!(observer.is_cancelled());
    }

    #[test]
    fn test_deliver_skips_after_cancel() {
        let token = CancelToken::new();
        let mut seen = Vec::new();

        assert!(token.deliver(1, |v| seen.push(v)));
        token.cancel();
        assert!(!token.deliver(2, |v| seen.push(v)));

        assert_eq!(seen, vec![1]);
    }
}

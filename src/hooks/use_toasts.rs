use crate::config::Config;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Returns CSS class name for color coding
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
            Self::Info => "toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    /// Lifetime in milliseconds, 0 keeps it until dismissed
    pub duration_ms: u32,
}

/// Ordered list of visible toasts.
///
/// Ids come from a per-queue counter and are never reused.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast and returns its id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            duration_ms,
        });
        id
    }

    /// Removes a toast. Returns false when it was already gone.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Delay after which a toast is dismissed automatically, if any
pub const fn auto_dismiss_delay(duration_ms: u32) -> Option<u32> {
    if duration_ms == 0 {
        None
    } else {
        Some(duration_ms)
    }
}

/// Handle returned by `use_toasts`
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    pub toasts: Vec<Toast>,
    /// `(message, kind, duration_ms)`, returns the new toast's id
    pub show: Callback<(String, ToastKind, u32), u64>,
    pub remove: Callback<u64>,
}

impl ToastHandle {
    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show
            .emit((message.into(), ToastKind::Success, Config::TOAST_DURATION_MS))
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show
            .emit((message.into(), ToastKind::Error, Config::TOAST_DURATION_MS))
    }
}

/// Local toast notifications, not network-backed
#[hook]
pub fn use_toasts() -> ToastHandle {
    let queue = use_mut_ref(ToastQueue::new);
    let update = use_force_update();

    let remove = {
        let queue = queue.clone();
        let update = update.clone();
        Callback::from(move |id: u64| {
            if queue.borrow_mut().remove(id) {
                update.force_update();
            }
        })
    };

    let show = {
        let queue = queue.clone();
        let remove = remove.clone();
        Callback::from(move |(message, kind, duration_ms): (String, ToastKind, u32)| {
            let id = queue.borrow_mut().push(message, kind, duration_ms);
            update.force_update();

            if let Some(delay) = auto_dismiss_delay(duration_ms) {
                let remove = remove.clone();
                Timeout::new(delay, move || remove.emit(id)).forget();
            }

            id
        })
    };

    let toasts = queue.borrow().toasts().to_vec();

    ToastHandle {
        toasts,
        show,
        remove,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_unique_ids() {
        let mut queue = ToastQueue::new();
        let a = queue.push("a", ToastKind::Info, 0);
        let b = queue.push("b", ToastKind::Info, 0);
        queue.remove(a);
        let c = queue.push("c", ToastKind::Info, 0);

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut queue = ToastQueue::new();
        let id = queue.push("done", ToastKind::Success, 1000);

        assert!(queue.remove(id));
        assert!(!queue.remove(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_zero_duration_disables_auto_dismiss() {
        assert_eq!(auto_dismiss_delay(0), None);
        assert_eq!(auto_dismiss_delay(1000), Some(1000));
    }
}

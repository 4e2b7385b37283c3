use crate::config::Config;
use gloo_storage::Storage;
use std::cell::RefCell;

/// Source of the Telegram user id forwarded on every API call.
///
/// The client reads the id through this trait on each request instead of touching browser
/// storage itself, so tests and embedders can supply their own identity.
pub trait IdentityProvider {
    /// Current user id, never empty.
    fn user_id(&self) -> String;

    /// Replaces the stored user id.
    fn set_user_id(&self, user_id: &str);
}

/// Falls back to the default id when nothing usable is stored.
pub fn normalize_user_id(stored: Option<String>) -> String {
    stored
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Config::DEFAULT_USER_ID.to_string())
}

/// Reads a raw localStorage value. Plain text is taken as is; a JSON-encoded string is
/// unquoted.
pub fn parse_stored_user_id(raw: Option<String>) -> String {
    let unquoted = raw.map(|value| serde_json::from_str::<String>(&value).unwrap_or(value));
    normalize_user_id(unquoted)
}

/// Identity persisted in the browser's localStorage
#[derive(Debug, Clone)]
pub struct LocalStorageIdentity {
    key: String,
}

impl LocalStorageIdentity {
    pub fn new() -> Self {
        Self::with_key(Config::USER_ID_STORAGE_KEY)
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for LocalStorageIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for LocalStorageIdentity {
    fn user_id(&self) -> String {
        let raw = gloo_storage::LocalStorage::raw()
            .get_item(&self.key)
            .ok()
            .flatten();
        parse_stored_user_id(raw)
    }

    fn set_user_id(&self, user_id: &str) {
        if let Err(e) = gloo_storage::LocalStorage::raw().set_item(&self.key, user_id) {
            web_sys::console::warn_1(&format!("Failed to save user id: {e:?}").into());
        }
    }
}

/// In-memory identity
#[derive(Debug, Default)]
pub struct StaticIdentity {
    user_id: RefCell<Option<String>>,
}

impl StaticIdentity {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: RefCell::new(Some(user_id.into())),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn user_id(&self) -> String {
        normalize_user_id(self.user_id.borrow().clone())
    }

    fn set_user_id(&self, user_id: &str) {
        *self.user_id.borrow_mut() = Some(user_id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_user_id() {
        assert_eq!(normalize_user_id(None), "0");
        assert_eq!(normalize_user_id(Some("   ".to_string())), "0");
        assert_eq!(normalize_user_id(Some(" 42 ".to_string())), "42");
    }

    #[test]
    fn test_parse_stored_user_id_keeps_plain_text() {
        assert_eq!(parse_stored_user_id(Some("12345678".to_string())), "12345678");
        assert_eq!(parse_stored_user_id(Some("abc".to_string())), "abc");
        assert_eq!(parse_stored_user_id(Some("\"42\"".to_string())), "42");
        assert_eq!(parse_stored_user_id(Some(String::new())), "0");
        assert_eq!(parse_stored_user_id(None), "0");
    }

    #[test]
    fn test_static_identity() {
        let identity = StaticIdentity::default();
        assert_eq!(identity.user_id(), "0");

        identity.set_user_id("12345678");
        assert_eq!(identity.user_id(), "12345678");
    }
}

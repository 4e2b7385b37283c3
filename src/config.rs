/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend base URL, fixed at build time via `PLANTULAS_API_BASE_URL`
    pub const API_BASE_URL: &'static str = match option_env!("PLANTULAS_API_BASE_URL") {
        Some(url) => url,
        None => "http://localhost:8000",
    };

    /// Identity sent when the user never entered a Telegram user id
    pub const DEFAULT_USER_ID: &'static str = "0";

    /// localStorage key holding the Telegram user id
    pub const USER_ID_STORAGE_KEY: &'static str = "telegram_user_id";

    /// Default toast lifetime in milliseconds
    pub const TOAST_DURATION_MS: u32 = 3_000;
}

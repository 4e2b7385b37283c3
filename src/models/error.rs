#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{message}")]
    Http { message: String, status: u16 },

    #[error("{0}")]
    Validation(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP status code for errors raised from a non-2xx response.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

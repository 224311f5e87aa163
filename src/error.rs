use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinearError {
    #[error("no API key found. Please run 'quick-branch auth' first")]
    ApiKeyNotFound,

    #[error("list not configured. Please run 'quick-branch list setup' first")]
    ListNotConfigured,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("GraphQL error: {0}")]
    GraphQLError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("git error: {0}")]
    GitError(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("{0}")]
    Unknown(String),
}

pub type LinearResult<T> = Result<T, LinearError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> LinearResult<T>;
    fn with_context<F>(self, f: F) -> LinearResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> LinearResult<T> {
        self.map_err(|e| LinearError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> LinearResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LinearError::Unknown(format!("{}: {}", f(), e)))
    }
}

#[macro_export]
macro_rules! linear_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::LinearError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::LinearError::$error_type(format!($fmt, $($arg)*))
    };
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegError {
    #[error("Unknown field: {0}. Expected 'name' or 'email'.")]
    InvalidField(String),

    #[error("Unknown rule: {0}. Expected 'email' or 'password'.")]
    UnknownRule(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type RegResult<T> = Result<T, RegError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> RegResult<T>;
    fn with_context<F>(self, f: F) -> RegResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> RegResult<T> {
        self.map_err(|e| RegError::ConfigError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> RegResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| RegError::ConfigError(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> RegResult<T> {
        self.ok_or_else(|| RegError::ConfigError(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> RegResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| RegError::ConfigError(f()))
    }
}

#[macro_export]
macro_rules! reg_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::RegError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::RegError::$error_type(format!($fmt, $($arg)*))
    };
}

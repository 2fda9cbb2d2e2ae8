//! Errors from setting up the application.
//!
//! Greeting the world cannot fail, so only the infrastructure returns a [`Result`].

/// An error while preparing the application to run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration could not be read or deserialized.
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    /// Logging could not be initialized.
    #[error("logging error: {0}")]
    Logging(String),
}

/// The result of infrastructure functions.
pub type Result<T> = std::result::Result<T, Error>;

impl From<tracing_subscriber::filter::ParseError> for Error {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        Error::Logging(format!("invalid filter: {e}"))
    }
}

impl From<tracing_subscriber::util::TryInitError> for Error {
    fn from(e: tracing_subscriber::util::TryInitError) -> Self {
        Error::Logging(e.to_string())
    }
}

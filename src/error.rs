use thiserror::Error;

/// The error type returned by the functions and methods of this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O failure, usually raised by an audio source.
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
    /// The engine reported a failure. The code is the engine's own result code.
    #[error("engine failure {code:#x}: {message}")]
    Engine {
        /// Engine-specific result code.
        code: u32,
        /// Human-readable description, if the engine provided one.
        message: String,
    },
    /// An argument was rejected before it reached the engine.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The handle does not name a live engine resource.
    #[error("invalid handle")]
    InvalidHandle,
    /// The configuration could not be loaded or parsed.
    #[error("configuration: {0}")]
    Config(String),
    /// An asynchronous operation was cancelled before it completed.
    #[error("operation cancelled")]
    Cancelled,
}

impl Error {
    /// Convenience constructor for engine failures.
    pub fn engine<S: Into<String>>(code: u32, message: S) -> Self {
        Self::Engine {
            code,
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Self::Config(source.to_string())
    }
}

use thiserror::Error;

/// The aggregate error type for the core crate.
///
/// Subsystem-specific errors (style parsing, driver I/O) convert into
/// this via `#[from]` so application code can propagate a single type
/// with `?`.
#[derive(Error, Debug)]
pub enum LoomError {
    #[error("Terminal error: {0}")]
    IO(#[from] std::io::Error),

    #[error("CSS Parse Error: {0}")]
    InvalidCss(String),

    #[error("Layout error: Widget {0} is too large for the allocated region")]
    LayoutOverflow(String),

    #[error("The application was already running")]
    AlreadyRunning,

    #[error("Runtime initialization error: {0}")]
    RuntimeInit(String),
}

impl From<crate::driver::DriverError> for LoomError {
    fn from(err: crate::driver::DriverError) -> Self {
        match err {
            crate::driver::DriverError::Io(e) => LoomError::IO(e),
            crate::driver::DriverError::NotStarted => {
                LoomError::RuntimeInit("driver was not started".to_string())
            }
        }
    }
}

/// Convenience alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, LoomError>;

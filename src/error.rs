use thiserror::Error;

/// The error type returned by the file and speech layers of this crate.
///
/// Neither the settings codec nor the message sanitizer can fail; only the workspace files, the
/// speech markup, and SAPI itself can.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing one of the workspace files failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The speech markup could not be written.
    #[error("speech markup error: {0}")]
    Xml(#[from] xml::writer::Error),

    /// A SAPI call returned a failure code.
    #[error("SAPI error: {0}")]
    Sapi(String),

    /// The requested operation is not available on this platform.
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),
}

#[cfg(windows)]
impl From<windows::core::Error> for Error {
    fn from(err: windows::core::Error) -> Self {
        Self::Sapi(err.to_string())
    }
}

/// The type returned by fallible functions and methods of this crate.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the display bridge

use thiserror::Error;

/// Errors surfaced by the display bridge.
#[derive(Error, Debug)]
pub enum DisplayError {
    /// A command payload could not be encoded or decoded.
    #[error("Command codec failed: {0}")]
    Codec(String),

    /// A call into the host platform failed.
    #[error("Platform call failed: {0}")]
    Platform(String),

    /// The operation is not available on this platform.
    #[error("Not supported on this platform: {0}")]
    Unsupported(String),
}

/// Result type for display-bridge operations.
pub type Result<T> = std::result::Result<T, DisplayError>;

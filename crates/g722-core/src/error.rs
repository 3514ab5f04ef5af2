//! Error handling for the codec library
//!
//! The DSP core itself cannot fail: every arithmetic step saturates. The
//! errors below are raised at the edges, when a caller hands the codec a
//! configuration, a buffer or a codeword it cannot accept.

#![allow(missing_docs)]

use std::fmt;
use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Error type for codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Invalid codec configuration (mode, frame size, channel count)
    #[error("Invalid codec configuration: {details}")]
    InvalidConfig { details: String },

    /// Input rejected before any state was modified
    #[error("Invalid input: {details}")]
    InvalidInput { details: String },

    /// Invalid frame size
    #[error("Invalid frame size: expected {expected}, got {actual}")]
    InvalidFrameSize { expected: usize, actual: usize },

    /// Buffer too small for operation
    #[error("Buffer too small: need {needed}, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
}

impl CodecError {
    /// Create a new invalid configuration error
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig {
            details: details.into(),
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(details: impl Into<String>) -> Self {
        Self::InvalidInput {
            details: details.into(),
        }
    }

    /// Create a new buffer too small error
    pub fn buffer_too_small(needed: usize, actual: usize) -> Self {
        Self::BufferTooSmall { needed, actual }
    }

    /// Check if this error is recoverable
    ///
    /// Recoverable errors leave the codec usable: the offending call can be
    /// retried with corrected input. Configuration errors cannot be retried
    /// without building a new codec.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidConfig { .. } => false,

            Self::InvalidInput { .. }
            | Self::InvalidFrameSize { .. }
            | Self::BufferTooSmall { .. } => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfig { .. } => ErrorCategory::Configuration,
            Self::InvalidInput { .. } | Self::InvalidFrameSize { .. } => ErrorCategory::Input,
            Self::BufferTooSmall { .. } => ErrorCategory::Memory,
        }
    }
}

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration and parameter errors
    Configuration,
    /// Malformed samples or codewords
    Input,
    /// Caller-provided buffer errors
    Memory,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Memory => write!(f, "Memory"),
        }
    }
}

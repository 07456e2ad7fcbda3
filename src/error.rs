//! Error handling for the veckit library
//!
//! A single crate-wide error enum covers container failures (allocation,
//! bounds) and the text-utility failure modes (pattern compilation,
//! backreference arity). "Not found" outcomes are never errors; they travel
//! through `Option`/`Result<usize, usize>` channels on the lookup APIs.

use thiserror::Error;

/// Main error type for the veckit library
#[derive(Error, Debug)]
pub enum VeckitError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid data or arguments
    #[error("Invalid data: {message}")]
    InvalidData {
        /// Error message describing the issue
        message: String,
    },

    /// Index out of bounds access
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Memory allocation failures
    #[error("Memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes requested
        size: usize,
    },

    /// Regular expression failed to compile
    #[error("Pattern error: {message}")]
    Pattern {
        /// Error message from the regex engine
        message: String,
    },

    /// Replacement template backreference count does not match the pattern's
    /// capture group count
    #[error("Capture mismatch: pattern has {groups} groups, template has {refs} backreferences")]
    CaptureMismatch {
        /// Capture groups defined by the pattern
        groups: usize,
        /// Backreference occurrences in the replacement template
        refs: usize,
    },
}

impl VeckitError {
    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Create a pattern compilation error
    pub fn pattern<S: Into<String>>(message: S) -> Self {
        Self::Pattern {
            message: message.into(),
        }
    }

    /// Create a capture/backreference mismatch error
    pub fn capture_mismatch(groups: usize, refs: usize) -> Self {
        Self::CaptureMismatch { groups, refs }
    }

    /// Check if this is a recoverable error
    ///
    /// Allocation failure leaves containers in their prior valid state, so a
    /// caller may free memory and retry; bounds and pattern errors are
    /// programming errors and are not retryable.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::OutOfMemory { .. } => true,
            Self::InvalidData { .. } => false,
            Self::OutOfBounds { .. } => false,
            Self::Pattern { .. } => false,
            Self::CaptureMismatch { .. } => false,
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::InvalidData { .. } => "data",
            Self::OutOfBounds { .. } => "bounds",
            Self::OutOfMemory { .. } => "memory",
            Self::Pattern { .. } => "pattern",
            Self::CaptureMismatch { .. } => "capture",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, VeckitError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(VeckitError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

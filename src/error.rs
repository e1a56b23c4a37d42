//! Error handling module for dockgrid
//!
//! One error enum for the library, built with thiserror. Queue exhaustion
//! is not an error; stepping reports it as `StepOutcome::Exhausted`.

use thiserror::Error;

/// Main error type for dockgrid
#[derive(Error, Debug)]
pub enum DockGridError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Routing errors (row outside the grid)
    #[error("Routing error: {0}")]
    Route(String),

    /// A move step named a box the registry does not hold
    #[error("Unknown box: {0}")]
    UnknownBox(String),

    /// A move step would leave the grid plus conveyor lane
    #[error("Out of bounds: {0}")]
    OutOfBounds(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for dockgrid operations
pub type Result<T> = std::result::Result<T, DockGridError>;

// Convenient error constructors
impl DockGridError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a routing error
    pub fn route(msg: impl Into<String>) -> Self {
        Self::Route(msg.into())
    }

    /// Create an unknown-box error
    pub fn unknown_box(msg: impl Into<String>) -> Self {
        Self::UnknownBox(msg.into())
    }

    /// Create an out-of-bounds error
    pub fn out_of_bounds(msg: impl Into<String>) -> Self {
        Self::OutOfBounds(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DockGridError::config("grid size must be positive");
        assert_eq!(err.to_string(), "Configuration error: grid size must be positive");

        let err = DockGridError::route("row 11 is outside 1..=10");
        assert_eq!(err.to_string(), "Routing error: row 11 is outside 1..=10");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DockGridError = io_err.into();
        assert!(matches!(err, DockGridError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let err = DockGridError::unknown_box("#42");
        assert!(matches!(err, DockGridError::UnknownBox(_)));

        let err = DockGridError::out_of_bounds("(11, 0)");
        assert!(matches!(err, DockGridError::OutOfBounds(_)));

        let err = DockGridError::terminal("raw mode");
        assert!(matches!(err, DockGridError::Terminal(_)));
    }
}

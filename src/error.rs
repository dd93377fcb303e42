//! Error types for the selector core.
//!
//! The command layer works in `anyhow::Result`; these typed errors are what
//! [`crate::app::session::select`] hands back so callers can tell a bad
//! argument apart from a terminal failure.

use thiserror::Error;

/// Errors raised by a single selection interaction.
#[derive(Debug, Error)]
pub enum SelectError {
    /// The selector was constructed without any options.
    #[error("nothing to select: the option list is empty")]
    NoOptions,

    /// Raw-mode setup/teardown, drawing, or reading input failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type alias for [`SelectError`].
pub type SelectResult<T> = std::result::Result<T, SelectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_convert_to_terminal() {
        let err: SelectError = std::io::Error::new(std::io::ErrorKind::Other, "not a tty").into();
        assert!(matches!(err, SelectError::Terminal(_)));
        assert_eq!(err.to_string(), "terminal error: not a tty");
    }
}

//! Error types with diagnostics using miette
//!
//! The layout core never fails: a request that cannot produce an inset stops
//! early and says so in its `Highlight`. These errors only cover bad input at
//! the collaborator boundary and bad configuration.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Highlight Errors
// ============================================================================

/// Errors raised while resolving a highlight request against a map source
#[derive(Error, Diagnostic, Debug, PartialEq)]
pub enum LocateError {
    #[error("unknown region: {name}")]
    #[diagnostic(code(locator::unknown_region))]
    UnknownRegion {
        name: String,
        #[help]
        suggestion: Option<String>,
    },

    #[error("invalid canvas size {width}x{height}")]
    #[diagnostic(
        code(locator::invalid_canvas),
        help("canvas width and height must be finite and greater than zero")
    )]
    InvalidCanvas {
        width: f64,
        height: f64,
        #[source]
        source: NumericError,
    },

    #[error("invalid bounding box for region {name}")]
    #[diagnostic(
        code(locator::invalid_region),
        help("bounding boxes need a finite origin and a non-negative size")
    )]
    InvalidRegion {
        name: String,
        #[source]
        source: NumericError,
    },
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors from validating `LayoutOptions`
#[derive(Error, Diagnostic, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid layout option `{option}` = {value}: {reason}")]
    #[diagnostic(code(locator::config::invalid_option))]
    InvalidOption {
        option: &'static str,
        value: f64,
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_region_carries_help() {
        let err = LocateError::UnknownRegion {
            name: "cuba".to_string(),
            suggestion: Some("did you mean `Cuba`?".to_string()),
        };
        assert_eq!(err.to_string(), "unknown region: cuba");
        let help = err.help().map(|h| h.to_string());
        assert_eq!(help.as_deref(), Some("did you mean `Cuba`?"));
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("locator::unknown_region"));
    }

    #[test]
    fn invalid_region_exposes_numeric_source() {
        let err = LocateError::InvalidRegion {
            name: "Jamaica".to_string(),
            source: NumericError::NaN,
        };
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("value is NaN"));
    }

    #[test]
    fn config_error_message() {
        let err = ConfigError::InvalidOption {
            option: "min_scale",
            value: -1.0,
            reason: "must be positive",
        };
        assert_eq!(
            err.to_string(),
            "invalid layout option `min_scale` = -1: must be positive"
        );
    }
}

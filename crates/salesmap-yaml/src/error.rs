//! Error types for configuration loading.

use thiserror::Error;

/// Error type for configuration parsing and validation.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A field holds a value the chart cannot use
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field path, e.g. `legend.padding`
        field: String,
        /// Error message
        message: String,
    },
}

impl ParseError {
    pub(crate) fn invalid(field: &str, message: &str) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::invalid("treemap_fraction", "must be in (0, 1]");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'treemap_fraction': must be in (0, 1]"
        );
    }

    #[test]
    fn test_yaml_error_converts() {
        let yaml_err = serde_yaml_ng::from_str::<u32>("[not, a, number]").unwrap_err();
        let err: ParseError = yaml_err.into();
        assert!(err.to_string().starts_with("YAML error: "));
        assert!(std::error::Error::source(&err).is_some());
    }
}

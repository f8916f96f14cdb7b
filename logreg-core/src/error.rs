//! Error types for logreg-core

use thiserror::Error;

/// Result type for logreg-core operations
pub type Result<T> = std::result::Result<T, LogRegError>;

/// logreg-core error types
///
/// Arithmetic conditions (division by zero in `odds`, logarithm of a
/// non-positive value in `logit`) are not represented here: they surface as
/// IEEE-754 `inf` / `NaN` in the returned `f64`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LogRegError {
    #[error("The method {name} does not exist on class {type_name}.")]
    InvalidReference { name: String, type_name: &'static str },

    #[error("The member {name} on class {type_name} cannot be used here.")]
    UnsupportedMember { name: String, type_name: &'static str },

    #[error("Length mismatch: w has {weights} elements, x has {inputs}")]
    LengthMismatch { weights: usize, inputs: usize },

    #[error("The member {name} already exists on class {type_name}.")]
    DuplicateMember { name: String, type_name: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LogRegError {
    pub(crate) fn invalid_reference(name: &str, type_name: &'static str) -> Self {
        LogRegError::InvalidReference {
            name: name.to_string(),
            type_name,
        }
    }

    pub(crate) fn unsupported_member(name: &str, type_name: &'static str) -> Self {
        LogRegError::UnsupportedMember {
            name: name.to_string(),
            type_name,
        }
    }

    pub(crate) fn duplicate_member(name: &str, type_name: &'static str) -> Self {
        LogRegError::DuplicateMember {
            name: name.to_string(),
            type_name,
        }
    }
}

impl From<toml::de::Error> for LogRegError {
    fn from(err: toml::de::Error) -> Self {
        LogRegError::Config(format!("Failed to parse neuron config: {}", err))
    }
}

impl From<toml::ser::Error> for LogRegError {
    fn from(err: toml::ser::Error) -> Self {
        LogRegError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_reference_message() {
        let err = LogRegError::invalid_reference("evens", "LogisticRegression");
        assert_eq!(
            err.to_string(),
            "The method evens does not exist on class LogisticRegression."
        );
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = LogRegError::LengthMismatch { weights: 3, inputs: 2 };
        assert!(err.to_string().contains("3"));
        assert!(err.to_string().contains("2"));
    }
}

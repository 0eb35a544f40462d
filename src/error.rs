//! Error types for card configuration.

use thiserror::Error;

/// Errors raised when a configuration is set on the card.
///
/// These are reported synchronously from [`normalize`](crate::config::normalize)
/// and [`Card::configure`](crate::card::Card::configure) so the host can show
/// them in the editor. Formatting and rendering never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The mandatory `entity` option is absent, null or blank.
    #[error("Please define an entity")]
    MissingEntity,

    /// The `entity` option is present but is not a string.
    #[error("Invalid entity: expected a string, found {found}")]
    InvalidEntity {
        /// JSON type that was found.
        found: &'static str,
    },

    /// The configuration itself is not a JSON object.
    #[error("Invalid configuration: expected an object, found {found}")]
    NotAnObject {
        /// JSON type that was found.
        found: &'static str,
    },
}

/// Short JSON type name, used in error messages and log fields.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_messages() {
        assert_eq!(ConfigError::MissingEntity.to_string(), "Please define an entity");
        assert_eq!(
            ConfigError::InvalidEntity { found: "number" }.to_string(),
            "Invalid entity: expected a string, found number"
        );
    }

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!([1])), "array");
        assert_eq!(json_type_name(&json!({"a": 1})), "object");
    }
}

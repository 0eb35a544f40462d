//! Color resolution for styled runs.
//!
//! Every run is colored through a fixed three-level chain, evaluated fresh
//! on each call:
//!
//! 1. the per-unit override, e.g. `y_n_color` for a year number
//! 2. the global role color: `n_color`, `l_color` or `sep_color`
//! 3. the built-in theme default for the role
//!
//! ```rust
//! use long_form_countdown::config::normalize;
//! use long_form_countdown::style::{resolve_color, Role};
//! use long_form_countdown::unit::Unit;
//! use serde_json::json;
//!
//! let config = normalize(&json!({
//!     "entity": "sensor.launch",
//!     "n_color": "red",
//!     "y_n_color": "blue"
//! })).unwrap();
//!
//! assert_eq!(resolve_color(Some(Unit::Year), Role::Number, &config).as_str(), "blue");
//! assert_eq!(resolve_color(Some(Unit::Day), Role::Number, &config).as_str(), "red");
//! ```

use crate::config::{Configuration, PRIMARY_TEXT_COLOR, SECONDARY_TEXT_COLOR};
use crate::lexer::TokenKind;
use crate::unit::Unit;
use serde::Serialize;
use std::fmt;

/// The styling role of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Numeric magnitude.
    Number,
    /// Unit word or plain text.
    Word,
    /// Separator after a unit.
    Separator,
}

impl Role {
    /// Global option key for this role.
    pub fn global_key(self) -> &'static str {
        match self {
            Role::Number => "n_color",
            Role::Word => "l_color",
            Role::Separator => "sep_color",
        }
    }

    /// Per-unit option key for this role, e.g. `min_l_color`.
    pub fn unit_key(self, unit: Unit) -> String {
        format!("{}_{}", unit.key(), self.global_key())
    }

    /// Built-in color used when neither the unit nor the global option is set.
    pub fn default_color(self) -> ColorValue {
        match self {
            Role::Number | Role::Separator => ColorValue::new(PRIMARY_TEXT_COLOR),
            Role::Word => ColorValue::new(SECONDARY_TEXT_COLOR),
        }
    }
}

impl From<TokenKind> for Role {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Number => Role::Number,
            TokenKind::Word => Role::Word,
            TokenKind::Separator => Role::Separator,
        }
    }
}

/// An opaque color value: hex, a named color, or a theme variable reference.
///
/// The crate never validates color syntax; values are handed to the render
/// target verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ColorValue(String);

impl ColorValue {
    /// Wraps a color string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw color string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits a `var(--name)` or `var(--name, fallback)` theme reference.
    ///
    /// Returns the variable name without the leading dashes and the trimmed
    /// fallback, if any. Anything else returns `None`.
    pub fn theme_var(&self) -> Option<(&str, Option<&str>)> {
        let inner = self
            .0
            .trim()
            .strip_prefix("var(")?
            .strip_suffix(')')?
            .trim();
        let (name, fallback) = match inner.split_once(',') {
            Some((name, fallback)) => (name.trim(), Some(fallback.trim())),
            None => (inner, None),
        };
        let name = name.strip_prefix("--")?;
        Some((name, fallback.filter(|f| !f.is_empty())))
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Resolves the effective color for `role` of `unit`.
///
/// Total: always returns a usable color. `unit = None` skips the per-unit
/// level.
pub fn resolve_color(unit: Option<Unit>, role: Role, config: &Configuration) -> ColorValue {
    unit.and_then(|u| config.unit_color(u, role))
        .or_else(|| config.role_color(role))
        .unwrap_or_else(|| role.default_color())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::normalize;
    use serde_json::json;

    fn config(value: serde_json::Value) -> Configuration {
        let mut value = value;
        value["entity"] = json!("sensor.x");
        normalize(&value).unwrap()
    }

    #[test]
    fn test_unit_override_wins() {
        let config = config(json!({ "n_color": "red", "y_n_color": "blue" }));
        assert_eq!(
            resolve_color(Some(Unit::Year), Role::Number, &config),
            ColorValue::new("blue")
        );
    }

    #[test]
    fn test_global_color_when_no_override() {
        let config = config(json!({ "n_color": "red" }));
        assert_eq!(
            resolve_color(Some(Unit::Year), Role::Number, &config),
            ColorValue::new("red")
        );
    }

    #[test]
    fn test_builtin_default() {
        let config = config(json!({}));
        assert_eq!(
            resolve_color(Some(Unit::Year), Role::Number, &config),
            Role::Number.default_color()
        );
        assert_eq!(
            resolve_color(Some(Unit::Hour), Role::Word, &config).as_str(),
            SECONDARY_TEXT_COLOR
        );
    }

    #[test]
    fn test_empty_strings_fall_through() {
        let config = config(json!({ "n_color": "", "y_n_color": "" }));
        assert_eq!(
            resolve_color(Some(Unit::Year), Role::Number, &config),
            Role::Number.default_color()
        );
    }

    #[test]
    fn test_no_unit_skips_override() {
        let config = config(json!({ "l_color": "green", "d_l_color": "pink" }));
        assert_eq!(resolve_color(None, Role::Word, &config).as_str(), "green");
        assert_eq!(
            resolve_color(Some(Unit::Day), Role::Word, &config).as_str(),
            "pink"
        );
    }

    #[test]
    fn test_minute_keys() {
        let config = config(json!({ "min_n_color": "#ff0000", "m_n_color": "#00ff00" }));
        assert_eq!(
            resolve_color(Some(Unit::Minute), Role::Number, &config).as_str(),
            "#ff0000"
        );
        assert_eq!(
            resolve_color(Some(Unit::Month), Role::Number, &config).as_str(),
            "#00ff00"
        );
    }

    #[test]
    fn test_separator_override_and_global() {
        let config = config(json!({ "sep_color": "gray", "s_sep_color": "white" }));
        assert_eq!(
            resolve_color(Some(Unit::Second), Role::Separator, &config).as_str(),
            "white"
        );
        assert_eq!(
            resolve_color(Some(Unit::Hour), Role::Separator, &config).as_str(),
            "gray"
        );
    }

    #[test]
    fn test_sectioned_colors() {
        let config = config(json!({ "colors": { "h_l_color": "teal" } }));
        assert_eq!(
            resolve_color(Some(Unit::Hour), Role::Word, &config).as_str(),
            "teal"
        );
    }

    #[test]
    fn test_theme_var_parsing() {
        assert_eq!(
            ColorValue::new("var(--primary-text-color)").theme_var(),
            Some(("primary-text-color", None))
        );
        assert_eq!(
            ColorValue::new("var(--accent, #ff9800)").theme_var(),
            Some(("accent", Some("#ff9800")))
        );
        assert_eq!(ColorValue::new("#fff").theme_var(), None);
        assert_eq!(ColorValue::new("var(accent)").theme_var(), None);
    }
}

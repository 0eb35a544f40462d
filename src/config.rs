//! Card configuration: normalization, defaults and sectioned lookup.
//!
//! The host hands the card a JSON object. Two shapes are in circulation and
//! both are accepted without the caller having to know which one it holds:
//!
//! - **flat**: every option at the top level (`{"entity": "...", "font_size": 2}`)
//! - **sectioned**: related options grouped under a [`Section`]
//!   (`{"entity": "...", "timer_settings": {"font_size": 2}}`)
//!
//! Lookups check the section first and the top level second. Writes always
//! use the flat shape (see [`Configuration::to_flat`]).
//!
//! # Examples
//!
//! ```rust
//! use long_form_countdown::config::{normalize, Section};
//! use serde_json::json;
//!
//! let sectioned = normalize(&json!({
//!     "entity": "sensor.launch",
//!     "timer_settings": { "font_size": 2 }
//! })).unwrap();
//! let flat = normalize(&json!({ "entity": "sensor.launch", "font_size": 2 })).unwrap();
//!
//! assert_eq!(sectioned.get("font_size", Some(Section::Timer.as_str())), Some(&json!(2)));
//! assert_eq!(flat.get("font_size", Some(Section::Timer.as_str())), Some(&json!(2)));
//! assert_eq!(sectioned.font_size(), flat.font_size());
//! ```

use crate::error::{json_type_name, ConfigError};
use crate::style::{ColorValue, Role};
use crate::unit::Unit;
use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};
use tracing::warn;

/// Default timer font scale.
pub const DEFAULT_FONT_SIZE: f64 = 1.2;
/// Default header scale.
pub const DEFAULT_TITLE_SIZE: f64 = 1.0;
/// Text shown when the source reports it has finished.
pub const DEFAULT_FINISHED_TEXT: &str = "Finished";
/// Theme reference used for numbers and separators.
pub const PRIMARY_TEXT_COLOR: &str = "var(--primary-text-color)";
/// Theme reference used for unit words.
pub const SECONDARY_TEXT_COLOR: &str = "var(--secondary-text-color)";

static DEFAULTS: Lazy<Map<String, Value>> = Lazy::new(|| {
    let defaults = json!({
        "font_size": DEFAULT_FONT_SIZE,
        "title_size": DEFAULT_TITLE_SIZE,
        "show_header": true,
        "finished_text": DEFAULT_FINISHED_TEXT,
        "flash_finished": false,
        "short_form": false,
        "hide_seconds": false,
        "n_color": PRIMARY_TEXT_COLOR,
        "l_color": SECONDARY_TEXT_COLOR,
        "sep_color": PRIMARY_TEXT_COLOR,
    });
    match defaults {
        Value::Object(map) => map,
        _ => Map::new(),
    }
});

/// The default option map merged under every configuration.
pub fn defaults() -> &'static Map<String, Value> {
    &DEFAULTS
}

/// Named groups used by the sectioned configuration shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Title, icon and header styling.
    Header,
    /// Timer text options.
    Timer,
    /// Global and per-unit colors.
    Colors,
}

impl Section {
    /// All sections.
    pub const ALL: [Section; 3] = [Section::Header, Section::Timer, Section::Colors];

    /// Key of the section object in a sectioned configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Timer => "timer_settings",
            Section::Colors => "colors",
        }
    }

    /// The section an option belongs to, if any.
    pub fn of(key: &str) -> Option<Section> {
        match key {
            "name" | "icon" | "show_header" | "title_size" | "title_color" | "theme" => {
                Some(Section::Header)
            }
            "font_size" | "finished_text" | "flash_finished" | "short_form" | "hide_seconds"
            | "bg_color" => Some(Section::Timer),
            _ if key.ends_with("_color") => Some(Section::Colors),
            _ => None,
        }
    }
}

/// Looks `key` up in `map[section]` first and in `map` second.
///
/// JSON `null` counts as absent at either level.
pub fn lookup<'a>(map: &'a Map<String, Value>, key: &str, section: Option<&str>) -> Option<&'a Value> {
    section
        .and_then(|s| map.get(s))
        .and_then(|s| s.get(key))
        .filter(|v| !v.is_null())
        .or_else(|| map.get(key).filter(|v| !v.is_null()))
}

/// A validated, default-filled card configuration.
///
/// Immutable once built. The card replaces it wholesale when the host sends
/// a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    entity: String,
    options: Map<String, Value>,
}

/// Validates `raw` and merges it over [`defaults`].
///
/// Every key present in `raw` wins over the default, including `false`,
/// `0` and the empty string. Unknown keys (such as the host's `type`
/// discriminator) are preserved.
///
/// # Errors
///
/// - [`ConfigError::NotAnObject`] if `raw` is not a JSON object.
/// - [`ConfigError::MissingEntity`] if `entity` is absent, null or blank.
/// - [`ConfigError::InvalidEntity`] if `entity` is not a string.
pub fn normalize(raw: &Value) -> Result<Configuration, ConfigError> {
    let Value::Object(raw) = raw else {
        return Err(ConfigError::NotAnObject {
            found: json_type_name(raw),
        });
    };

    let entity = match raw.get("entity") {
        None | Some(Value::Null) => return Err(ConfigError::MissingEntity),
        Some(Value::String(s)) if s.trim().is_empty() => return Err(ConfigError::MissingEntity),
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(ConfigError::InvalidEntity {
                found: json_type_name(other),
            })
        }
    };

    let mut options = DEFAULTS.clone();
    for (key, value) in raw {
        // A cleared form field comes back as null; keep the default for it.
        if value.is_null() && options.contains_key(key) {
            continue;
        }
        options.insert(key.clone(), value.clone());
    }

    Ok(Configuration { entity, options })
}

impl Configuration {
    /// The data source identifier.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// The merged option map, in whatever shape the host supplied.
    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    /// Looks an option up, checking `section` before the top level.
    pub fn get(&self, key: &str, section: Option<&str>) -> Option<&Value> {
        lookup(&self.options, key, section)
    }

    /// Looks an option up in the section it belongs to, then at the top level.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.get(key, Section::of(key).map(Section::as_str))
    }

    /// Header title override.
    pub fn name(&self) -> Option<&str> {
        self.non_empty_str("name")
    }

    /// Header icon override.
    pub fn icon(&self) -> Option<&str> {
        self.non_empty_str("icon")
    }

    /// Dashboard theme name, passed through to the view.
    pub fn theme(&self) -> Option<&str> {
        self.non_empty_str("theme")
    }

    /// Timer font scale.
    pub fn font_size(&self) -> f64 {
        self.scale("font_size", DEFAULT_FONT_SIZE)
    }

    /// Header scale.
    pub fn title_size(&self) -> f64 {
        self.scale("title_size", DEFAULT_TITLE_SIZE)
    }

    /// Whether the icon and title are shown.
    pub fn show_header(&self) -> bool {
        self.flag("show_header", true)
    }

    /// Card background color.
    pub fn bg_color(&self) -> Option<ColorValue> {
        self.color("bg_color")
    }

    /// Header (title and icon) color.
    pub fn title_color(&self) -> Option<ColorValue> {
        self.color("title_color")
    }

    /// Text displayed once the source reports it has finished.
    pub fn finished_text(&self) -> &str {
        self.non_empty_str("finished_text")
            .unwrap_or(DEFAULT_FINISHED_TEXT)
    }

    /// Whether the finished display flashes.
    pub fn flash_finished(&self) -> bool {
        self.flag("flash_finished", false)
    }

    /// Whether unit words are abbreviated.
    pub fn short_form(&self) -> bool {
        self.flag("short_form", false)
    }

    /// Whether the seconds component is dropped.
    pub fn hide_seconds(&self) -> bool {
        self.flag("hide_seconds", false)
    }

    /// Global color for a role (`n_color`, `l_color` or `sep_color`).
    pub fn role_color(&self, role: Role) -> Option<ColorValue> {
        self.color(role.global_key())
    }

    /// Per-unit override for a role.
    pub fn unit_color(&self, unit: Unit, role: Role) -> Option<ColorValue> {
        self.color(&role.unit_key(unit))
    }

    /// Returns the options in the canonical flat shape.
    ///
    /// Section entries are lifted to the top level and win over a top-level
    /// value with the same key, matching read precedence. Keys this crate
    /// does not know about are kept.
    pub fn to_flat(&self) -> Map<String, Value> {
        flatten(&self.options)
    }

    /// A color option; empty strings count as unset.
    pub(crate) fn color(&self, key: &str) -> Option<ColorValue> {
        self.non_empty_str(key).map(ColorValue::new)
    }

    fn non_empty_str(&self, key: &str) -> Option<&str> {
        match self.option(key)? {
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.as_str()),
            other => {
                warn!(key, found = json_type_name(other), "expected a string option, ignoring");
                None
            }
        }
    }

    fn flag(&self, key: &str, default: bool) -> bool {
        match self.option(key) {
            None => default,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                warn!(key, found = json_type_name(other), default, "expected a boolean option, using default");
                default
            }
        }
    }

    fn scale(&self, key: &str, default: f64) -> f64 {
        match self.option(key).and_then(Value::as_f64) {
            Some(v) if v > 0.0 && v.is_finite() => v,
            Some(v) => {
                warn!(key, value = v, default, "scale must be positive, using default");
                default
            }
            None => {
                if let Some(other) = self.option(key) {
                    warn!(key, found = json_type_name(other), default, "expected a numeric option, using default");
                }
                default
            }
        }
    }
}

/// Lifts section objects in `map` to the top level.
pub fn flatten(map: &Map<String, Value>) -> Map<String, Value> {
    let mut flat = Map::new();
    for (key, value) in map {
        let is_section = Section::ALL.iter().any(|s| s.as_str() == key) && value.is_object();
        if !is_section && !flat.contains_key(key) {
            flat.insert(key.clone(), value.clone());
        }
    }
    for section in Section::ALL {
        if let Some(Value::Object(entries)) = map.get(section.as_str()) {
            for (key, value) in entries {
                if !value.is_null() {
                    flat.insert(key.clone(), value.clone());
                }
            }
        }
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entity_is_rejected() {
        assert_eq!(normalize(&json!({})), Err(ConfigError::MissingEntity));
        assert_eq!(
            normalize(&json!({ "entity": "" })),
            Err(ConfigError::MissingEntity)
        );
        assert_eq!(
            normalize(&json!({ "entity": "   " })),
            Err(ConfigError::MissingEntity)
        );
        assert_eq!(
            normalize(&json!({ "entity": null })),
            Err(ConfigError::MissingEntity)
        );
    }

    #[test]
    fn test_non_string_entity_and_non_object_config() {
        assert_eq!(
            normalize(&json!({ "entity": 4 })),
            Err(ConfigError::InvalidEntity { found: "number" })
        );
        assert_eq!(
            normalize(&json!("sensor.x")),
            Err(ConfigError::NotAnObject { found: "string" })
        );
    }

    #[test]
    fn test_defaults_are_filled() {
        let config = normalize(&json!({ "entity": "x" })).unwrap();
        for key in defaults().keys() {
            assert!(config.options().contains_key(key), "missing default {}", key);
        }
        assert_eq!(config.entity(), "x");
        assert_eq!(config.font_size(), 1.2);
        assert_eq!(config.title_size(), 1.0);
        assert!(config.show_header());
        assert_eq!(config.finished_text(), "Finished");
        assert!(!config.short_form());
        assert!(!config.hide_seconds());
        assert!(!config.flash_finished());
        assert_eq!(
            config.role_color(Role::Number).map(|c| c.to_string()),
            Some(PRIMARY_TEXT_COLOR.to_string())
        );
    }

    #[test]
    fn test_falsy_values_are_kept() {
        let config = normalize(&json!({
            "entity": "x",
            "show_header": false,
            "n_color": "",
            "finished_text": ""
        }))
        .unwrap();
        assert_eq!(config.options()["show_header"], json!(false));
        assert_eq!(config.options()["n_color"], json!(""));
        assert!(!config.show_header());
        // An empty color is present but unusable, so it resolves as unset.
        assert_eq!(config.role_color(Role::Number), None);
        assert_eq!(config.finished_text(), "Finished");
    }

    #[test]
    fn test_null_keeps_default() {
        let config = normalize(&json!({ "entity": "x", "font_size": null })).unwrap();
        assert_eq!(config.options()["font_size"], json!(1.2));
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let config = normalize(&json!({
            "entity": "x",
            "type": "custom:long-form-countdown-card"
        }))
        .unwrap();
        assert_eq!(
            config.options()["type"],
            json!("custom:long-form-countdown-card")
        );
    }

    #[test]
    fn test_section_lookup_precedence() {
        let config = normalize(&json!({
            "entity": "x",
            "font_size": 3,
            "timer_settings": { "font_size": 2 }
        }))
        .unwrap();
        assert_eq!(config.get("font_size", Some("timer_settings")), Some(&json!(2)));
        assert_eq!(config.get("font_size", None), Some(&json!(3)));
        assert_eq!(config.font_size(), 2.0);
    }

    #[test]
    fn test_sectioned_and_flat_are_equivalent() {
        let sectioned = normalize(&json!({
            "entity": "x",
            "header": { "name": "Launch", "show_header": false },
            "timer_settings": { "short_form": true, "hide_seconds": true },
            "colors": { "y_n_color": "blue" }
        }))
        .unwrap();
        let flat = normalize(&json!({
            "entity": "x",
            "name": "Launch",
            "show_header": false,
            "short_form": true,
            "hide_seconds": true,
            "y_n_color": "blue"
        }))
        .unwrap();
        assert_eq!(sectioned.name(), flat.name());
        assert_eq!(sectioned.show_header(), flat.show_header());
        assert_eq!(sectioned.short_form(), flat.short_form());
        assert_eq!(sectioned.hide_seconds(), flat.hide_seconds());
        assert_eq!(
            sectioned.unit_color(Unit::Year, Role::Number),
            flat.unit_color(Unit::Year, Role::Number)
        );
    }

    #[test]
    fn test_null_in_section_falls_back_to_top_level() {
        let config = normalize(&json!({
            "entity": "x",
            "name": "Top",
            "header": { "name": null }
        }))
        .unwrap();
        assert_eq!(config.name(), Some("Top"));
    }

    #[test]
    fn test_wrong_types_fall_back_to_defaults() {
        let config = normalize(&json!({
            "entity": "x",
            "font_size": "big",
            "title_size": -1,
            "short_form": "yes"
        }))
        .unwrap();
        assert_eq!(config.font_size(), DEFAULT_FONT_SIZE);
        assert_eq!(config.title_size(), DEFAULT_TITLE_SIZE);
        assert!(!config.short_form());
    }

    #[test]
    fn test_to_flat_lifts_sections_and_keeps_unknown_keys() {
        let config = normalize(&json!({
            "entity": "x",
            "type": "custom:long-form-countdown-card",
            "font_size": 3,
            "timer_settings": { "font_size": 2 },
            "header": { "icon": "mdi:rocket" }
        }))
        .unwrap();
        let flat = config.to_flat();
        assert_eq!(flat["font_size"], json!(2));
        assert_eq!(flat["icon"], json!("mdi:rocket"));
        assert_eq!(flat["type"], json!("custom:long-form-countdown-card"));
        assert!(!flat.contains_key("timer_settings"));
        assert!(!flat.contains_key("header"));
    }

    #[test]
    fn test_section_of() {
        assert_eq!(Section::of("font_size"), Some(Section::Timer));
        assert_eq!(Section::of("icon"), Some(Section::Header));
        assert_eq!(Section::of("min_l_color"), Some(Section::Colors));
        assert_eq!(Section::of("title_color"), Some(Section::Header));
        assert_eq!(Section::of("entity"), None);
    }
}

//! Configuration editor for the countdown card.
//!
//! The editor does not draw anything itself. It describes the option form
//! as a declarative [`SchemaNode`] tree that a generic schema-driven form
//! widget renders, and it turns the form's change events into complete
//! replacement configurations for the host.
//!
//! Change events are merged over the configuration the editor was given, so
//! keys the form does not know about survive the round trip. The emitted
//! configuration is always flat and always carries the card's `type`.
//!
//! ```rust
//! use long_form_countdown::editor::Editor;
//! use serde_json::json;
//!
//! let mut editor = Editor::new();
//! editor.set_config(&json!({
//!     "entity": "sensor.launch",
//!     "grid_options": { "columns": 6 }
//! }));
//!
//! let changed = editor.value_changed(&json!({ "short_form": true }));
//! assert_eq!(changed.config["short_form"], json!(true));
//! assert_eq!(changed.config["grid_options"], json!({ "columns": 6 }));
//! assert_eq!(changed.config["type"], json!("custom:long-form-countdown-card"));
//! ```

use crate::config::flatten;
use crate::error::json_type_name;
use crate::registry::CARD_TYPE;
use crate::unit::Unit;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

/// Integration whose entities the entity picker offers.
pub const SOURCE_INTEGRATION: &str = "long_form_word_countdown";

/// Slider or box input for number selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberMode {
    /// Drag handle.
    Slider,
    /// Plain numeric input.
    Box,
}

/// Restricts the entity picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityFilter {
    /// Integration domain entities must come from.
    pub integration: &'static str,
}

/// Input widget for a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Selector {
    /// Entity picker.
    Entity {
        /// Allowed entity sources.
        filter: Vec<EntityFilter>,
    },
    /// Dashboard theme picker.
    Theme {},
    /// Toggle.
    Boolean {},
    /// Free text.
    Text {},
    /// Icon picker.
    Icon {},
    /// Bounded number.
    Number {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
        /// Increment.
        step: f64,
        /// Input style.
        mode: NumberMode,
    },
}

/// A single editable option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    /// Option key the field edits.
    pub name: String,
    /// Display label; the name is shown when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Input widget.
    pub selector: Selector,
}

/// Layout container kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// Fields side by side.
    Grid,
    /// A collapsible panel titled by the group name.
    Expandable,
}

/// A layout container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    /// Container kind, serialized as `type`.
    #[serde(rename = "type")]
    pub kind: GroupKind,
    /// Panel title; empty for grids.
    pub name: String,
    /// Child nodes.
    pub schema: Vec<SchemaNode>,
}

/// One node of the form schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaNode {
    /// An editable option.
    Field(Field),
    /// A layout container.
    Group(Group),
}

impl SchemaNode {
    fn field(name: &str, label: Option<&str>, selector: Selector) -> Self {
        SchemaNode::Field(Field {
            name: name.to_string(),
            label: label.map(str::to_string),
            selector,
        })
    }

    fn grid(schema: Vec<SchemaNode>) -> Self {
        SchemaNode::Group(Group {
            kind: GroupKind::Grid,
            name: String::new(),
            schema,
        })
    }
}

fn text(name: &str, label: &str) -> SchemaNode {
    SchemaNode::field(name, Some(label), Selector::Text {})
}

fn toggle(name: &str, label: &str) -> SchemaNode {
    SchemaNode::field(name, Some(label), Selector::Boolean {})
}

fn slider(name: &str, label: &str, min: f64, max: f64) -> SchemaNode {
    SchemaNode::field(
        name,
        Some(label),
        Selector::Number {
            min,
            max,
            step: 0.1,
            mode: NumberMode::Slider,
        },
    )
}

static SCHEMA: Lazy<Vec<SchemaNode>> = Lazy::new(|| {
    let overrides = Unit::ALL
        .into_iter()
        .flat_map(|unit| {
            [
                text(
                    &format!("{}_n_color", unit.key()),
                    &format!("{} Num", unit.label()),
                ),
                text(
                    &format!("{}_l_color", unit.key()),
                    &format!("{} Word", unit.label()),
                ),
            ]
        })
        .collect();

    vec![
        SchemaNode::field(
            "entity",
            None,
            Selector::Entity {
                filter: vec![EntityFilter {
                    integration: SOURCE_INTEGRATION,
                }],
            },
        ),
        SchemaNode::grid(vec![
            SchemaNode::field("theme", Some("Dashboard Theme"), Selector::Theme {}),
            toggle("show_header", "Show Title/Icon"),
        ]),
        text("name", "Title Override"),
        SchemaNode::grid(vec![
            SchemaNode::field("icon", None, Selector::Icon {}),
            slider("title_size", "Title Scale", 0.5, 3.0),
        ]),
        SchemaNode::grid(vec![
            text("bg_color", "Background Hex"),
            text("title_color", "Title/Icon Hex"),
            slider("font_size", "Timer Font Size", 0.5, 4.0),
        ]),
        SchemaNode::grid(vec![
            toggle("short_form", "Short Form"),
            toggle("hide_seconds", "Hide Seconds"),
            toggle("flash_finished", "Flash on Done"),
        ]),
        text("finished_text", "Finished Display Text"),
        text("n_color", "Global Number Color"),
        text("l_color", "Global Word Color"),
        text("sep_color", "Separator Color"),
        SchemaNode::Group(Group {
            kind: GroupKind::Expandable,
            name: "Individual Overrides".to_string(),
            schema: vec![SchemaNode::grid(overrides)],
        }),
    ]
});

/// The card's option form.
pub fn schema() -> &'static [SchemaNode] {
    &SCHEMA
}

/// Every field in `nodes`, depth first.
pub fn fields(nodes: &[SchemaNode]) -> Vec<&Field> {
    let mut out = Vec::new();
    for node in nodes {
        match node {
            SchemaNode::Field(field) => out.push(field),
            SchemaNode::Group(group) => out.extend(fields(&group.schema)),
        }
    }
    out
}

/// Label shown for a field: its label, else its name.
pub fn compute_label(field: &Field) -> &str {
    field.label.as_deref().unwrap_or(&field.name)
}

/// Event emitted upward after every edit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigChanged {
    /// The complete replacement configuration.
    pub config: Map<String, Value>,
}

/// Editor state: the configuration currently shown in the form.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    config: Map<String, Value>,
}

impl Editor {
    /// An editor with an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration shown in the form.
    ///
    /// The editor accepts incomplete configurations (the user may not have
    /// picked an entity yet). A non-object is replaced by an empty one.
    pub fn set_config(&mut self, config: &Value) {
        self.config = match config {
            Value::Object(map) => map.clone(),
            other => {
                warn!(found = json_type_name(other), "editor config is not an object");
                Map::new()
            }
        };
    }

    /// The configuration currently shown, as the form should see it.
    ///
    /// Sectioned configurations are flattened so every field finds its value.
    pub fn form_data(&self) -> Map<String, Value> {
        flatten(&self.config)
    }

    /// Merges a form change over the current configuration.
    ///
    /// Keys in `value` win, keys only in the current configuration are kept,
    /// and `type` is always set to the card type. The result is flat.
    pub fn value_changed(&self, value: &Value) -> ConfigChanged {
        let mut merged = self.config.clone();
        match value {
            Value::Object(changes) => {
                for (key, v) in changes {
                    merged.insert(key.clone(), v.clone());
                }
            }
            other => warn!(found = json_type_name(other), "form change is not an object, ignoring"),
        }
        let mut config = flatten(&merged);
        config.insert("type".to_string(), Value::String(CARD_TYPE.to_string()));
        ConfigChanged { config }
    }
}

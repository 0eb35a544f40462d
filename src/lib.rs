#![warn(missing_docs)]

//! # long-form-countdown
//!
//! A dashboard card that shows a countdown written out in words, such as
//! `2 years, 3 months, 5 days, 4 hours`, with every number, unit word and
//! separator individually styleable.
//!
//! ## Overview
//!
//! The card is a pure function of two inputs: a user configuration and the
//! latest state of one countdown entity. Each render runs the same pipeline:
//!
//! 1. [`config`] normalizes the raw configuration (flat or sectioned) into an
//!    immutable [`Configuration`] with defaults applied.
//! 2. [`formatter`] applies the optional short-form and hide-seconds
//!    transforms and hands the text to the [`lexer`], which splits it into
//!    number, word and separator tokens tagged with their [`Unit`].
//! 3. [`projector`] resolves a color for every token through [`style`]
//!    (per-unit override, then global override, then theme default) and
//!    produces a flat list of [`StyledRun`]s.
//! 4. A painter from [`paint`] turns the runs into terminal text or HTML.
//!
//! [`card`] wires the pipeline into a [`Card`] lifecycle and a bubbletea
//! model; [`editor`] and [`registry`] cover the configuration form and card
//! picker metadata.
//!
//! ## Quick start
//!
//! ```rust
//! use long_form_countdown::prelude::*;
//! use serde_json::json;
//!
//! let mut card = LongFormCountdownCard::new();
//! card.configure(&json!({
//!     "entity": "sensor.launch",
//!     "n_color": "#ff0000",
//!     "d_l_color": "#00ff00"
//! }))
//! .unwrap();
//!
//! let states = HostStates::new()
//!     .with_entity("sensor.launch", EntityState::new("3 days, 4 hours"));
//! card.on_data_update(&states);
//!
//! let desc = card.render().unwrap();
//! assert_eq!(desc.text(), "3 days, 4 hours");
//! assert_eq!(desc.runs[0].color.as_ref().unwrap().as_str(), "#ff0000");
//! assert_eq!(desc.runs[2].text, "days");
//! assert_eq!(desc.runs[2].color.as_ref().unwrap().as_str(), "#00ff00");
//!
//! let html = MarkupPainter::default().paint(&desc);
//! assert!(html.contains("color: #00ff00"));
//! ```
//!
//! ## Formatting without a card
//!
//! ```rust
//! use long_form_countdown::{config::normalize, formatter::format, lexer::concat};
//! use serde_json::json;
//!
//! let config = normalize(&json!({ "entity": "sensor.x", "short_form": true })).unwrap();
//! let tokens = format("1 year, 2 days", false, &config);
//! assert_eq!(concat(&tokens), "1 y, 2 d");
//! ```

pub mod card;
pub mod config;
pub mod editor;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod paint;
pub mod projector;
pub mod registry;
pub mod style;
pub mod transform;
pub mod unit;

pub use card::{
    Card, DataUpdateMsg, EntityState, HeaderDescription, HostStates, LongFormCountdownCard,
    RenderDescription,
};
pub use config::{normalize, Configuration, Section};
pub use editor::{ConfigChanged, Editor};
pub use error::ConfigError;
pub use lexer::{tokenize, Token, TokenKind};
pub use paint::{MarkupMode, MarkupPainter, TerminalPainter, ThemePalette};
pub use projector::{project, StyledRun, Weight};
pub use registry::{register_card, CardInfo, CardRegistry};
pub use style::{resolve_color, ColorValue, Role};
pub use unit::Unit;

/// Prelude module for convenient imports.
///
/// ```rust
/// use long_form_countdown::prelude::*;
///
/// let mut registry = CardRegistry::new();
/// assert!(register_card(&mut registry));
/// ```
pub mod prelude {
    pub use crate::card::{
        Card, DataUpdateMsg, EntityState, HostStates, LongFormCountdownCard, RenderDescription,
    };
    pub use crate::config::{normalize, Configuration};
    pub use crate::editor::Editor;
    pub use crate::error::ConfigError;
    pub use crate::formatter::format;
    pub use crate::paint::{MarkupMode, MarkupPainter, TerminalPainter};
    pub use crate::projector::StyledRun;
    pub use crate::registry::{register_card, CardRegistry};
    pub use crate::style::ColorValue;
    pub use crate::unit::Unit;
}

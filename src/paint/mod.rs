//! Render targets for countdown cards.
//!
//! The card produces a [`RenderDescription`](crate::card::RenderDescription)
//! that knows nothing about markup. Painters turn it into something a host
//! can display:
//!
//! - [`TerminalPainter`] paints ANSI-styled text with lipgloss, one inline
//!   style per run. Theme variable references are mapped through a
//!   [`ThemePalette`] of adaptive colors.
//! - [`MarkupPainter`] paints HTML, either with inline `style` attributes or
//!   with CSS class names plus a generated [`stylesheet`](MarkupPainter::stylesheet).
//!
//! # Examples
//!
//! ```rust
//! use long_form_countdown::card::{Card, HostStates, LongFormCountdownCard};
//! use long_form_countdown::paint::{MarkupMode, MarkupPainter, TerminalPainter};
//! use serde_json::json;
//!
//! let mut card = LongFormCountdownCard::new();
//! card.configure(&json!({ "entity": "sensor.launch" })).unwrap();
//!
//! let states: HostStates = serde_json::from_value(json!({
//!     "sensor.launch": { "state": "3 days, 4 hours" }
//! })).unwrap();
//! card.on_data_update(&states);
//!
//! let desc = card.render().unwrap();
//! let ansi = TerminalPainter::default().paint(&desc);
//! let html = MarkupPainter::new(MarkupMode::Classes).paint(&desc);
//! assert!(html.contains(r#"<span class="d-v val">3</span>"#));
//! assert!(!ansi.is_empty());
//! ```

mod markup;
mod terminal;

pub use markup::{escape_html, MarkupMode, MarkupPainter};
pub use terminal::{ThemePalette, TerminalPainter};

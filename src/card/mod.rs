//! The countdown card widget.
//!
//! A card receives two kinds of input from its host, each as a discrete,
//! synchronous call:
//!
//! - a **configuration** ([`Card::configure`]), validated and stored as an
//!   immutable snapshot that is replaced wholesale on every edit;
//! - a **data update** ([`Card::on_data_update`]), a snapshot of the host's
//!   entity states from which the card picks its configured entity.
//!
//! [`Card::render`] combines the two into a [`RenderDescription`]: header,
//! styled timer runs and presentation flags. Painters in [`crate::paint`]
//! turn that into terminal text or HTML.
//!
//! # Data flow
//!
//! ```text
//! raw state ─▶ transforms ─▶ lexer ─▶ projector ─▶ RenderDescription ─▶ painter
//!                  ▲                      ▲
//!                  └──── Configuration ───┘
//! ```
//!
//! # Missing data
//!
//! If the configured entity is absent from a data update the call is a
//! no-op and the previous render stays valid. The entity may simply not be
//! loaded yet.

mod host;
mod model;
mod render;


pub use host::{Attributes, DataUpdateMsg, EntityState, HostStates};
pub use model::LongFormCountdownCard;
pub use render::{HeaderDescription, RenderDescription, DEFAULT_ICON};

use crate::error::ConfigError;
use serde_json::Value;

/// Lifecycle of a dashboard card.
///
/// Hosts call [`configure`](Card::configure) whenever the user saves an
/// edit, [`on_data_update`](Card::on_data_update) on every state change and
/// [`render`](Card::render) when they need something to paint.
pub trait Card {
    /// Validates and installs a new configuration.
    ///
    /// On error the previous configuration stays in place.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is unusable, most
    /// commonly because `entity` is missing.
    fn configure(&mut self, raw: &Value) -> Result<(), ConfigError>;

    /// Takes the configured entity's state from a host snapshot.
    ///
    /// Returns `false` when the card is unconfigured or the entity is
    /// missing; nothing changes in that case.
    fn on_data_update(&mut self, states: &HostStates) -> bool;

    /// Describes what to paint, or `None` before the first usable update.
    fn render(&self) -> Option<RenderDescription>;
}

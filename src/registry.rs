//! Card picker registration.
//!
//! Dashboards keep a list of custom cards they can offer in their card
//! picker. [`register_card`] adds this crate's card to such a list once;
//! registering again is a no-op so hosts can call it on every load.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Element name of the card.
pub const CARD_ELEMENT: &str = "long-form-countdown-card";

/// Element name of the card's editor.
pub const EDITOR_ELEMENT: &str = "long-form-countdown-editor";

/// `type` value that selects this card in a dashboard configuration.
pub const CARD_TYPE: &str = "custom:long-form-countdown-card";

/// Picker metadata for one custom card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    /// Element name; unique within a registry.
    #[serde(rename = "type")]
    pub card_type: String,
    /// Human-readable name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Whether the picker may render a live preview.
    #[serde(default)]
    pub preview: bool,
}

impl CardInfo {
    /// Metadata with previews enabled.
    pub fn new(card_type: &str, name: &str, description: &str) -> Self {
        Self {
            card_type: card_type.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            preview: true,
        }
    }
}

/// An ordered, duplicate-free list of custom cards.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct CardRegistry {
    cards: Vec<CardInfo>,
}

impl CardRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `info` unless a card with the same type is already present.
    ///
    /// Returns whether the card was added.
    pub fn register(&mut self, info: CardInfo) -> bool {
        if self.contains(&info.card_type) {
            debug!(card_type = %info.card_type, "card already registered");
            return false;
        }
        info!(card_type = %info.card_type, name = %info.name, "registered custom card");
        self.cards.push(info);
        true
    }

    /// Whether a card of this type is registered.
    pub fn contains(&self, card_type: &str) -> bool {
        self.get(card_type).is_some()
    }

    /// Looks up a card by type.
    pub fn get(&self, card_type: &str) -> Option<&CardInfo> {
        self.cards.iter().find(|c| c.card_type == card_type)
    }

    /// Registered cards in registration order.
    pub fn cards(&self) -> &[CardInfo] {
        &self.cards
    }
}

/// Registers the long-form countdown card.
pub fn register_card(registry: &mut CardRegistry) -> bool {
    registry.register(crate::card::LongFormCountdownCard::info())
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attributes the host reports alongside an entity's state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    /// Set once the countdown has run out.
    pub is_finished: Option<bool>,
    /// The entity's own icon.
    pub icon: Option<String>,
    /// The entity's display name.
    pub friendly_name: Option<String>,
}

/// One entity in the host's data feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityState {
    /// Already-formatted duration text, e.g. `"2 years, 3 months, 14 days"`.
    pub state: String,
    /// Extra attributes.
    #[serde(default)]
    pub attributes: Attributes,
}

impl EntityState {
    /// Creates a state with no attributes.
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            attributes: Attributes::default(),
        }
    }

    /// Sets the finished flag.
    pub fn finished(mut self, is_finished: bool) -> Self {
        self.attributes.is_finished = Some(is_finished);
        self
    }

    /// Sets the friendly name.
    pub fn with_friendly_name(mut self, name: impl Into<String>) -> Self {
        self.attributes.friendly_name = Some(name.into());
        self
    }

    /// Sets the icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.attributes.icon = Some(icon.into());
        self
    }

    /// Whether the source reports it has finished. Absent means no.
    pub fn is_finished(&self) -> bool {
        self.attributes.is_finished.unwrap_or(false)
    }
}

/// A snapshot of the host's entity states, keyed by entity id.
///
/// Deserializes from the host's `{"<entity id>": {"state": ..., "attributes": {...}}}`
/// map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostStates {
    states: HashMap<String, EntityState>,
}

impl HostStates {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entity.
    pub fn with_entity(mut self, entity_id: impl Into<String>, state: EntityState) -> Self {
        self.states.insert(entity_id.into(), state);
        self
    }

    /// Looks an entity up.
    pub fn get(&self, entity_id: &str) -> Option<&EntityState> {
        self.states.get(entity_id)
    }
}

/// Message carrying a new host snapshot to a card inside a bubbletea program.
#[derive(Debug, Clone)]
pub struct DataUpdateMsg(pub HostStates);

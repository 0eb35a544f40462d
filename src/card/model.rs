use crate::card::host::{DataUpdateMsg, EntityState, HostStates};
use crate::card::render::RenderDescription;
use crate::card::Card;
use crate::config::{normalize, Configuration};
use crate::editor::Editor;
use crate::error::ConfigError;
use crate::paint::TerminalPainter;
use crate::registry::{CardInfo, CARD_ELEMENT};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// The long-form countdown card.
///
/// Holds the current configuration snapshot and the last state seen for the
/// configured entity. Every call to [`render`](Card::render) formats that
/// state from scratch against the current snapshot.
///
/// # Examples
///
/// ```rust
/// use long_form_countdown::card::{Card, EntityState, HostStates, LongFormCountdownCard};
/// use serde_json::json;
///
/// let mut card = LongFormCountdownCard::new();
/// card.configure(&json!({ "entity": "sensor.launch", "short_form": true })).unwrap();
///
/// let states = HostStates::new()
///     .with_entity("sensor.launch", EntityState::new("2 years, 3 months"));
/// assert!(card.on_data_update(&states));
///
/// let desc = card.render().unwrap();
/// assert_eq!(desc.text(), "2 y, 3 m");
/// ```
///
/// ## Inside a bubbletea program
///
/// ```rust
/// use long_form_countdown::card::{DataUpdateMsg, EntityState, HostStates, LongFormCountdownCard};
/// use long_form_countdown::card::Card;
/// use serde_json::json;
///
/// let mut card = LongFormCountdownCard::new();
/// card.configure(&json!({ "entity": "sensor.launch", "show_header": false })).unwrap();
///
/// let states = HostStates::new()
///     .with_entity("sensor.launch", EntityState::new("4 hours"));
/// card.update(Box::new(DataUpdateMsg(states)));
/// assert!(card.view().contains("hours"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LongFormCountdownCard {
    config: Option<Arc<Configuration>>,
    last_state: Option<(String, EntityState)>,
    /// Painter used by [`view`](LongFormCountdownCard::view).
    pub painter: TerminalPainter,
}

impl LongFormCountdownCard {
    /// Creates an unconfigured card.
    pub fn new() -> Self {
        Self::default()
    }

    /// Picker metadata for this card type.
    pub fn info() -> CardInfo {
        CardInfo::new(
            CARD_ELEMENT,
            "Long Form Countdown Card",
            "Customizable countdown with deep theme override support.",
        )
    }

    /// A fresh configuration editor for this card.
    pub fn config_editor() -> Editor {
        Editor::new()
    }

    /// The current configuration snapshot.
    pub fn config(&self) -> Option<Arc<Configuration>> {
        self.config.clone()
    }

    /// Installs an already-normalized configuration.
    pub fn set_config(&mut self, config: Configuration) {
        debug!(entity = config.entity(), "card configuration replaced");
        self.config = Some(Arc::new(config));
    }

    /// Handles bubbletea messages. Only [`DataUpdateMsg`] is understood.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(DataUpdateMsg(states)) = msg.downcast_ref::<DataUpdateMsg>() {
            self.on_data_update(states);
        }
        None
    }

    /// Paints the card for a terminal, or an empty string if there is
    /// nothing to show yet.
    pub fn view(&self) -> String {
        self.render()
            .map(|desc| self.painter.paint(&desc))
            .unwrap_or_default()
    }
}

impl Card for LongFormCountdownCard {
    fn configure(&mut self, raw: &Value) -> Result<(), ConfigError> {
        let config = normalize(raw)?;
        self.set_config(config);
        Ok(())
    }

    fn on_data_update(&mut self, states: &HostStates) -> bool {
        let Some(config) = &self.config else {
            debug!("data update before configuration, ignoring");
            return false;
        };
        let entity = config.entity();
        match states.get(entity) {
            Some(state) => {
                self.last_state = Some((entity.to_string(), state.clone()));
                true
            }
            None => {
                debug!(entity, "entity not in host states, keeping previous output");
                false
            }
        }
    }

    fn render(&self) -> Option<RenderDescription> {
        let config = self.config.as_ref()?;
        let (entity, state) = self.last_state.as_ref()?;
        if entity != config.entity() {
            return None;
        }
        Some(RenderDescription::build(config, state))
    }
}

impl BubbleTeaModel for LongFormCountdownCard {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

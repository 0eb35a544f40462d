use crate::card::host::EntityState;
use crate::config::Configuration;
use crate::formatter::format;
use crate::projector::{project, StyledRun};
use crate::style::ColorValue;
use serde::Serialize;

/// Icon used when neither the configuration nor the entity names one.
pub const DEFAULT_ICON: &str = "mdi:clock-outline";

/// Header line of a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderDescription {
    /// Icon identifier (e.g. `mdi:clock-outline`).
    pub icon: String,
    /// Title text.
    pub name: String,
    /// Title and icon color; `None` inherits.
    pub color: Option<ColorValue>,
    /// Title scale factor.
    pub scale: f64,
}

/// Everything a view layer needs to paint one card, without any markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderDescription {
    /// Header, or `None` when `show_header` is off.
    pub header: Option<HeaderDescription>,
    /// Timer text as styled runs.
    pub runs: Vec<StyledRun>,
    /// Timer font scale.
    pub font_scale: f64,
    /// Card background; `None` uses the theme's card background.
    pub background: Option<ColorValue>,
    /// Dashboard theme name to apply.
    pub theme: Option<String>,
    /// Whether the view should flash the card.
    pub is_flashing: bool,
    /// Whether the source reported it has finished.
    pub is_finished: bool,
}

impl RenderDescription {
    /// Builds a description from a configuration snapshot and an entity state.
    pub fn build(config: &Configuration, state: &EntityState) -> Self {
        let is_finished = state.is_finished();
        let tokens = format(&state.state, is_finished, config);

        let header = config.show_header().then(|| HeaderDescription {
            icon: config
                .icon()
                .or(state.attributes.icon.as_deref())
                .unwrap_or(DEFAULT_ICON)
                .to_string(),
            name: config
                .name()
                .or(state.attributes.friendly_name.as_deref())
                .unwrap_or(config.entity())
                .to_string(),
            color: config.title_color(),
            scale: config.title_size(),
        });

        Self {
            header,
            runs: project(&tokens, config),
            font_scale: config.font_size(),
            background: config.bg_color(),
            theme: config.theme().map(str::to_string),
            is_flashing: is_finished && config.flash_finished(),
            is_finished,
        }
    }

    /// The timer text without styling.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

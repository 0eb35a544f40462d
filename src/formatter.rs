//! The countdown formatter: raw state string to display tokens.

use crate::config::Configuration;
use crate::lexer::{tokenize, Token};
use crate::transform::{hide_seconds, short_form};
use std::borrow::Cow;
use tracing::trace;

/// Formats a raw state string for display.
///
/// When `is_finished` is set the configured finished text is returned as a
/// single plain token and the raw state is ignored. Otherwise the enabled
/// transforms run in a fixed order (short form, then hide seconds) and the
/// result is tokenized.
///
/// # Examples
///
/// ```rust
/// use long_form_countdown::config::normalize;
/// use long_form_countdown::formatter::format;
/// use long_form_countdown::lexer::{concat, Token};
/// use serde_json::json;
///
/// let config = normalize(&json!({
///     "entity": "sensor.launch",
///     "short_form": true,
///     "hide_seconds": true,
///     "finished_text": "Done"
/// })).unwrap();
///
/// let tokens = format("1 day, 2 hours, 3 seconds", false, &config);
/// assert_eq!(concat(&tokens), "1 d, 2 h");
///
/// let finished = format("1 day, 2 hours", true, &config);
/// assert_eq!(finished, vec![Token::plain("Done")]);
/// ```
pub fn format(raw_state: &str, is_finished: bool, config: &Configuration) -> Vec<Token> {
    if is_finished {
        return vec![Token::plain(config.finished_text())];
    }

    let display = apply_transforms(raw_state, config);
    let tokens = tokenize(&display);
    trace!(
        entity = config.entity(),
        tokens = tokens.len(),
        "formatted countdown"
    );
    tokens
}

/// Applies the enabled text transforms to `raw_state`.
pub fn apply_transforms<'a>(raw_state: &'a str, config: &Configuration) -> Cow<'a, str> {
    let mut display = Cow::Borrowed(raw_state);
    if config.short_form() {
        display = Cow::Owned(short_form(&display));
    }
    if config.hide_seconds() {
        display = Cow::Owned(hide_seconds(&display));
    }
    display
}

//! Projection of tokens into render-target-agnostic styled runs.
//!
//! A [`StyledRun`] carries everything a view layer needs to paint one piece
//! of the countdown: its text, resolved color, weight, role and unit. The
//! same run list can be painted with inline styling (terminal escapes, inline
//! CSS) or with class names derived from [`StyledRun::role`] and
//! [`StyledRun::unit`]; see [`crate::paint`].

use crate::config::Configuration;
use crate::lexer::{Token, TokenKind};
use crate::style::{resolve_color, ColorValue, Role};
use crate::unit::Unit;
use serde::Serialize;

/// Font weight of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    /// Numbers.
    Bold,
    /// Words, separators and plain text.
    Normal,
}

/// A token after color and weight resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledRun {
    /// Text to paint, exactly as it appeared in the token.
    pub text: String,
    /// Resolved color; `None` for plain text, which inherits the container color.
    pub color: Option<ColorValue>,
    /// Font weight.
    pub weight: Weight,
    /// Styling role.
    pub role: Role,
    /// Unit of a matched token; `None` for plain text.
    pub unit: Option<Unit>,
    /// Whether the view should leave a gap after this run.
    ///
    /// Only set on a non-empty separator that the source text does not
    /// already follow with whitespace, so painters never double the spacing.
    pub trailing_space: bool,
}

impl StyledRun {
    /// True for unmatched text.
    pub fn is_plain(&self) -> bool {
        self.unit.is_none()
    }
}

/// Maps each token through the style resolver.
///
/// Numbers are bold, everything else normal weight. Plain text is left
/// uncolored.
pub fn project(tokens: &[Token], config: &Configuration) -> Vec<StyledRun> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let role = Role::from(token.kind);
            let color = token.unit.map(|unit| resolve_color(Some(unit), role, config));
            let weight = match token.kind {
                TokenKind::Number => Weight::Bold,
                TokenKind::Word | TokenKind::Separator => Weight::Normal,
            };
            let trailing_space = token.kind == TokenKind::Separator
                && !token.text.is_empty()
                && tokens
                    .get(i + 1)
                    .and_then(|next| next.text.chars().next())
                    .is_some_and(|c| !c.is_whitespace());
            StyledRun {
                text: token.text.clone(),
                color,
                weight,
                role,
                unit: token.unit,
                trailing_space,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::normalize;
    use crate::lexer::tokenize;
    use serde_json::json;

    fn config(value: serde_json::Value) -> Configuration {
        let mut value = value;
        value["entity"] = json!("sensor.x");
        normalize(&value).unwrap()
    }

    #[test]
    fn test_weights_and_roles() {
        let config = config(json!({}));
        let runs = project(&tokenize("3 days"), &config);
        assert_eq!(runs.len(), 4);
        assert_eq!(runs[0].weight, Weight::Bold);
        assert_eq!(runs[0].role, Role::Number);
        assert_eq!(runs[1].weight, Weight::Normal);
        assert!(runs[1].is_plain());
        assert_eq!(runs[2].role, Role::Word);
        assert_eq!(runs[2].unit, Some(Unit::Day));
        assert_eq!(runs[3].role, Role::Separator);
        assert_eq!(runs[3].text, "");
    }

    #[test]
    fn test_colors_follow_precedence() {
        let config = config(json!({
            "n_color": "red",
            "d_n_color": "blue",
            "l_color": "green",
            "sep_color": "gray"
        }));
        let runs = project(&tokenize("3 days, 4 hours"), &config);
        let colors: Vec<_> = runs
            .iter()
            .filter(|r| !r.is_plain())
            .map(|r| r.color.as_ref().map(ColorValue::as_str))
            .collect();
        assert_eq!(
            colors,
            vec![
                Some("blue"),
                Some("green"),
                Some("gray"),
                Some("red"),
                Some("green"),
                Some("gray"),
            ]
        );
    }

    #[test]
    fn test_plain_text_is_uncolored() {
        let config = config(json!({ "l_color": "green" }));
        let runs = project(&[Token::plain("Finished")], &config);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].color, None);
        assert_eq!(runs[0].weight, Weight::Normal);
        assert!(!runs[0].trailing_space);
    }

    #[test]
    fn test_trailing_space_only_where_source_has_none() {
        let config = config(json!({}));
        let spaced = project(&tokenize("1 y, 2 m"), &config);
        assert!(spaced.iter().all(|r| !r.trailing_space));

        let compact = project(&tokenize("1y,2m"), &config);
        let gaps: Vec<_> = compact.iter().map(|r| r.trailing_space).collect();
        assert_eq!(gaps, vec![false, false, true, false, false, false]);
    }

    #[test]
    fn test_text_is_preserved() {
        let config = config(json!({}));
        let input = "2 years, 3 months, 14 days, 05:12:33";
        let runs = project(&tokenize(input), &config);
        let text: String = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(text, input);
    }
}

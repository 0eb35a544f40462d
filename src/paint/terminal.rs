use crate::card::RenderDescription;
use crate::projector::{StyledRun, Weight};
use crate::style::ColorValue;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Maps dashboard theme variables to adaptive terminal colors.
///
/// Colors configured as `var(--name)` or `var(--name, fallback)` are looked
/// up here by `name`. Unknown variables use their fallback if one is given,
/// and otherwise inherit the terminal's default color.
///
/// # Examples
///
/// ```rust
/// use long_form_countdown::paint::ThemePalette;
///
/// let palette = ThemePalette::default().with_entry("accent-color", "#E65100", "#FFB74D");
/// assert!(palette.lookup("accent-color").is_some());
/// assert!(palette.lookup("primary-text-color").is_some());
/// assert!(palette.lookup("no-such-color").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ThemePalette {
    entries: Vec<(String, &'static str, &'static str)>,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            entries: vec![
                ("primary-text-color".to_string(), "#212121", "#E1E1E1"),
                ("secondary-text-color".to_string(), "#727272", "#9B9B9B"),
                ("primary-color".to_string(), "#03A9F4", "#03A9F4"),
                ("accent-color".to_string(), "#FF9800", "#FF9800"),
                ("error-color".to_string(), "#DB4437", "#EF5350"),
                ("ha-card-background".to_string(), "#FFFFFF", "#1C1C1C"),
                ("card-background-color".to_string(), "#FFFFFF", "#1C1C1C"),
            ],
        }
    }
}

impl ThemePalette {
    /// Adds or replaces a theme variable.
    pub fn with_entry(mut self, name: impl Into<String>, light: &'static str, dark: &'static str) -> Self {
        let name = name.into();
        self.entries.retain(|(n, _, _)| *n != name);
        self.entries.push((name, light, dark));
        self
    }

    /// The adaptive color for a theme variable name (without leading dashes).
    pub fn lookup(&self, name: &str) -> Option<lipgloss::AdaptiveColor> {
        self.entries
            .iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, light, dark)| lipgloss::AdaptiveColor {
                Light: light,
                Dark: dark,
            })
    }

    fn resolve(&self, color: &ColorValue) -> TermColor {
        if let Some((name, fallback)) = color.theme_var() {
            return match (self.lookup(name), fallback) {
                (Some(adaptive), _) => TermColor::Adaptive(adaptive),
                (None, Some(fallback)) => self.resolve(&ColorValue::new(fallback)),
                (None, None) => TermColor::Inherit,
            };
        }
        match color.as_str().trim() {
            "" | "inherit" | "currentColor" | "transparent" => TermColor::Inherit,
            value => TermColor::Plain(value.to_string()),
        }
    }
}

enum TermColor {
    Adaptive(lipgloss::AdaptiveColor),
    Plain(String),
    Inherit,
}

/// Paints render descriptions as ANSI-styled terminal text.
///
/// Each run gets its own inline lipgloss style: its resolved color, bold
/// numbers, and the card background when one is configured. A flashing card
/// is painted in reverse video; the host decides whether to alternate it.
#[derive(Debug, Clone, Default)]
pub struct TerminalPainter {
    /// Theme variable lookup.
    pub palette: ThemePalette,
}

impl TerminalPainter {
    /// Creates a painter with a custom palette.
    pub fn with_palette(palette: ThemePalette) -> Self {
        Self { palette }
    }

    /// Paints a run list on a single line with no card chrome.
    pub fn paint_runs(&self, runs: &[StyledRun]) -> String {
        self.paint_timer(runs, &Style::new())
    }

    /// Paints a full card: optional header line, then the timer line.
    pub fn paint(&self, desc: &RenderDescription) -> String {
        let mut base = Style::new();
        if let Some(bg) = &desc.background {
            base = self.with_background(base, bg);
        }
        if desc.is_flashing {
            base = base.reverse(true);
        }

        let mut lines: Vec<(String, usize)> = Vec::new();
        if let Some(header) = &desc.header {
            let text = format!("{} {}", icon_glyph(&header.icon), header.name);
            let mut style = base.clone().bold(true);
            if let Some(color) = &header.color {
                style = self.with_foreground(style, color);
            }
            lines.push((style.render(&text), text.width()));
        }
        let timer_width = desc.runs.iter().map(run_width).sum();
        lines.push((self.paint_timer(&desc.runs, &base), timer_width));

        if desc.background.is_none() {
            return lines
                .into_iter()
                .map(|(line, _)| line)
                .collect::<Vec<_>>()
                .join("\n");
        }

        // Pad every line to the same width so the background forms a block.
        let inner = lines.iter().map(|(_, w)| *w).max().unwrap_or(0);
        lines
            .into_iter()
            .map(|(line, width)| {
                let left = base.render(" ");
                let right = base.render(&" ".repeat(inner - width + 1));
                format!("{}{}{}", left, line, right)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn paint_timer(&self, runs: &[StyledRun], base: &Style) -> String {
        let mut out = String::new();
        for run in runs {
            if !run.text.is_empty() {
                out.push_str(&self.run_style(run, base).render(&run.text));
            }
            if run.trailing_space {
                out.push_str(&base.render(" "));
            }
        }
        out
    }

    fn run_style(&self, run: &StyledRun, base: &Style) -> Style {
        let mut style = base.clone();
        if let Some(color) = &run.color {
            style = self.with_foreground(style, color);
        }
        if run.weight == Weight::Bold {
            style = style.bold(true);
        }
        style
    }

    fn with_foreground(&self, style: Style, color: &ColorValue) -> Style {
        match self.palette.resolve(color) {
            TermColor::Adaptive(adaptive) => style.foreground(adaptive),
            TermColor::Plain(value) => style.foreground(Color::from(value.as_str())),
            TermColor::Inherit => style,
        }
    }

    fn with_background(&self, style: Style, color: &ColorValue) -> Style {
        match self.palette.resolve(color) {
            TermColor::Adaptive(adaptive) => style.background(adaptive),
            TermColor::Plain(value) => style.background(Color::from(value.as_str())),
            TermColor::Inherit => style,
        }
    }
}

fn run_width(run: &StyledRun) -> usize {
    run.text.width() + usize::from(run.trailing_space)
}

fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "mdi:clock-outline" | "mdi:clock" => "◷",
        "mdi:timer-outline" | "mdi:timer" | "mdi:timer-sand" => "⧗",
        "mdi:calendar" | "mdi:calendar-clock" => "▦",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::HeaderDescription;
    use crate::config::normalize;
    use crate::lexer::tokenize;
    use crate::projector::project;
    use serde_json::json;

    fn strip(s: &str) -> String {
        lipgloss::strip_ansi(s)
    }

    fn runs(text: &str) -> Vec<StyledRun> {
        let config = normalize(&json!({ "entity": "sensor.x", "y_n_color": "#ff0000" })).unwrap();
        project(&tokenize(text), &config)
    }

    fn description(runs: Vec<StyledRun>) -> RenderDescription {
        RenderDescription {
            header: Some(HeaderDescription {
                icon: "mdi:clock-outline".to_string(),
                name: "Launch".to_string(),
                color: None,
                scale: 1.0,
            }),
            runs,
            font_scale: 1.2,
            background: None,
            theme: None,
            is_flashing: false,
            is_finished: false,
        }
    }

    #[test]
    fn test_paint_runs_keeps_text() {
        let painter = TerminalPainter::default();
        let out = painter.paint_runs(&runs("2 years, 3 months"));
        assert_eq!(strip(&out), "2 years, 3 months");
    }

    #[test]
    fn test_compact_separator_gets_a_gap() {
        let painter = TerminalPainter::default();
        let out = painter.paint_runs(&runs("1y,2m"));
        assert_eq!(strip(&out), "1y, 2m");
    }

    #[test]
    fn test_paint_with_header() {
        let painter = TerminalPainter::default();
        let out = painter.paint(&description(runs("3 days")));
        let plain = strip(&out);
        let lines: Vec<_> = plain.lines().collect();
        assert_eq!(lines, vec!["◷ Launch", "3 days"]);
    }

    #[test]
    fn test_paint_without_header() {
        let painter = TerminalPainter::default();
        let mut desc = description(runs("Finished"));
        desc.header = None;
        assert_eq!(strip(&painter.paint(&desc)), "Finished");
    }

    #[test]
    fn test_background_pads_lines_to_equal_width() {
        let painter = TerminalPainter::default();
        let mut desc = description(runs("3 days, 4 hours"));
        desc.background = Some(ColorValue::new("#202020"));
        let plain = strip(&painter.paint(&desc));
        let widths: Vec<_> = plain.lines().map(|l| l.width()).collect();
        assert_eq!(widths.len(), 2);
        assert_eq!(widths[0], widths[1]);
        assert!(plain.lines().all(|l| l.starts_with(' ')));
    }

    #[test]
    fn test_theme_fallback_resolution() {
        let palette = ThemePalette::default();
        assert!(matches!(
            palette.resolve(&ColorValue::new("var(--unknown, #123456)")),
            TermColor::Plain(ref v) if v == "#123456"
        ));
        assert!(matches!(
            palette.resolve(&ColorValue::new("var(--unknown)")),
            TermColor::Inherit
        ));
        assert!(matches!(
            palette.resolve(&ColorValue::new("var(--primary-text-color)")),
            TermColor::Adaptive(_)
        ));
        assert!(matches!(
            palette.resolve(&ColorValue::new("inherit")),
            TermColor::Inherit
        ));
    }

    #[test]
    fn test_icon_glyphs() {
        assert_eq!(icon_glyph("mdi:clock-outline"), "◷");
        assert_eq!(icon_glyph("mdi:rocket"), "•");
    }
}

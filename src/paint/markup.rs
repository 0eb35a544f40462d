use crate::card::RenderDescription;
use crate::config::Configuration;
use crate::projector::{StyledRun, Weight};
use crate::style::{resolve_color, Role};
use crate::unit::Unit;
use std::fmt::Write;

/// How [`MarkupPainter`] attaches styling to runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkupMode {
    /// Every span carries its resolved color and weight in a `style` attribute.
    #[default]
    Inline,
    /// Spans carry class names (`y-v val`, `y-l lbl`, `sep`) and colors come
    /// from [`MarkupPainter::stylesheet`].
    Classes,
}

/// Paints render descriptions as HTML fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupPainter {
    /// Styling mode.
    pub mode: MarkupMode,
}

impl MarkupPainter {
    /// Creates a painter in the given mode.
    pub fn new(mode: MarkupMode) -> Self {
        Self { mode }
    }

    /// Paints the timer runs only.
    pub fn paint_runs(&self, runs: &[StyledRun]) -> String {
        let mut out = String::new();
        for run in runs {
            self.push_run(&mut out, run);
        }
        out
    }

    /// Paints a complete card.
    pub fn paint(&self, desc: &RenderDescription) -> String {
        let mut out = String::new();
        let mut classes = String::from("card");
        if desc.is_flashing {
            classes.push_str(" flashing");
        }
        let _ = write!(out, r#"<div class="{}""#, classes);
        if let Some(theme) = &desc.theme {
            let _ = write!(out, r#" data-theme="{}""#, escape_html(theme));
        }
        if self.mode == MarkupMode::Inline {
            if let Some(bg) = &desc.background {
                let _ = write!(out, r#" style="background: {}""#, escape_html(bg.as_str()));
            }
        }
        out.push('>');

        if let Some(header) = &desc.header {
            out.push_str(r#"<div class="header">"#);
            let color = header
                .color
                .as_ref()
                .map(|c| format!("color: {}; ", escape_html(c.as_str())))
                .unwrap_or_default();
            let _ = write!(
                out,
                r#"<span class="icon" data-icon="{}" style="{}--icon-scale: {}"></span>"#,
                escape_html(&header.icon),
                color,
                header.scale
            );
            let _ = write!(
                out,
                r#"<span class="name" style="{}font-size: {}rem">{}</span>"#,
                color,
                0.9 * header.scale,
                escape_html(&header.name)
            );
            out.push_str("</div>");
        }

        let _ = write!(
            out,
            r#"<div class="timer" style="font-size: {}rem">"#,
            desc.font_scale
        );
        out.push_str(&self.paint_runs(&desc.runs));
        out.push_str("</div></div>");
        out
    }

    /// CSS for [`MarkupMode::Classes`].
    ///
    /// Declares one custom property per role and per unit/role pair. Each
    /// per-unit property falls back to its role property, so the cascade
    /// follows the same order as [`resolve_color`]: unit override, then
    /// global color, then theme default.
    pub fn stylesheet(config: &Configuration) -> String {
        let mut css = String::new();
        css.push_str("@keyframes blink { 50% { opacity: 0; } }\n:host {\n");
        for (var, role) in [("n", Role::Number), ("l", Role::Word), ("s", Role::Separator)] {
            let _ = writeln!(css, "  --{}-clr: {};", var, resolve_color(None, role, config));
        }
        for unit in Unit::ALL {
            for (suffix, role, fallback) in [("n", Role::Number, "n"), ("l", Role::Word, "l")] {
                let value = config
                    .unit_color(unit, role)
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| format!("var(--{}-clr)", fallback));
                let _ = writeln!(css, "  --{}-{}: {};", unit.key(), suffix, value);
            }
        }
        css.push_str("}\n");

        let bg = config
            .bg_color()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "var(--ha-card-background)".to_string());
        let _ = writeln!(css, ".card {{ padding: 16px; background: {}; }}", bg);
        css.push_str(".card.flashing { animation: blink 1s linear infinite; }\n");
        let display = if config.show_header() { "flex" } else { "none" };
        let _ = writeln!(
            css,
            ".header {{ display: {}; align-items: center; margin-bottom: 8px; }}",
            display
        );
        css.push_str(".timer { line-height: 1.6; font-weight: 500; }\n");
        css.push_str(".val { font-weight: 700; margin-right: 4px; }\n");
        css.push_str(".lbl { font-weight: 400; }\n");
        css.push_str(".sep { margin-right: 8px; color: var(--s-clr); }\n");
        for unit in Unit::ALL {
            let key = unit.key();
            let _ = writeln!(
                css,
                ".{k}-v {{ color: var(--{k}-n); }} .{k}-l {{ color: var(--{k}-l); }}",
                k = key
            );
        }
        css
    }

    fn push_run(&self, out: &mut String, run: &StyledRun) {
        let text = escape_html(&run.text);
        let Some(unit) = run.unit else {
            out.push_str(&text);
            return;
        };
        match self.mode {
            MarkupMode::Classes => {
                let class = match run.role {
                    Role::Number => format!("{}-v val", unit.key()),
                    Role::Word => format!("{}-l lbl", unit.key()),
                    Role::Separator => "sep".to_string(),
                };
                let _ = write!(out, r#"<span class="{}">{}</span>"#, class, text);
            }
            MarkupMode::Inline => {
                let mut style = String::new();
                if let Some(color) = &run.color {
                    let _ = write!(style, "color: {}; ", escape_html(color.as_str()));
                }
                let weight = match run.weight {
                    Weight::Bold => 700,
                    Weight::Normal => 400,
                };
                let _ = write!(style, "font-weight: {}", weight);
                if run.trailing_space {
                    style.push_str("; margin-right: 8px");
                }
                let _ = write!(out, r#"<span style="{}">{}</span>"#, style, text);
            }
        }
    }
}

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

//! Terminal capability detection and utilities

use owo_colors::{OwoColorize, colors::css};

/// Widest rule drawn under a section title.
const MAX_RULE_WIDTH: usize = 72;

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Detects terminal width, returning None if not available
pub fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(w, _)| w.0)
}

/// Check if terminal is narrow (< 60 columns)
pub fn is_narrow() -> bool {
    terminal_width().is_some_and(|w| w < 60)
}

/// Width of the rule drawn under section titles.
pub fn rule_width() -> usize {
    terminal_width().map_or(MAX_RULE_WIDTH, |w| usize::from(w).min(MAX_RULE_WIDTH))
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Color by a display color token such as `"warning"` or `"primary"`.
    ///
    /// Unknown and neutral tokens leave the text unstyled.
    fn token(&self, token: &str) -> String;
    /// Bold text
    fn bold(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl Colorize for str {
    fn token(&self, token: &str) -> String {
        if !supports_color() {
            return self.to_string();
        }
        match token.trim_end_matches("-border") {
            "primary" => self.fg::<css::DodgerBlue>().to_string(),
            "success" => self.fg::<css::Green>().to_string(),
            "warning" => self.fg::<css::Orange>().to_string(),
            "danger" => self.fg::<css::Red>().to_string(),
            "info" => self.fg::<css::LightBlue>().to_string(),
            "accent" => self.fg::<css::MediumPurple>().to_string(),
            "muted" => self.dimmed().to_string(),
            _ => self.to_string(),
        }
    }

    fn bold(&self) -> String {
        if supports_color() {
            OwoColorize::bold(&self).to_string()
        } else {
            self.to_string()
        }
    }

    fn dim(&self) -> String {
        if supports_color() {
            self.dimmed().to_string()
        } else {
            self.to_string()
        }
    }
}

impl Colorize for String {
    fn token(&self, token: &str) -> String {
        self.as_str().token(token)
    }

    fn bold(&self) -> String {
        Colorize::bold(self.as_str())
    }

    fn dim(&self) -> String {
        self.as_str().dim()
    }
}

//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// Warning tags (yellow)
    pub warning: Style,
    /// Error tags (red)
    pub error: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.warning = Style::new().yellow();
        self.error = Style::new().red();
    }
}

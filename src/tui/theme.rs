//! Color scheme for the explorer TUI.

use crate::model::DependencyStatus;
use ratatui::prelude::*;

/// Semantic colors for the explorer views.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub text: Color,
    pub selection: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    /// Foreground for text on bright badge backgrounds
    pub badge_fg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            text: Color::Gray,
            selection: Color::Rgb(50, 60, 80),
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            badge_fg: Color::Black,
        }
    }

    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Magenta,
            muted: Color::Gray,
            text: Color::Black,
            selection: Color::Rgb(200, 210, 230),
            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            badge_fg: Color::White,
        }
    }

    /// Resolve a theme by name, falling back to dark.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Color a status indicator.
    #[must_use]
    pub fn status_color(&self, status: DependencyStatus) -> Color {
        match status {
            DependencyStatus::Active => self.success,
            DependencyStatus::Deprecated => self.muted,
            DependencyStatus::SecurityIssue => self.error,
            DependencyStatus::Outdated => self.warning,
            DependencyStatus::Unknown => self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_falls_back_to_dark() {
        let scheme = ColorScheme::from_name("no-such-theme");
        assert_eq!(scheme.primary, ColorScheme::dark().primary);
        let light = ColorScheme::from_name("light");
        assert_eq!(light.primary, ColorScheme::light().primary);
    }

    #[test]
    fn test_security_status_uses_error_color() {
        let scheme = ColorScheme::dark();
        assert_eq!(
            scheme.status_color(DependencyStatus::SecurityIssue),
            scheme.error
        );
    }
}

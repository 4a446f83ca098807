//! Palette definitions for the two display themes.
//!
//! Semantic styles consumed by the rendering layer — the view never picks
//! a raw color. Dark keeps the neon-on-black look of the original
//! styling; light inverts to ink-on-default with the same accents.

use ratatui::style::{Color, Modifier, Style};

use crate::prefs::ThemePreference;

/// Semantic styles for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Title / tab bar text.
    pub title: Style,
    /// The active tab.
    pub tab_active: Style,
    /// Inactive tabs.
    pub tab_inactive: Style,
    /// Main display line (the current entry).
    pub display: Style,
    /// History / in-progress expression line.
    pub history: Style,
    /// Keypad digits and hint keys.
    pub key: Style,
    /// Operator keys and accents.
    pub accent: Style,
    /// Form field labels.
    pub label: Style,
    /// The focused form field.
    pub field_focused: Style,
    /// Unfocused form fields.
    pub field: Style,
    /// Result card values.
    pub value: Style,
    /// Interrupting notice (errors).
    pub notice: Style,
    /// Help line at the bottom.
    pub help: Style,
}

pub fn dark_theme() -> Palette {
    Palette {
        title: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
        tab_active: Style::new().fg(Color::Black).bg(Color::Cyan),
        tab_inactive: Style::new().fg(Color::DarkGray),
        display: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        history: Style::new().fg(Color::DarkGray),
        key: Style::new().fg(Color::Gray),
        accent: Style::new().fg(Color::Magenta),
        label: Style::new().fg(Color::Gray),
        field_focused: Style::new().add_modifier(Modifier::REVERSED),
        field: Style::new().fg(Color::DarkGray),
        value: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
        notice: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
        help: Style::new().fg(Color::DarkGray),
    }
}

pub fn light_theme() -> Palette {
    Palette {
        title: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
        tab_active: Style::new().fg(Color::White).bg(Color::Blue),
        tab_inactive: Style::new().fg(Color::Gray),
        display: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
        history: Style::new().fg(Color::Gray),
        key: Style::new().fg(Color::DarkGray),
        accent: Style::new().fg(Color::Magenta),
        label: Style::new().fg(Color::DarkGray),
        field_focused: Style::new().add_modifier(Modifier::REVERSED),
        field: Style::new().fg(Color::Gray),
        value: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
        notice: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
        help: Style::new().fg(Color::Gray),
    }
}

/// Palette for the stored preference.
pub fn palette(pref: ThemePreference) -> Palette {
    match pref {
        ThemePreference::Light => light_theme(),
        ThemePreference::Dark => dark_theme(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_between_themes() {
        assert_ne!(dark_theme(), light_theme());
    }

    #[test]
    fn palette_selection_follows_the_preference() {
        assert_eq!(palette(ThemePreference::Dark), dark_theme());
        assert_eq!(palette(ThemePreference::Light), light_theme());
    }

    #[test]
    fn notices_are_red_in_both_themes() {
        assert_eq!(dark_theme().notice.fg, Some(Color::Red));
        assert_eq!(light_theme().notice.fg, Some(Color::Red));
    }

    #[test]
    fn focused_fields_are_reversed() {
        assert!(dark_theme().field_focused.add_modifier.contains(Modifier::REVERSED));
        assert!(light_theme().field_focused.add_modifier.contains(Modifier::REVERSED));
    }
}

//! Terminal color theme system
//!
//! Provides adaptive color palettes for dark and light terminal backgrounds.
//! Auto-detects via COLORFGBG env var, or manual override with --light/--dark,
//! the config file, or KDM_LIGHT_BG=1 environment variable.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, VariantNames};

/// Environment override for light backgrounds
pub const LIGHT_BG_ENV: &str = "KDM_LIGHT_BG";

/// Theme selection from config or command line
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Auto,
    Dark,
    Light,
}

/// Color theme for terminal UI.
/// All UI code should use theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // General UI text
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, key hints)
    pub text_dim: Color,
    /// Muted text (die notes)
    pub text_muted: Color,

    // Borders
    /// Default border color
    pub border: Color,
    /// Informational border (help, share)
    pub border_accent: Color,
    /// Border of the result panel
    pub border_result: Color,

    // Interactive elements
    /// Field under the cursor, foreground
    pub cursor_fg: Color,
    /// Field under the cursor, background
    pub cursor_bg: Color,
    /// Active survivor tab / page
    pub tab_active: Color,
    /// Inactive tabs
    pub tab_inactive: Color,

    // Semantic colors
    /// Headings
    pub accent: Color,
    /// The big "N+" number
    pub result: Color,
    /// Flag checked, critical wounds possible
    pub good: Color,
    /// Critical wounds not possible
    pub bad: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::Gray,
            text_dim: Color::DarkGray,
            text_muted: Color::DarkGray,
            border: Color::DarkGray,
            border_accent: Color::Cyan,
            border_result: Color::Gray,
            cursor_fg: Color::Yellow,
            cursor_bg: Color::DarkGray,
            tab_active: Color::LightBlue,
            tab_inactive: Color::Gray,
            accent: Color::LightBlue,
            result: Color::White,
            good: Color::Green,
            bad: Color::Red,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            text_muted: Color::DarkGray,
            border: Color::Gray,
            border_accent: Color::Blue,
            border_result: Color::DarkGray,
            cursor_fg: Color::Black,
            cursor_bg: Color::Gray,
            tab_active: Color::Blue,
            tab_inactive: Color::DarkGray,
            accent: Color::Blue,
            result: Color::Black,
            good: Color::Green,
            bad: Color::Red,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks COLORFGBG env var and KDM_LIGHT_BG override.
    pub fn detect() -> Self {
        let light = is_light_background(
            std::env::var(LIGHT_BG_ENV).ok().as_deref(),
            std::env::var("COLORFGBG").ok().as_deref(),
        );
        if light { Self::light() } else { Self::dark() }
    }

    /// Resolve a configured choice
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

/// Decide whether the background is light from the two environment values
fn is_light_background(override_var: Option<&str>, colorfgbg: Option<&str>) -> bool {
    // Explicit override via environment variable
    if let Some(val) = override_var {
        return val == "1" || val.eq_ignore_ascii_case("true");
    }

    // COLORFGBG is set by many terminals (xterm, rxvt, iTerm2, etc.)
    // Format: "fg;bg" where values are color indices (0-15)
    // Light backgrounds typically have bg index >= 7 (excluding 8 which is bright black)
    if let Some(colorfgbg) = colorfgbg
        && let Some(bg_str) = colorfgbg.rsplit(';').next()
        && let Ok(bg_idx) = bg_str.parse::<u8>()
    {
        return matches!(bg_idx, 7 | 9..=15);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_result_is_white() {
        let theme = Theme::dark();
        assert_eq!(theme.result, Color::White);
    }

    #[test]
    fn test_light_theme_text_is_black() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.result, Color::Black);
    }

    #[test]
    fn test_explicit_choice_ignores_environment() {
        assert_eq!(Theme::from_choice(ThemeChoice::Dark), Theme::dark());
        assert_eq!(Theme::from_choice(ThemeChoice::Light), Theme::light());
    }

    #[test]
    fn test_override_wins() {
        assert!(is_light_background(Some("1"), Some("15;0")));
        assert!(is_light_background(Some("TRUE"), None));
        assert!(!is_light_background(Some("0"), Some("0;15")));
    }

    #[test]
    fn test_colorfgbg_detection() {
        assert!(is_light_background(None, Some("0;15")));
        assert!(is_light_background(None, Some("0;7")));
        assert!(!is_light_background(None, Some("15;0")));
        assert!(!is_light_background(None, Some("7;8")));
        assert!(!is_light_background(None, Some("garbage")));
        assert!(!is_light_background(None, None));
    }

    #[test]
    fn test_choice_parses_from_config_strings() {
        assert_eq!("light".parse::<ThemeChoice>().unwrap(), ThemeChoice::Light);
        assert_eq!(ThemeChoice::default(), ThemeChoice::Auto);
    }
}

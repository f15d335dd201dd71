//! Theme: the two-valued display mode and everything it drives in the UI.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseThemeError;

/// Name of the persisted storage slot holding the preference.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on the root element while the dark theme is active.
pub const MARKER_CLASS: &str = "dark";

/// Theme used when neither a persisted value nor a system signal exists.
pub const DEFAULT_THEME: Theme = Theme::Light;

/// The user's display mode choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Literal stored in the persisted slot.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Whether the root [`MARKER_CLASS`] must be present for this theme.
    #[must_use]
    pub fn has_marker_class(self) -> bool {
        self.is_dark()
    }

    /// Rotation of the compass toggle, in degrees.
    ///
    /// Dark rests at 0°, light at 180°.
    #[must_use]
    pub fn compass_rotation(self) -> u16 {
        match self {
            Self::Dark => 0,
            Self::Light => 180,
        }
    }

    /// Glyph shown on the popover trigger.
    #[must_use]
    pub fn trigger_icon(self) -> TriggerIcon {
        match self {
            Self::Dark => TriggerIcon::Night,
            Self::Light => TriggerIcon::Day,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError {
                value: other.to_string(),
            }),
        }
    }
}

/// Icon rendered inside the trigger button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerIcon {
    /// Crescent glyph, shown while dark mode is active.
    Night,
    /// Sun with rays, shown while light mode is active.
    Day,
}

impl TriggerIcon {
    /// SVG path data (24×24 viewbox, outline style).
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Night => {
                "M21.752 15.002A9.718 9.718 0 0118 15.75c-5.385 0-9.75-4.365-9.75-9.75 0-1.33.266-2.597.748-3.752A9.753 9.753 0 003 11.25C3 16.635 7.365 21 12.75 21a9.753 9.753 0 009.002-5.998z"
            }
            Self::Day => {
                "M12 3v2.25m6.364.386l-1.591 1.591M21 12h-2.25m-.386 6.364l-1.591-1.591M12 18.75V21m-4.773-4.227l-1.591 1.591M5.25 12H3m4.227-4.773L5.636 5.636M15.75 12a3.75 3.75 0 11-7.5 0 3.75 3.75 0 017.5 0z"
            }
        }
    }

    /// Stroke utility class for the glyph.
    #[must_use]
    pub fn stroke_class(self) -> &'static str {
        match self {
            Self::Night => "stroke-yellow-200",
            Self::Day => "stroke-black",
        }
    }

    /// Accessible label for the trigger.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Night => "Dark theme active, open theme switcher",
            Self::Day => "Light theme active, open theme switcher",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_toggle_light_to_dark_and_back() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn should_default_to_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(DEFAULT_THEME, Theme::Light);
    }

    #[test]
    fn should_rotate_compass_180_when_light() {
        assert_eq!(Theme::Light.compass_rotation(), 180);
    }

    #[test]
    fn should_rotate_compass_0_when_dark() {
        assert_eq!(Theme::Dark.compass_rotation(), 0);
    }

    #[test]
    fn should_require_marker_class_only_when_dark() {
        assert!(Theme::Dark.has_marker_class());
        assert!(!Theme::Light.has_marker_class());
    }

    #[test]
    fn should_pick_night_icon_when_dark() {
        assert_eq!(Theme::Dark.trigger_icon(), TriggerIcon::Night);
        assert_eq!(Theme::Light.trigger_icon(), TriggerIcon::Day);
    }

    #[test]
    fn should_parse_stored_literals() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    }

    #[test]
    fn should_reject_unknown_literal() {
        let err = "Dark".parse::<Theme>().unwrap_err();
        assert_eq!(err.value, "Dark");
    }

    #[test]
    fn should_display_stored_literal() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn should_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}

//! Initial theme resolution.
//!
//! Precedence:
//! 1. a recognised value in the persisted slot, used verbatim;
//! 2. otherwise the OS color-scheme signal (`dark` selects dark);
//! 3. otherwise [`DEFAULT_THEME`].
//!
//! A slot holding anything other than `"light"` / `"dark"` still counts as
//! present: it resolves to [`DEFAULT_THEME`] without consulting the OS signal,
//! and is overwritten on persist.

use crate::theme::{DEFAULT_THEME, Theme};

/// Raw content of the persisted slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredTheme {
    Missing,
    Valid(Theme),
    Unrecognized(String),
}

impl StoredTheme {
    /// Classify the raw slot content.
    #[must_use]
    pub fn from_raw(raw: Option<String>) -> Self {
        match raw {
            None => Self::Missing,
            Some(value) => match value.parse() {
                Ok(theme) => Self::Valid(theme),
                Err(_) => Self::Unrecognized(value),
            },
        }
    }
}

/// Which rule produced the resolved theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Stored,
    System,
    Fallback,
}

/// Outcome of [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub theme: Theme,
    pub source: ThemeSource,
    /// Whether the theme should be written back to the slot.
    ///
    /// `false` when storage could not be read at all: the theme then only
    /// lives for the session.
    pub persist: bool,
}

/// Resolve the initial theme.
///
/// `stored` is `None` when storage itself is unreachable, and `prefers_dark`
/// is `None` when the OS signal cannot be queried.
#[must_use]
pub fn resolve(stored: Option<&StoredTheme>, prefers_dark: Option<bool>) -> Resolution {
    match stored {
        Some(StoredTheme::Valid(theme)) => Resolution {
            theme: *theme,
            source: ThemeSource::Stored,
            persist: true,
        },
        Some(StoredTheme::Unrecognized(_)) => Resolution {
            theme: DEFAULT_THEME,
            source: ThemeSource::Fallback,
            persist: true,
        },
        Some(StoredTheme::Missing) => from_system(prefers_dark, true),
        None => from_system(prefers_dark, false),
    }
}

fn from_system(prefers_dark: Option<bool>, persist: bool) -> Resolution {
    let (theme, source) = match prefers_dark {
        Some(true) => (Theme::Dark, ThemeSource::System),
        Some(false) => (Theme::Light, ThemeSource::System),
        None => (DEFAULT_THEME, ThemeSource::Fallback),
    };
    Resolution {
        theme,
        source,
        persist,
    }
}

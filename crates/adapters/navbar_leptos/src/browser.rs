//! Browser implementations of the theme ports: `localStorage`, `matchMedia`
//! and the class list of `<html>`.

use themenav_app::ports::{PreferenceStore, SystemPreference, ThemeSink};
use themenav_domain::error::StorageError;
use themenav_domain::theme::{MARKER_CLASS, STORAGE_KEY, Theme};

/// Media query reporting an OS-level dark color scheme.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// The persisted slot, backed by `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(STORAGE_KEY)
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|_| StorageError::Read {
                key: self.key.clone(),
            })
    }

    fn save(&self, theme: Theme) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(&self.key, theme.as_str())
            .map_err(|_| StorageError::Write {
                key: self.key.clone(),
            })
    }
}

/// OS color-scheme signal, read through `window.matchMedia`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryProbe;

impl SystemPreference for MediaQueryProbe {
    fn prefers_dark(&self) -> Option<bool> {
        web_sys::window()?
            .match_media(PREFERS_DARK_QUERY)
            .ok()
            .flatten()
            .map(|mq| mq.matches())
    }
}

/// Marker class on `document.documentElement`.
#[derive(Debug, Clone)]
pub struct DocumentRootSink {
    class: String,
}

impl DocumentRootSink {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }

    fn root() -> Option<web_sys::Element> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
    }
}

impl Default for DocumentRootSink {
    fn default() -> Self {
        Self::new(MARKER_CLASS)
    }
}

impl ThemeSink for DocumentRootSink {
    fn apply(&self, theme: Theme) {
        let Some(root) = Self::root() else {
            leptos::logging::warn!("no document root, theme class not applied");
            return;
        };
        let class_list = root.class_list();
        let result = if theme.has_marker_class() {
            class_list.add_1(&self.class)
        } else {
            class_list.remove_1(&self.class)
        };
        if let Err(err) = result {
            leptos::logging::warn!("failed to update theme class: {err:?}");
        }
    }

    fn read(&self) -> Option<Theme> {
        let root = Self::root()?;
        Some(if root.class_list().contains(&self.class) {
            Theme::Dark
        } else {
            Theme::Light
        })
    }
}

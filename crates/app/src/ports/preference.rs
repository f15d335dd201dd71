//! Preference ports: the persisted slot and the OS color-scheme signal.

use std::rc::Rc;

use themenav_domain::error::StorageError;
use themenav_domain::theme::Theme;

/// Durable key-value slot holding the user's theme.
pub trait PreferenceStore {
    /// Raw slot content, `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when storage is unreachable.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot with `theme`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the write is refused.
    fn save(&self, theme: Theme) -> Result<(), StorageError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn load(&self) -> Result<Option<String>, StorageError> {
        (**self).load()
    }

    fn save(&self, theme: Theme) -> Result<(), StorageError> {
        (**self).save(theme)
    }
}

/// Read-only OS color-scheme signal. Queried once; never subscribed to.
pub trait SystemPreference {
    /// `Some(true)` when the OS prefers dark, `None` when it cannot tell.
    fn prefers_dark(&self) -> Option<bool>;
}

impl<T: SystemPreference + ?Sized> SystemPreference for Rc<T> {
    fn prefers_dark(&self) -> Option<bool> {
        (**self).prefers_dark()
    }
}

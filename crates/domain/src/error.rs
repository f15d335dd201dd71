//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ThemeNavError`] via `#[from]`. None of these are ever shown to the
//! user: the theme service absorbs them into a safe default and reports the
//! [`ThemeNavError`] to the host for diagnostics.

/// Base error for the themenav workspace.
#[derive(Debug, thiserror::Error)]
pub enum ThemeNavError {
    #[error("invalid stored theme: {0}")]
    InvalidTheme(#[from] ParseThemeError),

    #[error("theme storage: {0}")]
    Storage(#[from] StorageError),
}

/// A string that is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {value:?}, expected \"light\" or \"dark\"")]
pub struct ParseThemeError {
    pub value: String,
}

/// Failures of the client-side key-value storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The host environment does not expose storage (disabled, sandboxed, …).
    #[error("storage is not available")]
    Unavailable,

    /// Reading the slot failed.
    #[error("failed to read key {key:?}")]
    Read { key: String },

    /// Writing the slot failed (quota, private mode, …).
    #[error("failed to write key {key:?}")]
    Write { key: String },
}

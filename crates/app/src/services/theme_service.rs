//! Theme service: resolves the initial theme and flips it on demand.

use std::cell::Cell;

use themenav_domain::error::{ParseThemeError, ThemeNavError};
use themenav_domain::resolution::{Resolution, StoredTheme, resolve};
use themenav_domain::theme::{DEFAULT_THEME, Theme};

use crate::ports::{PreferenceStore, SystemPreference, ThemeSink};

/// Owns the in-memory theme and keeps the store and the sink in step with it.
///
/// Failures of either port are absorbed: the user always gets a theme.
/// Each absorbed failure is logged through `tracing` and handed to the
/// reporter installed with [`ThemeService::with_reporter`], for hosts that
/// run without a `tracing` subscriber.
pub struct ThemeService<P, Y, S> {
    store: P,
    system: Y,
    sink: S,
    current: Cell<Theme>,
    persist: Cell<bool>,
    reporter: Option<Box<dyn Fn(&ThemeNavError)>>,
}

impl<P, Y, S> ThemeService<P, Y, S>
where
    P: PreferenceStore,
    Y: SystemPreference,
    S: ThemeSink,
{
    pub fn new(store: P, system: Y, sink: S) -> Self {
        Self {
            store,
            system,
            sink,
            current: Cell::new(DEFAULT_THEME),
            persist: Cell::new(true),
            reporter: None,
        }
    }

    /// Hand every absorbed failure to `reporter`.
    #[must_use]
    pub fn with_reporter(mut self, reporter: impl Fn(&ThemeNavError) + 'static) -> Self {
        self.reporter = Some(Box::new(reporter));
        self
    }

    /// Resolve, persist and apply the initial theme. Call once after mount.
    ///
    /// When storage cannot be read, the theme is kept for the session only
    /// and later toggles are not persisted either.
    pub fn initialize(&self) -> Resolution {
        let stored = match self.store.load() {
            Ok(raw) => Some(StoredTheme::from_raw(raw)),
            Err(err) => {
                tracing::debug!(error = %err, "theme storage unreadable, using session theme");
                self.report(&err.into());
                None
            }
        };
        if let Some(StoredTheme::Unrecognized(value)) = &stored {
            tracing::debug!(value = %value, "ignoring unrecognized stored theme");
            self.report(
                &ParseThemeError {
                    value: value.clone(),
                }
                .into(),
            );
        }

        let resolution = resolve(stored.as_ref(), self.system.prefers_dark());
        self.persist.set(resolution.persist);
        self.current.set(resolution.theme);
        self.save(resolution.theme);
        self.sink.apply(resolution.theme);

        tracing::debug!(
            theme = %resolution.theme,
            source = ?resolution.source,
            persist = resolution.persist,
            "theme resolved"
        );
        resolution
    }

    /// Flip the theme, persist it and reapply the marker class.
    pub fn toggle(&self) -> Theme {
        let next = self.current.get().toggled();
        self.current.set(next);
        self.save(next);
        self.sink.apply(next);
        tracing::debug!(theme = %next, "theme toggled");
        next
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current.get()
    }

    /// Whether the marker class agrees with the in-memory theme.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.sink
            .read()
            .is_none_or(|applied| applied == self.current.get())
    }

    fn save(&self, theme: Theme) {
        if !self.persist.get() {
            return;
        }
        if let Err(err) = self.store.save(theme) {
            tracing::warn!(error = %err, theme = %theme, "failed to persist theme");
            self.report(&err.into());
        }
    }

    fn report(&self, err: &ThemeNavError) {
        if let Some(reporter) = &self.reporter {
            reporter(err);
        }
    }
}

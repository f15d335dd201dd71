//! Popover open/closed state machine.

/// Why the panel is closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Pointer pressed outside both the trigger and the panel.
    OutsidePress,
    /// Escape key pressed while the panel is open.
    EscapeKey,
    /// The trigger was activated again.
    TriggerToggle,
    /// The owning component is being torn down.
    Unmount,
}

impl DismissReason {
    /// Whether focus goes back to the trigger after closing.
    ///
    /// An outside press leaves focus where the user clicked.
    #[must_use]
    pub fn returns_focus(self) -> bool {
        matches!(self, Self::EscapeKey | Self::TriggerToggle)
    }
}

/// Key that dismisses the panel.
pub const ESCAPE_KEY: &str = "Escape";

/// Document-level input observed while the panel is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEvent<'a> {
    /// A pointer went down. `inside` is true when the target belongs to the
    /// trigger or the panel.
    PointerDown { inside: bool },
    /// A key went down, named as in `KeyboardEvent.key`.
    KeyDown { key: &'a str },
}

impl DismissReason {
    /// Reason to close for `event`, or `None` when it must leave the panel
    /// alone.
    ///
    /// Presses on the trigger count as inside: the trigger's own click
    /// handler closes the panel, and closing on pointerdown as well would
    /// reopen it on click.
    #[must_use]
    pub fn for_event(event: DocumentEvent<'_>) -> Option<Self> {
        match event {
            DocumentEvent::PointerDown { inside: false } => Some(Self::OutsidePress),
            DocumentEvent::KeyDown { key } if key == ESCAPE_KEY => Some(Self::EscapeKey),
            DocumentEvent::PointerDown { inside: true } | DocumentEvent::KeyDown { .. } => None,
        }
    }
}

/// A state transition reported by [`PopoverState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenChange {
    pub open: bool,
    /// `None` when opening.
    pub reason: Option<DismissReason>,
}

/// Transient open/closed flag. Starts closed on every mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopoverState {
    open: bool,
}

impl PopoverState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Trigger activation: open when closed, close when open.
    pub fn toggle(&mut self) -> OpenChange {
        if self.open {
            self.open = false;
            OpenChange {
                open: false,
                reason: Some(DismissReason::TriggerToggle),
            }
        } else {
            self.open = true;
            OpenChange {
                open: true,
                reason: None,
            }
        }
    }

    /// Close for `reason`. Returns `None` if already closed.
    pub fn dismiss(&mut self, reason: DismissReason) -> Option<OpenChange> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(OpenChange {
            open: false,
            reason: Some(reason),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_closed() {
        assert!(!PopoverState::new().is_open());
    }

    #[test]
    fn should_open_on_first_toggle() {
        let mut state = PopoverState::new();
        let change = state.toggle();
        assert!(state.is_open());
        assert_eq!(
            change,
            OpenChange {
                open: true,
                reason: None
            }
        );
    }

    #[test]
    fn should_close_when_trigger_activated_while_open() {
        let mut state = PopoverState::new();
        state.toggle();
        let change = state.toggle();
        assert!(!state.is_open());
        assert_eq!(change.reason, Some(DismissReason::TriggerToggle));
    }

    #[test]
    fn should_close_on_escape() {
        let mut state = PopoverState::new();
        state.toggle();
        let change = state.dismiss(DismissReason::EscapeKey).unwrap();
        assert!(!change.open);
        assert!(!state.is_open());
    }

    #[test]
    fn should_ignore_dismiss_when_already_closed() {
        let mut state = PopoverState::new();
        assert!(state.dismiss(DismissReason::OutsidePress).is_none());
    }

    #[test]
    fn should_return_focus_only_for_keyboard_and_trigger_dismissal() {
        assert!(DismissReason::EscapeKey.returns_focus());
        assert!(DismissReason::TriggerToggle.returns_focus());
        assert!(!DismissReason::OutsidePress.returns_focus());
        assert!(!DismissReason::Unmount.returns_focus());
    }

    #[test]
    fn should_dismiss_on_press_outside() {
        assert_eq!(
            DismissReason::for_event(DocumentEvent::PointerDown { inside: false }),
            Some(DismissReason::OutsidePress)
        );
    }

    #[test]
    fn should_ignore_press_on_trigger_or_panel() {
        assert_eq!(
            DismissReason::for_event(DocumentEvent::PointerDown { inside: true }),
            None
        );
    }

    #[test]
    fn should_dismiss_on_escape_only() {
        assert_eq!(
            DismissReason::for_event(DocumentEvent::KeyDown { key: "Escape" }),
            Some(DismissReason::EscapeKey)
        );
        assert_eq!(
            DismissReason::for_event(DocumentEvent::KeyDown { key: "Tab" }),
            None
        );
        assert_eq!(
            DismissReason::for_event(DocumentEvent::KeyDown { key: "Esc" }),
            None
        );
    }

    #[test]
    fn should_close_once_when_trigger_pressed_while_open() {
        let mut state = PopoverState::new();
        state.toggle();

        // pointerdown on the trigger, then its click
        if let Some(reason) = DismissReason::for_event(DocumentEvent::PointerDown { inside: true }) {
            state.dismiss(reason);
        }
        let change = state.toggle();

        assert!(!state.is_open());
        assert_eq!(change.reason, Some(DismissReason::TriggerToggle));
    }
}

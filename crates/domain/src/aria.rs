//! Accessibility attributes for the trigger/panel pair.
//!
//! The panel is announced as a dialog; the trigger advertises it and
//! reflects whether it is expanded.

/// Role given to the floating panel.
pub const PANEL_ROLE: &str = "dialog";

/// Attributes for the trigger button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceAria {
    pub expanded: bool,
    /// Id of the panel, only while it is rendered.
    pub controls: Option<String>,
}

impl ReferenceAria {
    #[must_use]
    pub fn new(panel_id: &str, open: bool) -> Self {
        Self {
            expanded: open,
            controls: open.then(|| panel_id.to_string()),
        }
    }

    #[must_use]
    pub fn haspopup(&self) -> &'static str {
        PANEL_ROLE
    }

    #[must_use]
    pub fn expanded(&self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }
}

/// Attributes for the floating panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingAria {
    pub id: String,
    pub labelled_by: String,
}

impl FloatingAria {
    #[must_use]
    pub fn new(panel_id: &str, trigger_id: &str) -> Self {
        Self {
            id: panel_id.to_string(),
            labelled_by: trigger_id.to_string(),
        }
    }

    #[must_use]
    pub fn role(&self) -> &'static str {
        PANEL_ROLE
    }
}

//! Focus port: moving keyboard focus between the trigger and the panel.

/// Moves focus in the display tree. `H` is the adapter's element handle.
pub trait FocusManager<H> {
    /// Focus the first focusable element inside the panel.
    fn focus_within(&self, floating: &H);

    /// Focus the trigger itself.
    fn focus(&self, reference: &H);
}

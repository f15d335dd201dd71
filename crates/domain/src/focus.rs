//! Focus cycling inside the open panel.

/// Index of the element that receives focus after a Tab press.
///
/// `current` is the position of the focused element among the panel's
/// `count` focusable elements, or `None` if focus is elsewhere. Focus wraps
/// at both ends so it never leaves the panel while it is open.
#[must_use]
pub fn next_focus_index(current: Option<usize>, count: usize, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    let next = match (current, backwards) {
        (None, false) => 0,
        (None, true) => last,
        (Some(i), false) if i >= last => 0,
        (Some(i), false) => i + 1,
        (Some(0), true) => last,
        (Some(i), true) => (i - 1).min(last),
    };
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_none_when_panel_has_nothing_focusable() {
        assert_eq!(next_focus_index(None, 0, false), None);
    }

    #[test]
    fn should_enter_panel_at_first_element() {
        assert_eq!(next_focus_index(None, 3, false), Some(0));
    }

    #[test]
    fn should_enter_panel_at_last_element_when_backwards() {
        assert_eq!(next_focus_index(None, 3, true), Some(2));
    }

    #[test]
    fn should_wrap_forward_from_last_to_first() {
        assert_eq!(next_focus_index(Some(2), 3, false), Some(0));
    }

    #[test]
    fn should_wrap_backward_from_first_to_last() {
        assert_eq!(next_focus_index(Some(0), 3, true), Some(2));
    }

    #[test]
    fn should_step_forward_and_backward() {
        assert_eq!(next_focus_index(Some(0), 3, false), Some(1));
        assert_eq!(next_focus_index(Some(2), 3, true), Some(1));
    }

    #[test]
    fn should_stay_on_single_element() {
        assert_eq!(next_focus_index(Some(0), 1, false), Some(0));
        assert_eq!(next_focus_index(Some(0), 1, true), Some(0));
    }
}

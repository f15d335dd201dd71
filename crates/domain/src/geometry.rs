//! Placement geometry for the floating panel.
//!
//! All coordinates are CSS pixels in viewport space, as reported by
//! `getBoundingClientRect`.

/// Gap between trigger and panel, in pixels.
pub const DEFAULT_OFFSET: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// A zero or negative extent means the element has not been laid out.
    #[must_use]
    pub fn is_measured(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    fn center_x(self) -> f64 {
        self.x + self.width / 2.0
    }

    fn center_y(self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Side of the trigger the panel is attached to. The panel is centred
/// along the other axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

/// Compute the panel's top-left corner.
///
/// Returns `None` while either element has not been measured yet.
#[must_use]
pub fn compute_position(
    reference: Rect,
    floating: Size,
    placement: Placement,
    offset: f64,
) -> Option<Point> {
    if !reference.size().is_measured() || !floating.is_measured() {
        return None;
    }
    let point = match placement {
        Placement::Bottom => Point {
            x: reference.center_x() - floating.width / 2.0,
            y: reference.y + reference.height + offset,
        },
        Placement::Top => Point {
            x: reference.center_x() - floating.width / 2.0,
            y: reference.y - floating.height - offset,
        },
        Placement::Right => Point {
            x: reference.x + reference.width + offset,
            y: reference.center_y() - floating.height / 2.0,
        },
        Placement::Left => Point {
            x: reference.x - floating.width - offset,
            y: reference.center_y() - floating.height / 2.0,
        },
    };
    Some(point)
}

/// Inline style for the panel.
///
/// Hidden until a position is known, so the panel is never painted at the
/// origin of the viewport.
#[must_use]
pub fn floating_styles(position: Option<Point>) -> String {
    match position {
        Some(Point { x, y }) => format!(
            "position: fixed; left: 0px; top: 0px; transform: translate({}px, {}px);",
            round_px(x),
            round_px(y)
        ),
        None => "position: fixed; left: 0px; top: 0px; visibility: hidden;".to_string(),
    }
}

// Adding 0.0 folds -0.0 into 0.0 so it never renders as "-0px".
fn round_px(value: f64) -> f64 {
    value.round() + 0.0
}

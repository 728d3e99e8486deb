use serde::{Deserialize, Serialize};

/// A rectangle in screen units.
///
/// Depending on where it came from, this is the full extent of a monitor, the usable work
/// area of a monitor, or the frame of a window. The origin is the top-left corner of the
/// primary monitor and the y axis grows downward, so `x` and `y` may be negative for
/// anything left of or above the primary monitor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenRect {
    /// The x position of the left edge.
    pub x: i32,
    /// The y position of the top edge.
    pub y: i32,
    /// The width, never negative.
    pub width: i32,
    /// The height, never negative.
    pub height: i32,
}

impl ScreenRect {
    /// Create a new [`ScreenRect`](ScreenRect). Negative extents are clamped to zero.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> ScreenRect {
        ScreenRect {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Create a rectangle from its edges, as Win32 and X11 report them.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> ScreenRect {
        ScreenRect::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top))
    }

    /// The x position one past the right edge.
    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// The y position one past the bottom edge.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the rectangle covers no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// The center point, rounded toward the top-left.
    pub fn center(&self) -> (i32, i32) {
        (
            self.x.saturating_add(self.width / 2),
            self.y.saturating_add(self.height / 2),
        )
    }

    /// Whether the point lies inside the rectangle. The right and bottom edges are exclusive.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether `other` lies entirely inside this rectangle. Edges may touch.
    pub fn contains_rect(&self, other: &ScreenRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// The overlapping region of both rectangles, if they overlap at all.
    pub fn intersection(&self, other: &ScreenRect) -> Option<ScreenRect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        (right > left && bottom > top).then(|| ScreenRect::from_edges(left, top, right, bottom))
    }

    /// The area covered by the rectangle.
    #[inline]
    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    /// Move this rectangle so that it lies inside `outer`.
    ///
    /// The rectangle is only shrunk on an axis where it is larger than `outer`. This is the
    /// usual way of keeping a window on its monitor's work area.
    pub fn clamp_within(&self, outer: &ScreenRect) -> ScreenRect {
        let width = self.width.min(outer.width);
        let height = self.height.min(outer.height);
        // `right`/`bottom` saturate, so the upper bound may end up left of `outer.x`.
        let x = self
            .x
            .min(outer.right().saturating_sub(width))
            .max(outer.x);
        let y = self
            .y
            .min(outer.bottom().saturating_sub(height))
            .max(outer.y);
        ScreenRect::new(x, y, width, height)
    }

    /// The same rectangle moved by `dx` and `dy`.
    pub fn offset(&self, dx: i32, dy: i32) -> ScreenRect {
        ScreenRect {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Mirror the rectangle vertically against a reference height.
    ///
    /// Converts between a bottom-left origin with y growing upward and a top-left origin
    /// with y growing downward: `y' = reference_height - (y + height)`. The conversion is
    /// its own inverse.
    pub fn flipped(&self, reference_height: i32) -> ScreenRect {
        ScreenRect {
            y: reference_height.saturating_sub(self.bottom()),
            ..*self
        }
    }
}

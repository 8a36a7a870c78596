//! Segment definitions for painted strokes.

use super::color::Color;
use crate::board::Point;
use crate::util::Rect;
use serde::{Deserialize, Serialize};

/// One straight piece of a stroke, as broadcast by the board.
///
/// A drag produces a chain of segments where each `from` equals the previous
/// segment's `to`, so a stroke renders as a continuous polyline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Previous pointer position
    pub from: Point,
    /// Current pointer position
    pub to: Point,
    /// Stroke color
    pub color: Color,
    /// Line thickness in pixels
    pub thick: f64,
}

impl Segment {
    /// Returns the axis-aligned bounding box for this segment, expanded to cover stroke width.
    ///
    /// Edges saturate at the `i32` range, so a huge width or far-off point
    /// yields a clipped box rather than overflowing.
    pub fn bounding_box(&self) -> Option<Rect> {
        let pad = (self.thick / 2.0).ceil() as i32;
        let min_x = self.from.x.min(self.to.x).saturating_sub(pad);
        let min_y = self.from.y.min(self.to.y).saturating_sub(pad);
        let max_x = self.from.x.max(self.to.x).saturating_add(pad);
        let max_y = self.from.y.max(self.to.y).saturating_add(pad);
        Rect::from_min_max(min_x, min_y, max_x, max_y)
    }
}

//! Frame container for the segments a view has painted.

use super::shape::Segment;
use crate::util::Rect;
use serde::{Deserialize, Serialize};

/// Everything one view has drawn since its last clear.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Segments in draw order (first = bottom layer, last = top layer)
    pub segments: Vec<Segment>,
}

impl Frame {
    /// Creates a new empty frame.
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Removes all segments, erasing the canvas.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Adds a segment on top of existing ones.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the area touched by all segments, if any were drawn.
    pub fn bounds(&self) -> Option<Rect> {
        self.segments
            .iter()
            .filter_map(Segment::bounding_box)
            .reduce(Rect::union)
    }
}

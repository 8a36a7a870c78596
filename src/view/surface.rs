//! Drawing surface that receives board broadcasts.

use super::clamp_stroke_thickness;
use crate::board::{Point, Renderer};
use crate::draw::{Color, Frame, Segment};
use crate::util::Rect;

/// In-memory canvas of one view.
///
/// Keeps the painted segments in a [`Frame`] and accumulates the damaged area
/// since the last [`take_damage`](Self::take_damage), so a windowing backend
/// can repaint only what changed.
#[derive(Debug)]
pub struct ViewSurface {
    width: i32,
    height: i32,
    thickness: f64,
    frame: Frame,
    damage: Option<Rect>,
    strokes_received: usize,
    clears_received: usize,
}

impl ViewSurface {
    /// Creates an empty surface. `thickness` is clamped to 1.0-20.0.
    pub fn new(width: i32, height: i32, thickness: f64) -> Self {
        Self {
            width,
            height,
            thickness: clamp_stroke_thickness(thickness),
            frame: Frame::new(),
            damage: None,
            strokes_received: 0,
            clears_received: 0,
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn strokes_received(&self) -> usize {
        self.strokes_received
    }

    pub fn clears_received(&self) -> usize {
        self.clears_received
    }

    /// Returns and resets the area that needs repainting.
    pub fn take_damage(&mut self) -> Option<Rect> {
        self.damage.take()
    }

    fn mark_damage(&mut self, rect: Option<Rect>) {
        if let Some(rect) = rect {
            self.damage = Some(match self.damage {
                Some(existing) => existing.union(rect),
                None => rect,
            });
        }
    }
}

impl Renderer for ViewSurface {
    fn on_stroke(&mut self, from: Point, to: Point, color: Color) {
        let segment = Segment {
            from,
            to,
            color,
            thick: self.thickness,
        };
        self.mark_damage(segment.bounding_box());
        self.frame.push(segment);
        self.strokes_received += 1;
    }

    fn on_clear(&mut self) {
        self.frame.clear();
        self.mark_damage(Rect::new(0, 0, self.width, self.height));
        self.clears_received += 1;
    }
}

//! The shared paint board.

use super::error::BoardError;
use super::point::Point;
use super::renderer::{RendererRef, same_renderer};
use crate::draw::Color;
use log::{debug, trace};
use std::fmt;

/// Smallest accepted board width or height.
pub const MIN_DIMENSION: i32 = 300;
/// Largest accepted board width or height.
pub const MAX_DIMENSION: i32 = 1000;

/// Pending-stroke state shared by every view of one whiteboard session.
///
/// The board holds the previous and next pointer positions of the stroke in
/// progress. Each accepted drag position is broadcast to all observers as a
/// segment and then becomes the start of the next one, so consecutive drags
/// chain into a polyline. Any position outside the board resets both points to
/// the origin.
pub struct PaintBoard {
    width: i32,
    height: i32,
    segment_start: Point,
    segment_end: Point,
    /// Notified in insertion order
    observers: Vec<RendererRef>,
}

impl PaintBoard {
    /// Creates a board of the given size with both stroke points at the origin.
    ///
    /// # Errors
    /// Returns [`BoardError::InvalidDimension`] if either side is outside
    /// [`MIN_DIMENSION`]..=[`MAX_DIMENSION`].
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        let valid = MIN_DIMENSION..=MAX_DIMENSION;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(BoardError::InvalidDimension { width, height });
        }

        Ok(Self {
            width,
            height,
            segment_start: Point::ORIGIN,
            segment_end: Point::ORIGIN,
            observers: Vec::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Previous position of the stroke in progress.
    pub fn segment_start(&self) -> Point {
        self.segment_start
    }

    /// Most recent accepted end position.
    pub fn segment_end(&self) -> Point {
        self.segment_end
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Returns true if `(x, y)` lies in `[0, width) x [0, height)`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// Records where a stroke begins. Never notifies observers.
    ///
    /// An out-of-bounds position resets both stroke points to the origin.
    pub fn begin_stroke(&mut self, x: i32, y: i32) {
        if self.contains(x, y) {
            self.segment_start = Point::new(x, y);
        } else {
            debug!(
                "Stroke start ({x}, {y}) outside {}x{} board, resetting",
                self.width, self.height
            );
            self.reset_stroke();
        }
    }

    /// Extends the stroke to `(x, y)` and broadcasts the new segment.
    ///
    /// Observers receive `(segment_start, (x, y), color)`, after which the
    /// segment start advances to `(x, y)`. An out-of-bounds position resets both
    /// stroke points to the origin and notifies no one.
    ///
    /// # Errors
    /// Returns [`BoardError::NullColor`] if no color is given; state is left untouched.
    pub fn end_stroke(
        &mut self,
        x: i32,
        y: i32,
        color: impl Into<Option<Color>>,
    ) -> Result<(), BoardError> {
        let color = color.into().ok_or(BoardError::NullColor)?;

        if !self.contains(x, y) {
            debug!(
                "Stroke end ({x}, {y}) outside {}x{} board, resetting",
                self.width, self.height
            );
            self.reset_stroke();
            return Ok(());
        }

        self.segment_end = Point::new(x, y);
        trace!(
            "Broadcasting segment {} -> {} to {} observer(s)",
            self.segment_start,
            self.segment_end,
            self.observers.len()
        );
        for observer in &self.observers {
            observer
                .borrow_mut()
                .on_stroke(self.segment_start, self.segment_end, color);
        }
        self.segment_start = self.segment_end;
        Ok(())
    }

    /// Tells every observer to erase, then resets both stroke points.
    pub fn clear(&mut self) {
        trace!("Broadcasting clear to {} observer(s)", self.observers.len());
        for observer in &self.observers {
            observer.borrow_mut().on_clear();
        }
        self.reset_stroke();
    }

    /// Registers a listener. The same handle may be registered more than once.
    ///
    /// # Errors
    /// Returns [`BoardError::NullObserver`] if no handle is given.
    pub fn add_observer(
        &mut self,
        observer: impl Into<Option<RendererRef>>,
    ) -> Result<(), BoardError> {
        let observer = observer.into().ok_or(BoardError::NullObserver)?;
        self.observers.push(observer);
        debug!("Observer registered ({} total)", self.observers.len());
        Ok(())
    }

    /// Unregisters the first registration of `observer`.
    ///
    /// Returns `Ok(true)` if the handle was registered, `Ok(false)` otherwise.
    ///
    /// # Errors
    /// Returns [`BoardError::NullObserver`] if no handle is given.
    pub fn remove_observer<'a>(
        &mut self,
        observer: impl Into<Option<&'a RendererRef>>,
    ) -> Result<bool, BoardError> {
        let observer = observer.into().ok_or(BoardError::NullObserver)?;
        let Some(index) = self
            .observers
            .iter()
            .position(|registered| same_renderer(registered, observer))
        else {
            return Ok(false);
        };

        self.observers.remove(index);
        debug!("Observer removed ({} remaining)", self.observers.len());
        Ok(true)
    }

    fn reset_stroke(&mut self) {
        self.segment_start = Point::ORIGIN;
        self.segment_end = Point::ORIGIN;
    }
}

impl fmt::Debug for PaintBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaintBoard")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("segment_start", &self.segment_start)
            .field("segment_end", &self.segment_end)
            .field("observers", &self.observers.len())
            .finish()
    }
}

//! Headless canvas views attached to a shared board.
//!
//! A [`CanvasView`] plays the part of one whiteboard window: it turns pointer
//! and palette input into board calls and owns a [`ViewSurface`] that the
//! board paints into. Every view of a session sees the same strokes because
//! the board broadcasts each segment to all surfaces, the originating one
//! included.

mod surface;

pub use surface::ViewSurface;

use crate::board::{BoardError, PaintBoard, RendererRef};
use crate::draw::{BLACK, Color, Frame, palette_color};
use crate::util::Rect;
use log::{debug, warn};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use thiserror::Error;

/// Default line width for painted segments.
pub const DEFAULT_STROKE_THICKNESS: f64 = 2.0;
/// Thinnest line a view paints with.
pub const MIN_STROKE_THICKNESS: f64 = 1.0;
/// Thickest line a view paints with.
pub const MAX_STROKE_THICKNESS: f64 = 20.0;

/// Brings a line width into the supported range, warning when it changes.
///
/// NaN falls back to [`DEFAULT_STROKE_THICKNESS`].
pub fn clamp_stroke_thickness(thickness: f64) -> f64 {
    if (MIN_STROKE_THICKNESS..=MAX_STROKE_THICKNESS).contains(&thickness) {
        return thickness;
    }
    warn!(
        "Invalid stroke thickness {thickness:.1}, clamping to \
         {MIN_STROKE_THICKNESS:.1}-{MAX_STROKE_THICKNESS:.1} range"
    );
    // clamp() keeps NaN
    if thickness.is_nan() {
        DEFAULT_STROKE_THICKNESS
    } else {
        thickness.clamp(MIN_STROKE_THICKNESS, MAX_STROKE_THICKNESS)
    }
}

/// Errors from view-level input handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("Palette has no color at index {0}")]
    UnknownPaletteIndex(usize),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Appearance settings a view starts with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewStyle {
    pub color: Color,
    pub thickness: f64,
}

impl Default for ViewStyle {
    fn default() -> Self {
        Self {
            color: BLACK,
            thickness: DEFAULT_STROKE_THICKNESS,
        }
    }
}

/// One window onto a shared [`PaintBoard`].
///
/// The pen color is per view; strokes from other views arrive in their own
/// color through the board broadcast.
pub struct CanvasView {
    board: Rc<RefCell<PaintBoard>>,
    surface: Rc<RefCell<ViewSurface>>,
    handle: RendererRef,
    current_color: Color,
}

impl CanvasView {
    /// Creates a view with the default style and registers it with `board`.
    pub fn new(board: Rc<RefCell<PaintBoard>>) -> Result<Self, ViewError> {
        Self::with_style(board, ViewStyle::default())
    }

    /// Creates a view with the given style and registers it with `board`.
    pub fn with_style(
        board: Rc<RefCell<PaintBoard>>,
        style: ViewStyle,
    ) -> Result<Self, ViewError> {
        let (width, height) = {
            let board = board.borrow();
            (board.width(), board.height())
        };
        let surface = Rc::new(RefCell::new(ViewSurface::new(
            width,
            height,
            clamp_stroke_thickness(style.thickness),
        )));
        let handle: RendererRef = surface.clone();
        board.borrow_mut().add_observer(handle.clone())?;
        debug!("View attached to {width}x{height} board");

        Ok(Self {
            board,
            surface,
            handle,
            current_color: style.color,
        })
    }

    /// Pointer pressed: the stroke starts here.
    pub fn pointer_down(&self, x: i32, y: i32) {
        self.board.borrow_mut().begin_stroke(x, y);
    }

    /// Pointer dragged: paints from the previous position to here in the pen color.
    pub fn pointer_drag(&self, x: i32, y: i32) -> Result<(), ViewError> {
        self.board
            .borrow_mut()
            .end_stroke(x, y, self.current_color)?;
        Ok(())
    }

    /// Clear button: erases every view of the board.
    pub fn clear_board(&self) {
        self.board.borrow_mut().clear();
    }

    /// Palette button: switches the pen to the palette entry at `index`.
    pub fn select_palette(&mut self, index: usize) -> Result<Color, ViewError> {
        let color = palette_color(index).ok_or(ViewError::UnknownPaletteIndex(index))?;
        self.current_color = color;
        Ok(color)
    }

    /// Switches the pen to an arbitrary color.
    pub fn select_color(&mut self, color: Color) {
        self.current_color = color;
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// What this view has drawn since the last clear.
    pub fn frame(&self) -> Ref<'_, Frame> {
        Ref::map(self.surface.borrow(), ViewSurface::frame)
    }

    /// Returns and resets the area this view must repaint.
    pub fn take_damage(&self) -> Option<Rect> {
        self.surface.borrow_mut().take_damage()
    }

    pub fn surface(&self) -> Ref<'_, ViewSurface> {
        self.surface.borrow()
    }

    pub fn board(&self) -> &Rc<RefCell<PaintBoard>> {
        &self.board
    }
}

impl Drop for CanvasView {
    fn drop(&mut self) {
        match self.board.try_borrow_mut() {
            Ok(mut board) => {
                if let Ok(false) = board.remove_observer(&self.handle) {
                    warn!("View was not registered with its board when dropped");
                }
            }
            Err(_) => warn!("Board busy while dropping view; surface stays registered"),
        }
    }
}

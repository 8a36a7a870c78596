//! Listener interface implemented by anything that reflects board state.

use super::point::Point;
use crate::draw::Color;
use std::cell::RefCell;
use std::rc::Rc;

/// Handle the board keeps for each listener.
///
/// The board only ever calls the two trait methods through it; the view that
/// created the handle decides when to register and unregister it.
pub type RendererRef = Rc<RefCell<dyn Renderer>>;

/// Receives the board's broadcasts.
///
/// Implementations must not call back into the board: the board is mutably
/// borrowed for the whole fan-out.
pub trait Renderer {
    /// Draws the segment `from -> to` in `color`.
    fn on_stroke(&mut self, from: Point, to: Point, color: Color);

    /// Erases everything drawn so far.
    fn on_clear(&mut self);
}

/// Identity comparison for handles, ignoring vtable metadata.
pub(crate) fn same_renderer(a: &RendererRef, b: &RendererRef) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

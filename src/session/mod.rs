//! Whiteboard sessions: one shared board plus the views opened on it.
//!
//! A session is what the application starts with: it builds the board from
//! the configured size, opens the requested number of views, and routes
//! scripted input to them. Frames can be exported per view afterwards.

mod export;
mod options;
mod script;

pub use export::{FrameExport, export_json, read_export};
#[cfg(feature = "png")]
pub use export::export_png;
pub use options::SessionOptions;
pub use script::{ScriptError, ScriptEvent, parse_script};

use crate::board::{BoardError, PaintBoard};
use crate::view::{CanvasView, ViewError};
use log::{debug, info};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use thiserror::Error;

/// Errors from building or driving a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error("Window {index} does not exist (session has {count})")]
    UnknownWindow { index: usize, count: usize },
}

/// A shared board and its views.
pub struct Session {
    board: Rc<RefCell<PaintBoard>>,
    views: Vec<CanvasView>,
}

impl Session {
    /// Creates the board and opens `options.windows` views on it.
    ///
    /// # Errors
    /// Fails with [`BoardError::InvalidDimension`] for an unsupported board size.
    pub fn new(options: &SessionOptions) -> Result<Self, SessionError> {
        let board = Rc::new(RefCell::new(PaintBoard::new(
            options.width,
            options.height,
        )?));

        let views = (0..options.windows)
            .map(|_| CanvasView::with_style(board.clone(), options.style))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "Opened {} view(s) on a {}x{} board",
            views.len(),
            options.width,
            options.height
        );
        Ok(Self { board, views })
    }

    pub fn board(&self) -> Ref<'_, PaintBoard> {
        self.board.borrow()
    }

    pub fn views(&self) -> &[CanvasView] {
        &self.views
    }

    pub fn view(&self, index: usize) -> Result<&CanvasView, SessionError> {
        let count = self.views.len();
        self.views
            .get(index)
            .ok_or(SessionError::UnknownWindow { index, count })
    }

    pub fn view_mut(&mut self, index: usize) -> Result<&mut CanvasView, SessionError> {
        let count = self.views.len();
        self.views
            .get_mut(index)
            .ok_or(SessionError::UnknownWindow { index, count })
    }

    /// Delivers one input event to the view it addresses.
    pub fn apply(&mut self, event: &ScriptEvent) -> Result<(), SessionError> {
        debug!("Applying {:?}", event);
        match *event {
            ScriptEvent::PointerDown { window, x, y } => self.view(window)?.pointer_down(x, y),
            ScriptEvent::PointerDrag { window, x, y } => {
                self.view(window)?.pointer_drag(x, y)?;
            }
            ScriptEvent::SelectColor { window, color } => {
                self.view_mut(window)?.select_color(color);
            }
            ScriptEvent::Clear { window } => self.view(window)?.clear_board(),
        }
        Ok(())
    }

    /// Applies events in order, stopping at the first failure.
    ///
    /// Each view's pending damage is drained once the batch has been applied.
    pub fn replay<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a ScriptEvent>,
    ) -> Result<usize, SessionError> {
        let mut applied = 0;
        for event in events {
            self.apply(event)?;
            applied += 1;
        }

        for (index, view) in self.views.iter().enumerate() {
            if let Some(area) = view.take_damage() {
                debug!(
                    "Window {index} repaints {}x{} at ({}, {})",
                    area.width, area.height, area.x, area.y
                );
            }
        }
        Ok(applied)
    }
}

use super::*;
use crate::draw::{BLUE, Color, RED};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Stroke(Point, Point, Color),
    Clear,
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl Renderer for Recorder {
    fn on_stroke(&mut self, from: Point, to: Point, color: Color) {
        self.events.push(Event::Stroke(from, to, color));
    }

    fn on_clear(&mut self) {
        self.events.push(Event::Clear);
    }
}

fn recorder() -> (Rc<RefCell<Recorder>>, RendererRef) {
    let recorder = Rc::new(RefCell::new(Recorder::default()));
    let handle: RendererRef = recorder.clone();
    (recorder, handle)
}

fn board() -> PaintBoard {
    PaintBoard::new(500, 500).unwrap()
}

fn assert_reset(board: &PaintBoard) {
    assert_eq!(board.segment_start(), Point::ORIGIN);
    assert_eq!(board.segment_end(), Point::ORIGIN);
}

#[test]
fn new_board_starts_at_origin() {
    let board = board();
    assert_eq!(board.width(), 500);
    assert_eq!(board.height(), 500);
    assert_reset(&board);
    assert_eq!(board.observer_count(), 0);
}

#[test]
fn dimensions_outside_range_are_rejected() {
    for (width, height) in [(100, 500), (5000, 500), (500, 100), (500, 5000), (299, 1001)] {
        assert_eq!(
            PaintBoard::new(width, height).unwrap_err(),
            BoardError::InvalidDimension { width, height }
        );
    }
}

#[test]
fn dimension_range_is_inclusive() {
    for (width, height) in [(300, 300), (1000, 1000), (300, 1000)] {
        let board = PaintBoard::new(width, height).unwrap();
        assert_reset(&board);
    }
}

#[test]
fn begin_stroke_sets_start_in_bounds() {
    let mut board = board();
    board.begin_stroke(20, 20);
    assert_eq!(board.segment_start(), Point::new(20, 20));
}

#[test]
fn begin_stroke_out_of_bounds_resets_instead_of_clamping() {
    let mut board = board();
    for (x, y) in [(-1, 0), (0, -1), (600, 0), (0, 600), (500, 10), (10, 500)] {
        board.begin_stroke(20, 20);
        board.begin_stroke(x, y);
        assert_reset(&board);
    }
}

#[test]
fn begin_stroke_never_notifies() {
    let mut board = board();
    let (recorder, handle) = recorder();
    board.add_observer(handle).unwrap();

    board.begin_stroke(20, 20);
    board.begin_stroke(-5, 20);
    assert!(recorder.borrow().events.is_empty());
}

#[test]
fn end_stroke_broadcasts_and_advances_start() {
    let mut board = board();
    let (recorder, handle) = recorder();
    board.add_observer(handle).unwrap();

    board.end_stroke(20, 20, BLUE).unwrap();
    assert_eq!(board.segment_start(), Point::new(20, 20));
    assert_eq!(board.segment_end(), Point::new(20, 20));
    assert_eq!(
        recorder.borrow().events,
        vec![Event::Stroke(Point::ORIGIN, Point::new(20, 20), BLUE)]
    );
}

#[test]
fn consecutive_drags_chain_into_polyline() {
    let mut board = board();
    let (recorder, handle) = recorder();
    board.add_observer(handle).unwrap();

    board.begin_stroke(10, 10);
    board.end_stroke(20, 15, RED).unwrap();
    board.end_stroke(30, 40, RED).unwrap();
    board.end_stroke(35, 45, BLUE).unwrap();

    assert_eq!(
        recorder.borrow().events,
        vec![
            Event::Stroke(Point::new(10, 10), Point::new(20, 15), RED),
            Event::Stroke(Point::new(20, 15), Point::new(30, 40), RED),
            Event::Stroke(Point::new(30, 40), Point::new(35, 45), BLUE),
        ]
    );
}

#[test]
fn end_stroke_without_color_fails_and_keeps_state() {
    let mut board = board();
    let (recorder, handle) = recorder();
    board.add_observer(handle).unwrap();
    board.begin_stroke(40, 50);
    board.end_stroke(60, 70, RED).unwrap();

    assert_eq!(board.end_stroke(20, 20, None), Err(BoardError::NullColor));
    assert_eq!(board.end_stroke(-1, -1, None), Err(BoardError::NullColor));
    assert_eq!(board.segment_start(), Point::new(60, 70));
    assert_eq!(board.segment_end(), Point::new(60, 70));
    assert_eq!(recorder.borrow().events.len(), 1);
}

#[test]
fn end_stroke_out_of_bounds_resets_silently() {
    let mut board = board();
    let (recorder, handle) = recorder();
    board.add_observer(handle).unwrap();
    board.begin_stroke(20, 20);

    board.end_stroke(-1, -1, BLUE).unwrap();
    assert_reset(&board);
    board.begin_stroke(20, 20);
    board.end_stroke(500, 499, BLUE).unwrap();
    assert_reset(&board);
    assert!(recorder.borrow().events.is_empty());
}

#[test]
fn stray_drag_restarts_from_origin() {
    let mut board = board();
    let (recorder, handle) = recorder();
    board.add_observer(handle).unwrap();

    board.begin_stroke(20, 20);
    assert_eq!(board.segment_start(), Point::new(20, 20));

    board.end_stroke(600, 0, BLUE).unwrap();
    assert!(recorder.borrow().events.is_empty());
    assert_reset(&board);

    board.end_stroke(20, 20, BLUE).unwrap();
    assert_eq!(
        recorder.borrow().events,
        vec![Event::Stroke(Point::ORIGIN, Point::new(20, 20), BLUE)]
    );
    assert_eq!(board.segment_start(), Point::new(20, 20));
}

#[test]
fn every_observer_is_notified_once_in_registration_order() {
    let order = Rc::new(RefCell::new(Vec::new()));

    struct Tagged {
        tag: usize,
        order: Rc<RefCell<Vec<usize>>>,
    }

    impl Renderer for Tagged {
        fn on_stroke(&mut self, _from: Point, _to: Point, _color: Color) {
            self.order.borrow_mut().push(self.tag);
        }

        fn on_clear(&mut self) {}
    }

    let mut board = board();
    for tag in 0..3 {
        board
            .add_observer(Rc::new(RefCell::new(Tagged {
                tag,
                order: order.clone(),
            })) as RendererRef)
            .unwrap();
    }

    board.end_stroke(1, 1, RED).unwrap();
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}

#[test]
fn clear_notifies_then_resets() {
    let mut board = board();
    let (first, first_handle) = recorder();
    let (second, second_handle) = recorder();
    board.add_observer(first_handle.clone()).unwrap();
    board.add_observer(second_handle).unwrap();

    board.begin_stroke(5, 5);
    board.end_stroke(100, 100, RED).unwrap();
    board.clear();
    assert_reset(&board);
    assert_eq!(first.borrow().events.last(), Some(&Event::Clear));
    assert_eq!(second.borrow().events.last(), Some(&Event::Clear));

    assert!(board.remove_observer(&first_handle).unwrap());
    board.clear();
    let count_clears = |events: &[Event]| events.iter().filter(|e| **e == Event::Clear).count();
    assert_eq!(count_clears(&first.borrow().events), 1);
    assert_eq!(count_clears(&second.borrow().events), 2);
}

#[test]
fn clear_on_fresh_board_still_notifies() {
    let mut board = board();
    let (recorder, handle) = recorder();
    board.add_observer(handle).unwrap();

    board.clear();
    assert_eq!(recorder.borrow().events, vec![Event::Clear]);
    assert_reset(&board);
}

#[test]
fn missing_observer_is_rejected() {
    let mut board = board();
    assert_eq!(board.add_observer(None), Err(BoardError::NullObserver));
    assert_eq!(board.remove_observer(None), Err(BoardError::NullObserver));
    assert_eq!(board.observer_count(), 0);
}

#[test]
fn remove_observer_reports_membership() {
    let mut board = board();
    let (_registered, handle) = recorder();
    let (_stranger, stranger_handle) = recorder();
    board.add_observer(handle.clone()).unwrap();

    assert!(!board.remove_observer(&stranger_handle).unwrap());
    assert!(board.remove_observer(&handle).unwrap());
    assert!(!board.remove_observer(&handle).unwrap());
    assert_eq!(board.observer_count(), 0);
}

#[test]
fn duplicate_registration_is_removed_one_at_a_time() {
    let mut board = board();
    let (recorder, handle) = recorder();
    board.add_observer(handle.clone()).unwrap();
    board.add_observer(handle.clone()).unwrap();

    board.end_stroke(3, 3, RED).unwrap();
    assert_eq!(recorder.borrow().events.len(), 2);

    assert!(board.remove_observer(&handle).unwrap());
    assert_eq!(board.observer_count(), 1);
    board.clear();
    assert_eq!(recorder.borrow().events.len(), 3);
}

// File: crates/chart-core/tests/brush.rs
// Purpose: Brush index lookup, drag state machine, clamping, leave timeout and layout.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chart_core::brush::{LabelAnchor, LEAVE_TIMEOUT};
use chart_core::geometry::Rect;
use chart_core::{
    index_for_position, Brush, BrushConfig, BrushRange, BrushState, BrushTrack, ChartError, Handle,
    PointerTarget,
};

const TRACK: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

/// Five data over a 105px brush with 5px handles: track `[0, 25, 50, 75, 100]`.
fn config() -> BrushConfig {
    BrushConfig::new(0.0, 0.0, 105.0, 40.0)
}

fn brush(config: BrushConfig) -> Brush<&'static str> {
    Brush::new(config, vec!["a", "b", "c", "d", "e"]).expect("brush")
}

fn range(start_index: usize, end_index: usize) -> BrushRange {
    BrushRange { start_index, end_index }
}

#[test]
fn index_lookup_uses_floor_semantics() {
    for (i, x) in TRACK.iter().enumerate() {
        assert_eq!(index_for_position(&TRACK, *x), i);
    }
    for i in 0..TRACK.len() - 1 {
        let between = (TRACK[i] + TRACK[i + 1]) / 2.0;
        assert_eq!(index_for_position(&TRACK, between), i);
        assert_eq!(index_for_position(&TRACK, TRACK[i + 1] - 1e-9), i);
    }
    assert_eq!(index_for_position(&TRACK, -10.0), 0);
    assert_eq!(index_for_position(&TRACK, 1e6), 4);
    assert_eq!(index_for_position(&[], 3.0), 0);
    assert_eq!(index_for_position(&[7.0], 3.0), 0);
}

#[test]
fn index_lookup_round_trips_on_uneven_tracks() {
    let track = [-3.0, 0.0, 0.5, 10.0, 11.0, 250.0, 251.5];
    for (i, x) in track.iter().enumerate() {
        assert_eq!(index_for_position(&track, *x), i);
    }
}

#[test]
fn track_layout_follows_handle_width() {
    assert_eq!(BrushTrack::new(5, 0.0, 105.0, 5.0).positions(), &TRACK);
    assert_eq!(BrushTrack::new(5, 10.0, 105.0, 5.0).positions(), &[10.0, 35.0, 60.0, 85.0, 110.0]);
    assert_eq!(BrushTrack::new(1, 0.0, 105.0, 5.0).positions(), &[50.0]);
    assert_eq!(BrushTrack::new(3, 7.0, 0.0, 5.0).positions(), &[7.0, 7.0, 7.0]);
    assert!(BrushTrack::new(0, 0.0, 100.0, 5.0).is_empty());

    let track = BrushTrack::from_positions(TRACK.to_vec());
    assert_eq!(track.position(2), Some(50.0));
    assert_eq!(track.position(5), None);
    assert_eq!(track.range_for_positions(80.0, 30.0), range(1, 3));
}

#[test]
fn new_brush_defaults_to_full_range() {
    let b = brush(config());
    assert_eq!(b.range(), range(0, 4));
    assert_eq!((b.start_x(), b.end_x()), (0.0, 100.0));
    assert_eq!(b.state(), BrushState::Idle);
    assert_eq!(b.labels(), (&"a", &"e"));
    assert!(!b.labels_visible());
}

#[test]
fn initial_indices_are_clamped_to_data() {
    let b = brush(config().with_range(7, 9));
    assert_eq!(b.range(), range(4, 4));
    assert_eq!(b.start_x(), 100.0);
}

#[test]
fn empty_data_is_rejected() {
    let err = Brush::<u32>::new(config(), Vec::new()).expect_err("empty");
    assert_eq!(err, ChartError::EmptyData);
}

#[test]
fn single_datum_and_zero_width_track() {
    let one = Brush::new(config(), vec![1]).expect("brush");
    assert_eq!(one.range(), range(0, 0));
    assert_eq!(one.start_x(), 50.0);

    let mut flat = Brush::new(BrushConfig::new(7.0, 0.0, 0.0, 40.0), vec![1, 2, 3]).expect("brush");
    assert_eq!(flat.range(), range(0, 2));
    // Once moved, every handle resolves to the last of the coincident samples.
    flat.pointer_down(PointerTarget::Slide, 0.0);
    assert_eq!(flat.pointer_move(50.0), Some(range(2, 2)));
    assert_eq!((flat.start_x(), flat.end_x()), (7.0, 7.0));
}

#[test]
fn initial_range_follows_requested_indices_on_collapsed_track() {
    let b = Brush::new(BrushConfig::new(7.0, 0.0, 0.0, 40.0).with_range(0, 2), vec![1, 2, 3]).expect("brush");
    assert_eq!(b.range(), range(0, 2));
    assert_eq!(b.labels(), (&1, &3));

    let mid = Brush::new(BrushConfig::new(7.0, 0.0, 3.0, 40.0).with_range(1, 1), vec![1, 2, 3]).expect("brush");
    assert_eq!(mid.range(), range(1, 1));

    // Reversed requests are reported in order.
    let reversed = brush(config().with_range(3, 1));
    assert_eq!(reversed.range(), range(1, 3));
    assert_eq!((reversed.start_x(), reversed.end_x()), (75.0, 25.0));
}

#[test]
fn sliding_moves_both_handles_and_clamps_at_edges() {
    let mut b = brush(config().with_range(1, 2));
    b.pointer_down(PointerTarget::Slide, 30.0);
    assert_eq!(b.state(), BrushState::DraggingSlide { last_x: 30.0 });

    assert_eq!(b.pointer_move(60.0), Some(range(2, 3)));
    assert_eq!((b.start_x(), b.end_x()), (55.0, 80.0));

    // Only 20px of the 70px delta fit before the right edge.
    assert_eq!(b.pointer_move(130.0), Some(range(3, 4)));
    assert_eq!((b.start_x(), b.end_x()), (75.0, 100.0));

    assert_eq!(b.pointer_move(-870.0), Some(range(0, 1)));
    assert_eq!((b.start_x(), b.end_x()), (0.0, 25.0));
    assert_eq!(b.selection(), &["a", "b"]);
}

#[test]
fn handles_never_leave_the_track() {
    let mut b = brush(config());
    b.pointer_down(PointerTarget::Handle(Handle::Start), 0.0);
    b.pointer_move(-50.0);
    assert_eq!(b.start_x(), b.config().track_start());
    b.pointer_up();

    b.pointer_down(PointerTarget::Handle(Handle::End), 100.0);
    b.pointer_move(500.0);
    assert_eq!(b.end_x(), b.config().track_end());
    assert_eq!(b.end_x(), 100.0);
    assert_eq!(b.range(), range(0, 4));
}

#[test]
fn sub_sample_moves_keep_the_range() {
    let mut b = brush(config());
    b.pointer_down(PointerTarget::Handle(Handle::Start), 0.0);
    assert_eq!(b.pointer_move(10.0), Some(range(0, 4)));
    assert_eq!(b.pointer_move(20.0), Some(range(0, 4)));
    assert_eq!(b.start_x(), 20.0);
    assert_eq!(b.pointer_move(25.0), Some(range(1, 4)));
    b.pointer_up();

    // Floor semantics: the end handle drops an index as soon as it leaves its sample.
    b.pointer_down(PointerTarget::Handle(Handle::End), 100.0);
    assert_eq!(b.pointer_move(99.0), Some(range(1, 3)));
}

#[test]
fn handles_may_cross_and_keep_identity() {
    let mut b = brush(config().with_range(1, 3));
    b.pointer_down(PointerTarget::Handle(Handle::Start), 25.0);
    assert_eq!(b.pointer_move(100.0), Some(range(3, 4)));
    assert_eq!(b.handle_x(Handle::Start), 100.0);
    assert_eq!(b.handle_x(Handle::End), 75.0);
    assert_eq!(b.labels(), (&"d", &"e"));

    let layout = b.layout();
    assert_eq!(layout.slide, Rect::new(75.0, 0.0, 25.0, 40.0));
    assert_eq!(layout.start_handle.rect.x, 100.0);
    assert_eq!(layout.end_handle.rect.x, 75.0);
}

#[test]
fn change_callback_fires_on_every_move() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut b = brush(config()).on_change(move |r| sink.borrow_mut().push(r));

    assert_eq!(b.pointer_move(40.0), None);
    b.pointer_down(PointerTarget::Handle(Handle::Start), 0.0);
    b.pointer_move(5.0);
    b.pointer_move(30.0);
    b.pointer_up();
    b.pointer_move(60.0);

    assert_eq!(*seen.borrow(), vec![range(0, 4), range(1, 4)]);
}

#[test]
fn leave_timeout_releases_the_drag() {
    let now = Instant::now();
    let mut b = brush(config());
    b.pointer_down(PointerTarget::Slide, 50.0);
    b.pointer_leave(now);
    assert_eq!(b.leave_deadline(), Some(now + LEAVE_TIMEOUT));

    assert!(!b.poll_timeout(now + Duration::from_millis(500)));
    assert!(b.state().is_dragging());

    assert!(b.poll_timeout(now + LEAVE_TIMEOUT));
    assert_eq!(b.state(), BrushState::Idle);
    assert_eq!(b.leave_deadline(), None);
    assert!(!b.poll_timeout(now + LEAVE_TIMEOUT * 2));
}

#[test]
fn move_cancels_pending_leave_timeout() {
    let now = Instant::now();
    let mut b = brush(config());
    b.pointer_down(PointerTarget::Slide, 50.0);
    b.pointer_leave(now);
    b.pointer_move(45.0);
    assert_eq!(b.leave_deadline(), None);
    assert!(!b.poll_timeout(now + LEAVE_TIMEOUT * 3));
    assert!(b.state().is_dragging());
}

#[test]
fn leaving_while_idle_arms_nothing() {
    let now = Instant::now();
    let mut b = brush(config());
    b.pointer_leave(now);
    assert_eq!(b.leave_deadline(), None);
    assert!(!b.poll_timeout(now + LEAVE_TIMEOUT));
}

#[test]
fn labels_show_while_hovering_or_dragging() {
    let mut b = brush(config());
    b.hover_enter();
    assert!(b.labels_visible());
    b.hover_leave();
    assert!(!b.labels_visible());
    b.pointer_down(PointerTarget::Handle(Handle::End), 100.0);
    assert!(b.labels_visible());
    b.pointer_up();
    assert!(!b.labels_visible());
}

#[test]
fn layout_places_handles_grips_and_labels() {
    let b = brush(BrushConfig::new(0.0, 10.0, 105.0, 40.0).with_range(1, 3));
    let layout = b.layout();

    assert_eq!(layout.background, Rect::new(0.0, 10.0, 105.0, 40.0));
    assert_eq!(layout.slide, Rect::new(25.0, 10.0, 50.0, 40.0));
    assert_eq!(layout.start_handle.rect, Rect::new(25.0, 10.0, 5.0, 40.0));
    assert_eq!(layout.end_handle.rect, Rect::new(75.0, 10.0, 5.0, 40.0));

    let [upper, lower] = layout.start_handle.grips;
    assert_eq!((upper.y, lower.y), (29.0, 31.0));
    assert_eq!((upper.x1, upper.x2), (26.0, 29.0));

    assert_eq!((layout.start_label.x, layout.start_label.y), (20.0, 30.0));
    assert_eq!(layout.start_label.anchor, LabelAnchor::End);
    assert_eq!((layout.end_label.x, layout.end_label.y), (85.0, 30.0));
    assert_eq!(layout.end_label.anchor, LabelAnchor::Start);
}

#[test]
fn range_and_brush_format_for_logs() {
    assert_eq!(range(1, 3).to_string(), "1..=3");
    let dbg = format!("{:?}", brush(config()));
    assert!(dbg.starts_with("Brush {"), "{dbg}");
    assert!(dbg.contains("len: 5"));
}

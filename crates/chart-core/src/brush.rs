// File: crates/chart-core/src/brush.rs
// Summary: Brush (range selector): track index lookup, drag state machine and layout.
// Notes:
// - The host translates native pointer events into `pointer_down/move/up/leave` and
//   calls `poll_timeout` from its frame or timer loop; nothing here spawns timers.
// - Handles may be dragged past each other. They keep their identity and the
//   reported range is always ordered (smaller index first).

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::error::ChartError;
use crate::geometry::{clamp, Rect};
use crate::scale::PointScale;

/// How long a drag survives the pointer leaving the brush before it is released.
pub const LEAVE_TIMEOUT: Duration = Duration::from_millis(1000);

/// Gap between a handle and its boundary label.
const LABEL_OFFSET: f64 = 5.0;

/// Index of the track sample at or below `x` (floor semantics), by binary search.
///
/// Positions left of the first sample map to 0 and positions past the last
/// sample map to the last index. `track` must be sorted ascending; an empty
/// track yields 0.
pub fn index_for_position(track: &[f64], x: f64) -> usize {
    if track.is_empty() {
        return 0;
    }
    let mut start = 0;
    let mut end = track.len() - 1;
    while end - start > 1 {
        let middle = (start + end) / 2;
        if track[middle] > x {
            end = middle;
        } else {
            start = middle;
        }
    }
    if x >= track[end] { end } else { start }
}

/// Selected data indices, `start_index <= end_index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BrushRange {
    pub start_index: usize,
    pub end_index: usize,
}

impl fmt::Display for BrushRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start_index, self.end_index)
    }
}

/// Pixel position of every data index along the brush.
#[derive(Clone, Debug, PartialEq)]
pub struct BrushTrack {
    values: Vec<f64>,
}

impl BrushTrack {
    /// Evenly spaced positions for `len` data over `[x, x + width - handle_width]`.
    /// A negative usable width collapses the track onto `x`.
    pub fn new(len: usize, x: f64, width: f64, handle_width: f64) -> Self {
        let span = (width - handle_width).max(0.0);
        Self { values: PointScale::new(len, x, x + span).values() }
    }

    /// Track from precomputed positions, which must be sorted ascending.
    pub fn from_positions(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn positions(&self) -> &[f64] { &self.values }

    /// Pixel position of `index`, if it exists.
    pub fn position(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn index_for_position(&self, x: f64) -> usize {
        index_for_position(&self.values, x)
    }

    /// Range covered by two handle positions, whichever order they are in.
    pub fn range_for_positions(&self, start_x: f64, end_x: f64) -> BrushRange {
        BrushRange {
            start_index: self.index_for_position(start_x.min(end_x)),
            end_index: self.index_for_position(start_x.max(end_x)),
        }
    }
}

/// Geometry and initial selection of a brush.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushConfig {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub handle_width: f64,
    /// Initial start index; defaults to the first datum.
    pub start: Option<usize>,
    /// Initial end index; defaults to the last datum.
    pub end: Option<usize>,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, width: 0.0, height: 40.0, handle_width: 5.0, start: None, end: None }
    }
}

impl BrushConfig {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height, ..Self::default() }
    }

    pub fn with_handle_width(mut self, handle_width: f64) -> Self {
        self.handle_width = handle_width;
        self
    }

    pub fn with_range(mut self, start: usize, end: usize) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Leftmost handle position.
    pub fn track_start(&self) -> f64 { self.x }

    /// Rightmost handle position (a handle's left edge).
    pub fn track_end(&self) -> f64 { self.x + (self.width - self.handle_width).max(0.0) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    Start,
    End,
}

/// What the pointer went down on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    Handle(Handle),
    /// The selected band between the handles.
    Slide,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BrushState {
    Idle,
    /// `last_x` is the pointer position the next delta is measured from.
    DraggingHandle { handle: Handle, last_x: f64 },
    DraggingSlide { last_x: f64 },
}

impl BrushState {
    pub fn is_dragging(&self) -> bool {
        !matches!(self, BrushState::Idle)
    }
}

/// Grip marks drawn across a handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GripLine {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

/// Text anchor side for boundary labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelAnchor {
    /// Text ends at the anchor point (label sits left of it).
    End,
    /// Text starts at the anchor point.
    Start,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelLayout {
    pub x: f64,
    pub y: f64,
    pub anchor: LabelAnchor,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleLayout {
    pub rect: Rect,
    pub grips: [GripLine; 2],
}

/// Everything a host needs to draw the brush in its current state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushLayout {
    pub background: Rect,
    /// Band between the handles.
    pub slide: Rect,
    pub start_handle: HandleLayout,
    pub end_handle: HandleLayout,
    pub start_label: LabelLayout,
    pub end_label: LabelLayout,
}

type RangeCallback = Box<dyn FnMut(BrushRange)>;

/// Range selector over `data`, driven by discrete pointer events.
pub struct Brush<T> {
    config: BrushConfig,
    data: Vec<T>,
    track: BrushTrack,
    start_x: f64,
    end_x: f64,
    range: BrushRange,
    state: BrushState,
    hovered: bool,
    leave_deadline: Option<Instant>,
    on_change: Option<RangeCallback>,
}

impl<T> Brush<T> {
    /// Build a brush over `data`. Out-of-range initial indices are clamped to the data.
    pub fn new(config: BrushConfig, data: Vec<T>) -> Result<Self, ChartError> {
        if data.is_empty() {
            return Err(ChartError::EmptyData);
        }
        let last = data.len() - 1;
        let start_index = config.start.unwrap_or(0).min(last);
        let end_index = config.end.unwrap_or(last).min(last);

        let track = BrushTrack::new(data.len(), config.x, config.width, config.handle_width);
        let start_x = track.position(start_index).unwrap_or(config.x);
        let end_x = track.position(end_index).unwrap_or(config.x);
        // From the indices, not the positions: those coincide on a collapsed track.
        let range = BrushRange { start_index: start_index.min(end_index), end_index: start_index.max(end_index) };
        debug!(len = data.len(), %range, "brush created");

        Ok(Self {
            config,
            data,
            track,
            start_x,
            end_x,
            range,
            state: BrushState::Idle,
            hovered: false,
            leave_deadline: None,
            on_change: None,
        })
    }

    /// Register the range-change notification, called after every processed move.
    pub fn on_change(mut self, f: impl FnMut(BrushRange) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn config(&self) -> &BrushConfig { &self.config }
    pub fn data(&self) -> &[T] { &self.data }
    pub fn track(&self) -> &BrushTrack { &self.track }
    pub fn state(&self) -> BrushState { self.state }
    pub fn range(&self) -> BrushRange { self.range }
    pub fn start_x(&self) -> f64 { self.start_x }
    pub fn end_x(&self) -> f64 { self.end_x }
    pub fn leave_deadline(&self) -> Option<Instant> { self.leave_deadline }

    pub fn handle_x(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Start => self.start_x,
            Handle::End => self.end_x,
        }
    }

    pub fn pointer_down(&mut self, target: PointerTarget, x: f64) {
        self.leave_deadline = None;
        self.state = match target {
            PointerTarget::Handle(handle) => BrushState::DraggingHandle { handle, last_x: x },
            PointerTarget::Slide => BrushState::DraggingSlide { last_x: x },
        };
        debug!(?target, x, "brush drag started");
    }

    /// Apply a pointer move. Returns the recomputed range when a drag is in
    /// progress, `None` while idle.
    pub fn pointer_move(&mut self, x: f64) -> Option<BrushRange> {
        self.leave_deadline = None;
        let lo = self.config.track_start();
        let hi = self.config.track_end();

        match self.state {
            BrushState::Idle => return None,
            BrushState::DraggingHandle { handle, last_x } => {
                let prev = self.handle_x(handle);
                let next = prev + clamp_delta(x - last_x, &[prev], lo, hi);
                match handle {
                    Handle::Start => self.start_x = next,
                    Handle::End => self.end_x = next,
                }
                self.state = BrushState::DraggingHandle { handle, last_x: x };
            }
            BrushState::DraggingSlide { last_x } => {
                let delta = clamp_delta(x - last_x, &[self.start_x, self.end_x], lo, hi);
                self.start_x += delta;
                self.end_x += delta;
                self.state = BrushState::DraggingSlide { last_x: x };
            }
        }

        self.range = self.track.range_for_positions(self.start_x, self.end_x);
        trace!(x, start_x = self.start_x, end_x = self.end_x, range = %self.range, "brush moved");
        if let Some(cb) = self.on_change.as_mut() {
            cb(self.range);
        }
        Some(self.range)
    }

    pub fn pointer_up(&mut self) {
        self.leave_deadline = None;
        if self.state.is_dragging() {
            debug!(range = %self.range, "brush drag finished");
        }
        self.state = BrushState::Idle;
    }

    /// The pointer left the brush area. A drag in progress is kept alive for
    /// [`LEAVE_TIMEOUT`] so a brief excursion does not drop it.
    pub fn pointer_leave(&mut self, now: Instant) {
        if self.state.is_dragging() {
            self.leave_deadline = Some(now + LEAVE_TIMEOUT);
        }
    }

    /// Release the drag if the leave timeout has expired. Returns `true` when it fired.
    pub fn poll_timeout(&mut self, now: Instant) -> bool {
        match self.leave_deadline {
            Some(deadline) if now >= deadline => {
                debug!("brush leave timeout expired");
                self.pointer_up();
                true
            }
            _ => false,
        }
    }

    /// Pointer entered a handle or the selected band.
    pub fn hover_enter(&mut self) { self.hovered = true; }

    pub fn hover_leave(&mut self) { self.hovered = false; }

    /// Boundary labels are shown while hovering or dragging.
    pub fn labels_visible(&self) -> bool {
        self.hovered || self.state.is_dragging()
    }

    /// Data at the start and end of the selection.
    pub fn labels(&self) -> (&T, &T) {
        (&self.data[self.range.start_index], &self.data[self.range.end_index])
    }

    /// Selected slice of the data.
    pub fn selection(&self) -> &[T] {
        &self.data[self.range.start_index..=self.range.end_index]
    }

    pub fn layout(&self) -> BrushLayout {
        let c = &self.config;
        let left = self.start_x.min(self.end_x);
        let right = self.start_x.max(self.end_x);
        let label_y = c.y + c.height / 2.0;
        BrushLayout {
            background: Rect::new(c.x, c.y, c.width, c.height),
            slide: Rect::new(left, c.y, right - left, c.height),
            start_handle: self.handle_layout(self.start_x),
            end_handle: self.handle_layout(self.end_x),
            start_label: LabelLayout { x: left - LABEL_OFFSET, y: label_y, anchor: LabelAnchor::End },
            end_label: LabelLayout { x: right + c.handle_width + LABEL_OFFSET, y: label_y, anchor: LabelAnchor::Start },
        }
    }

    fn handle_layout(&self, pos: f64) -> HandleLayout {
        let c = &self.config;
        let x = pos.max(c.x);
        let line_y = (c.y + c.height / 2.0).floor() - 1.0;
        let grip = |y| GripLine { x1: x + 1.0, x2: x + c.handle_width - 1.0, y };
        HandleLayout {
            rect: Rect::new(x, c.y, c.handle_width, c.height),
            grips: [grip(line_y), grip(line_y + 2.0)],
        }
    }
}

impl<T> fmt::Debug for Brush<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Brush")
            .field("config", &self.config)
            .field("len", &self.data.len())
            .field("start_x", &self.start_x)
            .field("end_x", &self.end_x)
            .field("range", &self.range)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Largest part of `delta` that keeps every position inside `[lo, hi]`.
fn clamp_delta(delta: f64, positions: &[f64], lo: f64, hi: f64) -> f64 {
    let min_p = positions.iter().copied().fold(f64::INFINITY, f64::min);
    let max_p = positions.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if delta > 0.0 {
        clamp(delta, 0.0, hi - max_p)
    } else if delta < 0.0 {
        clamp(delta, lo - min_p, 0.0)
    } else {
        0.0
    }
}

//! Drag-session state and the cell-to-day snapping math.
//!
//! A drag session is modal: exactly one may be live, it is created on a
//! left-button press over a bar and destroyed on release, and while it lives
//! every drag event is translated into a clamped model update. The math is
//! kept pure here so it can be tested without a terminal.

use crate::model::task::DAYS_TOTAL;

/// What the pointer grabbed when the session started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// Bar body: horizontal moves change `start`.
    Move,
    /// Trailing handle cell: horizontal moves change `duration`.
    Resize,
}

/// The one live pointer drag. Holds the grabbed task's index and its
/// pre-drag geometry; the index is only valid while the session lives (no
/// mutation that shifts indices can happen mid-drag).
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    pub kind: DragKind,
    pub index: usize,
    /// Chart-content column where the button went down.
    pub origin_col: i64,
    pub pre_start: u32,
    pub pre_duration: u32,
}

impl DragSession {
    /// Pointer delta in cells relative to the press origin.
    pub fn delta(&self, current_col: i64) -> i64 {
        current_col - self.origin_col
    }
}

/// Round half-cells toward positive infinity, the snap direction the bar
/// visually moves in.
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// New start day for a move drag: shift the pre-drag cell-left by the
/// pointer delta, clamp to the chart, snap to the nearest day.
pub fn moved_start(pre_start: u32, duration: u32, delta_cells: i64, day_width: u16) -> u32 {
    let day_width = i64::from(day_width.max(1));
    let pre_left = i64::from(pre_start) * day_width;
    let max_left = i64::from(DAYS_TOTAL - duration.min(DAYS_TOTAL)) * day_width;
    let left = (pre_left + delta_cells).clamp(0, max_left);
    round_half_up(left as f64 / day_width as f64) as u32
}

/// New duration for a resize drag: snap the pointer delta to whole days,
/// keep at least one day, never grow past the horizon.
pub fn resized_duration(pre_duration: u32, start: u32, delta_cells: i64, day_width: u16) -> u32 {
    let day_width = f64::from(day_width.max(1));
    let delta_days = round_half_up(delta_cells as f64 / day_width);
    let candidate = (i64::from(pre_duration) + delta_days).max(1);
    candidate.min(i64::from(DAYS_TOTAL - start.min(DAYS_TOTAL))) as u32
}

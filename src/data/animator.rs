//! Step-wise animation of a sampled curve.
//!
//! The animator never schedules itself. The host calls [`StrokeAnimator::step`]
//! once per timer tick; each call does one unit of work (one segment) and
//! returns, which keeps the UI event loop responsive.

use super::curve::{SampledPoint, Segment};
use super::scaler::ScaleTransform;
use crate::error::AnimatorError;

#[cfg(feature = "animator_debug")]
macro_rules! animator_debug { ($($arg:tt)*) => { tracing::trace!($($arg)*); } }
#[cfg(not(feature = "animator_debug"))]
macro_rules! animator_debug { ($($arg:tt)*) => {}; }

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnimatorState {
    Idle,
    Running,
    Completed,
    Cancelled,
}

/// Mutable state of a single auto-draw run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawRunState {
    pub current_x: f64,
    pub is_active: bool,
    /// Sum of emitted segment lengths; never decreases during a run.
    pub accumulated_distance: f64,
}

/// Output of the animator, in emission order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StrokeEvent {
    /// Start point of the curve, emitted by [`StrokeAnimator::start`].
    Marker { x: f64, y: f64 },
    Segment(Segment),
    Completed { distance: f64 },
}

#[derive(Debug)]
pub struct StrokeAnimator {
    state: AnimatorState,
    points: Vec<SampledPoint>,
    transform: ScaleTransform,
    /// Index of the sample the next segment starts from.
    cursor: usize,
    run: Option<DrawRunState>,
}

impl Default for StrokeAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeAnimator {
    pub fn new() -> Self {
        Self {
            state: AnimatorState::Idle,
            points: Vec::new(),
            transform: ScaleTransform::IDENTITY,
            cursor: 0,
            run: None,
        }
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    /// State of the current (or last) run, if any.
    pub fn run_state(&self) -> Option<&DrawRunState> {
        self.run.as_ref()
    }

    pub fn accumulated_distance(&self) -> f64 {
        self.run.map_or(0.0, |r| r.accumulated_distance)
    }

    /// Begin a new run over `points` and return the start marker.
    ///
    /// Fails while another run is still running; cancel it first.
    pub fn start(
        &mut self,
        points: Vec<SampledPoint>,
        transform: ScaleTransform,
    ) -> Result<StrokeEvent, AnimatorError> {
        if self.is_running() {
            return Err(AnimatorError::AlreadyRunning);
        }
        let first = *points.first().ok_or(AnimatorError::NoSamples)?;
        self.points = points;
        self.transform = transform;
        self.cursor = 0;
        self.run = Some(DrawRunState {
            current_x: first.x,
            is_active: true,
            accumulated_distance: 0.0,
        });
        self.state = AnimatorState::Running;
        animator_debug!(samples = self.points.len(), "animator started");
        Ok(StrokeEvent::Marker {
            x: first.x,
            y: transform.apply(first.y_raw),
        })
    }

    /// Advance by one segment.
    ///
    /// Returns `None` unless running. After the last segment, the next call
    /// completes the run and reports the final distance.
    pub fn step(&mut self) -> Option<StrokeEvent> {
        if self.state != AnimatorState::Running {
            return None;
        }
        let run = self.run.as_mut()?;
        let (Some(a), Some(b)) = (self.points.get(self.cursor), self.points.get(self.cursor + 1))
        else {
            run.is_active = false;
            self.state = AnimatorState::Completed;
            return Some(StrokeEvent::Completed {
                distance: run.accumulated_distance,
            });
        };

        let segment = Segment::new(
            [a.x, self.transform.apply(a.y_raw)],
            [b.x, self.transform.apply(b.y_raw)],
        );
        run.accumulated_distance += segment.length;
        run.current_x = b.x;
        self.cursor += 1;
        animator_debug!(x = b.x, distance = run.accumulated_distance, "animator step");
        Some(StrokeEvent::Segment(segment))
    }

    /// Stop a running animation. Idempotent; returns whether it was running.
    pub fn cancel(&mut self) -> bool {
        if self.state != AnimatorState::Running {
            return false;
        }
        self.state = AnimatorState::Cancelled;
        if let Some(run) = self.run.as_mut() {
            run.is_active = false;
        }
        true
    }

    /// Drop any run and return to [`AnimatorState::Idle`].
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Number of segments a full run over the current points emits.
    pub fn total_segments(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

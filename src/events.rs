//! Canvas event hub.
//!
//! The session reports what happens on the canvas (segments drawn, status
//! changes, distance updates, run completion) as [`CanvasEvent`]s. Callers
//! subscribe through [`EventController`] with an [`EventKind`] mask and receive
//! matching events over a `std::sync::mpsc` channel.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use crate::data::curve::{Segment, StrokeSource};

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the categories an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u32);

impl EventKind {
    /// A line segment was added to the canvas (manual or auto).
    pub const SEGMENT: Self = Self(1 << 0);
    /// The start marker of an auto-draw curve was placed.
    pub const MARKER: Self = Self(1 << 1);
    /// The status line changed.
    pub const STATUS: Self = Self(1 << 2);
    /// The slide distance changed (including resets).
    pub const DISTANCE: Self = Self(1 << 3);
    /// All strokes were removed.
    pub const CLEARED: Self = Self(1 << 4);
    /// An auto-draw run started animating.
    pub const RUN_STARTED: Self = Self(1 << 5);
    /// An auto-draw run reached the end of its curve.
    pub const RUN_COMPLETED: Self = Self(1 << 6);
    /// An auto-draw run was stopped early.
    pub const RUN_CANCELLED: Self = Self(1 << 7);
    /// Something went wrong (load failure, evaluation fault, save failure).
    pub const ERROR: Self = Self(1 << 8);

    /// Wildcard: matches every event kind.
    pub const ALL: Self = Self(u32::MAX);

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CanvasEvent
// ─────────────────────────────────────────────────────────────────────────────

/// Payload of a single emitted event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    Segment {
        segment: Segment,
        source: StrokeSource,
    },
    Marker {
        x: f64,
        y: f64,
    },
    Status(String),
    Distance(f64),
    Cleared,
    RunStarted {
        function: String,
        samples: usize,
    },
    RunFinished {
        distance: f64,
    },
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasEvent {
    pub kinds: EventKind,
    pub payload: EventPayload,
    /// Seconds since the controller was created.
    pub timestamp: f64,
}

impl CanvasEvent {
    pub fn new(kinds: EventKind, payload: EventPayload) -> Self {
        Self {
            kinds,
            payload,
            timestamp: 0.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: EventKind,
    sender: Sender<CanvasEvent>,
}

struct EventCtrlInner {
    subscribers: Vec<Subscriber>,
    start_instant: Instant,
}

/// Subscription hub; cheap to clone, all clones share subscribers.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<EventCtrlInner>>,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: Instant::now(),
            })),
        }
    }

    /// Receive every future event whose kinds intersect `filter`.
    pub fn subscribe(&self, filter: EventKind) -> Receiver<CanvasEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.lock().subscribers.push(Subscriber { filter, sender: tx });
        rx
    }

    pub fn subscribe_all(&self) -> Receiver<CanvasEvent> {
        self.subscribe(EventKind::ALL)
    }

    /// Deliver `event` to matching subscribers; drops subscribers whose receiver is gone.
    pub fn emit(&self, mut event: CanvasEvent) {
        let mut inner = self.lock();
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        inner.subscribers.retain(|sub| {
            if sub.filter.intersects(event.kinds) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    fn lock(&self) -> MutexGuard<'_, EventCtrlInner> {
        // Subscribers are plain senders, so a poisoned lock holds no broken state.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

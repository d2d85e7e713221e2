//! Manual (pointer-driven) strokes.

use super::curve::Segment;

/// An in-progress freehand stroke: remembers the last pointer position.
#[derive(Clone, Debug, Default)]
pub struct FreehandStroke {
    last: Option<[f64; 2]>,
}

impl FreehandStroke {
    pub fn begin(pos: [f64; 2]) -> Self {
        Self { last: Some(pos) }
    }

    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }

    /// Move the pointer to `pos`; returns the segment from the previous position.
    ///
    /// An ended stroke stays ended and yields nothing.
    pub fn extend(&mut self, pos: [f64; 2]) -> Option<Segment> {
        let prev = self.last?;
        self.last = Some(pos);
        Some(Segment::new(prev, pos))
    }

    pub fn end(&mut self) {
        self.last = None;
    }
}

use crate::math::{IntersectParams, Segment};
use log::debug;
use serde::{Deserialize, Serialize};

/// The order in which the checkpoints of a track are visited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    /// Ascending indices, starting at the first checkpoint.
    Forward,
    /// Descending indices, starting at the last checkpoint.
    #[default]
    Reversed,
}

/// An ordered, cyclic sequence of gates the car must cross.
#[derive(Clone, Debug)]
pub struct CheckpointSequence {
    /// The gates; never empty.
    segments: Vec<Segment>,
    /// The index of the gate the car must cross next.
    current: usize,
    /// The direction of travel through `segments`.
    traversal: Traversal,
}

impl Traversal {
    /// The index a sequence of `len` checkpoints starts at; `len` must not be zero.
    pub(crate) fn initial_index(&self, len: usize) -> usize {
        match self {
            Traversal::Forward => 0,
            Traversal::Reversed => len - 1,
        }
    }

    /// The index following `idx` in a sequence of `len` checkpoints; `len` must not be zero.
    pub(crate) fn next_index(&self, idx: usize, len: usize) -> usize {
        match self {
            Traversal::Forward => (idx + 1) % len,
            Traversal::Reversed => (idx + len - 1) % len,
        }
    }
}

impl CheckpointSequence {
    /// Creates a checkpoint sequence, or `None` if there are no checkpoints.
    pub fn new(segments: Vec<Segment>, traversal: Traversal) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            current: traversal.initial_index(segments.len()),
            segments,
            traversal,
        })
    }

    /// The gates in their stored order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The number of gates.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a sequence has at least one gate.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The direction of travel.
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// The index of the gate the car must cross next.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The gate the car must cross next.
    pub fn current(&self) -> &Segment {
        &self.segments[self.current]
    }

    /// Moves on to the next gate.
    pub fn advance(&mut self) {
        self.current = self.traversal.next_index(self.current, self.segments.len());
        debug!("Next checkpoint is {}", self.current);
    }

    /// Returns to the first gate.
    pub fn reset(&mut self) {
        self.current = self.traversal.initial_index(self.segments.len());
        debug!("Checkpoints reset to {}", self.current);
    }

    /// Whether any of the edges crosses the current gate.
    pub fn is_crossed_by(&self, edges: &[Segment], params: &IntersectParams) -> bool {
        let gate = self.current();
        edges
            .iter()
            .any(|edge| params.intersect(edge, gate).is_some())
    }

    /// Advances past the current gate if any of the edges crosses it.
    /// At most one advance happens per call. Returns `true` iff it advanced.
    pub fn update(&mut self, edges: &[Segment], params: &IntersectParams) -> bool {
        let crossed = self.is_crossed_by(edges, params);
        if crossed {
            self.advance();
        }
        crossed
    }
}

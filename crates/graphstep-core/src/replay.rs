//! Step-by-step playback over a recorded snapshot sequence
//!
//! A `Replay` is a cursor only; pacing belongs to the caller.

use crate::graph::Algorithm;
use crate::snapshot::{Snapshot, SnapshotSequence};

#[derive(Debug, Clone)]
pub struct Replay {
    algorithm: Algorithm,
    snapshots: SnapshotSequence,
    position: usize,
}

impl Replay {
    pub fn new(algorithm: Algorithm, snapshots: SnapshotSequence) -> Self {
        Replay {
            algorithm,
            snapshots,
            position: 0,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn snapshots(&self) -> &SnapshotSequence {
        &self.snapshots
    }

    /// The snapshot under the cursor, `None` for an empty run
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Move one step forward; stays on the final snapshot and returns false
    /// once there is nothing left to show
    pub fn advance(&mut self) -> bool {
        if self.position + 1 < self.snapshots.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// True when the cursor rests on the terminal state
    pub fn is_finished(&self) -> bool {
        self.position + 1 >= self.snapshots.len()
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }
}

//! Bounded undo history of full-raster snapshots.
//!
//! Snapshots are owned pixel buffer copies captured eagerly at commit time,
//! never lazily loaded handles. The stack keeps insertion order, oldest
//! first, and evicts from the front once the capacity is reached.

use image::RgbaImage;
use std::collections::VecDeque;

/// Maximum number of snapshots the stack retains.
pub const HISTORY_CAPACITY: usize = 20;

/// Immutable full copy of the raster at a point in time.
#[derive(Clone)]
pub struct Snapshot {
    image: RgbaImage,
}

impl Snapshot {
    /// Copies the given pixel buffer into a new snapshot.
    pub(crate) fn capture(image: &RgbaImage) -> Self {
        Self {
            image: image.clone(),
        }
    }

    /// The captured pixel data.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Ordered stack of snapshots with FIFO eviction at capacity.
///
/// The stack itself is a plain container; the engine seeds it with a blank
/// baseline at startup and decides the undo policy (the baseline entry is
/// never popped, so the length stays in `1..=HISTORY_CAPACITY` once seeded).
#[derive(Default)]
pub struct HistoryStack {
    snapshots: VecDeque<Snapshot>,
}

impl HistoryStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot, evicting the oldest entry when the stack is full.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push_back(snapshot);
        if self.snapshots.len() > HISTORY_CAPACITY {
            self.snapshots.pop_front();
            log::trace!("History at capacity ({HISTORY_CAPACITY}); evicted oldest snapshot");
        }
    }

    /// The most recent committed snapshot, if any.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.back()
    }

    /// The oldest surviving snapshot, if any.
    pub fn oldest(&self) -> Option<&Snapshot> {
        self.snapshots.front()
    }

    /// Removes and returns the newest snapshot.
    pub fn pop_newest(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    /// Discards every snapshot.
    pub fn reset(&mut self) {
        self.snapshots.clear();
    }

    /// Number of retained snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True when no snapshot is retained.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

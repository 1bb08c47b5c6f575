//! Single-producer/single-consumer "new work available" signaling.
//!
//! The typical surrounding application recomputes a spectrum from a polling
//! loop whenever a callback (a transport handler, a DMA-complete interrupt
//! shim) delivers fresh parameters. That handoff needs a real
//! acquire/release edge, not a plain shared variable: everything the
//! producer wrote before [`WorkSignal::raise`] must be visible to the
//! consumer once [`WorkSignal::take`] observes the flag.

use std::sync::atomic::{AtomicBool, Ordering};

/// A one-slot recompute signal between one producer and one consumer.
#[derive(Debug, Default)]
pub struct WorkSignal {
    pending: AtomicBool,
}

impl WorkSignal {
    /// Creates a signal with no work pending.
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Marks new work available. Raising an already-raised signal coalesces
    /// into a single pending unit of work.
    pub fn raise(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Claims pending work, clearing the flag. Returns `true` exactly once
    /// per raise-to-take cycle.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::Acquire)
    }

    /// Checks for pending work without consuming it.
    pub fn is_raised(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

// In-process rank group: each rank is driven by its own thread.

use parking_lot::Mutex;
use std::sync::{Arc, Barrier};

use super::{Comm, ReduceOp};

struct Shared {
    size: usize,
    barrier: Barrier,
    slots: Mutex<Vec<f64>>,
}

/// One rank of a group of `size` ranks sharing reduction slots.
///
/// Every rank of the group must take part in each collective call
/// ([`Comm::barrier`], [`Comm::all_reduce`]), otherwise the group deadlocks,
/// exactly as with MPI.
pub struct ThreadComm {
    rank: usize,
    shared: Arc<Shared>,
}

impl ThreadComm {
    /// Create the `size` ranks of a new group, ordered by rank.
    pub fn group(size: usize) -> Vec<ThreadComm> {
        assert!(size > 0, "a communicator needs at least one rank");
        let shared = Arc::new(Shared {
            size,
            barrier: Barrier::new(size),
            slots: Mutex::new(vec![0.0; size]),
        });
        (0..size)
            .map(|rank| ThreadComm { rank, shared: Arc::clone(&shared) })
            .collect()
    }
}

impl Comm for ThreadComm {
    fn rank(&self) -> usize { self.rank }
    fn size(&self) -> usize { self.shared.size }
    fn barrier(&self) { self.shared.barrier.wait(); }

    fn all_reduce(&self, x: f64, op: ReduceOp) -> f64 {
        self.shared.slots.lock()[self.rank] = x;
        self.shared.barrier.wait();
        let result = {
            let slots = self.shared.slots.lock();
            slots[1..].iter().fold(slots[0], |acc, &v| op.apply(acc, v))
        };
        // slots must not be overwritten until every rank has read them
        self.shared.barrier.wait();
        result
    }
}

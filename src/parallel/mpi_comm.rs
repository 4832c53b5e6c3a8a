//! MPI-based communicator for distributed vectors.
//!
//! Wraps the MPI world communicator so that [`HostVector`](crate::backend::HostVector)
//! instances on different processes can combine their partial reductions.
//! Only available when the `mpi` feature is enabled.
//!
//! # Example
//! ```no_run
//! # #[cfg(feature = "mpi")] {
//! use std::sync::Arc;
//! use distvec::parallel::{Comm, MpiComm, UniverseComm};
//! let comm = Arc::new(UniverseComm::Mpi(MpiComm::new()));
//! println!("Rank: {} / {}", comm.rank(), comm.size());
//! # }
//! ```

#[cfg(feature = "mpi")]
use mpi::traits::*;
#[cfg(feature = "mpi")]
use mpi::topology::SimpleCommunicator;

use super::ReduceOp;

/// MPI communicator wrapper for distributed parallelism.
///
/// Holds the MPI universe (finalized on drop), the world communicator, the rank of
/// the current process, and the total number of processes.
#[cfg(feature = "mpi")]
pub struct MpiComm {
    _universe: mpi::environment::Universe,
    /// The MPI world communicator (all processes in the job).
    pub world: SimpleCommunicator,
    /// The rank (ID) of this process within the communicator.
    pub rank: usize,
    /// The total number of processes in the communicator.
    pub size: usize,
}

#[cfg(feature = "mpi")]
impl MpiComm {
    /// Initializes MPI and constructs a new `MpiComm` instance.
    ///
    /// # Panics
    /// Panics if MPI was already initialized.
    pub fn new() -> Self {
        let universe = mpi::initialize().expect("MPI is already initialized");
        let world = universe.world();
        let rank = world.rank() as usize;
        let size = world.size() as usize;
        MpiComm { _universe: universe, world, rank, size }
    }
}

#[cfg(feature = "mpi")]
impl super::Comm for MpiComm {
    fn rank(&self) -> usize { self.rank }
    fn size(&self) -> usize { self.size }
    fn barrier(&self) { self.world.barrier(); }

    /// Performs an all-reduce across all processes.
    fn all_reduce(&self, x: f64, op: ReduceOp) -> f64 {
        use mpi::collective::SystemOperation;
        let mut y = x;
        match op {
            ReduceOp::Sum => self.world.all_reduce_into(&x, &mut y, &SystemOperation::sum()),
            ReduceOp::Max => self.world.all_reduce_into(&x, &mut y, &SystemOperation::max()),
            ReduceOp::Min => self.world.all_reduce_into(&x, &mut y, &SystemOperation::min()),
        }
        y
    }
}

//! Communicators used by distributed vectors for collective reductions.
//!
//! A [`Comm`] knows its rank, the number of ranks in the group and how to combine
//! one scalar per rank. [`UniverseComm`] dispatches over the available backends:
//! a single-rank serial communicator, an in-process [`ThreadComm`] group where each
//! rank runs on its own thread, and (with the `mpi` feature) [`MpiComm`].

/// Reduction applied by [`Comm::all_reduce`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReduceOp {
    Sum,
    Max,
    Min,
}

impl ReduceOp {
    /// Combine two partial results.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            ReduceOp::Sum => a + b,
            ReduceOp::Max => a.max(b),
            ReduceOp::Min => a.min(b),
        }
    }
}

pub trait Comm {
    fn rank(&self) -> usize;
    fn size(&self) -> usize;
    fn barrier(&self);
    /// Combine `x` from every rank with `op`; every rank receives the result.
    fn all_reduce(&self, x: f64, op: ReduceOp) -> f64;
}

#[cfg(feature = "mpi")]
pub mod mpi_comm;
#[cfg(feature = "mpi")]
pub use mpi_comm::MpiComm;

pub mod thread_comm;
pub use thread_comm::ThreadComm;

pub enum UniverseComm {
    #[cfg(feature = "mpi")]
    Mpi(MpiComm),
    Threads(ThreadComm),
    Serial,
}

impl Comm for UniverseComm {
    fn rank(&self) -> usize {
        match self {
            #[cfg(feature = "mpi")]
            UniverseComm::Mpi(comm) => comm.rank(),
            UniverseComm::Threads(comm) => comm.rank(),
            UniverseComm::Serial => 0,
        }
    }
    fn size(&self) -> usize {
        match self {
            #[cfg(feature = "mpi")]
            UniverseComm::Mpi(comm) => comm.size(),
            UniverseComm::Threads(comm) => comm.size(),
            UniverseComm::Serial => 1,
        }
    }
    fn barrier(&self) {
        match self {
            #[cfg(feature = "mpi")]
            UniverseComm::Mpi(comm) => comm.barrier(),
            UniverseComm::Threads(comm) => comm.barrier(),
            UniverseComm::Serial => {}
        }
    }
    fn all_reduce(&self, x: f64, op: ReduceOp) -> f64 {
        match self {
            #[cfg(feature = "mpi")]
            UniverseComm::Mpi(comm) => comm.all_reduce(x, op),
            UniverseComm::Threads(comm) => comm.all_reduce(x, op),
            UniverseComm::Serial => x,
        }
    }
}

impl std::fmt::Debug for UniverseComm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "mpi")]
            UniverseComm::Mpi(comm) => write!(f, "Mpi({}/{})", comm.rank(), comm.size()),
            UniverseComm::Threads(comm) => write!(f, "Threads({}/{})", comm.rank(), comm.size()),
            UniverseComm::Serial => write!(f, "Serial"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_comm_is_identity() {
        let comm = UniverseComm::Serial;
        assert_eq!(comm.rank(), 0);
        assert_eq!(comm.size(), 1);
        comm.barrier();
        assert_eq!(comm.all_reduce(2.5, ReduceOp::Sum), 2.5);
        assert_eq!(comm.all_reduce(-1.0, ReduceOp::Max), -1.0);
    }

    #[test]
    fn reduce_ops_combine() {
        assert_eq!(ReduceOp::Sum.apply(1.0, 2.0), 3.0);
        assert_eq!(ReduceOp::Max.apply(1.0, 2.0), 2.0);
        assert_eq!(ReduceOp::Min.apply(1.0, 2.0), 1.0);
    }
}

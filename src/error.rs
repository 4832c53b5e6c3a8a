use std::fmt;
use thiserror::Error;

use crate::core::LastAction;

/// Status code reported by a vector backend call.
///
/// Zero is success and never appears inside an `ErrorCode`. The named constants
/// follow PETSc's numbering for the same conditions, except [`ErrorCode::LOCKED`],
/// which PETSc has no code for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ErrorCode(pub i32);

impl ErrorCode {
    /// Allocation failed.
    pub const MEM: ErrorCode = ErrorCode(55);
    /// Nonconforming sizes of the objects passed to a call.
    pub const SIZ: ErrorCode = ErrorCode(60);
    /// Argument outside the admissible range.
    pub const OUT_OF_RANGE: ErrorCode = ErrorCode(63);
    /// Object is in the wrong state for the call (e.g. destroyed).
    pub const WRONG_STATE: ErrorCode = ErrorCode(73);
    /// Two arguments are incompatible (e.g. different layouts).
    pub const INCOMP: ErrorCode = ErrorCode(75);
    /// The local array is checked out and the vector cannot be modified.
    /// Specific to this crate; does not correspond to a PETSc error.
    pub const LOCKED: ErrorCode = ErrorCode(77);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Unified error type for distvec

#[derive(Error, Debug)]
pub enum VecError {
    #[error("backend error code {0}")]
    Backend(ErrorCode),
    #[error("dimension mismatch: {0} != {1}")]
    DimensionMismatch(usize, usize),
    #[error("vectors have non-matching sizes: {0} != {1}")]
    NonMatchingSizes(usize, usize),
    #[error("index {index} is not in the range [0, {size})")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("cannot access element {index}: only elements {begin} through {last} are stored locally")]
    NonLocalAccess { index: usize, begin: usize, last: usize },
    #[error("internal error: {0}")]
    Internal(&'static str),
    #[error("cannot mix {requested:?} with pending {last:?} operations without compress()")]
    WrongMode { last: LastAction, requested: LastAction },
    #[error("output stream error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ErrorCode> for VecError {
    fn from(code: ErrorCode) -> Self {
        VecError::Backend(code)
    }
}

pub type Result<T> = std::result::Result<T, VecError>;

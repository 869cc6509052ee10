use ark_serialize::SerializationError;
use thiserror::Error;

/// Failures reported by the accumulator.
///
/// Cryptographic mismatches are never reported through this type:
/// `mem_verify` answers `false` instead, so a failed verification cannot be
/// confused with a malformed input or a broken instance.
#[derive(Debug, Error)]
pub enum AccumulatorError {
    /// The secure random source failed while sampling the trapdoor.
    /// Setup-time only and non-retryable.
    #[error("entropy source failed during trusted setup: {0}")]
    Entropy(#[from] rand::Error),

    /// The set is too large for this accumulator instance.
    #[error("set of {size} elements exceeds accumulator capacity {capacity}")]
    CapacityExceeded { size: usize, capacity: usize },

    /// No public parameters for the required degree. `set_up` was never
    /// called, or the installed parameters are shorter than the capacity.
    #[error("public parameters missing for degree {degree}; run set_up first")]
    SetupIncomplete { degree: usize },

    /// `add` was asked to accumulate an element already in the set.
    #[error("element is already accumulated")]
    DuplicateElement,

    /// `mem_prove` was asked to prove an element outside the set.
    #[error("element is not a member of the accumulated set")]
    NotAMember,

    /// Bytes do not encode a canonical scalar field element.
    #[error("bytes do not encode a canonical scalar field element")]
    InvalidScalar,

    #[error("public parameters file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("public parameters encoding failed: {0}")]
    Serialization(#[from] SerializationError),
}

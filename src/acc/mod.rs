pub mod accumulator;
pub mod error;
pub mod poly;
pub mod serde_impl;
pub mod setup;

pub use accumulator::{Accumulator, Commitment, MembershipProof};
pub use error::AccumulatorError;
pub use setup::PublicParameters;

//! Pairing-based polynomial-commitment accumulator over BLS12-381.
//!
//! A set of scalar field elements is compressed into one G1 element by
//! evaluating its characteristic polynomial `P(x) = ∏ (x + x_i)` "in the
//! exponent" against a structured reference string (powers of a destroyed
//! trapdoor in both groups). Membership of a single element is proved by a
//! constant-size witness commitment and checked with one pairing equation.
//!
//! ```no_run
//! use ark_bls12_381::Fr;
//! use bilinear_accumulator::Accumulator;
//!
//! # fn main() -> Result<(), bilinear_accumulator::AccumulatorError> {
//! let mut acc = Accumulator::new(16);
//! acc.set_up()?;
//!
//! let set: Vec<Fr> = [2u64, 5, 9].iter().map(|&v| Fr::from(v)).collect();
//! let commitment = acc.commit(&set)?;
//! let proof = acc.mem_prove(&set, Fr::from(5u64))?;
//! assert!(acc.mem_verify(&commitment, Fr::from(5u64), &proof));
//! # Ok(())
//! # }
//! ```

pub mod acc;
pub mod utils;

pub use acc::accumulator::{Accumulator, Commitment, MembershipProof};
pub use acc::error::AccumulatorError;
pub use acc::setup::PublicParameters;

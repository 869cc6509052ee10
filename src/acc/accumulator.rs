//! The accumulator itself: commit a set, extend it by one element, and
//! prove/verify membership of a single element.
//!
//! A commitment is `P(s) * g1` for the monic characteristic polynomial
//! `P(x) = ∏ (x + x_i)` of the set; a membership proof for `y` is
//! `Q(s) * g1` for the quotient `Q(x) = P(x) / (x + y)`. The verifier checks
//! `e(commitment, g2) == e(proof, s*g2 + y*g2)`, a bilinear restatement of
//! `P(s) = Q(s) * (s + y)` that needs only the public parameters.

use ark_bls12_381::{Bls12_381 as Curve, Fr, G1Affine, G2Affine};
use ark_ec::{AffineCurve, PairingEngine, ProjectiveCurve};
use serde::{Deserialize, Serialize};

use super::error::AccumulatorError;
use super::poly::{divide_out_member, poly_to_g1, set_to_poly};
use super::serde_impl;
use super::setup::PublicParameters;

/// Commitment to a set of scalars: a single G1 element, `P(s) * g1`.
///
/// Deterministic in the set and the parameters; element order does not
/// matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment(#[serde(with = "serde_impl")] pub G1Affine);

/// Membership proof for one element: the witness commitment `Q(s) * g1`.
///
/// Bound to the (set, member) pair it was produced for; it does not carry
/// the member itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipProof(#[serde(with = "serde_impl")] pub G1Affine);

/// A polynomial-commitment accumulator over BLS12-381.
///
/// Holds the capacity and, once [`set_up`] has run, the public parameters.
/// The accumulator is stateless with respect to which sets have been
/// committed; callers keep their sets and pass them back in.
///
/// All operations take `&self` and may run concurrently once setup is done.
///
/// [`set_up`]: Self::set_up
#[derive(Debug, Clone)]
pub struct Accumulator {
    capacity: usize,
    params: Option<PublicParameters>,
}

impl Accumulator {
    /// Creates an accumulator for sets of at most `capacity` elements.
    /// No parameters exist yet; every operation except [`set_up`] fails
    /// with `SetupIncomplete` until it has run.
    ///
    /// [`set_up`]: Self::set_up
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            params: None,
        }
    }

    /// Builds an accumulator around externally generated parameters, e.g.
    /// ones loaded from a trusted-setup file.
    pub fn with_parameters(
        capacity: usize,
        params: PublicParameters,
    ) -> Result<Self, AccumulatorError> {
        if params.g1_powers.len() < capacity + 1 || params.g2_powers.len() < capacity + 1 {
            return Err(AccumulatorError::SetupIncomplete { degree: capacity });
        }
        Ok(Self {
            capacity,
            params: Some(params),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn parameters(&self) -> Option<&PublicParameters> {
        self.params.as_ref()
    }

    /// Runs the trusted setup, sampling a fresh trapdoor and deriving the
    /// power vectors. The trapdoor is destroyed before this returns.
    ///
    /// Single-use by contract: running it again replaces the parameters
    /// wholesale and invalidates every commitment and proof produced under
    /// the old ones.
    pub fn set_up(&mut self) -> Result<(), AccumulatorError> {
        self.params = Some(PublicParameters::generate(self.capacity)?);
        Ok(())
    }

    fn params_ref(&self) -> Result<&PublicParameters, AccumulatorError> {
        self.params
            .as_ref()
            .ok_or(AccumulatorError::SetupIncomplete { degree: 0 })
    }

    /// Commits to a set of scalars.
    ///
    /// Fails with `CapacityExceeded` when the set is larger than the
    /// capacity and with `SetupIncomplete` when parameters are absent.
    pub fn commit(&self, elements: &[Fr]) -> Result<Commitment, AccumulatorError> {
        if elements.len() > self.capacity {
            return Err(AccumulatorError::CapacityExceeded {
                size: elements.len(),
                capacity: self.capacity,
            });
        }
        let params = self.params_ref()?;
        let poly = set_to_poly(elements);
        Ok(Commitment(poly_to_g1(params, &poly)?))
    }

    /// Accumulates one more element into a committed set, returning the
    /// commitment to `set ∪ {element}`.
    ///
    /// Fails with `DuplicateElement` when the element is already present
    /// and with `CapacityExceeded` when the extended set would not fit.
    /// The commitment is recomputed from the extended set rather than
    /// updated incrementally.
    pub fn add(
        &self,
        _current: &Commitment,
        set: &[Fr],
        element: Fr,
    ) -> Result<Commitment, AccumulatorError> {
        if set.contains(&element) {
            return Err(AccumulatorError::DuplicateElement);
        }
        if set.len() + 1 > self.capacity {
            return Err(AccumulatorError::CapacityExceeded {
                size: set.len() + 1,
                capacity: self.capacity,
            });
        }

        let mut extended = Vec::with_capacity(set.len() + 1);
        extended.extend_from_slice(set);
        extended.push(element);
        self.commit(&extended)
    }

    /// Produces the membership proof for `member` within `elements`.
    ///
    /// Fails with `NotAMember` when `member` is not in the set. The proof
    /// is the exponent evaluation of the quotient polynomial
    /// `P(x) / (x + member)`.
    pub fn mem_prove(
        &self,
        elements: &[Fr],
        member: Fr,
    ) -> Result<MembershipProof, AccumulatorError> {
        if !elements.contains(&member) {
            return Err(AccumulatorError::NotAMember);
        }
        if elements.len() > self.capacity {
            return Err(AccumulatorError::CapacityExceeded {
                size: elements.len(),
                capacity: self.capacity,
            });
        }
        let params = self.params_ref()?;
        let quotient = divide_out_member(&set_to_poly(elements), member)?;
        Ok(MembershipProof(poly_to_g1(params, &quotient)?))
    }

    /// Checks a membership proof against a commitment:
    /// `e(commitment, g2) == e(proof, s*g2 + member*g2)`.
    ///
    /// Any cryptographic mismatch answers `false`, never an error. Absent
    /// parameters also answer `false`: no honest commitment can exist
    /// without them.
    pub fn mem_verify(
        &self,
        commitment: &Commitment,
        member: Fr,
        proof: &MembershipProof,
    ) -> bool {
        let params = match self.params {
            Some(ref p) if p.g2_powers.len() > 1 => p,
            _ => return false,
        };

        let g2 = G2Affine::prime_subgroup_generator();
        let g2_s = params.g2_powers[1];

        // g2^(s + member) = g2^s * g2^member
        let g2_member = g2.mul(member).into_affine();
        let g2_s_plus_member =
            (g2_s.into_projective() + g2_member.into_projective()).into_affine();

        let lhs = Curve::pairing(commitment.0, g2);
        let rhs = Curve::pairing(proof.0, g2_s_plus_member);

        lhs == rhs
    }
}

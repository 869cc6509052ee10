//! Trusted setup: generation and persistence of the structured reference
//! string (the public parameters).
//!
//! The trapdoor `s` exists only inside [`PublicParameters::generate`]. It is
//! sampled from the OS entropy source, used to derive the power vectors, and
//! overwritten before the function returns. Anyone holding `s` could forge
//! commitments and membership proofs, so no field of any struct ever
//! carries it.

use ark_bls12_381::{Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{AffineCurve, ProjectiveCurve};
use ark_ff::{One, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Read, SerializationError, Write};
use log::info;
use rand::{rngs::OsRng, RngCore};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use zeroize::Zeroize;

use super::error::AccumulatorError;

/// Public parameters of the accumulator: powers of the trapdoor in both
/// groups, `g1_powers[i] = s^i * g1` and `g2_powers[i] = s^i * g2`, with
/// `capacity + 1` entries per group.
///
/// Immutable once generated. Read-only access from any number of threads is
/// fine; nothing here is secret.
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct PublicParameters {
    /// Generator of G1.
    pub g1: G1Affine,
    /// Generator of G2.
    pub g2: G2Affine,
    /// g1, s*g1, s^2*g1, ..., s^capacity*g1
    pub g1_powers: Vec<G1Affine>,
    /// g2, s*g2, s^2*g2, ..., s^capacity*g2
    pub g2_powers: Vec<G2Affine>,
}

impl PublicParameters {
    /// Runs the one-shot trusted setup for the given capacity.
    ///
    /// Fails only if the OS entropy source does; that failure is fatal and
    /// non-retryable. On return the trapdoor is gone: the entropy buffer is
    /// zeroized and both scalar locals are overwritten.
    pub fn generate(capacity: usize) -> Result<Self, AccumulatorError> {
        let mut seed = [0u8; 64];
        OsRng.try_fill_bytes(&mut seed)?;
        let mut secret = Fr::from_be_bytes_mod_order(&seed);
        seed.zeroize();

        let g1 = G1Affine::prime_subgroup_generator();
        let g2 = G2Affine::prime_subgroup_generator();

        let mut g1_powers = Vec::with_capacity(capacity + 1);
        let mut g2_powers = Vec::with_capacity(capacity + 1);

        // Every entry is a fresh scalar multiplication of the fixed
        // generator; only the running scalar power advances between
        // iterations.
        let mut s_power = Fr::one();
        for _ in 0..=capacity {
            g1_powers.push(
                G1Projective::from(g1)
                    .mul(s_power.into_repr())
                    .into_affine(),
            );
            g2_powers.push(
                G2Projective::from(g2)
                    .mul(s_power.into_repr())
                    .into_affine(),
            );
            s_power *= secret;
        }

        // The trapdoor must not outlive setup.
        secret = Fr::zero();
        s_power = Fr::zero();
        debug_assert!(secret.is_zero() && s_power.is_zero());

        info!(
            "generated public parameters: {} G1 powers, {} G2 powers",
            g1_powers.len(),
            g2_powers.len()
        );

        Ok(Self {
            g1,
            g2,
            g1_powers,
            g2_powers,
        })
    }

    /// Derives parameters from a known trapdoor, for deterministic tests.
    ///
    /// Never use this outside tests: a known trapdoor breaks every
    /// soundness guarantee of the scheme.
    #[cfg(any(test, debug_assertions))]
    pub fn generate_for_testing(secret: Fr, capacity: usize) -> Self {
        let g1 = G1Affine::prime_subgroup_generator();
        let g2 = G2Affine::prime_subgroup_generator();

        let mut g1_powers = Vec::with_capacity(capacity + 1);
        let mut g2_powers = Vec::with_capacity(capacity + 1);

        let mut s_power = Fr::one();
        for _ in 0..=capacity {
            g1_powers.push(
                G1Projective::from(g1)
                    .mul(s_power.into_repr())
                    .into_affine(),
            );
            g2_powers.push(
                G2Projective::from(g2)
                    .mul(s_power.into_repr())
                    .into_affine(),
            );
            s_power *= secret;
        }

        Self {
            g1,
            g2,
            g1_powers,
            g2_powers,
        }
    }

    /// Number of powers per group, i.e. supported capacity + 1.
    pub fn len(&self) -> usize {
        self.g1_powers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.g1_powers.is_empty()
    }

    /// Loads parameters from a file written by [`save_to_file`].
    ///
    /// [`save_to_file`]: Self::save_to_file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, AccumulatorError> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        let params = Self::deserialize_unchecked(&mut reader)?;

        info!(
            "loaded public parameters: {} G1 powers, {} G2 powers",
            params.g1_powers.len(),
            params.g2_powers.len()
        );

        Ok(params)
    }

    /// Saves parameters as the canonical encoding: the two generators
    /// followed by each power vector, fixed-size group-element encodings
    /// with `capacity + 1` entries per group.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), AccumulatorError> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.serialize_unchecked(&mut writer)?;

        info!("saved public parameters to {:?}", path.as_ref());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Bls12_381 as Curve;
    use ark_ec::PairingEngine;

    #[test]
    fn test_generate_shape() {
        let params = PublicParameters::generate(8).unwrap();
        assert_eq!(params.g1_powers.len(), 9);
        assert_eq!(params.g2_powers.len(), 9);
        assert_eq!(params.g1_powers[0], params.g1);
        assert_eq!(params.g2_powers[0], params.g2);
    }

    #[test]
    fn test_generated_powers_are_consistent() {
        // Without the trapdoor, well-formedness is checkable pairwise:
        // e(s^(i+1)*g1, g2) == e(s^i*g1, s*g2).
        let params = PublicParameters::generate(4).unwrap();
        for i in 0..params.g1_powers.len() - 1 {
            let lhs = Curve::pairing(params.g1_powers[i + 1], params.g2);
            let rhs = Curve::pairing(params.g1_powers[i], params.g2_powers[1]);
            assert_eq!(lhs, rhs);
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let secret = Fr::from(259535143263514268207918833918737523409u128);
        let a = PublicParameters::generate_for_testing(secret, 6);
        let b = PublicParameters::generate_for_testing(secret, 6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_save_load_round_trip() {
        let params = PublicParameters::generate_for_testing(Fr::from(7u64), 5);
        let path = std::env::temp_dir().join(format!(
            "bilinear_acc_params_{}.bin",
            std::process::id()
        ));
        params.save_to_file(&path).unwrap();
        let loaded = PublicParameters::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, params);
    }
}

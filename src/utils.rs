//! Field utilities shared with the sibling identity-based schemes.
//!
//! Pure math only: polynomial evaluation, Lagrange basis values, canonical
//! scalar ingestion. No accumulator business logic lives here.

use ark_ff::{FromBytes, PrimeField};

use crate::acc::error::AccumulatorError;

/// Evaluates a polynomial at `x` by Horner's rule.
///
/// `coeffs[i]` is the coefficient of `x^i`. An empty coefficient slice is
/// the zero polynomial.
pub fn poly_eval<F: PrimeField>(coeffs: &[F], x: F) -> F {
    let mut result = match coeffs.last() {
        Some(leading) => *leading,
        None => return F::zero(),
    };
    for coeff in coeffs.iter().rev().skip(1) {
        result = result * x + coeff;
    }
    result
}

/// Computes the Lagrange basis value `Δ_{i,S}(x)` over the index set
/// `indices`, i.e. `∏_{j ∈ S, j ≠ i} (x - j) / (i - j)` in the field.
///
/// Returns `None` when a denominator is non-invertible. Over a prime field
/// this cannot happen once the `j == i` factors are skipped; the check stays
/// as a guard rather than a panic.
pub fn lagrange_basis_at<F: PrimeField>(i: u64, indices: &[u64], x: u64) -> Option<F> {
    let x_i = F::from(i);
    let x_eval = F::from(x);
    let mut delta = F::one();
    for &j in indices {
        if j == i {
            continue;
        }
        let x_j = F::from(j);
        let inv = (x_i - x_j).inverse()?;
        delta *= (x_eval - x_j) * inv;
    }
    Some(delta)
}

/// Reads a scalar from its little-endian canonical representation.
///
/// Fails with `InvalidScalar` when the bytes are short or encode a value
/// at or above the field order, so unreduced inputs are rejected instead of
/// silently wrapped.
pub fn scalar_from_repr_bytes<F: PrimeField>(bytes: &[u8]) -> Result<F, AccumulatorError> {
    let repr =
        <F as PrimeField>::BigInt::read(bytes).map_err(|_| AccumulatorError::InvalidScalar)?;
    F::from_repr(repr).ok_or(AccumulatorError::InvalidScalar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Fr;
    use ark_ff::{FpParameters, One, ToBytes, Zero};
    use ark_poly::{univariate::DensePolynomial, Polynomial, UVPolynomial};
    use rand::Rng;

    #[test]
    fn test_poly_eval_matches_dense_polynomial() {
        let mut rng = rand::thread_rng();
        let coeffs: Vec<Fr> = (0..8).map(|_| rng.gen()).collect();
        let x: Fr = rng.gen();
        let poly = DensePolynomial::from_coefficients_vec(coeffs.clone());
        assert_eq!(poly_eval(&coeffs, x), poly.evaluate(&x));
    }

    #[test]
    fn test_poly_eval_empty_is_zero() {
        assert_eq!(poly_eval::<Fr>(&[], Fr::from(7u64)), Fr::zero());
    }

    #[test]
    fn test_lagrange_basis_is_indicator_on_nodes() {
        let indices = [1u64, 2, 5];
        for &i in &indices {
            for &x in &indices {
                let delta: Fr = lagrange_basis_at(i, &indices, x).unwrap();
                let expected = if i == x { Fr::one() } else { Fr::zero() };
                assert_eq!(delta, expected);
            }
        }
    }

    #[test]
    fn test_lagrange_basis_partition_of_unity() {
        // Interpolating the constant 1 must give 1 at any point.
        let indices = [1u64, 3, 4, 9];
        let x = 42u64;
        let sum = indices
            .iter()
            .map(|&i| lagrange_basis_at::<Fr>(i, &indices, x).unwrap())
            .fold(Fr::zero(), |acc, delta| acc + delta);
        assert_eq!(sum, Fr::one());
    }

    #[test]
    fn test_scalar_round_trip() {
        let value = Fr::from(123456789u64);
        let mut buf = Vec::new();
        value.into_repr().write(&mut buf).unwrap();
        let decoded: Fr = scalar_from_repr_bytes(&buf).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_scalar_rejects_modulus() {
        let mut buf = Vec::new();
        <Fr as PrimeField>::Params::MODULUS.write(&mut buf).unwrap();
        assert!(matches!(
            scalar_from_repr_bytes::<Fr>(&buf),
            Err(AccumulatorError::InvalidScalar)
        ));
    }

    #[test]
    fn test_scalar_rejects_short_input() {
        assert!(matches!(
            scalar_from_repr_bytes::<Fr>(&[1, 2, 3]),
            Err(AccumulatorError::InvalidScalar)
        ));
    }
}

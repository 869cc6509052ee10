//! Characteristic polynomials of accumulated sets and their evaluation
//! "in the exponent" against the public parameters.

use ark_bls12_381::{Fr, G1Affine};
use ark_ec::{msm::VariableBaseMSM, ProjectiveCurve};
use ark_ff::{One, PrimeField, Zero};
use ark_poly::{
    univariate::{DenseOrSparsePolynomial, DensePolynomial},
    UVPolynomial,
};
use log::trace;
use rayon::prelude::*;
use std::borrow::Cow;

use super::error::AccumulatorError;
use super::setup::PublicParameters;

/// Builds the monic characteristic polynomial `P(x) = ∏ (x + x_i)`,
/// coefficients ordered constant term first. The empty set yields the
/// constant polynomial 1.
///
/// The product is taken by splitting the monomials in half and multiplying
/// the sub-products, which keeps the result identical to a sequential
/// convolution while letting rayon work both halves.
pub fn set_to_poly(elements: &[Fr]) -> DensePolynomial<Fr> {
    let monomials: Vec<DensePolynomial<Fr>> = elements
        .iter()
        .map(|x| DensePolynomial::from_coefficients_vec(vec![*x, Fr::one()]))
        .collect();

    fn expand(polys: &[DensePolynomial<Fr>]) -> Cow<'_, DensePolynomial<Fr>> {
        if polys.is_empty() {
            return Cow::Owned(DensePolynomial::from_coefficients_vec(vec![Fr::one()]));
        } else if polys.len() == 1 {
            return Cow::Borrowed(&polys[0]);
        }
        let mid = polys.len() / 2;
        let (left, right) = rayon::join(|| expand(&polys[..mid]), || expand(&polys[mid..]));
        Cow::Owned(left.as_ref() * right.as_ref())
    }

    expand(&monomials).into_owned()
}

/// Divides `P` by the member monomial `(x + member)`, which is exact
/// precisely when `-member` is a root of `P`, i.e. when `member` was
/// accumulated. A nonzero remainder means the element is not in the set.
pub fn divide_out_member(
    poly: &DensePolynomial<Fr>,
    member: Fr,
) -> Result<DensePolynomial<Fr>, AccumulatorError> {
    let divisor = DensePolynomial::from_coefficients_vec(vec![member, Fr::one()]);
    let (quotient, remainder) = DenseOrSparsePolynomial::from(poly)
        .divide_with_q_and_r(&DenseOrSparsePolynomial::from(&divisor))
        .ok_or(AccumulatorError::NotAMember)?;
    if !remainder.is_zero() {
        return Err(AccumulatorError::NotAMember);
    }
    Ok(quotient)
}

/// Evaluates the polynomial in the exponent: `Σ coeff_i * (s^i * g1)`,
/// a variable-base MSM over the precomputed G1 powers.
///
/// Zero coefficients are skipped. Any required power beyond the installed
/// parameters reports `SetupIncomplete`.
pub fn poly_to_g1(
    params: &PublicParameters,
    poly: &DensePolynomial<Fr>,
) -> Result<G1Affine, AccumulatorError> {
    let mut idxes: Vec<usize> = Vec::with_capacity(poly.coeffs.len());
    for (i, coeff) in poly.coeffs.iter().enumerate() {
        if coeff.is_zero() {
            continue;
        }
        if i >= params.g1_powers.len() {
            return Err(AccumulatorError::SetupIncomplete { degree: i });
        }
        idxes.push(i);
    }

    let mut bases: Vec<G1Affine> = Vec::with_capacity(idxes.len());
    let mut scalars: Vec<<Fr as PrimeField>::BigInt> = Vec::with_capacity(idxes.len());
    (0..idxes.len())
        .into_par_iter()
        .map(|i| {
            trace!("access g1 power at {}", idxes[i]);
            params.g1_powers[idxes[i]]
        })
        .collect_into_vec(&mut bases);
    (0..idxes.len())
        .into_par_iter()
        .map(|i| poly.coeffs[idxes[i]].into_repr())
        .collect_into_vec(&mut scalars);

    Ok(VariableBaseMSM::multi_scalar_mul(&bases[..], &scalars[..]).into_affine())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::poly_eval;
    use ark_poly::Polynomial;
    use std::ops::Neg;

    #[test]
    fn test_set_to_poly_known_product() {
        // (x + 1)(x + 2)(x + 3) = x^3 + 6x^2 + 11x + 6
        let poly = set_to_poly(&[Fr::from(1u64), Fr::from(2u64), Fr::from(3u64)]);
        let expected = DensePolynomial::from_coefficients_vec(vec![
            Fr::from(6u64),
            Fr::from(11u64),
            Fr::from(6u64),
            Fr::from(1u64),
        ]);
        assert_eq!(poly, expected);
    }

    #[test]
    fn test_set_to_poly_empty_is_one() {
        let poly = set_to_poly(&[]);
        assert_eq!(
            poly,
            DensePolynomial::from_coefficients_vec(vec![Fr::one()])
        );
    }

    #[test]
    fn test_set_to_poly_is_monic_and_vanishes_at_roots() {
        let elements = [
            Fr::from(2u64),
            Fr::from(5u64),
            Fr::from(9u64),
            Fr::from(11u64),
        ];
        let poly = set_to_poly(&elements);
        assert_eq!(poly.degree(), elements.len());
        assert_eq!(*poly.coeffs.last().unwrap(), Fr::one());
        for x in &elements {
            assert_eq!(poly_eval(&poly.coeffs, x.neg()), Fr::zero());
        }
    }

    #[test]
    fn test_divide_out_member_exact() {
        let elements = [Fr::from(1u64), Fr::from(2u64), Fr::from(7u64)];
        let poly = set_to_poly(&elements);
        let quotient = divide_out_member(&poly, Fr::from(2u64)).unwrap();
        assert_eq!(quotient, set_to_poly(&[Fr::from(1u64), Fr::from(7u64)]));
    }

    #[test]
    fn test_divide_out_non_member_fails() {
        let poly = set_to_poly(&[Fr::from(1u64), Fr::from(2u64)]);
        assert!(matches!(
            divide_out_member(&poly, Fr::from(5u64)),
            Err(AccumulatorError::NotAMember)
        ));
    }
}

use ark_bn254::Fr;
use ark_ff::{Field, UniformRand};
use ark_std::{One, Zero};
use bn254_poly_commit_primitives::{errors::PolynomialError, field};

#[test]
fn test_basic_operations_reduce() {
    let a = Fr::from(7u64);
    let b = Fr::from(9u64);
    assert_eq!(field::add(&a, &b), Fr::from(16u64));
    assert_eq!(field::mul(&a, &b), Fr::from(63u64));
    // 7 - 9 wraps around the modulus
    assert_eq!(field::sub(&a, &b), -Fr::from(2u64));
    assert_eq!(field::add(&field::neg(&a), &a), Fr::zero());
}

#[test]
fn test_inverse_of_zero_fails() {
    assert_eq!(field::inv(&Fr::zero()), Err(PolynomialError::DivisionByZero));
    assert_eq!(
        field::div(&Fr::one(), &Fr::zero()),
        Err(PolynomialError::DivisionByZero)
    );
}

#[test]
fn test_inverse_and_division() {
    let mut rng = ark_std::test_rng();
    for _ in 0..20 {
        let a = Fr::rand(&mut rng);
        if a.is_zero() {
            continue;
        }
        let a_inv = field::inv(&a).unwrap();
        assert_eq!(a * a_inv, Fr::one());

        let b = Fr::rand(&mut rng);
        assert_eq!(field::div(&b, &a).unwrap() * a, b);
    }
}

#[test]
fn test_pow_negative_exponent() {
    let base = Fr::from(5u64);
    let base_inv = field::inv(&base).unwrap();

    assert_eq!(field::pow(&base, 0).unwrap(), Fr::one());
    assert_eq!(field::pow(&base, 3).unwrap(), Fr::from(125u64));
    assert_eq!(field::pow(&base, -1).unwrap(), base_inv);
    assert_eq!(field::pow(&base, -3).unwrap(), base_inv.pow([3u64]));
    assert_eq!(
        field::pow(&base, 4).unwrap() * field::pow(&base, -4).unwrap(),
        Fr::one()
    );

    assert_eq!(field::pow(&Fr::zero(), 0).unwrap(), Fr::one());
    assert_eq!(
        field::pow(&Fr::zero(), -2),
        Err(PolynomialError::DivisionByZero)
    );
}

#[test]
fn test_multi_inv_matches_single_inversions() {
    let mut rng = ark_std::test_rng();
    let values: Vec<Fr> = (0..33).map(|_| Fr::rand(&mut rng)).collect();
    let inverses = field::multi_inv(&values).unwrap();

    assert_eq!(inverses.len(), values.len());
    for (v, v_inv) in values.iter().zip(&inverses) {
        assert_eq!(*v_inv, field::inv(v).unwrap());
    }
}

#[test]
fn test_multi_inv_skips_zeros() {
    let values = vec![Fr::from(2u64), Fr::zero(), Fr::from(4u64)];
    let inverses = field::multi_inv(&values).unwrap();

    assert_eq!(inverses[0], field::inv(&Fr::from(2u64)).unwrap());
    assert_eq!(inverses[1], Fr::zero());
    assert_eq!(inverses[2], field::inv(&Fr::from(4u64)).unwrap());

    assert!(field::multi_inv(&[]).unwrap().is_empty());
}

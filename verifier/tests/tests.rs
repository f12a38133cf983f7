#[cfg(test)]
mod tests {
    use ark_bn254::{Fq, Fr, G1Affine};
    use ark_ec::AffineRepr;
    use ark_ff::UniformRand;
    use ark_std::{One, Zero};
    use bn254_poly_commit_primitives::{
        arith,
        argument::close_running_product,
        consts::{BYTES_PER_FIELD_ELEMENT, SIZE_OF_G1_AFFINE_COMPRESSED},
        domain::Domain,
        errors::KzgError,
        helpers,
        polynomial::{PolynomialCoeffForm, PolynomialEvalForm},
        proof::GrandProductProof,
        setup::PublicSetup,
    };
    use bn254_poly_commit_prover::{kzg::KZG, setup::TrustedSetup};
    use bn254_poly_commit_verifier::{
        argument::{
            verify_grand_product, verify_linearized_product, verify_permutation,
            verify_prescribed_permutation, verify_zero_test, WiringCommitments,
        },
        batch::{
            compute_batch_challenge, verify_kzg_proof_batch, verify_kzg_proof_batch_from_bytes,
            verify_kzg_proof_batch_with_transcript, verify_openings_batch,
        },
        verify::{
            verify_evaluations_proof, verify_opening, verify_proof, verify_proof_impl,
            verify_proof_moved,
        },
    };
    use lazy_static::lazy_static;

    lazy_static! {
        static ref KZG_INSTANCE: KZG = KZG::new(TrustedSetup::new(&mut <rand::rngs::StdRng as rand::SeedableRng>::from_seed([1, 0, 0, 0, 23, 0, 0, 0, 200, 1, 0, 0, 210, 30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])));
        static ref PUBLIC_SETUP: PublicSetup = KZG_INSTANCE.setup().public_setup(16, 2).unwrap();
    }

    fn random_poly(len: usize) -> PolynomialCoeffForm {
        let mut rng = rand::thread_rng();
        PolynomialCoeffForm::new((0..len).map(|_| Fr::rand(&mut rng)).collect())
    }

    fn to_g1_bytes(point: &G1Affine) -> [u8; SIZE_OF_G1_AFFINE_COMPRESSED] {
        helpers::g1_to_be_bytes(point).unwrap().try_into().unwrap()
    }

    fn to_fr_bytes(fr: &Fr) -> [u8; BYTES_PER_FIELD_ELEMENT] {
        helpers::fr_to_be_bytes(fr).try_into().unwrap()
    }

    #[test]
    fn test_verify_opening_correctness() {
        let mut rng = rand::thread_rng();
        for len in [1, 2, 7, 32, 100] {
            let poly = random_poly(len);
            let commitment = KZG_INSTANCE.commit_coeff_form(&poly).unwrap();
            let z = Fr::rand(&mut rng);
            let opening = KZG_INSTANCE.open(&poly, &z).unwrap();

            assert!(verify_proof_impl(
                &PUBLIC_SETUP,
                commitment,
                opening.proof,
                opening.point,
                opening.value
            )
            .unwrap());
            assert!(verify_opening(&PUBLIC_SETUP, &commitment, &opening).unwrap());
        }
    }

    #[test]
    fn test_verify_opening_soundness() {
        let mut rng = rand::thread_rng();
        let poly = random_poly(24);
        let commitment = KZG_INSTANCE.commit_coeff_form(&poly).unwrap();
        let z = Fr::rand(&mut rng);
        let opening = KZG_INSTANCE.open(&poly, &z).unwrap();

        let wrong_value = opening.value + Fr::one();
        assert!(!verify_proof_impl(&PUBLIC_SETUP, commitment, opening.proof, z, wrong_value).unwrap());

        let wrong_point = z + Fr::one();
        assert!(
            !verify_proof_impl(&PUBLIC_SETUP, commitment, opening.proof, wrong_point, opening.value)
                .unwrap()
        );

        let other_commitment = KZG_INSTANCE.commit_coeff_form(&random_poly(24)).unwrap();
        assert!(!verify_opening(&PUBLIC_SETUP, &other_commitment, &opening).unwrap());
    }

    #[test]
    fn test_pairing_arrangements_agree() {
        let mut rng = rand::thread_rng();
        for _ in 0..5 {
            let poly = random_poly(12);
            let commitment = KZG_INSTANCE.commit_coeff_form(&poly).unwrap();
            let z = Fr::rand(&mut rng);
            let opening = KZG_INSTANCE.open(&poly, &z).unwrap();

            for value in [opening.value, opening.value + Fr::from(3u64)] {
                let direct =
                    verify_proof_impl(&PUBLIC_SETUP, commitment, opening.proof, z, value).unwrap();
                let moved =
                    verify_proof_moved(&PUBLIC_SETUP, commitment, opening.proof, z, value).unwrap();
                assert_eq!(direct, moved);
                assert_eq!(direct, value == opening.value);
            }
        }
    }

    #[test]
    fn test_zero_polynomial_commits_to_identity() {
        let poly = PolynomialCoeffForm::new(vec![Fr::zero(); 4]);
        let commitment = KZG_INSTANCE.commit_coeff_form(&poly).unwrap();
        assert!(commitment.is_zero());

        let opening = KZG_INSTANCE.open(&poly, &Fr::from(9u64)).unwrap();
        assert!(opening.value.is_zero());
        assert!(verify_opening(&PUBLIC_SETUP, &commitment, &opening).unwrap());
    }

    #[test]
    fn test_concrete_domain_four_scenario() {
        let evals: Vec<Fr> = [235u64, 2346, 132213, 61232]
            .iter()
            .map(|v| Fr::from(*v))
            .collect();
        let poly = PolynomialEvalForm::new(evals.clone()).unwrap();
        let commitment = KZG_INSTANCE.commit_eval_form(&poly).unwrap();
        let opening = KZG_INSTANCE
            .compute_proof_with_known_z_fr_index(&poly, 1)
            .unwrap();

        assert_eq!(opening.point, poly.domain().element(1).unwrap());
        assert_eq!(opening.value, Fr::from(2346u64));
        assert!(verify_opening(&PUBLIC_SETUP, &commitment, &opening).unwrap());

        for i in 0..evals.len() {
            let mut mutated = evals.clone();
            mutated[i] += Fr::one();
            let mutated = PolynomialEvalForm::new(mutated).unwrap();
            let new_commitment = KZG_INSTANCE.commit_eval_form(&mutated).unwrap();
            assert!(!verify_opening(&PUBLIC_SETUP, &new_commitment, &opening).unwrap());
        }
    }

    #[test]
    fn test_verify_proof_from_bytes() {
        let mut rng = rand::thread_rng();
        let poly = random_poly(10);
        let commitment = KZG_INSTANCE.commit_coeff_form(&poly).unwrap();
        let z = Fr::rand(&mut rng);
        let opening = KZG_INSTANCE.open(&poly, &z).unwrap();

        let commitment_bytes = to_g1_bytes(&commitment);
        let proof_bytes = to_g1_bytes(&opening.proof);
        let z_bytes = to_fr_bytes(&z);
        let value_bytes = to_fr_bytes(&opening.value);

        assert!(verify_proof(
            &PUBLIC_SETUP,
            &commitment_bytes,
            &proof_bytes,
            &z_bytes,
            &value_bytes
        )
        .unwrap());

        let wrong_value = to_fr_bytes(&(opening.value + Fr::one()));
        assert!(!verify_proof(
            &PUBLIC_SETUP,
            &commitment_bytes,
            &proof_bytes,
            &z_bytes,
            &wrong_value
        )
        .unwrap());

        // Above the modulus.
        let non_canonical = [0xffu8; BYTES_PER_FIELD_ELEMENT];
        assert!(matches!(
            verify_proof(
                &PUBLIC_SETUP,
                &commitment_bytes,
                &proof_bytes,
                &non_canonical,
                &value_bytes
            ),
            Err(KzgError::SerializationError(_))
        ));
    }

    #[test]
    fn test_point_not_on_curve_is_an_error() {
        let bad = G1Affine::new_unchecked(Fq::one(), Fq::one());
        let result = verify_proof_impl(
            &PUBLIC_SETUP,
            bad,
            G1Affine::generator(),
            Fr::one(),
            Fr::one(),
        );
        assert!(matches!(result, Err(KzgError::NotOnCurveError(_))));

        let result = verify_kzg_proof_batch(
            &PUBLIC_SETUP,
            &[G1Affine::generator()],
            &[Fr::one()],
            &[Fr::one()],
            &[bad],
            &Fr::from(2u64),
        );
        assert!(matches!(result, Err(KzgError::NotOnCurveError(_))));
    }

    #[test]
    fn test_verify_evaluations_proof() {
        let mut rng = rand::thread_rng();
        let evals: Vec<Fr> = (0..16).map(|_| Fr::rand(&mut rng)).collect();
        let poly = PolynomialEvalForm::new(evals.clone()).unwrap();
        let (commitment, opening) = KZG_INSTANCE.compute_evaluations_proof(&poly).unwrap();

        assert_eq!(
            opening.point,
            helpers::compute_challenge(&poly, &commitment).unwrap()
        );
        assert!(verify_evaluations_proof(&PUBLIC_SETUP, &poly, &commitment, &opening.proof).unwrap());

        let mut tampered = evals;
        tampered[5] += Fr::one();
        let tampered = PolynomialEvalForm::new(tampered).unwrap();
        assert!(
            !verify_evaluations_proof(&PUBLIC_SETUP, &tampered, &commitment, &opening.proof)
                .unwrap()
        );
    }

    fn random_openings(
        k: usize,
    ) -> (Vec<G1Affine>, Vec<Fr>, Vec<Fr>, Vec<G1Affine>) {
        let mut rng = rand::thread_rng();
        let polys: Vec<PolynomialCoeffForm> = (0..k).map(|i| random_poly(5 + 3 * i)).collect();
        let points: Vec<Fr> = (0..k).map(|_| Fr::rand(&mut rng)).collect();
        let commitments = KZG_INSTANCE.commit_coeff_form_batch(&polys).unwrap();
        let openings = KZG_INSTANCE.compute_proofs(&polys, &points).unwrap();
        (
            commitments,
            points,
            openings.iter().map(|o| o.value).collect(),
            openings.iter().map(|o| o.proof).collect(),
        )
    }

    #[test]
    fn test_batch_verification_equivalence() {
        let mut rng = rand::thread_rng();
        let (commitments, zs, ys, proofs) = random_openings(6);

        for i in 0..commitments.len() {
            assert!(
                verify_proof_impl(&PUBLIC_SETUP, commitments[i], proofs[i], zs[i], ys[i]).unwrap()
            );
        }
        let r = Fr::rand(&mut rng);
        assert!(verify_kzg_proof_batch(&PUBLIC_SETUP, &commitments, &zs, &ys, &proofs, &r).unwrap());
        assert!(
            verify_kzg_proof_batch_with_transcript(&PUBLIC_SETUP, &commitments, &zs, &ys, &proofs)
                .unwrap()
        );

        // One bad tuple sinks the whole batch.
        let mut bad_ys = ys.clone();
        bad_ys[3] += Fr::one();
        assert!(
            !verify_proof_impl(&PUBLIC_SETUP, commitments[3], proofs[3], zs[3], bad_ys[3]).unwrap()
        );
        assert!(
            !verify_kzg_proof_batch(&PUBLIC_SETUP, &commitments, &zs, &bad_ys, &proofs, &r)
                .unwrap()
        );
        assert!(!verify_kzg_proof_batch_with_transcript(
            &PUBLIC_SETUP,
            &commitments,
            &zs,
            &bad_ys,
            &proofs
        )
        .unwrap());

        let mut swapped = proofs.clone();
        swapped.swap(0, 1);
        assert!(
            !verify_kzg_proof_batch(&PUBLIC_SETUP, &commitments, &zs, &ys, &swapped, &r).unwrap()
        );
    }

    #[test]
    fn test_batch_input_validation() {
        let (commitments, zs, ys, proofs) = random_openings(3);
        let r = Fr::from(7u64);

        assert_eq!(
            verify_kzg_proof_batch(&PUBLIC_SETUP, &[], &[], &[], &[], &r),
            Err(KzgError::InvalidInputLength)
        );
        assert_eq!(
            verify_kzg_proof_batch(&PUBLIC_SETUP, &commitments, &zs[..2], &ys, &proofs, &r),
            Err(KzgError::InvalidInputLength)
        );
        assert_eq!(
            verify_kzg_proof_batch_with_transcript(
                &PUBLIC_SETUP,
                &commitments,
                &zs,
                &ys,
                &proofs[..1]
            ),
            Err(KzgError::InvalidInputLength)
        );
        assert_eq!(
            verify_openings_batch(&PUBLIC_SETUP, &[]),
            Err(KzgError::InvalidInputLength)
        );
    }

    #[test]
    fn test_batch_challenge_binds_every_tuple() {
        let (commitments, zs, ys, proofs) = random_openings(4);
        let r = compute_batch_challenge(&commitments, &zs, &ys, &proofs).unwrap();
        assert_eq!(
            r,
            compute_batch_challenge(&commitments, &zs, &ys, &proofs).unwrap()
        );

        let mut other_zs = zs.clone();
        other_zs[2] += Fr::one();
        assert_ne!(
            r,
            compute_batch_challenge(&commitments, &other_zs, &ys, &proofs).unwrap()
        );
    }

    #[test]
    fn test_verify_openings_batch_and_bytes() {
        let (commitments, zs, ys, proofs) = random_openings(4);
        let polys: Vec<(G1Affine, _)> = commitments
            .iter()
            .zip(zs.iter().zip(ys.iter().zip(&proofs)))
            .map(|(c, (z, (y, p)))| {
                (
                    *c,
                    bn254_poly_commit_primitives::proof::Opening {
                        point: *z,
                        value: *y,
                        proof: *p,
                    },
                )
            })
            .collect();
        assert!(verify_openings_batch(&PUBLIC_SETUP, &polys).unwrap());

        let commitment_bytes: Vec<_> = commitments.iter().map(to_g1_bytes).collect();
        let proof_bytes: Vec<_> = proofs.iter().map(to_g1_bytes).collect();
        let z_bytes: Vec<_> = zs.iter().map(to_fr_bytes).collect();
        let y_bytes: Vec<_> = ys.iter().map(to_fr_bytes).collect();
        assert!(verify_kzg_proof_batch_from_bytes(
            &PUBLIC_SETUP,
            &commitment_bytes,
            &z_bytes,
            &y_bytes,
            &proof_bytes
        )
        .unwrap());
    }

    #[test]
    fn test_verify_zero_test() {
        let mut rng = rand::thread_rng();
        let evals: Vec<Fr> = (0..16)
            .map(|i| if i % 4 == 0 { Fr::zero() } else { Fr::rand(&mut rng) })
            .collect();
        let p_commitment = KZG_INSTANCE
            .commit_eval_form(&PolynomialEvalForm::new(evals.clone()).unwrap())
            .unwrap();
        let r = Fr::rand(&mut rng);
        let proof = KZG_INSTANCE.prove_zero_test(&evals, 4, &r).unwrap();

        assert!(verify_zero_test(&PUBLIC_SETUP, 4, &p_commitment, &proof, &r).unwrap());

        let mut tampered = proof.clone();
        tampered.q_at_r.value += Fr::one();
        assert!(!verify_zero_test(&PUBLIC_SETUP, 4, &p_commitment, &tampered, &r).unwrap());

        // Openings at some other point than the verifier's challenge.
        assert!(
            !verify_zero_test(&PUBLIC_SETUP, 4, &p_commitment, &proof, &(r + Fr::one())).unwrap()
        );

        let inside = Domain::new(4).unwrap().element(3).unwrap();
        assert!(matches!(
            verify_zero_test(&PUBLIC_SETUP, 4, &p_commitment, &proof, &inside),
            Err(KzgError::GenericError(_))
        ));
    }

    #[test]
    fn test_verify_zero_test_binds_statement() {
        let mut rng = rand::thread_rng();
        let evals: Vec<Fr> = (0..16)
            .map(|i| if i % 4 == 0 { Fr::zero() } else { Fr::rand(&mut rng) })
            .collect();
        let p_commitment = KZG_INSTANCE
            .commit_eval_form(&PolynomialEvalForm::new(evals.clone()).unwrap())
            .unwrap();
        let r = Fr::rand(&mut rng);
        let proof = KZG_INSTANCE.prove_zero_test(&evals, 4, &r).unwrap();

        // p vanishes on the order-4 subgroup only; a proof for order 4 says
        // nothing about order 8.
        assert!(!verify_zero_test(&PUBLIC_SETUP, 8, &p_commitment, &proof, &r).unwrap());
        // The largest supported order only costs a generator lookup.
        assert!(!verify_zero_test(&PUBLIC_SETUP, 1 << 28, &p_commitment, &proof, &r).unwrap());

        let other = KZG_INSTANCE.commit_coeff_form(&random_poly(16)).unwrap();
        assert!(!verify_zero_test(&PUBLIC_SETUP, 4, &other, &proof, &r).unwrap());

        assert!(matches!(
            verify_zero_test(&PUBLIC_SETUP, 12, &p_commitment, &proof, &r),
            Err(KzgError::PolynomialError(_))
        ));
    }

    #[test]
    fn test_verify_grand_product() {
        let mut rng = rand::thread_rng();
        let gates: Vec<Fr> = (0..15).map(|i| Fr::from(i as u64 + 2)).collect();
        let (f, _) = close_running_product(&gates).unwrap();
        let f_commitment = KZG_INSTANCE
            .commit_eval_form(&PolynomialEvalForm::new(f.clone()).unwrap())
            .unwrap();
        let r = Fr::rand(&mut rng);
        let proof = KZG_INSTANCE.prove_grand_product(&f, &r).unwrap();

        assert!(verify_grand_product(&PUBLIC_SETUP, 16, &f_commitment, &proof, &r).unwrap());

        let mut tampered = proof.clone();
        tampered.t_at_one.value = Fr::from(2u64);
        assert!(!verify_grand_product(&PUBLIC_SETUP, 16, &f_commitment, &tampered, &r).unwrap());

        let mut tampered = proof.clone();
        tampered.f_at_r.value += Fr::one();
        assert!(!verify_grand_product(&PUBLIC_SETUP, 16, &f_commitment, &tampered, &r).unwrap());

        let mut tampered = proof.clone();
        tampered.order = 8;
        assert!(!verify_grand_product(&PUBLIC_SETUP, 16, &f_commitment, &tampered, &r).unwrap());

        assert!(verify_grand_product(&PUBLIC_SETUP, 12, &f_commitment, &proof, &r).is_err());
    }

    #[test]
    fn test_verify_grand_product_rejects_smaller_subgroup() {
        let mut rng = rand::thread_rng();
        // 1·3·4·…·9 is not 1 over the order-8 subgroup, but f(1) = 1
        let f_evals: Vec<Fr> = [1u64, 3, 4, 5, 6, 7, 8, 9].iter().map(|v| Fr::from(*v)).collect();
        let domain = Domain::new(8).unwrap();
        let f = PolynomialCoeffForm::new(domain.ifft(&f_evals).unwrap());
        let f_commitment = KZG_INSTANCE.commit_coeff_form(&f).unwrap();
        assert!(KZG_INSTANCE.prove_grand_product(&f_evals, &Fr::from(3u64)).is_err());

        // Over the trivial subgroup {1}, t ≡ 1 and q = (1 - f)/(x - 1).
        let t = PolynomialCoeffForm::new(vec![Fr::one()]);
        let q = PolynomialCoeffForm::new(
            arith::div_polys(
                &arith::sub_polys(t.coeffs(), f.coeffs()),
                &[-Fr::one(), Fr::one()],
            )
            .unwrap(),
        );
        let r = Fr::rand(&mut rng);
        let proof = GrandProductProof {
            order: 1,
            f_commitment,
            t_commitment: KZG_INSTANCE.commit_coeff_form(&t).unwrap(),
            q_commitment: KZG_INSTANCE.commit_coeff_form(&q).unwrap(),
            t_at_one: KZG_INSTANCE.open(&t, &Fr::one()).unwrap(),
            t_at_r: KZG_INSTANCE.open(&t, &r).unwrap(),
            t_at_omega_r: KZG_INSTANCE.open(&t, &r).unwrap(),
            f_at_r: KZG_INSTANCE.open(&f, &r).unwrap(),
            q_at_r: KZG_INSTANCE.open(&q, &r).unwrap(),
        };

        // Valid for the order-1 statement it actually proves ...
        assert!(verify_grand_product(&PUBLIC_SETUP, 1, &f_commitment, &proof, &r).unwrap());
        // ... and rejected for the order-8 statement the caller asks about.
        assert!(!verify_grand_product(&PUBLIC_SETUP, 8, &f_commitment, &proof, &r).unwrap());
    }

    #[test]
    fn test_verify_permutation() {
        let mut rng = rand::thread_rng();
        let p0: Vec<Fr> = (0..8).map(|_| Fr::rand(&mut rng)).collect();
        let p1: Vec<Fr> = p0.iter().rev().copied().collect();
        let theta = Fr::rand(&mut rng);
        let r = Fr::rand(&mut rng);
        let proof = KZG_INSTANCE.prove_permutation(&p0, &p1, &theta, &r).unwrap();
        let c0 = commit_evals(&p0);
        let c1 = commit_evals(&p1);

        assert!(verify_permutation(&PUBLIC_SETUP, 8, &c0, &c1, &proof, &theta, &r).unwrap());
        assert!(!verify_permutation(
            &PUBLIC_SETUP,
            8,
            &c0,
            &c1,
            &proof,
            &(theta + Fr::one()),
            &r
        )
        .unwrap());

        // A proof about other columns, or about another subgroup order.
        let unrelated = commit_evals(&(0..8).map(|_| Fr::rand(&mut rng)).collect::<Vec<_>>());
        assert!(!verify_permutation(&PUBLIC_SETUP, 8, &c0, &unrelated, &proof, &theta, &r).unwrap());
        assert!(!verify_permutation(&PUBLIC_SETUP, 4, &c0, &c1, &proof, &theta, &r).unwrap());

        let wiring = WiringCommitments {
            seq0: c0,
            seq1: c1,
        };
        assert!(matches!(
            verify_prescribed_permutation(
                &PUBLIC_SETUP,
                8,
                &c0,
                &c1,
                &wiring,
                &proof,
                &Fr::one(),
                &theta,
                &r
            ),
            Err(KzgError::GenericError(_))
        ));
    }

    #[test]
    fn test_verify_prescribed_permutation() {
        let mut rng = rand::thread_rng();
        let p0: Vec<Fr> = (0..8).map(|_| Fr::rand(&mut rng)).collect();
        let seq0: Vec<Fr> = (0..8u64).map(Fr::from).collect();
        let order = [5, 2, 7, 0, 1, 6, 3, 4];
        let p1: Vec<Fr> = order.iter().map(|&i| p0[i]).collect();
        let seq1: Vec<Fr> = order.iter().map(|&i| seq0[i]).collect();
        let gamma = Fr::rand(&mut rng);
        let theta = Fr::rand(&mut rng);
        let r = Fr::rand(&mut rng);
        let c0 = commit_evals(&p0);
        let c1 = commit_evals(&p1);
        let wiring = WiringCommitments::from_evaluations(&PUBLIC_SETUP, &seq0, &seq1).unwrap();

        let proof = KZG_INSTANCE
            .prove_prescribed_permutation(&p0, &p1, &seq0, &seq1, &gamma, &theta, &r)
            .unwrap();
        assert_eq!(proof.seq0_commitment, Some(wiring.seq0));
        assert_eq!(proof.seq1_commitment, Some(wiring.seq1));

        assert!(verify_prescribed_permutation(
            &PUBLIC_SETUP,
            8,
            &c0,
            &c1,
            &wiring,
            &proof,
            &gamma,
            &theta,
            &r
        )
        .unwrap());
        assert!(!verify_prescribed_permutation(
            &PUBLIC_SETUP,
            8,
            &c0,
            &c1,
            &wiring,
            &proof,
            &(gamma + Fr::one()),
            &theta,
            &r
        )
        .unwrap());
        assert!(matches!(
            verify_permutation(&PUBLIC_SETUP, 8, &c0, &c1, &proof, &theta, &r),
            Err(KzgError::GenericError(_))
        ));
    }

    #[test]
    fn test_verify_prescribed_permutation_rejects_prover_wiring() {
        let mut rng = rand::thread_rng();
        let p0: Vec<Fr> = (0..8).map(|_| Fr::rand(&mut rng)).collect();
        let p1: Vec<Fr> = (0..8).map(|_| Fr::rand(&mut rng)).collect();
        let seq0: Vec<Fr> = (0..8u64).map(Fr::from).collect();
        let seq1: Vec<Fr> = [5u64, 2, 7, 0, 1, 6, 3, 4].iter().map(|v| Fr::from(*v)).collect();
        let gamma = Fr::rand(&mut rng);
        let theta = Fr::rand(&mut rng);
        let r = Fr::rand(&mut rng);

        // seq1' = seq0 + (p1 - p0)·γ makes every row ratio 1 for any p1
        let forged_seq1: Vec<Fr> = seq0
            .iter()
            .zip(p0.iter().zip(&p1))
            .map(|(s, (a, b))| *s + (*b - a) * gamma)
            .collect();
        let proof = KZG_INSTANCE
            .prove_prescribed_permutation(&p0, &p1, &seq0, &forged_seq1, &gamma, &theta, &r)
            .unwrap();

        let wiring = WiringCommitments::from_evaluations(&PUBLIC_SETUP, &seq0, &seq1).unwrap();
        assert!(!verify_prescribed_permutation(
            &PUBLIC_SETUP,
            8,
            &commit_evals(&p0),
            &commit_evals(&p1),
            &wiring,
            &proof,
            &gamma,
            &theta,
            &r
        )
        .unwrap());
    }

    #[test]
    fn test_wiring_commitments_length_mismatch() {
        let seq0: Vec<Fr> = (0..8u64).map(Fr::from).collect();
        assert_eq!(
            WiringCommitments::from_evaluations(&PUBLIC_SETUP, &seq0, &seq0[..4]),
            Err(KzgError::InvalidInputLength)
        );
    }

    #[test]
    fn test_verify_linearized_product() {
        let mut rng = rand::thread_rng();
        let p1 = random_poly(9);
        let p2 = random_poly(6);
        let q = PolynomialCoeffForm::new(arith::mul_polys(p1.coeffs(), p2.coeffs()));
        let zeta = Fr::rand(&mut rng);
        let mu = Fr::rand(&mut rng);
        let proof = KZG_INSTANCE
            .prove_linearized_product(&p1, &p2, &q, &zeta, &mu)
            .unwrap();
        let c1 = KZG_INSTANCE.commit_coeff_form(&p1).unwrap();
        let c2 = KZG_INSTANCE.commit_coeff_form(&p2).unwrap();
        let cq = KZG_INSTANCE.commit_coeff_form(&q).unwrap();

        assert!(verify_linearized_product(&PUBLIC_SETUP, &c1, &c2, &cq, &proof, &zeta, &mu).unwrap());
        assert!(!verify_linearized_product(
            &PUBLIC_SETUP,
            &c1,
            &c2,
            &cq,
            &proof,
            &zeta,
            &(mu + Fr::one())
        )
        .unwrap());

        // A proof carrying another q, checked against the caller's q.
        let other_q = KZG_INSTANCE.commit_coeff_form(&random_poly(14)).unwrap();
        let mut tampered = proof.clone();
        tampered.q_commitment = other_q;
        assert!(!verify_linearized_product(&PUBLIC_SETUP, &c1, &c2, &cq, &tampered, &zeta, &mu)
            .unwrap());
        // The same swap on both sides still fails the opening of k.
        assert!(!verify_linearized_product(
            &PUBLIC_SETUP,
            &c1,
            &c2,
            &other_q,
            &tampered,
            &zeta,
            &mu
        )
        .unwrap());
    }

    fn commit_evals(evals: &[Fr]) -> G1Affine {
        KZG_INSTANCE
            .commit_eval_form(&PolynomialEvalForm::new(evals.to_vec()).unwrap())
            .unwrap()
    }
}

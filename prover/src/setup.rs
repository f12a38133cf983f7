use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, RwLock},
};

use ark_bn254::{Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{CurveGroup, PrimeGroup};
use ark_ff::{Field, UniformRand};
use ark_std::{
    rand::{CryptoRng, Rng},
    One, Zero,
};
use bn254_poly_commit_primitives::{
    domain::Domain, errors::KzgError, field, helpers, setup::PublicSetup, traits::SetupVectors,
};
use rayon::prelude::*;
use tracing::debug;

/// Owner of the setup secret `τ` and of the vectors derived from it.
///
/// `G1·τ^i` and `G2·τ^i` are produced lazily: a request for a longer vector
/// than has been served so far computes only the missing suffix, and an index
/// once computed is never recomputed. Lagrange vectors are cached per domain.
///
/// `τ` is never returned, serialized or printed. Verifier-side code uses a
/// [PublicSetup] obtained from [TrustedSetup::public_setup] instead.
pub struct TrustedSetup {
    tau: Fr,
    g1: RwLock<Vec<G1Affine>>,
    g2: RwLock<Vec<G2Affine>>,
    lagrange: RwLock<HashMap<(usize, Fr), Arc<Vec<G1Affine>>>>,
}

impl fmt::Debug for TrustedSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g1_len = self.g1.read().map(|v| v.len()).unwrap_or_default();
        let g2_len = self.g2.read().map(|v| v.len()).unwrap_or_default();
        f.debug_struct("TrustedSetup")
            .field("tau", &"<secret>")
            .field("g1_len", &g1_len)
            .field("g2_len", &g2_len)
            .finish()
    }
}

impl TrustedSetup {
    /// Samples `τ` uniformly from the nonzero field elements.
    pub fn new<R: Rng + CryptoRng>(rng: &mut R) -> Self {
        let mut tau = Fr::rand(rng);
        while tau.is_zero() {
            tau = Fr::rand(rng);
        }
        Self::with_tau(tau)
    }

    /// Deterministic setup from a known secret. Only meant for tests and
    /// benchmarks: anyone holding `tau` can forge openings.
    pub fn from_secret(tau: Fr) -> Result<Self, KzgError> {
        if tau.is_zero() {
            return Err(KzgError::SetupError("setup secret must be nonzero".to_string()));
        }
        Ok(Self::with_tau(tau))
    }

    fn with_tau(tau: Fr) -> Self {
        Self {
            tau,
            g1: RwLock::new(Vec::new()),
            g2: RwLock::new(Vec::new()),
            lagrange: RwLock::new(HashMap::new()),
        }
    }

    /// Number of G1 powers computed so far.
    pub fn g1_len(&self) -> usize {
        self.g1.read().map(|v| v.len()).unwrap_or_default()
    }

    /// Number of G2 powers computed so far.
    pub fn g2_len(&self) -> usize {
        self.g2.read().map(|v| v.len()).unwrap_or_default()
    }

    /// `[τ]₂`.
    pub fn g2_tau(&self) -> Result<G2Affine, KzgError> {
        Ok(self.g2_powers(2)?[1])
    }

    /// Publishes the first `g1_len` G1 powers and `g2_len` G2 powers.
    pub fn public_setup(&self, g1_len: usize, g2_len: usize) -> Result<PublicSetup, KzgError> {
        PublicSetup::new(self.g1_powers(g1_len)?, self.g2_powers(g2_len.max(2))?)
    }

    /// Lagrange vector for `domain`, shared with the cache.
    ///
    /// Computed directly from `τ` as `L_i(τ) = (τ^n - 1)·ω_i / (n·(τ - ω_i))`,
    /// which avoids an FFT over G1.
    pub fn lagrange_g1_shared(&self, domain: &Domain) -> Result<Arc<Vec<G1Affine>>, KzgError> {
        let key = (domain.size(), domain.generator());
        if let Some(cached) = self.lagrange.read().map_err(poisoned)?.get(&key) {
            return Ok(Arc::clone(cached));
        }

        let mut cache = self.lagrange.write().map_err(poisoned)?;
        if let Some(cached) = cache.get(&key) {
            return Ok(Arc::clone(cached));
        }
        let scalars = lagrange_scalars(&self.tau, domain)?;
        let points = Arc::new(scalar_multiples(G1Projective::generator(), &scalars));
        debug!(domain_size = domain.size(), "computed Lagrange setup vector");
        cache.insert(key, Arc::clone(&points));
        Ok(points)
    }
}

impl SetupVectors for TrustedSetup {
    fn g1_powers(&self, len: usize) -> Result<Vec<G1Affine>, KzgError> {
        extend_powers(&self.g1, &self.tau, G1Projective::generator(), len, "G1")
    }

    fn g2_powers(&self, len: usize) -> Result<Vec<G2Affine>, KzgError> {
        extend_powers(&self.g2, &self.tau, G2Projective::generator(), len, "G2")
    }

    fn lagrange_g1(&self, domain: &Domain) -> Result<Vec<G1Affine>, KzgError> {
        Ok(self.lagrange_g1_shared(domain)?.as_ref().clone())
    }
}

/// Returns the first `len` entries of `cache`, appending `generator·τ^i` for
/// every missing index under the write lock. Readers that find the cache
/// long enough never take the write lock.
fn extend_powers<G>(
    cache: &RwLock<Vec<G::Affine>>,
    tau: &Fr,
    generator: G,
    len: usize,
    group: &str,
) -> Result<Vec<G::Affine>, KzgError>
where
    G: CurveGroup + PrimeGroup<ScalarField = Fr>,
{
    {
        let cached = cache.read().map_err(poisoned)?;
        if cached.len() >= len {
            return Ok(cached[..len].to_vec());
        }
    }

    let mut cached = cache.write().map_err(poisoned)?;
    let old_len = cached.len();
    // another writer may have extended the cache while we waited
    if old_len < len {
        let first = tau.pow([old_len as u64]);
        let mut scalars = helpers::compute_powers(tau, len - old_len);
        scalars.iter_mut().for_each(|s| *s *= first);
        cached.extend(scalar_multiples(generator, &scalars));
        debug!(group, old_len, new_len = len, "extended setup vector");
    }
    Ok(cached[..len].to_vec())
}

fn scalar_multiples<G>(generator: G, scalars: &[Fr]) -> Vec<G::Affine>
where
    G: CurveGroup + PrimeGroup<ScalarField = Fr>,
{
    let projective: Vec<G> = scalars.par_iter().map(|s| generator * s).collect();
    G::normalize_batch(&projective)
}

/// `L_i(τ)` for every `ω_i` in `domain`. If `τ` happens to be a domain point
/// the basis degenerates to an indicator vector.
fn lagrange_scalars(tau: &Fr, domain: &Domain) -> Result<Vec<Fr>, KzgError> {
    let n = Fr::from(domain.size() as u64);
    let vanishing = domain.evaluate_vanishing_polynomial(tau);
    if vanishing.is_zero() {
        return Ok(domain
            .elements()
            .iter()
            .map(|w| if w == tau { Fr::one() } else { Fr::zero() })
            .collect());
    }

    let denominators: Vec<Fr> = domain.elements().iter().map(|w| n * (*tau - w)).collect();
    let inverses = field::multi_inv(&denominators)?;
    Ok(domain
        .elements()
        .iter()
        .zip(&inverses)
        .map(|(w, inv)| vanishing * w * inv)
        .collect())
}

fn poisoned<T>(_: T) -> KzgError {
    KzgError::SetupError("setup cache lock poisoned".to_string())
}

//! Seedable random-number streams for round generation.
//!
//! Each simulation concern draws from its own named stream so that consuming
//! extra randomness in one place never shifts the draws seen by another.
//! Stream seeds are derived from a single user-visible seed with
//! domain-separated HMAC-SHA256.

use std::cell::{RefCell, RefMut};

use hmac::{Hmac, Mac};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sha2::Sha256;

/// Named RNG streams consumed while generating one round.
#[derive(Debug, Clone)]
pub struct RoundRngs {
    round: RefCell<CountingRng<SmallRng>>,
    hole: RefCell<CountingRng<SmallRng>>,
}

impl RoundRngs {
    /// Construct the bundle from a user-visible seed.
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        let round = CountingRng::new(derive_stream_seed(seed, b"round"));
        let hole = CountingRng::new(derive_stream_seed(seed, b"hole"));
        Self {
            round: RefCell::new(round),
            hole: RefCell::new(hole),
        }
    }

    /// Construct the bundle from process entropy (the production path).
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_user_seed(rand::random())
    }

    /// Access the round-level variance stream.
    #[must_use]
    pub fn round(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.round.borrow_mut()
    }

    /// Access the hole-level variance stream.
    #[must_use]
    pub fn hole(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.hole.borrow_mut()
    }
}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl CountingRng<SmallRng> {
    fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl<R: rand::RngCore> CountingRng<R> {
    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: rand::RngCore> rand::RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()).expect("64-bit seed is valid key");
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let seed_bytes: [u8; 8] = digest[..8].try_into().expect("digest slice length");
    u64::from_le_bytes(seed_bytes)
}

/// Draw from a normal distribution via the Box-Muller transform.
pub fn gauss<R: Rng>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    // 1 - u keeps the first uniform in (0, 1] so the log stays finite.
    let u1 = 1.0 - rng.r#gen::<f64>();
    let u2 = rng.r#gen::<f64>();
    let z0 = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
    z0 * std_dev + mean
}

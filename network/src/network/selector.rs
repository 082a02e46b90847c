//! Strategies for picking which host a request goes to.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks an index into a network's host list.
///
/// `len` is always at least 1. Implementations should return a value in
/// `0..len`; anything larger is wrapped back into range by the caller.
pub trait HostSelector: Send + Sync {
    fn select(&self, len: usize) -> usize;
}

/// Uniformly random selection backed by the thread local generator. This is the
/// default for every [`Network`](crate::Network).
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl HostSelector for RandomSelector {
    fn select(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniformly random selection from a seeded generator, so the same seed
/// always produces the same sequence of hosts.
#[derive(Debug)]
pub struct SeededSelector {
    rng: Mutex<StdRng>,
}

impl SeededSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl HostSelector for SeededSelector {
    fn select(&self, len: usize) -> usize {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

impl<F> HostSelector for F
where
    F: Fn(usize) -> usize + Send + Sync,
{
    fn select(&self, len: usize) -> usize {
        self(len)
    }
}

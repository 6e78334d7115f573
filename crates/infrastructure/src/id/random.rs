use dnsprobe_application::ports::MessageIdGenerator;
use ring::rand::{SecureRandom, SystemRandom};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Message IDs from a fast PRNG seeded once from the OS.
///
/// Seeding happens lazily on the first call, under the same lock that guards
/// generation, so concurrent first calls seed exactly once.
pub struct RandomIdGenerator {
    rng: Mutex<Option<fastrand::Rng>>,
}

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(None),
        }
    }

    /// Generator with a fixed seed, for reproducible sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(Some(fastrand::Rng::with_seed(seed))),
        }
    }

    fn seeded_rng() -> fastrand::Rng {
        let mut seed = [0u8; 8];
        match SystemRandom::new().fill(&mut seed) {
            Ok(()) => {
                debug!("Message ID generator seeded from system randomness");
                fastrand::Rng::with_seed(u64::from_be_bytes(seed))
            }
            Err(_) => {
                warn!("System randomness unavailable, seeding message IDs from fallback entropy");
                fastrand::Rng::new()
            }
        }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageIdGenerator for RandomIdGenerator {
    fn next_id(&self) -> u16 {
        // A poisoned lock still holds a usable generator.
        let mut guard = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        guard.get_or_insert_with(Self::seeded_rng).u16(..)
    }
}

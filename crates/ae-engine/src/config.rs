//! Configuration for an encounter engine session.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for rolling encounters.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible rolls and document picks. `None` seeds
    /// from OS entropy.
    pub seed: Option<u64>,
    /// User the chat whisper is addressed to.
    pub user: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            user: "gamemaster".to_string(),
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the invoking user.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Build the random number generator this configuration describes.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

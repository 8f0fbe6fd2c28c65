//! Randomised rejection search for a valid cycle.

use std::num::NonZeroUsize;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, trace, warn};

use crate::arrangement::Violation;
use crate::error::DrawError;

/// Number of shuffles tried before a draw gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

const DEFAULT_MAX_ATTEMPTS_NON_ZERO: NonZeroUsize =
    match NonZeroUsize::new(DEFAULT_MAX_ATTEMPTS) {
        Some(attempts) => attempts,
        None => NonZeroUsize::MIN,
    };

/// Tuning for the arrangement search.
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
/// use secret_santa::{DEFAULT_MAX_ATTEMPTS, SearchConfig};
///
/// assert_eq!(SearchConfig::default().max_attempts(), DEFAULT_MAX_ATTEMPTS);
///
/// let attempts = NonZeroUsize::new(50).expect("non-zero");
/// assert_eq!(SearchConfig::new(attempts).max_attempts(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    max_attempts: NonZeroUsize,
}

impl SearchConfig {
    /// Creates a configuration capping the search at `max_attempts` shuffles.
    #[must_use]
    pub const fn new(max_attempts: NonZeroUsize) -> Self {
        Self { max_attempts }
    }

    /// Returns the maximum number of shuffles per draw.
    #[must_use]
    pub const fn max_attempts(self) -> usize {
        self.max_attempts.get()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS_NON_ZERO)
    }
}

/// Shuffles `names` until `first_violation` accepts a candidate cycle.
///
/// Every attempt starts again from the registration order before shuffling,
/// so a seeded RNG reproduces the same sequence of candidates.
pub(crate) fn find_cycle<R, F>(
    names: &[String],
    config: SearchConfig,
    rng: &mut R,
    mut first_violation: F,
) -> Result<Vec<String>, DrawError>
where
    R: Rng + ?Sized,
    F: FnMut(&[&str]) -> Option<Violation>,
{
    let max_attempts = config.max_attempts();
    let mut candidate: Vec<&str> = Vec::with_capacity(names.len());

    for attempt in 1..=max_attempts {
        candidate.clear();
        candidate.extend(names.iter().map(String::as_str));
        candidate.shuffle(rng);

        match first_violation(&candidate) {
            None => {
                debug!(attempt, participants = names.len(), "found valid arrangement");
                return Ok(candidate.into_iter().map(str::to_owned).collect());
            }
            Some(violation) => trace!(attempt, ?violation, "rejected arrangement"),
        }
    }

    warn!(
        attempts = max_attempts,
        participants = names.len(),
        "no valid arrangement found; constraints may be too restrictive"
    );
    Err(DrawError::ExhaustedAttempts {
        attempts: max_attempts,
    })
}

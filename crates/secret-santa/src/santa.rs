//! Participant registration and constraint-aware drawing.

use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use crate::arrangement::{Pairings, Violation, successors};
use crate::error::DrawError;
use crate::search::{SearchConfig, find_cycle};

/// Per-participant pairing rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Constraints {
    enforced: Option<String>,
    blacklist: Vec<String>,
}

/// A Secret Santa group: participants, their pairing rules, and the draw.
///
/// Participants are registered one at a time; each registration hands back a
/// [`ParticipantConfig`] for declaring that participant's enforced receiver
/// and blacklist. Drawing never mutates the group, so [`Self::generate`] can
/// be called repeatedly for independent draws.
///
/// # Example
///
/// ```
/// use secret_santa::SecretSanta;
///
/// let mut santa = SecretSanta::new();
/// santa.register("Ada").expect("register").enforce("Grace");
/// santa.register("Grace").expect("register").blacklist("Ada");
/// santa.register("Alan").expect("register");
///
/// let pairings = santa.generate().expect("constraints are satisfiable");
///
/// assert_eq!(pairings.receiver_for("Ada"), Some("Grace"));
/// assert_eq!(pairings.receiver_for("Grace"), Some("Alan"));
/// assert_eq!(pairings.receiver_for("Alan"), Some("Ada"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretSanta {
    names: Vec<String>,
    constraints: HashMap<String, Constraints>,
    config: SearchConfig,
}

impl SecretSanta {
    /// Creates an empty group using the default search configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty group using the given search configuration.
    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replaces the search configuration used by later draws.
    pub const fn set_search_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Returns the search configuration used by draws.
    #[must_use]
    pub const fn search_config(&self) -> SearchConfig {
        self.config
    }

    /// Registers a participant and returns a handle for their rules.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyParticipantName`] for a blank name and
    /// [`DrawError::DuplicateParticipant`] if the name is already registered.
    /// The group is left untouched on failure.
    pub fn register(
        &mut self,
        name: impl Into<String>,
    ) -> Result<ParticipantConfig<'_>, DrawError> {
        let owned = name.into();
        if owned.trim().is_empty() {
            return Err(DrawError::EmptyParticipantName);
        }
        if self.constraints.contains_key(&owned) {
            return Err(DrawError::DuplicateParticipant { name: owned });
        }

        self.names.push(owned.clone());
        let constraints = self.constraints.entry(owned).or_default();
        Ok(ParticipantConfig { constraints })
    }

    /// Returns a handle for an already registered participant's rules.
    pub fn configure(&mut self, name: &str) -> Option<ParticipantConfig<'_>> {
        self.constraints
            .get_mut(name)
            .map(|constraints| ParticipantConfig { constraints })
    }

    /// Returns participants in registration order.
    #[must_use]
    pub fn participants(&self) -> &[String] {
        &self.names
    }

    /// Returns the receiver `giver` is forced to give to, if any.
    #[must_use]
    pub fn enforced_receiver(&self, giver: &str) -> Option<&str> {
        self.constraints
            .get(giver)
            .and_then(|constraints| constraints.enforced.as_deref())
    }

    /// Returns the receivers `giver` must not give to, in declaration order.
    #[must_use]
    pub fn blacklist_of(&self, giver: &str) -> &[String] {
        self.constraints
            .get(giver)
            .map(|constraints| constraints.blacklist.as_slice())
            .unwrap_or_default()
    }

    /// Draws pairings using the thread-local RNG.
    ///
    /// # Errors
    ///
    /// See [`Self::generate_with_rng`].
    pub fn generate(&self) -> Result<Pairings, DrawError> {
        self.generate_with_rng(&mut rand::rng())
    }

    /// Draws pairings deterministically from `seed`.
    ///
    /// # Errors
    ///
    /// See [`Self::generate_with_rng`].
    pub fn generate_seeded(&self, seed: u64) -> Result<Pairings, DrawError> {
        self.generate_with_rng(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Draws pairings using the supplied RNG for shuffling.
    ///
    /// Enforced receivers are checked against the participant list before
    /// any randomness is consumed. The search then shuffles the participants
    /// up to the configured attempt cap, accepting the first cycle in which
    /// nobody gives to themselves, every enforced pairing holds, and no giver
    /// is paired with someone on their blacklist.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::UnresolvedEnforcement`] if an enforced receiver
    /// was never registered, or [`DrawError::ExhaustedAttempts`] if no valid
    /// cycle turned up within the attempt cap.
    pub fn generate_with_rng<R>(&self, rng: &mut R) -> Result<Pairings, DrawError>
    where
        R: Rng + ?Sized,
    {
        self.validate_enforcements()?;
        let arrangement = find_cycle(&self.names, self.config, rng, |candidate| {
            self.check_arrangement(candidate)
        })?;
        Ok(Pairings::from_arrangement(arrangement))
    }

    /// Returns the first rule `arrangement` breaks when read as a cycle.
    ///
    /// Positions are checked from the start. The arrangement is not required
    /// to contain every registered participant; only the pairing rules are
    /// checked.
    #[must_use]
    pub fn check_arrangement(&self, arrangement: &[&str]) -> Option<Violation> {
        successors(arrangement).find_map(|(giver, receiver)| self.violation_for(giver, receiver))
    }

    fn violation_for(&self, giver: &str, receiver: &str) -> Option<Violation> {
        if giver == receiver {
            return Some(Violation::SelfPairing {
                giver: giver.to_owned(),
            });
        }
        if let Some(expected) = self.enforced_receiver(giver) {
            if expected != receiver {
                return Some(Violation::EnforcedMismatch {
                    giver: giver.to_owned(),
                    expected: expected.to_owned(),
                    actual: receiver.to_owned(),
                });
            }
        }
        if self.blacklist_of(giver).iter().any(|banned| banned == receiver) {
            return Some(Violation::Blacklisted {
                giver: giver.to_owned(),
                receiver: receiver.to_owned(),
            });
        }
        None
    }

    fn validate_enforcements(&self) -> Result<(), DrawError> {
        for giver in &self.names {
            let Some(receiver) = self.enforced_receiver(giver) else {
                continue;
            };
            if !self.constraints.contains_key(receiver) {
                warn!(%giver, %receiver, "enforced receiver is not a participant");
                return Err(DrawError::UnresolvedEnforcement {
                    giver: giver.clone(),
                    receiver: receiver.to_owned(),
                });
            }
        }
        Ok(())
    }
}

/// Chainable handle for declaring one participant's pairing rules.
///
/// Obtained from [`SecretSanta::register`] or [`SecretSanta::configure`].
/// Receivers named here need not be registered yet; enforced receivers are
/// resolved when the group is drawn.
#[derive(Debug)]
pub struct ParticipantConfig<'a> {
    constraints: &'a mut Constraints,
}

impl ParticipantConfig<'_> {
    /// Forces this participant to give to `other`, replacing any earlier
    /// enforced receiver.
    pub fn enforce(&mut self, other: impl Into<String>) -> &mut Self {
        self.constraints.enforced = Some(other.into());
        self
    }

    /// Forbids this participant from giving to `other`. Repeats are ignored.
    pub fn blacklist(&mut self, other: impl Into<String>) -> &mut Self {
        let receiver = other.into();
        if !self.constraints.blacklist.contains(&receiver) {
            self.constraints.blacklist.push(receiver);
        }
        self
    }
}

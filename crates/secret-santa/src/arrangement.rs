//! Cyclic arrangements and the pairings derived from them.
//!
//! An arrangement is a permutation of participants read as a directed cycle:
//! each participant gives to the one after them, and the last wraps round to
//! the first.

use serde::{Serialize, Serializer};

/// The first rule a candidate arrangement breaks, scanned in cycle order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A participant would give to themselves.
    SelfPairing {
        /// The participant paired with themselves.
        giver: String,
    },
    /// A giver's enforced receiver is not their successor in the cycle.
    EnforcedMismatch {
        /// Participant carrying the enforced pairing.
        giver: String,
        /// Receiver the giver must be paired with.
        expected: String,
        /// Receiver the arrangement actually assigned.
        actual: String,
    },
    /// A giver would give to someone on their blacklist.
    Blacklisted {
        /// Participant whose blacklist was hit.
        giver: String,
        /// The forbidden receiver.
        receiver: String,
    },
}

/// Yields `(giver, receiver)` for every position of a cyclic arrangement.
///
/// The receiver of position `i` is position `i + 1`, wrapping to the start,
/// so a single-element arrangement yields that element paired with itself
/// and an empty arrangement yields nothing.
pub(crate) fn successors<T>(arrangement: &[T]) -> impl Iterator<Item = (&T, &T)> {
    arrangement
        .iter()
        .zip(arrangement.iter().cycle().skip(1))
}

/// Giver to receiver assignments produced by a successful draw.
///
/// Pairings keep the underlying arrangement so they can be walked in cycle
/// order. Serialises as a JSON object mapping each giver to their receiver.
///
/// # Example
///
/// ```
/// use secret_santa::SecretSanta;
///
/// let mut santa = SecretSanta::new();
/// santa.register("Ada").expect("register");
/// santa.register("Grace").expect("register");
///
/// let pairings = santa.generate_seeded(7).expect("two people always pair up");
///
/// assert_eq!(pairings.receiver_for("Ada"), Some("Grace"));
/// assert_eq!(pairings.receiver_for("Grace"), Some("Ada"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairings {
    arrangement: Vec<String>,
}

impl Pairings {
    pub(crate) const fn from_arrangement(arrangement: Vec<String>) -> Self {
        Self { arrangement }
    }

    /// Returns the receiver assigned to `giver`, if `giver` took part.
    #[must_use]
    pub fn receiver_for(&self, giver: &str) -> Option<&str> {
        self.iter()
            .find(|(candidate, _)| *candidate == giver)
            .map(|(_, receiver)| receiver)
    }

    /// Iterates `(giver, receiver)` pairs in cycle order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        successors(&self.arrangement).map(|(giver, receiver)| (giver.as_str(), receiver.as_str()))
    }

    /// Returns the participants in the order they give to one another.
    #[must_use]
    pub fn arrangement(&self) -> &[String] {
        &self.arrangement
    }

    /// Returns the number of pairings.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.arrangement.len()
    }

    /// Returns `true` if the draw had no participants.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.arrangement.is_empty()
    }
}

impl Serialize for Pairings {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

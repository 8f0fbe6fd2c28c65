//! Roster files describing a group and its pairing rules.
//!
//! A roster is a versioned JSON document listing participants in the order
//! they should be registered, each with an optional enforced receiver and a
//! blacklist. It can also cap the number of search attempts.

use std::num::NonZeroUsize;

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::Deserialize;

use crate::error::RosterError;
use crate::santa::SecretSanta;
use crate::search::SearchConfig;

/// Current supported roster version.
const SUPPORTED_VERSION: u32 = 1;

/// A parsed roster ready to be replayed into a [`SecretSanta`].
///
/// # Example
///
/// ```
/// use secret_santa::Roster;
///
/// let json = r#"{
///     "version": 1,
///     "participants": [
///         {"name": "Ada", "enforce": "Grace"},
///         {"name": "Grace", "blacklist": ["Ada"]},
///         {"name": "Alan"}
///     ]
/// }"#;
///
/// let roster = Roster::from_json(json).expect("valid roster");
/// let santa = roster.build().expect("unique names");
///
/// assert_eq!(santa.participants().len(), 3);
/// assert_eq!(santa.enforced_receiver("Ada"), Some("Grace"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    version: u32,
    max_attempts: Option<NonZeroUsize>,
    participants: Vec<RosterEntry>,
}

impl Roster {
    /// Parses a roster from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] if:
    /// - The JSON is malformed or missing required fields
    /// - The version is unsupported
    /// - `maxAttempts` is zero
    /// - The participants array is empty
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let raw: RawRoster = serde_json::from_str(json).map_err(|e| RosterError::ParseError {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    /// Loads a roster from a JSON file relative to `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, RosterError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| RosterError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawRoster) -> Result<Self, RosterError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RosterError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let max_attempts = raw
            .max_attempts
            .map(|attempts| NonZeroUsize::new(attempts).ok_or(RosterError::InvalidMaxAttempts))
            .transpose()?;

        if raw.participants.is_empty() {
            return Err(RosterError::EmptyParticipants);
        }

        let participants = raw
            .participants
            .into_iter()
            .map(|p| RosterEntry {
                name: p.name,
                enforce: p.enforce,
                blacklist: p.blacklist,
            })
            .collect();

        Ok(Self {
            version: raw.version,
            max_attempts,
            participants,
        })
    }

    /// Returns the roster version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the attempt cap declared by the roster, if any.
    #[must_use]
    pub const fn max_attempts(&self) -> Option<NonZeroUsize> {
        self.max_attempts
    }

    /// Returns the participant entries in file order.
    #[must_use]
    pub fn participants(&self) -> &[RosterEntry] {
        &self.participants
    }

    /// Registers every participant and their rules on a fresh group.
    ///
    /// Enforced receivers are not resolved here; an entry naming someone
    /// absent from the roster only fails once the group is drawn.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Draw`] if a name is blank or listed twice.
    pub fn build(&self) -> Result<SecretSanta, RosterError> {
        let mut santa = self.max_attempts.map_or_else(SecretSanta::new, |attempts| {
            SecretSanta::with_config(SearchConfig::new(attempts))
        });

        for entry in &self.participants {
            let mut handle = santa.register(entry.name.clone())?;
            if let Some(receiver) = &entry.enforce {
                handle.enforce(receiver.clone());
            }
            for banned in &entry.blacklist {
                handle.blacklist(banned.clone());
            }
        }

        Ok(santa)
    }
}

/// One participant line of a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    name: String,
    enforce: Option<String>,
    blacklist: Vec<String>,
}

impl RosterEntry {
    /// Returns the participant name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the enforced receiver, if declared.
    #[must_use]
    pub fn enforce(&self) -> Option<&str> {
        self.enforce.as_deref()
    }

    /// Returns the blacklisted receivers as written in the file.
    #[must_use]
    pub fn blacklist(&self) -> &[String] {
        &self.blacklist
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRoster {
    version: u32,
    #[serde(default)]
    max_attempts: Option<usize>,
    participants: Vec<RawRosterEntry>,
}

/// Raw JSON representation of a roster entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRosterEntry {
    name: String,
    #[serde(default)]
    enforce: Option<String>,
    #[serde(default)]
    blacklist: Vec<String>,
}

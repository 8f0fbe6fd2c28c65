//! Error types for the secret-santa crate.
//!
//! Drawing errors and roster errors are kept apart so callers that build a
//! group programmatically never see file or JSON failures.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while registering participants or generating pairings.
///
/// Every variant is terminal for the call that raised it; no partial
/// pairings are ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// A participant with this name is already registered.
    #[error("cannot redefine participant '{name}'")]
    DuplicateParticipant {
        /// The name that was registered twice.
        name: String,
    },

    /// The supplied participant name is empty or whitespace-only.
    #[error("participant names must not be empty")]
    EmptyParticipantName,

    /// A giver is enforced to give to someone who was never registered.
    #[error(
        "'{giver}' is paired with '{receiver}', which hasn't been declared as a possible pairing"
    )]
    UnresolvedEnforcement {
        /// Participant carrying the enforced pairing.
        giver: String,
        /// Enforced receiver missing from the participant list.
        receiver: String,
    },

    /// No valid cycle was found within the attempt budget.
    #[error(
        "could not generate a valid circular arrangement after {attempts} attempts; \
         the enforced pairings or blacklists may be too restrictive, try removing some rules"
    )]
    ExhaustedAttempts {
        /// Number of randomised attempts made before giving up.
        attempts: usize,
    },
}

/// Errors that can occur when loading a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The roster file could not be read.
    #[error("failed to read roster file at '{path}': {message}")]
    IoError {
        /// Path to the roster file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The roster JSON is malformed or missing required fields.
    #[error("invalid roster JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The roster version is not supported.
    #[error("unsupported roster version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the roster.
        actual: u32,
    },

    /// The roster lists no participants.
    #[error("roster contains no participants")]
    EmptyParticipants,

    /// The roster caps the search at zero attempts.
    #[error("maxAttempts must be at least 1")]
    InvalidMaxAttempts,

    /// Replaying the roster into a builder failed.
    #[error("roster error: {source}")]
    Draw {
        /// Underlying drawing error.
        #[from]
        #[source]
        source: DrawError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_participant_names_the_identifier() {
        let err = DrawError::DuplicateParticipant {
            name: "Ada".to_owned(),
        };
        assert_eq!(err.to_string(), "cannot redefine participant 'Ada'");
    }

    #[test]
    fn unresolved_enforcement_names_both_sides() {
        let err = DrawError::UnresolvedEnforcement {
            giver: "Ada".to_owned(),
            receiver: "Zed".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "'Ada' is paired with 'Zed', which hasn't been declared as a possible pairing"
        );
    }

    #[test]
    fn exhausted_attempts_reports_count_and_guidance() {
        let err = DrawError::ExhaustedAttempts { attempts: 1000 };
        let message = err.to_string();
        assert!(message.contains("after 1000 attempts"));
        assert!(message.contains("too restrictive"));
    }

    #[test]
    fn roster_io_error_formats_correctly() {
        let err = RosterError::IoError {
            path: Utf8PathBuf::from("/tmp/roster.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read roster file at '/tmp/roster.json': file not found"
        );
    }

    #[test]
    fn roster_version_error_formats_correctly() {
        let err = RosterError::UnsupportedVersion {
            expected: 1,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "unsupported roster version: expected 1, found 3"
        );
    }

    #[test]
    fn roster_wraps_draw_errors() {
        let err = RosterError::from(DrawError::EmptyParticipantName);
        assert_eq!(
            err.to_string(),
            "roster error: participant names must not be empty"
        );
    }
}

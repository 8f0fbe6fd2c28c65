//! Error types for the draw CLI.

use thiserror::Error;

use crate::error::{DrawError, RosterError};

/// Errors surfaced by the CLI parsing and draw flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Roster path was not supplied.
    #[error("missing required flag: --roster")]
    MissingRosterPath,
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognized.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// The roster path does not name a file.
    #[error("roster path must name a file: {path}")]
    InvalidRosterPath {
        /// Path that was supplied.
        path: String,
    },
    /// Pairings could not be rendered as JSON.
    #[error("failed to render pairings: {message}")]
    RenderError {
        /// Serializer error message.
        message: String,
    },
    /// The roster could not be loaded.
    #[error(transparent)]
    Roster(#[from] RosterError),
    /// The draw itself failed.
    #[error("draw failed: {source}")]
    Draw {
        /// Underlying drawing error.
        #[from]
        #[source]
        source: DrawError,
    },
}

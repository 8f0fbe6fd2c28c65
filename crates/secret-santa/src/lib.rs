//! Random Secret Santa pairings under per-participant constraints.
//!
//! Participants are arranged in a single gift-giving cycle: everyone gives
//! to the next person and the last gives to the first. Each participant may
//! be forced to give to a specific person, or barred from giving to others.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Registering participants with a chainable per-participant handle
//! - Enforced receivers and blacklists, resolved when drawing
//! - Randomised rejection search with a bounded attempt cap
//! - Reproducible draws from a seed or any caller-supplied RNG
//! - Loading groups from versioned JSON roster files
//!
//! The search shuffles participants and keeps the first cycle in which nobody
//! gives to themselves, every enforced pairing holds, and no blacklist is hit.
//! Over-constrained groups fail with [`DrawError::ExhaustedAttempts`] once the
//! cap is reached rather than searching forever.
//!
//! # Example
//!
//! ```
//! use secret_santa::{DrawError, SecretSanta};
//!
//! let mut santa = SecretSanta::new();
//! santa.register("Ada")?.enforce("Grace");
//! santa.register("Grace")?.blacklist("Ada");
//! santa.register("Alan")?;
//!
//! let pairings = santa.generate_seeded(2026)?;
//!
//! assert_eq!(pairings.receiver_for("Ada"), Some("Grace"));
//! assert_eq!(pairings.len(), 3);
//! # Ok::<(), DrawError>(())
//! ```

mod arrangement;
pub mod draw_cli;
mod error;
mod roster;
mod santa;
mod search;

pub use arrangement::{Pairings, Violation};
pub use error::{DrawError, RosterError};
pub use roster::{Roster, RosterEntry};
pub use santa::{ParticipantConfig, SecretSanta};
pub use search::{DEFAULT_MAX_ATTEMPTS, SearchConfig};

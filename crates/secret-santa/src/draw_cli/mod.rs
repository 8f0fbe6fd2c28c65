//! CLI support for drawing pairings from a roster file.
//!
//! The binary delegates to these functions so argument handling, drawing, and
//! rendering can be exercised in tests without spawning a subprocess.

mod error;

use std::fmt;
use std::fmt::Write as _;
use std::num::NonZeroUsize;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::info;

pub use self::error::CliError;
use crate::arrangement::Pairings;
use crate::error::RosterError;
use crate::roster::Roster;
use crate::search::SearchConfig;

/// How drawn pairings are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `giver -> receiver` line per pairing.
    #[default]
    Text,
    /// A pretty-printed JSON object mapping givers to receivers.
    Json,
}

/// Parsed options for the draw CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    roster_path: Utf8PathBuf,
    seed: Option<u64>,
    max_attempts: Option<NonZeroUsize>,
    format: OutputFormat,
}

impl Options {
    /// Returns the roster path supplied on the command line.
    ///
    /// # Example
    ///
    /// ```
    /// use secret_santa::draw_cli::{ParseOutcome, parse_args};
    ///
    /// let args = vec!["--roster".to_string(), "roster.json".to_string()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert_eq!(options.roster_path(), "roster.json");
    /// ```
    #[must_use]
    pub fn roster_path(&self) -> &Utf8Path {
        &self.roster_path
    }

    /// Returns the RNG seed, if the draw should be reproducible.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the attempt cap overriding the roster's, if any.
    #[must_use]
    pub const fn max_attempts(&self) -> Option<NonZeroUsize> {
        self.max_attempts
    }

    /// Returns the requested output format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Parses CLI arguments into draw options.
///
/// # Errors
///
/// Returns [`CliError`] when `--roster` is missing, a flag lacks its value,
/// a number fails to parse, or an argument is not recognised.
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut roster_path: Option<Utf8PathBuf> = None;
    let mut seed: Option<u64> = None;
    let mut max_attempts: Option<NonZeroUsize> = None;
    let mut format = OutputFormat::Text;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--roster" => {
                let value = next_value(&mut args, "--roster")?;
                roster_path = Some(Utf8PathBuf::from(value));
            }
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                seed = Some(parse_number(&value, "--seed")?);
            }
            "--max-attempts" => {
                let value = next_value(&mut args, "--max-attempts")?;
                max_attempts = Some(parse_number(&value, "--max-attempts")?);
            }
            "--json" => format = OutputFormat::Json,
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    let resolved_roster_path = roster_path.ok_or(CliError::MissingRosterPath)?;
    Ok(ParseOutcome::Options(Options {
        roster_path: resolved_roster_path,
        seed,
        max_attempts,
        format,
    }))
}

/// Loads the roster named by `options` and draws pairings from it.
///
/// A `--max-attempts` override replaces any cap declared in the roster.
///
/// # Errors
///
/// Returns [`CliError`] when the roster cannot be read, parsed, or built, or
/// when the draw itself fails.
pub fn run_draw(options: &Options) -> Result<Pairings, CliError> {
    let roster = load_roster(&options.roster_path)?;
    let mut santa = roster.build()?;
    if let Some(attempts) = options.max_attempts {
        santa.set_search_config(SearchConfig::new(attempts));
    }

    let pairings = match options.seed {
        Some(seed) => santa.generate_seeded(seed)?,
        None => santa.generate()?,
    };

    info!(
        participants = pairings.len(),
        seeded = options.seed.is_some(),
        "drew pairings"
    );
    Ok(pairings)
}

/// Renders pairings in the requested format.
///
/// # Errors
///
/// Returns [`CliError::RenderError`] if JSON serialization fails.
///
/// # Example
///
/// ```
/// use secret_santa::SecretSanta;
/// use secret_santa::draw_cli::{OutputFormat, render_pairings};
///
/// let mut santa = SecretSanta::new();
/// santa.register("Ada").expect("register");
/// santa.register("Grace").expect("register");
/// let pairings = santa.generate_seeded(1).expect("draw");
///
/// let text = render_pairings(&pairings, OutputFormat::Text).expect("render");
/// assert!(text.contains("Ada -> Grace"));
/// assert!(text.contains("Grace -> Ada"));
/// ```
pub fn render_pairings(pairings: &Pairings, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(pairings)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(pairings).map_err(|err| CliError::RenderError {
                message: err.to_string(),
            })
        }
    }
}

fn render_text(pairings: &Pairings) -> String {
    let mut out = String::new();
    for (giver, receiver) in pairings.iter() {
        // Writing into a String cannot fail.
        drop(writeln!(out, "{giver} -> {receiver}"));
    }
    out
}

fn load_roster(path: &Utf8Path) -> Result<Roster, CliError> {
    let Some(file_name) = path.file_name() else {
        return Err(CliError::InvalidRosterPath {
            path: path.to_string(),
        });
    };
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        RosterError::IoError {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })?;

    Ok(Roster::from_file(&dir, Utf8Path::new(file_name))?)
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}

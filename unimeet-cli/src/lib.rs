//! Command-line interface for the UniMeet compatibility engine.
//!
//! Commands read JSON payloads in the shapes the matching service accepts
//! and print JSON results to standard output:
//!
//! - `unimeet score <pair.json>` scores two profiles (`user1`, `user2`).
//! - `unimeet match <request.json>` ranks a candidate pool.
//! - `unimeet status` reports whether a learned model is loaded.
//!
//! Every command accepts `--model <path>` pointing at a persisted
//! [`LogisticPredictor`](unimeet_scorer::LogisticPredictor).
#![forbid(unsafe_code)]

use std::io::{BufReader, Write};

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;

mod engine;
mod error;
mod fs;
mod matching;
mod score;
mod status;

pub use error::CliError;

use engine::{DefaultEngineLoader, EngineLoader};
use matching::{MatchArgs, run_match_with};
use score::{ScoreArgs, run_score_with};
use status::{StatusArgs, run_status_with};

pub(crate) const ARG_MODEL: &str = "model";
pub(crate) const ARG_TOP_K: &str = "top-k";
pub(crate) const ARG_PAIR: &str = "pair";
pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ENV_SCORE_PAIR: &str = "UNIMEET_CMDS_SCORE_PAIR_PATH";
pub(crate) const ENV_MATCH_REQUEST: &str = "UNIMEET_CMDS_MATCH_REQUEST_PATH";

/// Run the UniMeet CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, inputs
/// cannot be read, the model cannot be loaded, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &DefaultEngineLoader, &mut stdout)
}

fn dispatch(
    command: Command,
    loader: &dyn EngineLoader,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Score(args) => run_score_with(args, loader, writer),
        Command::Match(args) => run_match_with(args, loader, writer),
        Command::Status(args) => run_status_with(args, loader, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "unimeet",
    about = "Score and rank UniMeet profiles from JSON payloads",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score the compatibility of two profiles.
    Score(ScoreArgs),
    /// Rank candidates for a target profile.
    Match(MatchArgs),
    /// Report the engine status.
    Status(StatusArgs),
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load a JSON document from disk.
pub(crate) fn load_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, CliError> {
    let file = fs::open_utf8_file(path).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `value` as pretty-printed JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;

//! `score` command: compatibility between two profiles.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use unimeet_core::UserProfile;

use crate::engine::EngineLoader;
use crate::{
    ARG_MODEL, ARG_PAIR, CliError, ENV_SCORE_PAIR, load_json, require_existing, write_json,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score two profiles read from a JSON file with `user1` and \
                 `user2` keys. The output carries both identifiers, the \
                 aggregate score and the per-dimension breakdown.",
    about = "Score the compatibility of two profiles"
)]
#[ortho_config(prefix = "UNIMEET")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing the two profiles.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) pair_path: Option<Utf8PathBuf>,
    /// Path to a persisted learned model.
    #[arg(long = ARG_MODEL, value_name = "path")]
    #[serde(default)]
    pub(crate) model: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) pair_path: Utf8PathBuf,
    pub(crate) model: Option<Utf8PathBuf>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.pair_path, ARG_PAIR)?;
        if let Some(model) = &self.model {
            require_existing(model, ARG_MODEL)?;
        }
        Ok(())
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let pair_path = args.pair_path.ok_or(CliError::MissingArgument {
            field: ARG_PAIR,
            env: ENV_SCORE_PAIR,
        })?;
        Ok(Self {
            pair_path,
            model: args.model,
        })
    }
}

/// The two profiles to compare.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub(crate) struct PairRequest {
    pub(crate) user1: UserProfile,
    pub(crate) user2: UserProfile,
}

pub(crate) fn run_score_with(
    args: ScoreArgs,
    loader: &dyn EngineLoader,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_score(&config, loader, writer)
}

pub(crate) fn execute_score(
    config: &ScoreConfig,
    loader: &dyn EngineLoader,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let pair = load_pair(&config.pair_path)?;
    let engine = loader.load(config.model.as_deref())?;
    let report = engine.report(&pair.user1, &pair.user2);
    write_json(writer, &report)
}

/// Loads a JSON-encoded [`PairRequest`] from disk.
pub(crate) fn load_pair(path: &Utf8Path) -> Result<PairRequest, CliError> {
    load_json(path)
}

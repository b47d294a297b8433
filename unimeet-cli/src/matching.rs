//! `match` command: rank a candidate pool for a target.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use unimeet_core::{MatchRequest, Matcher};
use unimeet_matcher::TopKMatcher;

use crate::engine::EngineLoader;
use crate::{
    ARG_MODEL, ARG_REQUEST, ARG_TOP_K, CliError, ENV_MATCH_REQUEST, load_json, require_existing,
    write_json,
};

/// CLI arguments for the `match` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "match",
    long_about = "Rank the candidates of a JSON match request \
                 (`target_user`, `candidate_users`, optional `top_k`) and \
                 print the best matches, highest score first.",
    about = "Rank candidates for a target profile"
)]
#[ortho_config(prefix = "UNIMEET")]
pub(crate) struct MatchArgs {
    /// Path to a JSON file containing a match request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a persisted learned model.
    #[arg(long = ARG_MODEL, value_name = "path")]
    #[serde(default)]
    pub(crate) model: Option<Utf8PathBuf>,
    /// Override the number of matches returned.
    #[arg(long = ARG_TOP_K, value_name = "count")]
    #[serde(default)]
    pub(crate) top_k: Option<usize>,
}

impl MatchArgs {
    fn into_config(self) -> Result<MatchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        MatchConfig::try_from(merged)
    }
}

/// Resolved `match` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MatchConfig {
    pub(crate) request_path: Utf8PathBuf,
    pub(crate) model: Option<Utf8PathBuf>,
    pub(crate) top_k: Option<usize>,
}

impl MatchConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)?;
        if let Some(model) = &self.model {
            require_existing(model, ARG_MODEL)?;
        }
        Ok(())
    }
}

impl TryFrom<MatchArgs> for MatchConfig {
    type Error = CliError;

    fn try_from(args: MatchArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_MATCH_REQUEST,
        })?;
        Ok(Self {
            request_path,
            model: args.model,
            top_k: args.top_k,
        })
    }
}

pub(crate) fn run_match_with(
    args: MatchArgs,
    loader: &dyn EngineLoader,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_match(&config, loader, writer)
}

pub(crate) fn execute_match(
    config: &MatchConfig,
    loader: &dyn EngineLoader,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let mut request = load_match_request(&config.request_path)?;
    if let Some(top_k) = config.top_k {
        debug!("overriding top_k {} with {top_k}", request.top_k);
        request = request.with_top_k(top_k);
    }
    request
        .validate()
        .map_err(|source| CliError::InvalidMatchRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let engine = loader.load(config.model.as_deref())?;
    let matches = TopKMatcher::new(engine).match_request(&request);
    write_json(writer, &matches)
}

/// Loads a JSON-encoded [`MatchRequest`] from disk.
pub(crate) fn load_match_request(path: &Utf8Path) -> Result<MatchRequest, CliError> {
    load_json(path)
}

//! `status` command: describe the configured engine.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::engine::EngineLoader;
use crate::{ARG_MODEL, CliError, require_existing, write_json};

/// CLI arguments for the `status` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "status",
    about = "Report the service name, version and whether a model is loaded"
)]
#[ortho_config(prefix = "UNIMEET")]
pub(crate) struct StatusArgs {
    /// Path to a persisted learned model.
    #[arg(long = ARG_MODEL, value_name = "path")]
    #[serde(default)]
    pub(crate) model: Option<Utf8PathBuf>,
}

pub(crate) fn run_status_with(
    args: StatusArgs,
    loader: &dyn EngineLoader,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    if let Some(model) = &merged.model {
        require_existing(model, ARG_MODEL)?;
    }
    let engine = loader.load(merged.model.as_deref())?;
    write_json(writer, &engine.status())
}

//! Engine construction shared by every command.

use std::sync::Arc;

use camino::Utf8Path;
use log::debug;
use unimeet_scorer::{CompatibilityEngine, LogisticPredictor};

use crate::CliError;

/// Builds the engine for the current invocation.
pub(crate) trait EngineLoader {
    fn load(&self, model: Option<&Utf8Path>) -> Result<CompatibilityEngine, CliError>;
}

/// Loads a [`LogisticPredictor`] from `--model` when one is given.
///
/// The path is expected to have been checked by the command's
/// `validate_sources`.
pub(crate) struct DefaultEngineLoader;

impl EngineLoader for DefaultEngineLoader {
    fn load(&self, model: Option<&Utf8Path>) -> Result<CompatibilityEngine, CliError> {
        let engine = CompatibilityEngine::new();
        let Some(path) = model else {
            debug!("no model configured; using rule-based scoring");
            return Ok(engine);
        };
        let predictor = LogisticPredictor::load(path)?;
        Ok(engine.with_predictor(Arc::new(predictor)))
    }
}

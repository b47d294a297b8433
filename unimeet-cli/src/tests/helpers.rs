//! Test helpers for writing payloads and stubbing engine construction.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use unimeet_core::Predictor;
use unimeet_scorer::CompatibilityEngine;

use super::*;

/// Write bytes to a UTF-8 path, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory addressed by a UTF-8 path.
pub(super) struct Workspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

/// Loader that ignores the model path and attaches a fixed predictor.
pub(super) struct StubEngineLoader {
    pub(super) predictor: Option<Arc<dyn Predictor>>,
}

impl EngineLoader for StubEngineLoader {
    fn load(&self, _model: Option<&Utf8Path>) -> Result<CompatibilityEngine, CliError> {
        let engine = CompatibilityEngine::new();
        Ok(match &self.predictor {
            Some(predictor) => engine.with_predictor(Arc::clone(predictor)),
            None => engine,
        })
    }
}

/// JSON for a profile in the service's wire shape.
pub(super) fn profile_json(user_id: &str, mbti: &str, birth_year: i32, height: u16) -> String {
    format!(
        r#"{{"user_id":"{user_id}","mbti":"{mbti}","interests":[],"personality_keywords":[],"birth_year":{birth_year},"height":{height}}}"#
    )
}

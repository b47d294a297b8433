//! Behaviour-driven step definitions driving the score CLI scenarios.

use std::cell::RefCell;
use std::sync::Arc;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use unimeet_core::CompatibilityReport;
use unimeet_core::test_support::ConstantPredictor;

use super::helpers::{StubEngineLoader, Workspace, profile_json, write_utf8};
use super::*;

struct ScoreWorld {
    workspace: Workspace,
    include_pair: RefCell<bool>,
    trained: RefCell<bool>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ScoreWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            include_pair: RefCell::new(true),
            trained: RefCell::new(false),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn pair_path(&self) -> camino::Utf8PathBuf {
        self.workspace.path("pair.json")
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["unimeet".to_owned(), "score".to_owned()];
        if *self.include_pair.borrow() {
            argv.push(self.pair_path().into_string());
        }
        argv
    }

    fn error(&self) -> std::cell::Ref<'_, Option<Result<(), CliError>>> {
        self.result.borrow()
    }
}

#[fixture]
fn world() -> ScoreWorld {
    ScoreWorld::new()
}

#[given("a pair of profiles exists on disk")]
fn pair_exists(#[from(world)] world: &ScoreWorld) {
    let payload = format!(
        r#"{{"user1":{},"user2":{}}}"#,
        profile_json("alice", "INTJ", 2000, 175),
        profile_json("bora", "ENFP", 2000, 175)
    );
    write_utf8(&world.pair_path(), payload.as_bytes());
}

#[given("a trained model is configured")]
fn trained_model(#[from(world)] world: &ScoreWorld) {
    *world.trained.borrow_mut() = true;
}

#[given("the pair file contains invalid JSON")]
fn pair_is_invalid(#[from(world)] world: &ScoreWorld) {
    write_utf8(&world.pair_path(), b"{ not valid json");
}

#[given("I omit the input path")]
fn omit_pair(#[from(world)] world: &ScoreWorld) {
    *world.include_pair.borrow_mut() = false;
}

#[when("I run the score command")]
fn run_score_command(#[from(world)] world: &ScoreWorld) {
    let loader = StubEngineLoader {
        predictor: if *world.trained.borrow() {
            Some(Arc::new(ConstantPredictor(0.77)))
        } else {
            None
        },
    };
    let parsed = Cli::try_parse_from(world.build_command_line()).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| {
        let mut buffer = world.stdout.borrow_mut();
        dispatch(cli.command, &loader, &mut *buffer)
    });
    world.result.replace(Some(outcome));
}

fn report(world: &ScoreWorld) -> CompatibilityReport {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");
    serde_json::from_slice(&world.stdout.borrow()).expect("output should be a report")
}

#[then("the command succeeds and prints a compatibility report")]
fn prints_report(#[from(world)] world: &ScoreWorld) {
    let report = report(world);
    assert_eq!(report.user1_id, "alice");
    assert_eq!(report.user2_id, "bora");
    assert_eq!(report.detailed_scores.mbti, 0.9);
    assert_eq!(report.compatibility_score, report.detailed_scores.total);
}

#[then("the report carries the model probability")]
fn report_has_model_probability(#[from(world)] world: &ScoreWorld) {
    let report = report(world);
    assert_eq!(report.detailed_scores.ai_total, Some(0.77));
    assert_eq!(report.compatibility_score, report.detailed_scores.total);
}

#[then("the command fails because the input JSON is invalid")]
fn fails_invalid_json(#[from(world)] world: &ScoreWorld) {
    let borrowed = world.error();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::ParseInput { .. } => {}
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[then("the command fails because the input path is missing")]
fn fails_missing_path(#[from(world)] world: &ScoreWorld) {
    let borrowed = world.error();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_PAIR),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_score_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/score_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ScoreWorld) {
            let _ = world;
        }
    };
}

register_score_scenario!(score_happy_path, "scoring a pair from JSON");
register_score_scenario!(score_with_model, "scoring with a trained model");
register_score_scenario!(score_invalid_json, "rejecting invalid JSON input");
register_score_scenario!(score_missing_pair, "rejecting missing pair paths");

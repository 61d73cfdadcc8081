//! Behaviour-driven step definitions driving the score CLI scenarios.

use super::helpers::{ListingWorkspace, floor_plan_listing, reference_listing, survey_listing};
use super::*;
use crate::score::{DefaultScorerBuilder, ScorerBuilder, run_score_with};
use rentscore_core::test_support::FixedScorer;
use rentscore_core::{ListingScorer, ScoringPolicy};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;

struct ScoreWorld {
    workspace: ListingWorkspace,
    include_listing: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    fixed_score: RefCell<Option<u8>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ScoreWorld {
    fn new() -> Self {
        Self {
            workspace: ListingWorkspace::new(),
            include_listing: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            fixed_score: RefCell::new(None),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["rentscore".to_owned(), "score".to_owned()];
        if *self.include_listing.borrow() {
            argv.push(self.workspace.listing_path().as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn report(&self) -> Value {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON report")
    }

    fn error_matches(&self, predicate: impl FnOnce(&CliError) -> bool) {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        assert!(predicate(error), "unexpected error {error:?}");
    }
}

#[fixture]
fn world() -> ScoreWorld {
    ScoreWorld::new()
}

struct FixedScorerBuilder {
    score: u8,
}

impl ScorerBuilder for FixedScorerBuilder {
    fn build(&self, _policy: ScoringPolicy) -> Box<dyn ListingScorer> {
        Box::new(FixedScorer::uniform(self.score))
    }
}

#[given("the reference listing exists on disk")]
fn reference_listing_exists(#[from(world)] world: &ScoreWorld) {
    world.workspace.write_json(&reference_listing());
}

#[given("a floor plan listing exists on disk")]
fn floor_plan_listing_exists(#[from(world)] world: &ScoreWorld) {
    world.workspace.write_json(&floor_plan_listing());
}

#[given("a survey listing exists on disk")]
fn survey_listing_exists(#[from(world)] world: &ScoreWorld) {
    world.workspace.write_json(&survey_listing());
}

#[given("the listing contains invalid JSON")]
fn listing_contains_invalid_json(#[from(world)] world: &ScoreWorld) {
    world.workspace.write_raw(b"{ not valid json");
}

#[given("I choose the full policy")]
fn choose_full_policy(#[from(world)] world: &ScoreWorld) {
    world.cli_args.borrow_mut().extend([
        format!("--{ARG_POLICY}"),
        ScoringPolicy::FULL.to_owned(),
    ]);
}

#[given("I require the amenity {key}")]
fn require_amenity(#[from(world)] world: &ScoreWorld, key: String) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_NECESSITIES}"), key]);
}

#[given("a scorer that rates every category {score}")]
fn fixed_scorer(#[from(world)] world: &ScoreWorld, score: u8) {
    world.fixed_score.replace(Some(score));
}

#[given("I omit the listing path")]
fn omit_listing_path(#[from(world)] world: &ScoreWorld) {
    world.include_listing.replace(false);
}

#[when("I run the score command")]
fn run_score_command(#[from(world)] world: &ScoreWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Score(args) => {
            let mut buffer = world.stdout.borrow_mut();
            match *world.fixed_score.borrow() {
                Some(score) => run_score_with(args, &FixedScorerBuilder { score }, &mut *buffer),
                None => run_score_with(args, &DefaultScorerBuilder, &mut *buffer),
            }
        }
        Command::Amenities(_) => panic!("expected score command"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds with an overall score of {score}")]
fn command_succeeds_with_overall(#[from(world)] world: &ScoreWorld, score: u64) {
    let report = world.report();
    assert_eq!(
        report.pointer("/scores/overall").and_then(Value::as_u64),
        Some(score)
    );
}

#[then("the price colour is {colour}")]
fn price_colour(#[from(world)] world: &ScoreWorld, colour: String) {
    let report = world.report();
    assert_eq!(
        report.pointer("/colors/price").and_then(Value::as_str),
        Some(colour.as_str())
    );
}

#[then("the report lists the {plan} plan only")]
fn report_lists_plan(#[from(world)] world: &ScoreWorld, plan: String) {
    let report = world.report();
    let plans = report.as_array().expect("floor plans report as an array");
    let names: Vec<_> = plans
        .iter()
        .filter_map(|entry| entry.get("plan").and_then(Value::as_str))
        .collect();
    assert_eq!(names, [plan.as_str()]);
}

#[then("the crime score is {score}")]
fn crime_score(#[from(world)] world: &ScoreWorld, score: u64) {
    let report = world.report();
    assert_eq!(
        report.pointer("/scores/crime").and_then(Value::as_u64),
        Some(score)
    );
}

#[then("the command fails because the listing JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &ScoreWorld) {
    world.error_matches(|error| matches!(error, CliError::ParseListing { .. }));
}

#[then("the command fails because the necessities option is invalid")]
fn command_fails_invalid_necessities(#[from(world)] world: &ScoreWorld) {
    world.error_matches(|error| {
        matches!(error, CliError::InvalidOption { field, .. } if *field == ARG_NECESSITIES)
    });
}

#[then("the command fails because the listing path is missing")]
fn command_fails_missing_listing(#[from(world)] world: &ScoreWorld) {
    world.error_matches(|error| {
        matches!(error, CliError::MissingArgument { field, .. } if *field == ARG_SCORE_LISTING)
    });
}

macro_rules! register_score_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/score_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ScoreWorld) {
            let _ = world;
        }
    };
}

register_score_scenario!(score_reference_listing, "scoring the reference listing");
register_score_scenario!(score_floor_plans, "scoring matching floor plans");
register_score_scenario!(score_survey, "scoring a surveyed neighborhood");
register_score_scenario!(score_survey_full_policy, "choosing the full policy for a survey");
register_score_scenario!(score_substituted_scorer, "substituting the scorer");
register_score_scenario!(score_invalid_json, "rejecting invalid JSON input");
register_score_scenario!(score_unknown_amenity, "rejecting unknown amenities");
register_score_scenario!(score_missing_listing, "rejecting missing listing paths");

#![allow(clippy::unwrap_used)]

use crate::pipeline::{
    Enhancer, EnhancerResult, Phase, Plugin, RunReport, ValidationFailure, Validator,
    run_enhancers, run_pipeline, run_validators,
};
use crate::repository::ModelEnvironment;

fn succeeding(env: &mut ModelEnvironment) -> EnhancerResult {
    env.data.insert("first", true);
    EnhancerResult::success("Succeeding")
}

fn failing(_env: &mut ModelEnvironment) -> EnhancerResult {
    EnhancerResult::failure("Failing")
}

fn after_failure(env: &mut ModelEnvironment) -> EnhancerResult {
    // Sees whatever partial state the earlier enhancers left.
    let saw_first = env.data.get::<bool>("first").copied().unwrap_or(false);
    env.data.insert("saw_first", saw_first);
    EnhancerResult::success("AfterFailure")
}

fn no_findings(_env: &ModelEnvironment) -> Vec<ValidationFailure> {
    Vec::new()
}

fn one_error(_env: &ModelEnvironment) -> Vec<ValidationFailure> {
    vec![ValidationFailure::error("OneError", "boom", None)]
}

fn one_warning(_env: &ModelEnvironment) -> Vec<ValidationFailure> {
    vec![ValidationFailure::warning("OneWarning", "hmm", None)]
}

fn plugin(enhancers: Vec<Enhancer>, validators: Vec<Validator>) -> Plugin {
    Plugin::new("test", enhancers, validators)
}

fn enhancer(name: &'static str, run: fn(&mut ModelEnvironment) -> EnhancerResult) -> Enhancer {
    Enhancer {
        name,
        phase: Phase::Setup,
        reads: &[],
        writes: &[],
        run,
    }
}

#[test]
fn test_failing_enhancer_does_not_halt_the_run() {
    let plugins = vec![plugin(
        vec![
            enhancer("Succeeding", succeeding),
            enhancer("Failing", failing),
            enhancer("AfterFailure", after_failure),
        ],
        vec![],
    )];
    let mut env = ModelEnvironment::new();
    let results = run_enhancers(&plugins, &mut env);

    assert_eq!(
        results,
        vec![
            EnhancerResult::success("Succeeding"),
            EnhancerResult::failure("Failing"),
            EnhancerResult::success("AfterFailure"),
        ]
    );
    assert_eq!(env.data.get::<bool>("saw_first"), Some(&true));
}

#[test]
fn test_validators_concatenate_across_plugins() {
    let plugins = vec![
        plugin(
            vec![],
            vec![
                Validator {
                    name: "NoFindings",
                    run: no_findings,
                },
                Validator {
                    name: "OneWarning",
                    run: one_warning,
                },
            ],
        ),
        plugin(
            vec![],
            vec![Validator {
                name: "OneError",
                run: one_error,
            }],
        ),
    ];
    let env = ModelEnvironment::new();
    let failures = run_validators(&plugins, &env);
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].validator_name, "OneWarning");
    assert_eq!(failures[1].validator_name, "OneError");
}

#[test]
fn test_run_report_blocks_only_on_errors() {
    let warnings_only = RunReport {
        enhancer_results: vec![],
        failures: vec![ValidationFailure::warning("W", "advisory", None)],
    };
    assert!(!warnings_only.has_blocking_failures());

    let plugins = vec![plugin(
        vec![enhancer("Succeeding", succeeding)],
        vec![Validator {
            name: "OneError",
            run: one_error,
        }],
    )];
    let mut env = ModelEnvironment::new();
    let report = run_pipeline(&plugins, &mut env);
    assert_eq!(report.enhancer_results.len(), 1);
    assert!(report.has_blocking_failures());
}

use tracing::{debug, warn};

use crate::repository::ModelEnvironment;

use super::enhancer::EnhancerResult;
use super::plugin::Plugin;
use super::validator::{FailureCategory, ValidationFailure};

/// The aggregate outcome of one compilation run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// One entry per enhancer invocation, in execution order.
    pub enhancer_results: Vec<EnhancerResult>,
    /// Every failure collected across all validators.
    pub failures: Vec<ValidationFailure>,
}

impl RunReport {
    /// Whether any error-category failure was collected. Errors block
    /// downstream artifact generation; warnings do not.
    pub fn has_blocking_failures(&self) -> bool {
        self.failures
            .iter()
            .any(|f| f.category == FailureCategory::Error)
    }
}

/// Execute every plugin's enhancer list strictly in declared order.
///
/// A failing enhancer is recorded and the run continues; later enhancers see
/// whatever partial state exists. Exclusive `&mut` access to the environment
/// is the single-writer guarantee: exactly one enhancer mutates the graph at
/// a time.
pub fn run_enhancers(plugins: &[Plugin], env: &mut ModelEnvironment) -> Vec<EnhancerResult> {
    let mut results = Vec::new();
    for plugin in plugins {
        for enhancer in &plugin.enhancers {
            debug!(plugin = plugin.name, enhancer = enhancer.name, phase = ?enhancer.phase, "running enhancer");
            let result = (enhancer.run)(env);
            if !result.success {
                warn!(
                    plugin = plugin.name,
                    enhancer = enhancer.name,
                    "enhancer reported failure; continuing"
                );
            }
            results.push(result);
        }
    }
    results
}

/// Execute every plugin's validators, concatenating all collected failures
/// rather than stopping at the first problem.
pub fn run_validators(plugins: &[Plugin], env: &ModelEnvironment) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    for plugin in plugins {
        for validator in &plugin.validators {
            debug!(plugin = plugin.name, validator = validator.name, "running validator");
            failures.extend((validator.run)(env));
        }
    }
    failures
}

/// One full run: all enhancers, then all validators.
pub fn run_pipeline(plugins: &[Plugin], env: &mut ModelEnvironment) -> RunReport {
    let enhancer_results = run_enhancers(plugins, env);
    let failures = run_validators(plugins, env);
    RunReport {
        enhancer_results,
        failures,
    }
}

use rustc_hash::FxHashSet;
use tracing::warn;

use super::enhancer::{Enhancer, Phase, fields};
use super::validator::Validator;

/// Why the ordering audit flagged an enhancer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderingIssueKind {
    /// The enhancer reads a field that no earlier enhancer in the list writes
    /// and that the builder does not provide.
    UnwrittenRead { field: &'static str },
    /// The enhancer's phase precedes the previous enhancer's phase.
    PhaseRegression { previous: Phase },
}

/// One finding of the registration-time ordering audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingIssue {
    pub enhancer: &'static str,
    pub kind: OrderingIssueKind,
}

/// A plugin: a hand-ordered enhancer list plus a validator list.
///
/// The enhancer order is the correctness contract: an enhancer that runs
/// before its inputs are populated silently sees empty data. [`Plugin::new`]
/// audits the declared reads/writes against that order and logs every
/// finding; the audit never rejects a plugin.
#[derive(Debug)]
pub struct Plugin {
    pub name: &'static str,
    pub enhancers: Vec<Enhancer>,
    pub validators: Vec<Validator>,
}

impl Plugin {
    pub fn new(name: &'static str, enhancers: Vec<Enhancer>, validators: Vec<Validator>) -> Self {
        let plugin = Self {
            name,
            enhancers,
            validators,
        };
        for issue in plugin.audit_ordering() {
            match issue.kind {
                OrderingIssueKind::UnwrittenRead { field } => warn!(
                    plugin = plugin.name,
                    enhancer = issue.enhancer,
                    field,
                    "enhancer reads a field no earlier enhancer writes"
                ),
                OrderingIssueKind::PhaseRegression { previous } => warn!(
                    plugin = plugin.name,
                    enhancer = issue.enhancer,
                    ?previous,
                    "enhancer listed after a later phase"
                ),
            }
        }
        plugin
    }

    /// Check the enhancer list against the declared reads/writes.
    pub fn audit_ordering(&self) -> Vec<OrderingIssue> {
        let mut issues = Vec::new();
        let mut written: FxHashSet<&'static str> =
            fields::BUILDER_PROVIDED.iter().copied().collect();
        let mut previous_phase: Option<Phase> = None;

        for enhancer in &self.enhancers {
            if let Some(previous) = previous_phase
                && enhancer.phase < previous
            {
                issues.push(OrderingIssue {
                    enhancer: enhancer.name,
                    kind: OrderingIssueKind::PhaseRegression { previous },
                });
            }
            previous_phase = Some(enhancer.phase);

            for &field in enhancer.reads {
                if !written.contains(field) {
                    issues.push(OrderingIssue {
                        enhancer: enhancer.name,
                        kind: OrderingIssueKind::UnwrittenRead { field },
                    });
                }
            }
            written.extend(enhancer.writes.iter().copied());
        }
        issues
    }
}

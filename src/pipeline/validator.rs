use crate::model::SourceLocation;
use crate::repository::ModelEnvironment;

/// Severity of a validation failure.
///
/// `Error` blocks downstream artifact generation; `Warning` never does.
/// Severity is chosen per rule, not globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    Error,
    Warning,
}

impl std::fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FailureCategory::Error => "error",
            FailureCategory::Warning => "warning",
        })
    }
}

/// One collected diagnostic, consumed by an external reporting layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub validator_name: String,
    pub category: FailureCategory,
    pub message: String,
    /// Location of the offending declaration in DSL source, when known.
    pub source_map: Option<SourceLocation>,
    /// Location in the concatenated compilation unit, filled by an external
    /// layer.
    pub file_map: Option<SourceLocation>,
}

impl ValidationFailure {
    pub fn error(
        validator_name: &str,
        message: impl Into<String>,
        source_map: Option<SourceLocation>,
    ) -> Self {
        Self {
            validator_name: validator_name.to_owned(),
            category: FailureCategory::Error,
            message: message.into(),
            source_map,
            file_map: None,
        }
    }

    pub fn warning(
        validator_name: &str,
        message: impl Into<String>,
        source_map: Option<SourceLocation>,
    ) -> Self {
        Self {
            validator_name: validator_name.to_owned(),
            category: FailureCategory::Warning,
            message: message.into(),
            source_map,
            file_map: None,
        }
    }
}

pub type ValidateFn = fn(&ModelEnvironment) -> Vec<ValidationFailure>;

/// One validation rule: a pure read over the enriched graph that returns
/// every failure it finds rather than stopping at the first.
pub struct Validator {
    pub name: &'static str,
    pub run: ValidateFn,
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

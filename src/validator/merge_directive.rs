//! Path diagnostics for merge directives.
//!
//! Merge-directive resolution itself never reports; these rules re-walk the
//! declared paths and turn each failure mode into its own diagnostic.

use crate::model::{EntityId, EntityProperty, MergeDirective, PropertyType};
use crate::pipeline::ValidationFailure;
use crate::repository::{ModelEnvironment, PathResolution, resolve_property_path};

/// Every merge directive in the environment, paired with the property that
/// carries it and the entity its paths are rooted at.
fn directives(
    env: &ModelEnvironment,
) -> impl Iterator<Item = (&EntityProperty, &MergeDirective, EntityId)> {
    env.properties_of_type(&PropertyType::REFERENTIAL)
        .into_iter()
        .filter_map(|property_id| env.property(property_id))
        .filter_map(|property| {
            let root = property.parent_entity?;
            let referential = property.kind.referential()?;
            Some(
                referential
                    .merge_directives
                    .iter()
                    .map(move |directive| (property, directive, root)),
            )
        })
        .flatten()
}

fn path_display(path: &[smol_str::SmolStr]) -> String {
    path.join(".")
}

pub const SOURCE_PATH_MUST_EXIST: &str = "MergeDirectiveSourcePropertyPathMustExist";

/// A later segment of a source path failed to resolve.
pub fn source_property_path_must_exist(env: &ModelEnvironment) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    for (property, directive, root) in directives(env) {
        if let PathResolution::SegmentNotFound { segment, .. } =
            resolve_property_path(env, root, &directive.source_path)
        {
            failures.push(ValidationFailure::error(
                SOURCE_PATH_MUST_EXIST,
                format!(
                    "merge directive on property '{}' has source path '{}' whose segment \
                     '{segment}' does not exist",
                    property.name,
                    path_display(&directive.source_path),
                ),
                Some(directive.source_map.clone()),
            ));
        }
    }
    failures
}

pub const TARGET_PATH_MUST_EXIST: &str = "MergeDirectiveTargetPropertyPathMustExist";

/// A later segment of a target path failed to resolve.
pub fn target_property_path_must_exist(env: &ModelEnvironment) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    for (property, directive, root) in directives(env) {
        if let PathResolution::SegmentNotFound { segment, .. } =
            resolve_property_path(env, root, &directive.target_path)
        {
            failures.push(ValidationFailure::error(
                TARGET_PATH_MUST_EXIST,
                format!(
                    "merge directive on property '{}' has target path '{}' whose segment \
                     '{segment}' does not exist",
                    property.name,
                    path_display(&directive.target_path),
                ),
                Some(directive.source_map.clone()),
            ));
        }
    }
    failures
}

pub const PATH_MUST_START_WITH_DECLARED_PROPERTY: &str =
    "MergeDirectivePathMustStartWithDeclaredPropertyName";

/// The first segment of either path must name a property declared directly
/// on the entity owning the directive's property.
pub fn path_must_start_with_declared_property(
    env: &ModelEnvironment,
) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    for (property, directive, root) in directives(env) {
        for path in [&directive.source_path, &directive.target_path] {
            if let PathResolution::FirstSegmentNotDeclared { segment } =
                resolve_property_path(env, root, path)
            {
                let owner = env
                    .entity(root)
                    .map(|e| e.name.as_str())
                    .unwrap_or("");
                failures.push(ValidationFailure::error(
                    PATH_MUST_START_WITH_DECLARED_PROPERTY,
                    format!(
                        "merge directive on property '{}' has path '{}' that does not start \
                         with a property declared on '{owner}'",
                        property.name,
                        path_display(path),
                    ),
                    Some(directive.source_map.clone()),
                ));
            }
        }
    }
    failures
}

pub const SOURCE_AND_TARGET_MUST_MATCH: &str =
    "MergeDirectiveSourcePropertyAndTargetPropertyMustMatch";

/// Both paths resolve, but their terminal properties have different kinds.
/// A merge across incompatible kinds is an error rather than a coercion.
pub fn source_and_target_property_must_match(
    env: &ModelEnvironment,
) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    for (property, directive, root) in directives(env) {
        let source = resolve_property_path(env, root, &directive.source_path);
        let target = resolve_property_path(env, root, &directive.target_path);
        let (Some(source_terminal), Some(target_terminal)) = (source.terminal(), target.terminal())
        else {
            continue;
        };
        let source_type = env
            .property(source_terminal)
            .map(|p| p.property_type())
            .unwrap_or(PropertyType::Unknown);
        let target_type = env
            .property(target_terminal)
            .map(|p| p.property_type())
            .unwrap_or(PropertyType::Unknown);
        if source_type != target_type {
            failures.push(ValidationFailure::error(
                SOURCE_AND_TARGET_MUST_MATCH,
                format!(
                    "merge directive on property '{}' merges a {source_type} property with a \
                     {target_type} property; both paths must end at the same kind",
                    property.name,
                ),
                Some(directive.source_map.clone()),
            ));
        }
    }
    failures
}

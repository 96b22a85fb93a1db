//! Merge-directive resolution.
//!
//! For every directive declared on a referential property, walks the source
//! and target dotted paths from the entity owning the property. When both
//! paths resolve and the terminal property kinds are identical, the directive
//! gets its chains and terminals, a [`MergedProperty`] record lands on the
//! owning property, and the target terminal gains a reverse link.
//!
//! Everything else is left untouched; the four merge-path validators report
//! exactly why a directive stayed unresolved. Re-running is idempotent:
//! resolved directives are skipped and record appends deduplicate.

use smol_str::SmolStr;
use tracing::trace;

use crate::model::{MergedProperty, PropertyId, PropertyType};
use crate::pipeline::EnhancerResult;
use crate::repository::{ModelEnvironment, PathResolution, resolve_property_path};

pub const MERGE_DIRECTIVE_ENHANCER: &str = "MergeDirectiveEnhancer";

pub fn merge_directive(env: &mut ModelEnvironment) -> EnhancerResult {
    let referential: Vec<PropertyId> = env.properties_of_type(&PropertyType::REFERENTIAL);
    for property_id in referential {
        let Some(property) = env.property(property_id) else {
            continue;
        };
        let Some(owner) = property.parent_entity else {
            continue;
        };
        let directive_count = property
            .kind
            .referential()
            .map_or(0, |r| r.merge_directives.len());

        for directive_index in 0..directive_count {
            let paths = env.property(property_id).and_then(|p| {
                let directive = p.kind.referential()?.merge_directives.get(directive_index)?;
                if directive.is_resolved() {
                    return None;
                }
                Some((directive.source_path.clone(), directive.target_path.clone()))
            });
            let Some((source_path, target_path)) = paths else {
                continue;
            };

            let source = resolve_property_path(env, owner, &source_path);
            let target = resolve_property_path(env, owner, &target_path);
            let (PathResolution::Resolved(source_chain), PathResolution::Resolved(target_chain)) =
                (source, target)
            else {
                continue;
            };

            let terminal_type = |chain: &[PropertyId]| {
                chain
                    .last()
                    .and_then(|&id| env.property(id))
                    .map(|p| p.property_type())
            };
            let (Some(source_type), Some(target_type)) =
                (terminal_type(&source_chain), terminal_type(&target_chain))
            else {
                continue;
            };
            if source_type != target_type {
                trace!(
                    %source_type,
                    %target_type,
                    "merge terminals disagree on kind; leaving directive unresolved"
                );
                continue;
            }

            apply_resolution(
                env,
                property_id,
                directive_index,
                &source_path,
                &target_path,
                source_chain,
                target_chain,
            );
        }
    }
    EnhancerResult::success(MERGE_DIRECTIVE_ENHANCER)
}

fn apply_resolution(
    env: &mut ModelEnvironment,
    property_id: PropertyId,
    directive_index: usize,
    source_path: &[SmolStr],
    target_path: &[SmolStr],
    source_chain: Vec<PropertyId>,
    target_chain: Vec<PropertyId>,
) {
    let source_terminal = source_chain.last().copied();
    let target_terminal = target_chain.last().copied();

    let record = MergedProperty {
        merge_property_path: source_path.to_vec(),
        target_property_path: target_path.to_vec(),
        merge_property: source_terminal,
        target_property: target_terminal,
    };

    if let Some(property) = env.property_mut(property_id)
        && let Some(referential) = property.kind.referential_mut()
    {
        if let Some(directive) = referential.merge_directives.get_mut(directive_index) {
            directive.source_property_chain = source_chain;
            directive.target_property_chain = target_chain;
            directive.source_property = source_terminal;
            directive.target_property = target_terminal;
        }
        if !referential
            .merged_properties
            .iter()
            .any(|existing| existing.same_paths(&record))
        {
            referential.merged_properties.push(record);
        }
    }

    if let Some(target_id) = target_terminal
        && let Some(target_property) = env.property_mut(target_id)
        && !target_property.merge_targeted_by.contains(&property_id)
    {
        target_property.merge_targeted_by.push(property_id);
    }
}

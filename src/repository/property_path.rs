use smol_str::SmolStr;
use tracing::trace;

use crate::model::{EntityId, PropertyId};

use super::environment::ModelEnvironment;

/// Outcome of walking a dotted property path.
///
/// Resolution halts at the first unresolvable segment and records which one
/// failed, so diagnostics can name the exact segment rather than just "path
/// invalid".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResolution {
    /// Every segment resolved; one property per segment, in path order.
    Resolved(Vec<PropertyId>),
    /// The first segment does not name a property declared on the root
    /// entity.
    FirstSegmentNotDeclared { segment: SmolStr },
    /// A later segment does not resolve on the entity reached by the previous
    /// segment (or the previous segment's property references nothing).
    SegmentNotFound { index: usize, segment: SmolStr },
}

impl PathResolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, PathResolution::Resolved(_))
    }

    /// The terminal property of a resolved path.
    pub fn terminal(&self) -> Option<PropertyId> {
        match self {
            PathResolution::Resolved(chain) => chain.last().copied(),
            _ => None,
        }
    }
}

/// Walk `path` one segment at a time, starting from the properties declared
/// directly on `root`.
///
/// Each subsequent segment resolves against the entity referenced by the
/// previous segment's property. Namespace visibility needs no re-check here:
/// referenced entities were resolved by the property-assignment phase under
/// the chain rule, and an unresolved reference simply ends the walk.
pub fn resolve_property_path(
    env: &ModelEnvironment,
    root: EntityId,
    path: &[SmolStr],
) -> PathResolution {
    let mut chain: Vec<PropertyId> = Vec::with_capacity(path.len());
    let mut current_entity = Some(root);

    for (index, segment) in path.iter().enumerate() {
        let found = current_entity
            .and_then(|entity_id| env.entity(entity_id))
            .and_then(|entity| {
                entity.properties.iter().copied().find(|&property_id| {
                    env.property(property_id)
                        .is_some_and(|p| p.matches_path_segment(segment))
                })
            });

        let Some(property_id) = found else {
            trace!(index, %segment, "property path segment did not resolve");
            return if index == 0 {
                PathResolution::FirstSegmentNotDeclared {
                    segment: segment.clone(),
                }
            } else {
                PathResolution::SegmentNotFound {
                    index,
                    segment: segment.clone(),
                }
            };
        };

        chain.push(property_id);
        current_entity = env
            .property(property_id)
            .and_then(|p| p.kind.referenced_entity());
    }

    PathResolution::Resolved(chain)
}

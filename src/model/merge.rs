//! Merge directives: declared equivalences between two property paths.

use smol_str::SmolStr;

use super::ids::PropertyId;
use super::source_map::SourceLocation;

/// A declared equivalence between a source and a target property path, both
/// rooted at the entity owning the referential property the directive is
/// attached to.
///
/// The path segment lists come from the builder; the chains and terminal
/// properties are filled in by merge-directive resolution and stay empty when
/// a path does not resolve (validators report why).
#[derive(Debug, Default)]
pub struct MergeDirective {
    pub source_path: Vec<SmolStr>,
    pub target_path: Vec<SmolStr>,
    /// Resolved property chain for the source path, one entry per segment.
    pub source_property_chain: Vec<PropertyId>,
    pub target_property_chain: Vec<PropertyId>,
    /// Terminal property of the source path; `None` until resolved.
    pub source_property: Option<PropertyId>,
    pub target_property: Option<PropertyId>,
    pub source_map: SourceLocation,
}

impl MergeDirective {
    pub fn new(
        source_path: impl IntoIterator<Item = impl Into<SmolStr>>,
        target_path: impl IntoIterator<Item = impl Into<SmolStr>>,
    ) -> Self {
        Self {
            source_path: source_path.into_iter().map(Into::into).collect(),
            target_path: target_path.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Whether resolution has already completed for this directive.
    pub fn is_resolved(&self) -> bool {
        self.source_property.is_some() && self.target_property.is_some()
    }
}

/// One applied merge, recorded on the referential property whose duplicate
/// reference is being collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedProperty {
    pub merge_property_path: Vec<SmolStr>,
    pub target_property_path: Vec<SmolStr>,
    pub merge_property: Option<PropertyId>,
    pub target_property: Option<PropertyId>,
}

impl MergedProperty {
    /// Whether this entry records the same path equivalence as `other`,
    /// regardless of resolution state. Used to keep appends idempotent.
    pub fn same_paths(&self, other: &MergedProperty) -> bool {
        self.merge_property_path == other.merge_property_path
            && self.target_property_path == other.target_property_path
    }
}

//! Source provenance attached to model nodes.
//!
//! The external builder records where each declaration came from so that
//! validation failures can point back into the DSL source. Nothing in this
//! crate reads files; locations are carried through as data.

use smol_str::SmolStr;

/// A single location in DSL source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLocation {
    /// 1-based line number; 0 when unknown.
    pub line: u32,
    /// 0-based column.
    pub column: u32,
    /// The token text at the location.
    pub token: SmolStr,
}

impl SourceLocation {
    pub fn new(line: u32, column: u32, token: impl Into<SmolStr>) -> Self {
        Self {
            line,
            column,
            token: token.into(),
        }
    }
}

/// Per-field provenance for a property declaration.
///
/// Only the fields cited by validator diagnostics carry their own entry;
/// everything else falls back to the declaration site.
#[derive(Debug, Clone, Default)]
pub struct PropertySourceMap {
    pub declaration: SourceLocation,
    pub is_part_of_identity: Option<SourceLocation>,
    pub is_identity_rename: Option<SourceLocation>,
    pub base_key_name: Option<SourceLocation>,
}

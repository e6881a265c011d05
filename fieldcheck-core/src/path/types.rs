//! Core types shared by the path helpers and the checker

/// Field name of the document identifier, immutable once a document exists.
pub const ID_FIELD: &str = "_id";

/// The positional operator, standing for the matched array element.
pub const POSITIONAL_OPERATOR: &str = "$";

/// Field names reserved inside DBRef sub-documents.
pub const DBREF_FIELDS: [&str; 3] = ["$id", "$db", "$ref"];

/// Relationship between two field paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRelation {
    /// Paths are identical
    Same,
    /// First path is a strict prefix of the second
    Parent,
    /// Second path is a strict prefix of the first
    Child,
    /// Paths differ only in their last segment (e.g. a.b and a.c)
    Sibling,
    /// Paths are unrelated
    Unrelated,
}

/// Classification of a single path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Anything not starting with `$`, including the empty segment
    Ordinary,
    /// Exactly `$`
    Positional,
    /// Exactly `$id`, `$db` or `$ref` (case-sensitive)
    ReservedDbRef,
    /// Any other `$`-prefixed name
    OtherDollarPrefixed,
}

impl Segment {
    pub fn classify(part: &str) -> Self {
        if !part.starts_with('$') {
            Segment::Ordinary
        } else if part == POSITIONAL_OPERATOR {
            Segment::Positional
        } else if DBREF_FIELDS.contains(&part) {
            Segment::ReservedDbRef
        } else {
            Segment::OtherDollarPrefixed
        }
    }
}

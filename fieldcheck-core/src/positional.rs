//! Lookup of positional operator (`$`) segments.
//!
//! This performs no validation and answers for rejected paths as well.

use serde::Serialize;

use crate::path::{FieldPath, POSITIONAL_OPERATOR};

/// Where the positional operators of a path are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionalInfo {
    /// Index of the first `$` segment
    pub first_index: usize,
    /// Number of `$` segments in the whole path
    pub count: usize,
}

/// Find the positional operators in `path`
///
/// # Examples
/// ```
/// # use fieldcheck_core::path::FieldPath;
/// # use fieldcheck_core::positional::locate_positional;
/// let info = locate_positional(&FieldPath::parse("a.$.b.$.c")).unwrap();
/// assert_eq!((info.first_index, info.count), (1, 2));
/// assert!(locate_positional(&FieldPath::parse("a.b")).is_none());
/// ```
pub fn locate_positional(path: &FieldPath) -> Option<PositionalInfo> {
    let mut positions = path
        .parts()
        .enumerate()
        .filter(|(_, part)| *part == POSITIONAL_OPERATOR)
        .map(|(index, _)| index);

    let first_index = positions.next()?;
    Some(PositionalInfo {
        first_index,
        count: 1 + positions.count(),
    })
}

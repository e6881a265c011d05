//! Helpers relating two field paths to each other

use crate::path::field_path::FieldPath;
use crate::path::types::PathRelation;

/// Determine relationship between two paths
///
/// # Examples
/// ```
/// # use fieldcheck_core::path::{compare_paths, FieldPath, PathRelation};
/// let p = |s| FieldPath::parse(s);
/// assert_eq!(compare_paths(&p("a"), &p("a")), PathRelation::Same);
/// assert_eq!(compare_paths(&p("a"), &p("a.b")), PathRelation::Parent);
/// assert_eq!(compare_paths(&p("a.b"), &p("a.c")), PathRelation::Sibling);
/// ```
pub fn compare_paths(path1: &FieldPath, path2: &FieldPath) -> PathRelation {
    if path1 == path2 {
        return PathRelation::Same;
    }

    if path1.is_prefix_of(path2) {
        return PathRelation::Parent;
    }

    if path2.is_prefix_of(path1) {
        return PathRelation::Child;
    }

    // Same parent, including two single-segment paths at the document root
    let len = path1.num_parts();
    if len > 0 && len == path2.num_parts() && path1.common_prefix_size(path2) == len - 1 {
        return PathRelation::Sibling;
    }

    PathRelation::Unrelated
}

/// Check if two paths conflict (updating one would touch the other)
///
/// # Examples
/// ```
/// # use fieldcheck_core::path::{paths_conflict, FieldPath};
/// let p = |s| FieldPath::parse(s);
/// assert!(paths_conflict(&p("a"), &p("a")));
/// assert!(paths_conflict(&p("a"), &p("a.b")));
/// assert!(!paths_conflict(&p("a.b"), &p("a.c")));
/// ```
pub fn paths_conflict(path1: &FieldPath, path2: &FieldPath) -> bool {
    matches!(
        compare_paths(path1, path2),
        PathRelation::Same | PathRelation::Parent | PathRelation::Child
    )
}

/// Parent path, or None for single-segment and empty paths
pub fn parent_path(path: &FieldPath) -> Option<FieldPath> {
    match path.num_parts() {
        0 | 1 => None,
        n => {
            let parent: Vec<&str> = path.parts().take(n - 1).collect();
            Some(FieldPath::parse(&parent.join(".")))
        }
    }
}

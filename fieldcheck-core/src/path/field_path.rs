//! Dotted field paths (`a.b.c`) as used by update modifiers

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CheckResult, FieldCheckError};

/// A dotted field path split into its segments.
///
/// Parsing never fails: empty segments are kept as-is and left for the
/// checker to reject. The empty string parses to a path with no segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FieldPath {
    raw: String,
    parts: Vec<String>,
}

impl FieldPath {
    /// Split a raw path on `.`
    ///
    /// # Examples
    /// ```
    /// # use fieldcheck_core::path::FieldPath;
    /// assert_eq!(FieldPath::parse("x.y.z").num_parts(), 3);
    /// assert_eq!(FieldPath::parse("a..b").num_parts(), 3);
    /// assert!(FieldPath::parse("").is_empty());
    /// ```
    pub fn parse(raw: &str) -> Self {
        let parts = if raw.is_empty() {
            Vec::new()
        } else {
            raw.split('.').map(str::to_string).collect()
        };

        FieldPath {
            raw: raw.to_string(),
            parts,
        }
    }

    pub fn num_parts(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn parts(&self) -> impl Iterator<Item = &str> + '_ {
        self.parts.iter().map(String::as_str)
    }

    /// Segment at `index`
    ///
    /// # Examples
    /// ```
    /// # use fieldcheck_core::path::FieldPath;
    /// let path = FieldPath::parse("a.$.b");
    /// assert_eq!(path.part(1).unwrap(), "$");
    /// assert!(path.part(3).is_err());
    /// ```
    pub fn part(&self, index: usize) -> CheckResult<&str> {
        self.parts
            .get(index)
            .map(String::as_str)
            .ok_or(FieldCheckError::IndexOutOfRange {
                index,
                len: self.parts.len(),
            })
    }

    /// The original dotted string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Dotted sub-path starting at segment `offset`
    ///
    /// # Examples
    /// ```
    /// # use fieldcheck_core::path::FieldPath;
    /// let path = FieldPath::parse("a.b.c");
    /// assert_eq!(path.dotted_field(0), "a.b.c");
    /// assert_eq!(path.dotted_field(1), "b.c");
    /// assert_eq!(path.dotted_field(3), "");
    /// ```
    pub fn dotted_field(&self, offset: usize) -> String {
        match self.parts.get(offset..) {
            Some(rest) => rest.join("."),
            None => String::new(),
        }
    }

    pub fn equals_dotted_field(&self, other: &str) -> bool {
        self.raw == other
    }

    /// Number of leading segments shared with `other`
    pub fn common_prefix_size(&self, other: &FieldPath) -> usize {
        self.parts
            .iter()
            .zip(other.parts.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// True when `other` extends this path by at least one segment
    ///
    /// # Examples
    /// ```
    /// # use fieldcheck_core::path::FieldPath;
    /// let a = FieldPath::parse("a");
    /// assert!(a.is_prefix_of(&FieldPath::parse("a.b")));
    /// assert!(!a.is_prefix_of(&FieldPath::parse("a")));
    /// assert!(!a.is_prefix_of(&FieldPath::parse("ab")));
    /// ```
    pub fn is_prefix_of(&self, other: &FieldPath) -> bool {
        if self.is_empty() || self.num_parts() >= other.num_parts() {
            return false;
        }
        self.common_prefix_size(other) == self.num_parts()
    }

    /// Copy of this path with segment `index` replaced by `value`.
    ///
    /// The result is re-parsed from its dotted form, so a `value` containing
    /// `.` becomes several segments.
    pub fn with_part(&self, index: usize, value: &str) -> CheckResult<FieldPath> {
        if index >= self.parts.len() {
            return Err(FieldCheckError::IndexOutOfRange {
                index,
                len: self.parts.len(),
            });
        }

        let mut parts: Vec<&str> = self.parts().collect();
        parts[index] = value;
        Ok(FieldPath::parse(&parts.join(".")))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for FieldPath {
    fn from(raw: &str) -> Self {
        FieldPath::parse(raw)
    }
}

impl From<String> for FieldPath {
    fn from(raw: String) -> Self {
        FieldPath::parse(&raw)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.raw
    }
}

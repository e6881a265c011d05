//! Decides whether a field path may be the target of an update.
//!
//! Strict and legacy validation run the same rules; they differ only in how
//! `$`-prefixed names that are neither the positional operator nor a DBRef
//! field are treated. Legacy mode accepts them anywhere in the path.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::errors::PathErrorKind;
use crate::path::{FieldPath, Segment, ID_FIELD};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ValidationMode {
    #[default]
    Strict,
    Legacy,
}

/// Validate `path` as an update target under `mode`.
///
/// The first violated rule wins.
pub fn check_updatable(path: &FieldPath, mode: ValidationMode) -> Result<(), PathErrorKind> {
    if path.is_empty() {
        return Err(PathErrorKind::EmptyPath);
    }

    if path.parts().any(str::is_empty) {
        return Err(PathErrorKind::EmptyPart);
    }

    if path.parts().next() == Some(ID_FIELD) {
        return Err(PathErrorKind::RootIdField);
    }

    for (index, part) in path.parts().enumerate() {
        check_segment(Segment::classify(part), index, mode)?;
    }

    Ok(())
}

/// Rule table for one classified segment at `index`
pub fn check_segment(
    segment: Segment,
    index: usize,
    mode: ValidationMode,
) -> Result<(), PathErrorKind> {
    match (segment, index, mode) {
        (Segment::Ordinary, _, _) => Ok(()),
        // The document root is never an array.
        (Segment::Positional, 0, _) => Err(PathErrorKind::RootPositional),
        (Segment::Positional, _, _) => Ok(()),
        (Segment::ReservedDbRef, 0, _) => Err(PathErrorKind::RootReservedDbRefField),
        (Segment::ReservedDbRef, _, _) => Ok(()),
        (Segment::OtherDollarPrefixed, _, ValidationMode::Strict) => {
            Err(PathErrorKind::InvalidDollarPrefixedField)
        }
        (Segment::OtherDollarPrefixed, _, ValidationMode::Legacy) => Ok(()),
    }
}

pub fn is_updatable(path: &FieldPath) -> Result<(), PathErrorKind> {
    check_updatable(path, ValidationMode::Strict)
}

/// Like [`is_updatable`] but accepts arbitrary `$`-prefixed field names
pub fn is_updatable_legacy(path: &FieldPath) -> Result<(), PathErrorKind> {
    check_updatable(path, ValidationMode::Legacy)
}

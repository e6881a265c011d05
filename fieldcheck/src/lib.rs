//! fieldcheck - update target path checking
//!
//! This crate provides a unified API over `fieldcheck-core`.
//!
//! # Example
//!
//! ```
//! use fieldcheck::{is_updatable, locate_positional, FieldPath};
//!
//! let path = FieldPath::parse("items.$.qty");
//! assert!(is_updatable(&path).is_ok());
//! assert_eq!(locate_positional(&path).map(|p| p.first_index), Some(1));
//! ```

pub use fieldcheck_core::checker::{
    check_updatable, is_updatable, is_updatable_legacy, ValidationMode,
};
pub use fieldcheck_core::config::CheckerConfig;
pub use fieldcheck_core::errors::{FieldCheckError, PathErrorKind};
pub use fieldcheck_core::path::{FieldPath, PathRelation};
pub use fieldcheck_core::positional::{locate_positional, PositionalInfo};
pub use fieldcheck_core::update::{check_update, UpdateChecker, UpdateOperator, UpdateTarget};
pub use fieldcheck_core::CheckResult;

//! Field path checking for document updates.
//!
//! Before an update is applied, each of its target paths (`a.b.c`) is parsed
//! into a [`FieldPath`], validated by [`checker`] in strict or legacy mode,
//! and searched for positional operators (`$`) by [`positional`].

pub mod checker;
pub mod config;
pub mod errors;
pub mod path;
pub mod positional;
pub mod update;

pub use checker::{check_updatable, is_updatable, is_updatable_legacy, ValidationMode};
pub use config::CheckerConfig;
pub use errors::*;
pub use path::FieldPath;
pub use positional::{locate_positional, PositionalInfo};
pub use update::{check_update, UpdateChecker, UpdateOperator, UpdateTarget};

pub type CheckResult<T> = Result<T, FieldCheckError>;

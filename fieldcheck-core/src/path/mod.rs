//! Dotted field paths and the helpers that relate them
//!
//! A field path names a (possibly nested) field of a document, one segment
//! per nesting level: `address.city`, `items.$.qty`.

pub mod field_path;
pub mod path_utils;
pub mod types;

pub use field_path::FieldPath;
pub use path_utils::*;
pub use types::*;

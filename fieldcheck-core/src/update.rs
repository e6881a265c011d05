//! Target path checking for whole update documents
//!
//! An update document maps modifiers to `path -> argument` documents:
//!
//! ```json
//! { "$set": { "items.$.qty": 2 }, "$unset": { "draft": "" } }
//! ```
//!
//! Every target path is validated before anything is applied. The first
//! invalid path aborts the whole update.

use std::str::FromStr;

use serde_json::{Map, Value};
use strum::{Display, EnumString};

use crate::checker::{check_updatable, ValidationMode};
use crate::config::CheckerConfig;
use crate::path::{paths_conflict, FieldPath};
use crate::positional::{locate_positional, PositionalInfo};
use crate::{CheckResult, FieldCheckError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum UpdateOperator {
    #[strum(serialize = "$set")]
    Set,
    #[strum(serialize = "$unset")]
    Unset,
    #[strum(serialize = "$inc")]
    Inc,
    #[strum(serialize = "$mul")]
    Mul,
    #[strum(serialize = "$min")]
    Min,
    #[strum(serialize = "$max")]
    Max,
    #[strum(serialize = "$rename")]
    Rename,
    #[strum(serialize = "$setOnInsert")]
    SetOnInsert,
    #[strum(serialize = "$currentDate")]
    CurrentDate,
    #[strum(serialize = "$push")]
    Push,
    #[strum(serialize = "$pushAll")]
    PushAll,
    #[strum(serialize = "$addToSet")]
    AddToSet,
    #[strum(serialize = "$pop")]
    Pop,
    #[strum(serialize = "$pull")]
    Pull,
    #[strum(serialize = "$pullAll")]
    PullAll,
    #[strum(serialize = "$bit")]
    Bit,
}

/// A validated target path of an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTarget {
    pub operator: UpdateOperator,
    pub path: FieldPath,
    pub positional: Option<PositionalInfo>,
}

impl UpdateTarget {
    pub fn is_positional(&self) -> bool {
        self.positional.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateChecker {
    config: CheckerConfig,
}

impl UpdateChecker {
    pub fn new(config: CheckerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Parse and validate a single target path
    pub fn check_path(&self, raw: &str) -> CheckResult<FieldPath> {
        let path = FieldPath::parse(raw);
        if let Err(kind) = check_updatable(&path, self.config.mode) {
            tracing::warn!(path = %raw, ?kind, mode = %self.config.mode, "Rejected update path");
            return Err(FieldCheckError::invalid_path(raw, kind));
        }
        Ok(path)
    }

    /// Validate every target path of `update`, modifiers in key order.
    pub fn check(&self, update: &Value) -> CheckResult<Vec<UpdateTarget>> {
        let modifiers = update.as_object().ok_or_else(|| {
            FieldCheckError::MalformedUpdate("update must be a document".to_string())
        })?;

        if modifiers.is_empty() {
            return Err(FieldCheckError::MalformedUpdate(
                "update document has no modifiers".to_string(),
            ));
        }

        let mut targets = Vec::new();
        for (name, args) in modifiers {
            let operator = UpdateOperator::from_str(name)
                .map_err(|_| FieldCheckError::UnknownOperator(name.clone()))?;
            let args = modifier_args(operator, args)?;

            for (raw, arg) in args {
                targets.push(self.target(operator, raw)?);

                if operator == UpdateOperator::Rename {
                    let destination = arg.as_str().ok_or_else(|| {
                        FieldCheckError::MalformedUpdate(format!(
                            "{operator} destination for '{raw}' must be a string"
                        ))
                    })?;
                    targets.push(self.target(operator, destination)?);
                }
            }
        }

        if self.config.check_conflicts {
            check_conflicts(&targets)?;
        }

        Ok(targets)
    }

    fn target(&self, operator: UpdateOperator, raw: &str) -> CheckResult<UpdateTarget> {
        let path = self.check_path(raw)?;
        let positional = locate_positional(&path);
        tracing::debug!(%operator, path = %path, ?positional, "Accepted update target");
        Ok(UpdateTarget {
            operator,
            path,
            positional,
        })
    }
}

/// Validate the target paths of `update` under `mode` with default settings
pub fn check_update(update: &Value, mode: ValidationMode) -> CheckResult<Vec<UpdateTarget>> {
    UpdateChecker::new(CheckerConfig::with_mode(mode)).check(update)
}

fn modifier_args(operator: UpdateOperator, args: &Value) -> CheckResult<&Map<String, Value>> {
    args.as_object().ok_or_else(|| {
        FieldCheckError::MalformedUpdate(format!(
            "modifier {operator} expects a document of field paths"
        ))
    })
}

fn check_conflicts(targets: &[UpdateTarget]) -> CheckResult<()> {
    for (i, first) in targets.iter().enumerate() {
        for second in &targets[i + 1..] {
            if paths_conflict(&first.path, &second.path) {
                tracing::warn!(first = %first.path, second = %second.path, "Conflicting update paths");
                return Err(FieldCheckError::ConflictingPaths {
                    first: first.path.to_string(),
                    second: second.path.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PathErrorKind;
    use serde_json::json;

    fn strict() -> UpdateChecker {
        UpdateChecker::default()
    }

    // === Document Shape Tests ===

    #[test]
    fn test_update_must_be_object() {
        assert!(matches!(
            strict().check(&json!([1, 2])),
            Err(FieldCheckError::MalformedUpdate(_))
        ));
        assert!(matches!(
            strict().check(&json!({})),
            Err(FieldCheckError::MalformedUpdate(_))
        ));
    }

    #[test]
    fn test_unknown_operator() {
        let err = strict().check(&json!({"$frobnicate": {"a": 1}})).unwrap_err();
        assert_eq!(err, FieldCheckError::UnknownOperator("$frobnicate".to_string()));

        // A replacement-style document is not an update
        let err = strict().check(&json!({"name": "x"})).unwrap_err();
        assert_eq!(err, FieldCheckError::UnknownOperator("name".to_string()));
    }

    #[test]
    fn test_modifier_args_must_be_object() {
        let err = strict().check(&json!({"$set": 5})).unwrap_err();
        assert!(matches!(err, FieldCheckError::MalformedUpdate(ref msg) if msg.contains("$set")));
    }

    #[test]
    fn test_empty_modifier_has_no_targets() {
        let targets = strict().check(&json!({"$set": {}})).unwrap();
        assert!(targets.is_empty());
    }

    // === Path Validation Tests ===

    #[test]
    fn test_accepts_valid_targets() {
        let targets = strict()
            .check(&json!({"$set": {"a.b": 1}, "$inc": {"count": 1}}))
            .unwrap();
        assert_eq!(targets.len(), 2);
        assert!(targets.iter().all(|t| !t.is_positional()));
    }

    #[test]
    fn test_rejection_echoes_raw_path() {
        let err = strict().check(&json!({"$set": {"_id.x": 1}})).unwrap_err();
        assert_eq!(
            err,
            FieldCheckError::invalid_path("_id.x", PathErrorKind::RootIdField)
        );
    }

    #[test]
    fn test_mode_controls_dollar_prefixed_names() {
        let update = json!({"$set": {"a.$b": 1}});
        let err = check_update(&update, ValidationMode::Strict).unwrap_err();
        assert_eq!(
            err.path_error_kind(),
            Some(PathErrorKind::InvalidDollarPrefixedField)
        );
        assert_eq!(check_update(&update, ValidationMode::Legacy).unwrap().len(), 1);
    }

    #[test]
    fn test_positional_info_attached() {
        let targets = strict().check(&json!({"$set": {"items.$.qty": 2}})).unwrap();
        assert_eq!(
            targets[0].positional,
            Some(PositionalInfo {
                first_index: 1,
                count: 1
            })
        );
    }

    // === Rename Tests ===

    #[test]
    fn test_rename_validates_destination() {
        let targets = strict().check(&json!({"$rename": {"old": "new"}})).unwrap();
        let paths: Vec<&str> = targets.iter().map(|t| t.path.as_str()).collect();
        assert_eq!(paths, vec!["old", "new"]);

        let err = strict().check(&json!({"$rename": {"old": "_id"}})).unwrap_err();
        assert_eq!(err.path_error_kind(), Some(PathErrorKind::RootIdField));
    }

    #[test]
    fn test_rename_destination_must_be_string() {
        let err = strict().check(&json!({"$rename": {"old": 3}})).unwrap_err();
        assert!(matches!(err, FieldCheckError::MalformedUpdate(_)));
    }

    // === Conflict Tests ===

    #[test]
    fn test_conflicting_targets() {
        let err = strict()
            .check(&json!({"$set": {"a": 1}, "$unset": {"a.b": ""}}))
            .unwrap_err();
        assert!(matches!(err, FieldCheckError::ConflictingPaths { .. }));
    }

    #[test]
    fn test_conflict_check_can_be_disabled() {
        let checker = UpdateChecker::new(CheckerConfig {
            check_conflicts: false,
            ..CheckerConfig::default()
        });
        let targets = checker
            .check(&json!({"$set": {"a": 1}, "$unset": {"a.b": ""}}))
            .unwrap();
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn test_siblings_do_not_conflict() {
        let targets = strict()
            .check(&json!({"$set": {"a.b": 1, "a.c": 2, "ab": 3}}))
            .unwrap();
        assert_eq!(targets.len(), 3);
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(UpdateOperator::SetOnInsert.to_string(), "$setOnInsert");
        assert_eq!(UpdateOperator::from_str("$addToSet").unwrap(), UpdateOperator::AddToSet);
    }
}

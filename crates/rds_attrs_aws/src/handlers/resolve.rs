use rds_attrs_core::contract::{AttributeSet, NormalizedChangeRequest, RequestMode};
use rds_attrs_core::mutation::{apply_speculative_change, detect_change};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::adapters::client::{ApiError, SnapshotAttributeApi};

/// Outcome of one resolve invocation: whether sharing state changed and
/// the attribute set the decision was made against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeOutcome {
    pub changed: bool,
    pub attribute_set: AttributeSet,
}

/// The invocation-surface result: `changed`/`failed` flags with the
/// attribute set fields flattened into the top level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleResult {
    pub changed: bool,
    pub failed: bool,
    #[serde(flatten)]
    pub attribute_set: AttributeSet,
}

impl ModuleResult {
    pub fn from_outcome(outcome: ChangeOutcome) -> Self {
        Self {
            changed: outcome.changed,
            failed: false,
            attribute_set: outcome.attribute_set,
        }
    }
}

/// Decides whether a requested mutation altered snapshot-sharing state.
///
/// Read requests return the described state with `changed = false`. Write
/// requests capture a baseline via `describe`, submit the delta via
/// `modify`, and diff the baseline against the state `modify` itself
/// returned; `describe` is never called a second time. In check mode the
/// delta is applied locally to the baseline instead and `modify` is never
/// called.
///
/// Concurrent writers on the same snapshot are not coordinated here: a
/// caller's before/after diff may observe state mutated by another caller.
pub fn resolve_attribute_change(
    request: &NormalizedChangeRequest,
    api: &impl SnapshotAttributeApi,
) -> Result<ChangeOutcome, ApiError> {
    match resolve_inner(request, api) {
        Ok(outcome) => Ok(outcome),
        Err(error) => {
            log_resolve_error(
                "resolve_failed",
                json!({
                    "snapshot_identifier": request.snapshot_identifier.clone(),
                    "error": error.message(),
                }),
            );
            Err(error)
        }
    }
}

fn resolve_inner(
    request: &NormalizedChangeRequest,
    api: &impl SnapshotAttributeApi,
) -> Result<ChangeOutcome, ApiError> {
    let RequestMode::Modify {
        attribute_name,
        values_to_add,
        values_to_remove,
    } = &request.mode
    else {
        let attribute_set = api.describe(&request.snapshot_identifier)?;
        log_resolve_info(
            "describe_completed",
            json!({
                "snapshot_identifier": request.snapshot_identifier.clone(),
                "attribute_count": attribute_set.attributes.len(),
            }),
        );
        return Ok(ChangeOutcome {
            changed: false,
            attribute_set,
        });
    };

    let before = api.describe(&request.snapshot_identifier)?;

    if request.check_mode {
        let projected =
            apply_speculative_change(&before, attribute_name, values_to_add, values_to_remove);
        let changed = detect_change(&before, &projected);
        log_resolve_info(
            "check_mode_diff",
            json!({
                "snapshot_identifier": request.snapshot_identifier.clone(),
                "attribute_name": attribute_name.clone(),
                "changed": changed,
            }),
        );
        return Ok(ChangeOutcome {
            changed,
            attribute_set: before,
        });
    }

    let after = api.modify(
        &request.snapshot_identifier,
        attribute_name,
        values_to_add,
        values_to_remove,
    )?;
    let changed = detect_change(&before, &after);
    log_resolve_info(
        "modify_completed",
        json!({
            "snapshot_identifier": request.snapshot_identifier.clone(),
            "attribute_name": attribute_name.clone(),
            "values_added": values_to_add.len(),
            "values_removed": values_to_remove.len(),
            "changed": changed,
        }),
    );

    Ok(ChangeOutcome {
        changed,
        attribute_set: after,
    })
}

fn log_resolve_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "attribute_resolver",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_resolve_error(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "attribute_resolver",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

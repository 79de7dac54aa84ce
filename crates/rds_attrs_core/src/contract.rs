use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// One sharing attribute of a snapshot, e.g. the `restore` attribute
/// listing the account IDs the snapshot is shared with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotAttribute {
    #[serde(rename = "AttributeName")]
    pub name: String,
    #[serde(rename = "AttributeValues", default)]
    pub values: Vec<String>,
}

/// The full set of sharing attributes for one snapshot at one point in
/// time, in the wire shape the RDS API returns it.
///
/// Attribute names are unique within a set. Equality is order-independent
/// on attribute names and on each attribute's values: shared accounts are
/// a set, so two responses that list the same values in a different order
/// count as the same state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeSet {
    #[serde(rename = "DBSnapshotIdentifier")]
    pub snapshot_identifier: String,
    #[serde(rename = "DBSnapshotAttributes", default)]
    pub attributes: Vec<SnapshotAttribute>,
}

impl AttributeSet {
    /// Values of the named attribute, if present.
    pub fn attribute_values(&self, name: &str) -> Option<&[String]> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.values.as_slice())
    }

    fn value_sets(&self) -> BTreeMap<&str, BTreeSet<&str>> {
        self.attributes
            .iter()
            .map(|attribute| {
                (
                    attribute.name.as_str(),
                    attribute.values.iter().map(String::as_str).collect(),
                )
            })
            .collect()
    }
}

impl PartialEq for AttributeSet {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot_identifier == other.snapshot_identifier
            && self.value_sets() == other.value_sets()
    }
}

impl Eq for AttributeSet {}

/// Raw invocation parameters, mirroring the module's argument spec.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeRequest {
    #[serde(alias = "snapshot_name")]
    pub db_snapshot_identifier: String,
    #[serde(default)]
    pub attribute_name: Option<String>,
    #[serde(default)]
    pub values_to_add: Option<Vec<String>>,
    #[serde(default)]
    pub values_to_remove: Option<Vec<String>>,
    #[serde(default)]
    pub check_mode: bool,
}

/// A validated request with its mode already selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedChangeRequest {
    pub snapshot_identifier: String,
    pub check_mode: bool,
    pub mode: RequestMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMode {
    /// No mutation parameters were supplied: read the current state.
    Describe,
    /// Submit an add/remove delta for one attribute. Both value lists may
    /// be empty, which issues a no-op modify call.
    Modify {
        attribute_name: String,
        values_to_add: Vec<String>,
        values_to_remove: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

pub fn normalize_request(
    request: ChangeRequest,
) -> Result<NormalizedChangeRequest, ValidationError> {
    let snapshot_identifier = request.db_snapshot_identifier.trim().to_string();
    if snapshot_identifier.is_empty() {
        return Err(ValidationError::new("db_snapshot_identifier cannot be empty"));
    }

    let attribute_name = request
        .attribute_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());
    let values_to_add = request.values_to_add.unwrap_or_default();
    let values_to_remove = request.values_to_remove.unwrap_or_default();

    let mode = if attribute_name.is_none() && values_to_add.is_empty() && values_to_remove.is_empty()
    {
        RequestMode::Describe
    } else {
        let attribute_name = attribute_name.ok_or_else(|| {
            ValidationError::new(
                "attribute_name is required when values_to_add or values_to_remove are supplied",
            )
        })?;
        RequestMode::Modify {
            attribute_name,
            values_to_add,
            values_to_remove,
        }
    };

    Ok(NormalizedChangeRequest {
        snapshot_identifier,
        check_mode: request.check_mode,
        mode,
    })
}

/// Parses a bracket/quote-delimited list representation into bare tokens.
///
/// Invocation layers that only carry scalar parameters encode lists as
/// strings like `"['123456789012', '987654321012']"`. The brackets and
/// quote characters are stripped and the remainder is split on the
/// literal `", "` separator. Callers with native lists should pass them
/// through directly and skip this step.
pub fn parse_value_list(raw: &str) -> Vec<String> {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '"' | '\''))
        .collect();
    if stripped.is_empty() {
        return Vec::new();
    }
    stripped.split(", ").map(str::to_string).collect()
}

use std::collections::BTreeSet;

use crate::contract::{AttributeSet, SnapshotAttribute};

/// Whether a mutation altered snapshot-sharing state, judged by the
/// order-independent `AttributeSet` equality.
pub fn detect_change(before: &AttributeSet, after: &AttributeSet) -> bool {
    before != after
}

/// Applies an add/remove delta to a baseline locally, without calling the
/// service. Used by check mode to compute the would-be post-state.
///
/// The named attribute's values are treated as a set: added values that
/// are already present and removed values that are absent are no-ops. The
/// attribute is created when the baseline does not carry it.
pub fn apply_speculative_change(
    baseline: &AttributeSet,
    attribute_name: &str,
    values_to_add: &[String],
    values_to_remove: &[String],
) -> AttributeSet {
    let mut projected = baseline.clone();
    let index = projected
        .attributes
        .iter()
        .position(|attribute| attribute.name == attribute_name);
    let index = match index {
        Some(index) => index,
        None => {
            projected.attributes.push(SnapshotAttribute {
                name: attribute_name.to_string(),
                values: Vec::new(),
            });
            projected.attributes.len() - 1
        }
    };

    let mut values: BTreeSet<String> = projected.attributes[index].values.iter().cloned().collect();
    for value in values_to_add {
        values.insert(value.clone());
    }
    for value in values_to_remove {
        values.remove(value);
    }
    projected.attributes[index].values = values.into_iter().collect();

    projected
}

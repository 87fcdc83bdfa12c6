//! Selects argument definitions by named type, ignoring wrappers.

use crate::schema::{ArgumentDefinition, FieldType, TargetType};

/// Returns true when the declared type, stripped of list and required
/// wrappers, names the same type as `target`.
pub fn matches(declared: &FieldType, target: &TargetType) -> bool {
    declared.named_type() == target.named_type()
}

/// Filters `definitions` down to those whose named type equals the target's,
/// preserving declaration order. An empty input yields an empty result,
/// never an error.
pub fn find_matching_arguments<'a>(
    target: &TargetType,
    definitions: &'a [ArgumentDefinition],
) -> Vec<&'a ArgumentDefinition> {
    definitions
        .iter()
        .filter(|definition| matches(&definition.ty, target))
        .collect()
}

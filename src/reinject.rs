//! Merges per-argument transform results back into the full argument set.

use indexmap::IndexMap;

use crate::value::{ArgumentSet, ArgumentValue, TransformedArgument};

/// Builds a new argument set equal to `original` with each result's name
/// overwritten by its transformed value.
///
/// The original set is never mutated in place for downstream observers: a
/// fresh map is constructed, keys keep their original order, and keys
/// without a replacement pass through untouched. Duplicate result names are
/// last-write-wins; result names absent from the original are appended.
pub fn reinject<V>(
    original: ArgumentSet<V>,
    results: Vec<TransformedArgument<V>>,
) -> ArgumentSet<V> {
    let mut replacements: IndexMap<String, ArgumentValue<V>> =
        IndexMap::with_capacity(results.len());
    for result in results {
        replacements.insert(result.name, result.value.into_argument_value());
    }

    let mut merged = ArgumentSet::with_capacity(original.len());
    for (name, value) in original {
        let value = replacements.shift_remove(&name).unwrap_or(value);
        merged.insert(name, value);
    }
    for (name, value) in replacements {
        merged.insert(name, value);
    }
    merged
}

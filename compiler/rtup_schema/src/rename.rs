//! Rename policy for invalid and duplicate field names.

use rustc_hash::FxHashSet;

use crate::validate::classify;

/// Placeholder name for the field at `index` (`_0`, `_1`, ...).
pub fn placeholder(index: usize) -> String {
    format!("_{index}")
}

/// Replace invalid or repeated field names with positional placeholders.
///
/// With `enabled` unset the input comes back untouched and validation
/// rejects bad names later. Otherwise this is a single left-to-right pass:
/// a field is replaced by `_i` when its verdict is not `Valid` or when the
/// name is already in the running `seen` set. The set holds original names
/// and generated placeholders alike, so the result is reproducible for a
/// given input order.
pub fn rename(fields: Vec<String>, enabled: bool) -> Vec<String> {
    if !enabled {
        return fields;
    }

    let mut seen: FxHashSet<String> = FxHashSet::default();
    seen.reserve(fields.len());

    fields
        .into_iter()
        .enumerate()
        .map(|(index, field)| {
            let field = if classify(&field).is_valid() && !seen.contains(&field) {
                field
            } else {
                let renamed = placeholder(index);
                tracing::debug!(index, original = %field, %renamed, "renamed field");
                renamed
            };
            seen.insert(field.clone());
            field
        })
        .collect()
}

//! Conversions layered on record instances.
//!
//! All of these are pure: they read an immutable record and produce a new
//! value or a new record.

use rtup_schema::RecordType;
use smallvec::SmallVec;
use std::sync::Arc;

use crate::bind::bind_positional;
use crate::{BindError, ConvertError, KeywordArgs, MappingHook, Record, Value};

/// Hand the record's `(field, value)` pairs, in field order, to `hook`.
pub fn to_mapping(record: &Record, hook: &MappingHook) -> Result<Value, ConvertError> {
    let pairs = record
        .record_type()
        .field_names()
        .zip(record.iter())
        .map(|(field, value)| (field.to_string(), value.clone()))
        .collect();
    hook.call(pairs)
}

/// New record with the fields named in `changes` substituted.
///
/// Unnamed fields share the original values. Every unknown key is reported
/// at once; non-string keys appear as their repr. The result never shares
/// slot storage with `record`, even when `changes` is empty.
pub fn replace(record: &Record, mut changes: KeywordArgs) -> Result<Record, BindError> {
    let ty = record.record_type();
    let slots: Vec<Value> = ty
        .field_names()
        .zip(record.iter())
        .map(|(field, old)| changes.take_str(field).unwrap_or_else(|| old.clone()))
        .collect();

    if !changes.is_empty() {
        let unknown: SmallVec<[String; 4]> = changes
            .keys()
            .map(|key| match key.as_str() {
                Some(name) => name.to_string(),
                None => key.repr(),
            })
            .collect();
        tracing::trace!(record = %ty.name(), count = unknown.len(), "replace with unknown fields");
        return Err(BindError::UnexpectedKeyword {
            keywords: unknown.into_vec(),
        });
    }

    Ok(Record::from_slots(Arc::clone(ty), slots))
}

/// Build a record from any iterable, binding purely positionally.
pub fn make<I>(ty: &Arc<RecordType>, iterable: I) -> Result<Record, BindError>
where
    I: IntoIterator<Item = Value>,
{
    let positional: Vec<Value> = iterable.into_iter().collect();
    let slots = bind_positional(ty, positional)?;
    Ok(Record::from_slots(Arc::clone(ty), slots))
}

/// The slots verbatim, suitable for [`make`].
pub fn construction_args(record: &Record) -> Vec<Value> {
    record.as_slice().to_vec()
}

//! Plain schema definitions for persisting record types.
//!
//! A `RecordTypeDef` is the data-only form of a descriptor. Turning one back
//! into a `RecordType` re-runs validation with renaming disabled, so a
//! stored definition can never produce a descriptor the factory would have
//! rejected.

use crate::{RecordType, SchemaError};

/// Serializable description of a record type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordTypeDef {
    pub name: String,
    pub fields: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub module: Option<String>,
}

impl RecordType {
    /// Data-only snapshot of this descriptor.
    pub fn to_def(&self) -> RecordTypeDef {
        RecordTypeDef {
            name: self.name().to_string(),
            fields: self.field_names().map(str::to_string).collect(),
            module: self.module().map(str::to_string),
        }
    }

    /// Rebuild a descriptor from a definition.
    ///
    /// Placeholder names such as `_0` are accepted here, since a renamed
    /// type round-trips through its definition.
    pub fn from_def(def: RecordTypeDef) -> Result<RecordType, SchemaError> {
        let RecordTypeDef {
            name,
            fields,
            module,
        } = def;
        let ty = RecordType::build_placeholders(&name, fields)?;
        Ok(match module {
            Some(module) => ty.with_module(module),
            None => ty,
        })
    }
}

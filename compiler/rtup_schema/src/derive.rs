//! Derivation of a record type from a previously generated one.

use std::sync::Arc;

use crate::validate::check_type_name;
use crate::{RecordType, SchemaError};

impl RecordType {
    /// Derive a new descriptor named `name` with this type's schema.
    ///
    /// Field names are copied into the child's own storage and the layout
    /// is rebuilt over the copies; the repr template is shared since it is
    /// immutable. The child keeps no reference to the parent. Fields cannot
    /// be extended, so the child differs only by name. The shared template
    /// still prints the parent's name.
    pub fn derive(&self, name: &str) -> Result<RecordType, SchemaError> {
        check_type_name(name)?;

        let fields: Box<[Arc<str>]> = self.fields().iter().map(|f| Arc::from(&**f)).collect();
        tracing::debug!(parent = %self.name(), child = %name, "derived record type");
        Ok(RecordType::assemble(
            Arc::from(name),
            fields,
            Some(self.repr_template().clone()),
        ))
    }
}

/// Derive `name` from its declared parents.
///
/// Only a single-parent chain is supported: exactly one parent must be
/// given.
pub fn derive_from(name: &str, parents: &[&RecordType]) -> Result<RecordType, SchemaError> {
    match parents {
        [parent] => parent.derive(name),
        [] => Err(SchemaError::MissingParent {
            name: name.to_string(),
        }),
        _ => Err(SchemaError::MultipleParentsUnsupported {
            count: parents.len(),
        }),
    }
}

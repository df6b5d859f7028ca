//! Field layout and per-field accessors.

use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Name of the pseudo-attribute that yields the ordered field names.
pub const FIELDS_ATTR: &str = "_fields";

// FieldLayout

/// Layout information for O(1) field access by name.
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldLayout {
    /// Map from field name to slot index.
    field_indices: FxHashMap<Arc<str>, usize>,
}

impl FieldLayout {
    /// Create a new layout from field names in slot order.
    pub(crate) fn new(field_names: &[Arc<str>]) -> Self {
        let field_indices = field_names
            .iter()
            .enumerate()
            .map(|(i, name)| (Arc::clone(name), i))
            .collect();
        FieldLayout { field_indices }
    }

    /// Get the slot index of a field by name.
    pub(crate) fn get_index(&self, field: &str) -> Option<usize> {
        self.field_indices.get(field).copied()
    }
}

// FieldAccessor

/// Read-only binding of a field name to its slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldAccessor {
    name: Arc<str>,
    slot: usize,
}

impl FieldAccessor {
    pub(crate) fn new(name: Arc<str>, slot: usize) -> Self {
        FieldAccessor { name, slot }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Read this field out of an instance's slots.
    ///
    /// `slots` must come from an instance of the type that produced this
    /// accessor; the descriptor guarantees the slot exists.
    #[inline]
    pub fn get<'a, T>(&self, slots: &'a [T]) -> &'a T {
        &slots[self.slot]
    }
}

// Attribute

/// Result of resolving an attribute name against a record type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Attribute<'a> {
    /// A named field.
    Field(FieldAccessor),
    /// The `_fields` pseudo-attribute: every field name in order.
    Fields(&'a [Arc<str>]),
}

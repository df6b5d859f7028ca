//! Record instances.
//!
//! A `Record` is a type tag plus a fixed-length slot vector aligned with the
//! type's fields. It behaves like a plain tuple: indexing, iteration,
//! equality and hashing all go through the slots alone.

use rtup_schema::{Attribute, RecordType};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::sync::Arc;

use crate::value::Repr;
use crate::{bind, convert, current_mapping_hook, BindError, ConvertError, KeywordArgs, Value};

/// Immutable instance of a generated record type.
#[derive(Clone)]
pub struct Record {
    ty: Arc<RecordType>,
    slots: Arc<[Value]>,
}

impl Record {
    /// Construct an instance from call arguments.
    pub fn new(
        ty: &Arc<RecordType>,
        positional: Vec<Value>,
        keywords: KeywordArgs,
    ) -> Result<Self, BindError> {
        let slots = bind::bind(ty, positional, keywords)?;
        Ok(Record::from_slots(Arc::clone(ty), slots))
    }

    /// Construct an instance from any iterable, binding positionally.
    pub fn make<I>(ty: &Arc<RecordType>, iterable: I) -> Result<Self, BindError>
    where
        I: IntoIterator<Item = Value>,
    {
        convert::make(ty, iterable)
    }

    /// Wrap slots that were already bound against `ty`.
    pub(crate) fn from_slots(ty: Arc<RecordType>, slots: Vec<Value>) -> Self {
        debug_assert_eq!(slots.len(), ty.len());
        Record {
            ty,
            slots: Arc::from(slots),
        }
    }

    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.ty
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.slots.get(index)
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.slots.iter()
    }

    /// Value of a field by name, O(1).
    pub fn field(&self, name: &str) -> Option<&Value> {
        let slot = self.ty.index_of(name)?;
        self.slots.get(slot)
    }

    /// Resolve an attribute: a field value, or `_fields` as a tuple of names.
    pub fn getattr(&self, attr: &str) -> Option<Value> {
        match self.ty.attribute(attr)? {
            Attribute::Field(accessor) => Some(accessor.get(self.as_slice()).clone()),
            Attribute::Fields(fields) => Some(Value::tuple(
                fields.iter().map(|f| Value::string(&**f)).collect(),
            )),
        }
    }

    /// New instance with the named fields substituted.
    pub fn replace(&self, changes: KeywordArgs) -> Result<Record, BindError> {
        convert::replace(self, changes)
    }

    /// Mapping of field names to values, built by the process-wide hook.
    pub fn asdict(&self) -> Result<Value, ConvertError> {
        convert::to_mapping(self, &current_mapping_hook())
    }

    /// Arguments that rebuild this instance through [`Record::make`].
    pub fn construction_args(&self) -> Vec<Value> {
        convert::construction_args(self)
    }

    /// Construction arguments as a plain tuple.
    pub fn getnewargs(&self) -> Value {
        Value::tuple(self.construction_args())
    }

    /// Auxiliary state for persistence. Records carry none.
    pub fn getstate(&self) -> Value {
        Value::None
    }

    /// The `(type, construction args)` pair used to persist this instance.
    pub fn reduce(&self) -> Reduced {
        Reduced {
            ty: Arc::clone(&self.ty),
            args: self.construction_args(),
        }
    }

    /// This instance as a plain tuple value.
    pub fn to_tuple(&self) -> Value {
        Value::tuple(self.slots.to_vec())
    }

    /// Check whether two records share the same slot storage.
    pub fn ptr_eq(&self, other: &Record) -> bool {
        Arc::ptr_eq(&self.slots, &other.slots)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slots.hash(state);
    }
}

impl Index<usize> for Record {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.slots[index]
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl fmt::Display for Record {
    /// The type's repr template with each slot filled by its value's repr.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ty
            .repr_template()
            .write_to(f, self.slots.iter().map(Repr))
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple(self.ty.name());
        for value in self.slots.iter() {
            tuple.field(value);
        }
        tuple.finish()
    }
}

// Reduced

/// Persistable form of a record: its type and construction arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduced {
    pub ty: Arc<RecordType>,
    pub args: Vec<Value>,
}

impl Reduced {
    /// Rebuild the instance through `make`.
    pub fn rebuild(&self) -> Result<Record, BindError> {
        Record::make(&self.ty, self.args.iter().cloned())
    }
}

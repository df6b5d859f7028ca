//! The record type descriptor.
//!
//! A `RecordType` is the runtime schema object for one generated type: its
//! name, ordered field names, the name -> slot layout, and the cached repr
//! template. It is built exactly once (or copied by derivation) and is
//! immutable afterwards.

use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::Arc;

use crate::layout::{Attribute, FieldAccessor, FieldLayout, FIELDS_ATTR};
use crate::rename::{placeholder, rename};
use crate::validate::{check_field_name, check_type_name};
use crate::{FieldNames, SchemaError};

/// Hard cap on the number of fields per type and arguments per call.
///
/// Matches the host runtime's argument buffer size.
pub const MAX_FIELDS: usize = 8192;

/// Substitution marker used in repr templates, one per field.
pub const REPR_SLOT: &str = "%s";

// ReprTemplate

/// Cached representation template: `Name(f1=%s, f2=%s)`.
///
/// Type and field names can never contain `%`, so every `%s` in the text
/// is a value slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReprTemplate(Arc<str>);

impl ReprTemplate {
    fn build(type_name: &str, fields: &[Arc<str>]) -> Self {
        let mut text = String::with_capacity(type_name.len() + 2 + fields.len() * 8);
        text.push_str(type_name);
        text.push('(');
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                text.push_str(", ");
            }
            text.push_str(field);
            text.push('=');
            text.push_str(REPR_SLOT);
        }
        text.push(')');
        ReprTemplate(Arc::from(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of value slots in the template.
    pub fn slot_count(&self) -> usize {
        self.0.matches(REPR_SLOT).count()
    }

    /// Check whether two templates share the same allocation.
    pub fn ptr_eq(&self, other: &ReprTemplate) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Write the template with each slot filled by the next value.
    ///
    /// Slots without a matching value are left empty.
    pub fn write_to<W, I>(&self, out: &mut W, values: I) -> fmt::Result
    where
        W: fmt::Write,
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let mut values = values.into_iter();
        for (i, piece) in self.0.split(REPR_SLOT).enumerate() {
            if i > 0 {
                if let Some(value) = values.next() {
                    write!(out, "{value}")?;
                }
            }
            out.write_str(piece)?;
        }
        Ok(())
    }

    /// Render the template into a new string.
    pub fn render<I>(&self, values: I) -> String
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let mut out = String::with_capacity(self.0.len());
        // Writing into a String cannot fail
        let _ = self.write_to(&mut out, values);
        out
    }
}

impl fmt::Display for ReprTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// RecordType

/// Immutable descriptor for a generated record type.
#[derive(Clone, Debug)]
pub struct RecordType {
    name: Arc<str>,
    /// Label of the module that created the type, if any.
    module: Option<Arc<str>>,
    /// Field names in slot order.
    fields: Box<[Arc<str>]>,
    layout: FieldLayout,
    repr_template: ReprTemplate,
}

impl RecordType {
    /// Build a descriptor with the default field cap.
    pub fn build(
        name: &str,
        fields: impl Into<FieldNames>,
        rename: bool,
    ) -> Result<Self, SchemaError> {
        Self::build_with_limit(name, fields, rename, MAX_FIELDS)
    }

    /// Build a descriptor, rejecting more than `max_fields` fields.
    ///
    /// `max_fields` is clamped to [`MAX_FIELDS`]. Names are normalized,
    /// optionally renamed, then validated: the type name first (a leading
    /// underscore is tolerated), then each field in order (a leading
    /// underscore only when renaming is on), then uniqueness.
    pub fn build_with_limit(
        name: &str,
        fields: impl Into<FieldNames>,
        rename_invalid: bool,
        max_fields: usize,
    ) -> Result<Self, SchemaError> {
        let max_fields = max_fields.min(MAX_FIELDS);
        let fields: FieldNames = fields.into();
        let fields = fields.into_vec(max_fields)?;
        Self::from_names(name, fields, rename_invalid, rename_invalid, max_fields)
    }

    /// Validate without renaming, but accept a field named exactly `_i` at
    /// index `i`.
    ///
    /// Used when rebuilding a descriptor whose names were already renamed.
    pub(crate) fn build_placeholders(name: &str, fields: Vec<String>) -> Result<Self, SchemaError> {
        Self::from_names(name, fields, false, true, MAX_FIELDS)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(
        name = %name,
        count = fields.len(),
        rename = rename_invalid
    ))]
    fn from_names(
        name: &str,
        fields: Vec<String>,
        rename_invalid: bool,
        allow_placeholders: bool,
        max_fields: usize,
    ) -> Result<Self, SchemaError> {
        if fields.len() > max_fields {
            return Err(SchemaError::FieldCountExceeded { max: max_fields });
        }

        let fields = rename(fields, rename_invalid);

        check_type_name(name)?;

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for (index, field) in fields.iter().enumerate() {
            // Only the field's own placeholder may start with an underscore
            let own_placeholder = allow_placeholders && *field == placeholder(index);
            check_field_name(field, own_placeholder)?;
            if !seen.insert(field.as_str()) {
                return Err(SchemaError::DuplicateField {
                    name: field.clone(),
                });
            }
        }

        let fields: Box<[Arc<str>]> = fields.into_iter().map(Arc::from).collect();
        let ty = Self::assemble(Arc::from(name), fields, None);
        tracing::debug!(template = %ty.repr_template, "record type created");
        Ok(ty)
    }

    /// Put a descriptor together from already-validated parts.
    ///
    /// Builds the layout over `fields`; the repr template is reused when
    /// given, otherwise built from `name` and `fields`.
    pub(crate) fn assemble(
        name: Arc<str>,
        fields: Box<[Arc<str>]>,
        repr_template: Option<ReprTemplate>,
    ) -> Self {
        let layout = FieldLayout::new(&fields);
        let repr_template = repr_template.unwrap_or_else(|| ReprTemplate::build(&name, &fields));
        RecordType {
            name,
            module: None,
            fields,
            layout,
            repr_template,
        }
    }

    /// Attach the label of the module that owns this type.
    #[must_use]
    pub fn with_module(mut self, module: impl Into<Arc<str>>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    /// `module.Name` when a module label is set, otherwise just `Name`.
    pub fn qualified_name(&self) -> String {
        match &self.module {
            Some(module) => format!("{module}.{}", self.name),
            None => self.name.to_string(),
        }
    }

    /// Field names in slot order.
    pub fn fields(&self) -> &[Arc<str>] {
        &self.fields
    }

    /// Field names in slot order, as `&str`.
    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|f| &**f)
    }

    /// Number of fields (the arity of every instance).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn repr_template(&self) -> &ReprTemplate {
        &self.repr_template
    }

    /// Slot index of a field.
    pub fn index_of(&self, field: &str) -> Option<usize> {
        self.layout.get_index(field)
    }

    /// Accessor for a field by name.
    pub fn accessor(&self, field: &str) -> Option<FieldAccessor> {
        let slot = self.layout.get_index(field)?;
        Some(FieldAccessor::new(Arc::clone(&self.fields[slot]), slot))
    }

    /// Every field accessor, in slot order.
    pub fn accessors(&self) -> impl Iterator<Item = FieldAccessor> + '_ {
        self.fields
            .iter()
            .enumerate()
            .map(|(slot, name)| FieldAccessor::new(Arc::clone(name), slot))
    }

    /// Resolve an attribute: a field accessor or the `_fields` list.
    pub fn attribute(&self, attr: &str) -> Option<Attribute<'_>> {
        if attr == FIELDS_ATTR {
            return Some(Attribute::Fields(&self.fields));
        }
        self.accessor(attr).map(Attribute::Field)
    }
}

impl PartialEq for RecordType {
    /// Descriptors compare by schema: name, module, fields, and template.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.module == other.module
            && self.fields == other.fields
            && self.repr_template == other.repr_template
    }
}

impl Eq for RecordType {}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<record type {}>", self.qualified_name())
    }
}

//! Record type factory.

use std::sync::Arc;

use rtup_schema::{derive_from, FieldNames, RecordType, SchemaError, MAX_FIELDS};
use rtup_value::{
    current_mapping_hook, to_mapping, BindError, ConvertError, KeywordArgs, MappingHook, Record,
    Value,
};

/// Create a record type with the default configuration.
///
/// `field_names` is either one string of names separated by commas and/or
/// spaces, or a sequence of names. With `rename` set, invalid and duplicate
/// names become `_i` placeholders instead of failing.
pub fn create_record_type(
    name: &str,
    field_names: impl Into<FieldNames>,
    rename: bool,
) -> Result<Arc<RecordType>, SchemaError> {
    RecordType::build(name, field_names, rename).map(Arc::new)
}

/// Factory configuration.
#[derive(Clone, Debug)]
pub struct FactoryConfig {
    /// Field cap per type. Clamped to [`MAX_FIELDS`].
    pub max_fields: usize,
    /// Module label stamped on every created type.
    pub module: Option<String>,
    /// Mapping constructor for `to_mapping`. `None` uses the process-wide
    /// hook.
    pub mapping_hook: Option<MappingHook>,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        FactoryConfig {
            max_fields: MAX_FIELDS,
            module: None,
            mapping_hook: None,
        }
    }
}

impl FactoryConfig {
    #[must_use]
    pub fn with_max_fields(mut self, max_fields: usize) -> Self {
        self.max_fields = max_fields;
        self
    }

    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    #[must_use]
    pub fn with_mapping_hook(mut self, hook: MappingHook) -> Self {
        self.mapping_hook = Some(hook);
        self
    }
}

/// Creates record types and operates on their instances under one
/// configuration.
#[derive(Clone, Debug, Default)]
pub struct RecordFactory {
    config: FactoryConfig,
}

impl RecordFactory {
    pub fn new(config: FactoryConfig) -> Self {
        RecordFactory { config }
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Create and publish a record type.
    pub fn create(
        &self,
        name: &str,
        field_names: impl Into<FieldNames>,
        rename: bool,
    ) -> Result<Arc<RecordType>, SchemaError> {
        let ty = RecordType::build_with_limit(name, field_names, rename, self.config.max_fields)?;
        Ok(Arc::new(self.stamp(ty)))
    }

    /// Derive a record type from its single declared parent.
    pub fn derive(
        &self,
        name: &str,
        parents: &[&RecordType],
    ) -> Result<Arc<RecordType>, SchemaError> {
        let ty = derive_from(name, parents)?;
        Ok(Arc::new(self.stamp(ty)))
    }

    /// Construct an instance from call arguments.
    pub fn instantiate(
        &self,
        ty: &Arc<RecordType>,
        positional: Vec<Value>,
        keywords: KeywordArgs,
    ) -> Result<Record, BindError> {
        Record::new(ty, positional, keywords)
    }

    /// Construct an instance from any iterable.
    pub fn make<I>(&self, ty: &Arc<RecordType>, iterable: I) -> Result<Record, BindError>
    where
        I: IntoIterator<Item = Value>,
    {
        Record::make(ty, iterable)
    }

    /// Convert a record to a mapping with this factory's hook.
    pub fn to_mapping(&self, record: &Record) -> Result<Value, ConvertError> {
        to_mapping(record, &self.mapping_hook())
    }

    /// The injected hook, or the process-wide one.
    pub fn mapping_hook(&self) -> MappingHook {
        self.config
            .mapping_hook
            .clone()
            .unwrap_or_else(current_mapping_hook)
    }

    fn stamp(&self, ty: RecordType) -> RecordType {
        match &self.config.module {
            Some(module) => ty.with_module(module.as_str()),
            None => ty,
        }
    }
}

//! Mapping constructor hook.
//!
//! `to_mapping` hands a record's `(field, value)` pairs to a `MappingHook`,
//! which decides what kind of mapping comes back. A hook is normally
//! injected through configuration; the process-wide fallback exists for
//! callers that register one at startup and is read by `Record::asdict`.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

use crate::{ConfigError, ConvertError, Value};

type BuildFn = dyn Fn(Vec<(String, Value)>) -> Result<Value, String> + Send + Sync;

/// Constructor for the mapping produced from a record.
#[derive(Clone)]
pub struct MappingHook {
    name: Arc<str>,
    build: Arc<BuildFn>,
}

impl MappingHook {
    /// Wrap a native builder.
    pub fn new<F>(name: impl Into<Arc<str>>, build: F) -> Self
    where
        F: Fn(Vec<(String, Value)>) -> Result<Value, String> + Send + Sync + 'static,
    {
        MappingHook {
            name: name.into(),
            build: Arc::new(build),
        }
    }

    /// Builds an unordered `Value::Map`. Used when nothing is registered.
    pub fn unordered() -> Self {
        MappingHook::new("dict", |pairs| {
            let mut map = FxHashMap::with_capacity_and_hasher(pairs.len(), Default::default());
            map.extend(pairs);
            Ok(Value::map(map))
        })
    }

    /// Builds an insertion-ordered `Value::OrderedMap`.
    pub fn ordered() -> Self {
        MappingHook::new("OrderedDict", |pairs| Ok(Value::ordered_map(pairs)))
    }

    /// Adapt a callable value.
    ///
    /// The callable receives one argument: a list of `(key, value)` tuples.
    /// Only `Value::FunctionVal` is callable.
    pub fn from_value(ctor: &Value) -> Result<Self, ConfigError> {
        match ctor {
            Value::FunctionVal(func, name) => {
                let func = *func;
                Ok(MappingHook::new(*name, move |pairs| {
                    let items = pairs
                        .into_iter()
                        .map(|(key, value)| Value::pair(key, value))
                        .collect();
                    func(&[Value::list(items)])
                }))
            }
            other => Err(ConfigError::NotCallable {
                type_name: other.type_name().to_string(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a mapping from ordered pairs.
    pub fn call(&self, pairs: Vec<(String, Value)>) -> Result<Value, ConvertError> {
        (self.build)(pairs).map_err(|message| ConvertError::MappingConstructorFailed {
            hook: self.name.to_string(),
            message,
        })
    }
}

impl Default for MappingHook {
    fn default() -> Self {
        MappingHook::unordered()
    }
}

impl fmt::Debug for MappingHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MappingHook").field(&self.name).finish()
    }
}

// Process-wide registration

/// `None` means the default unordered constructor.
static REGISTERED: RwLock<Option<MappingHook>> = RwLock::new(None);

/// Register a callable value as the process-wide mapping constructor.
///
/// Replaces any previous registration. Meant to be called once at
/// startup, before records are converted concurrently.
pub fn register_mapping_constructor(ctor: &Value) -> Result<(), ConfigError> {
    let hook = MappingHook::from_value(ctor).inspect_err(|err| {
        tracing::debug!(%err, "rejected mapping constructor");
    })?;
    set_mapping_hook(hook);
    Ok(())
}

/// Install a native hook as the process-wide mapping constructor.
pub fn set_mapping_hook(hook: MappingHook) {
    tracing::debug!(hook = %hook.name(), "registered mapping constructor");
    *REGISTERED.write() = Some(hook);
}

/// Restore the default unordered constructor.
pub fn reset_mapping_hook() {
    *REGISTERED.write() = None;
}

/// The process-wide mapping constructor.
pub fn current_mapping_hook() -> MappingHook {
    REGISTERED.read().clone().unwrap_or_default()
}

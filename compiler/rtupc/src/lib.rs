//! rtupc - runtime record-type factory.
//!
//! Generates immutable, fixed-arity, ordered record types at runtime from a
//! type name and a list of field names. Instances behave like plain tuples
//! and additionally support lookup by name, keyword construction, and a few
//! derived conversions.
//!
//! ```text
//! let point = rtupc::create_record_type("Point", "x, y", false)?;
//! let p = Record::new(&point, vec![Value::int(1), Value::int(2)], KeywordArgs::new())?;
//! assert_eq!(p.to_string(), "Point(x=1, y=2)");
//! ```
//!
//! # Crates
//!
//! - `rtup_schema`: validation, renaming, and the `RecordType` descriptor
//! - `rtup_value`: values, records, binding, and conversion hooks
//! - `rtup_diagnostic`: stable error codes
//!
//! # Tracing
//!
//! Call [`init_tracing`] at startup and set `RUST_LOG`, e.g.
//! `RUST_LOG=rtup_schema=debug` to see every type creation and rename.

mod errors;
mod factory;

pub use errors::Error;
pub use factory::{create_record_type, FactoryConfig, RecordFactory};

pub use rtup_diagnostic::ErrorCode;
pub use rtup_schema::{
    derive_from, FieldNames, RecordType, RecordTypeDef, SchemaError, MAX_FIELDS,
};
pub use rtup_value::{
    current_mapping_hook, register_mapping_constructor, reset_mapping_hook, set_mapping_hook,
    BindError, ConfigError, ConvertError, KeywordArgs, MappingHook, Record, Reduced, Value,
    MAX_ARGUMENTS,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

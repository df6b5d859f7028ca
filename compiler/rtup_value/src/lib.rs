//! rtup Value - record instances and the operations on them.
//!
//! This crate provides:
//! - The opaque slot value (`Value`) with enforced `Arc` sharing (`Heap`)
//! - Record instances (`Record`) with tuple semantics
//! - Keyword argument pools (`KeywordArgs`)
//! - Positional/keyword binding (`bind`)
//! - Conversion hooks (`to_mapping`, `replace`, `make`, `construction_args`)
//! - The mapping constructor hook and its process-wide registration
//!
//! Everything here is immutable once built, so records and values can be
//! shared across threads without coordination. The one exception is the
//! process-wide mapping hook, which is configuration set at startup.

mod bind;
mod convert;
mod errors;
mod hook;
mod keywords;
mod record;
mod value;

pub use bind::{bind, bind_positional, MAX_ARGUMENTS};
pub use convert::{construction_args, make, replace, to_mapping};
pub use errors::{BindError, ConfigError, ConvertError};
pub use hook::{
    current_mapping_hook, register_mapping_constructor, reset_mapping_hook, set_mapping_hook,
    MappingHook,
};
pub use keywords::KeywordArgs;
pub use record::{Record, Reduced};
pub use value::{FunctionValFn, Heap, Repr, Value};

//! rtup Schema - record type descriptors for the rtup factory.
//!
//! This crate provides:
//! - Field-name validation (`classify`, `Verdict`)
//! - The rename policy for invalid and duplicate names (`rename`)
//! - Field-name normalization from joined strings or sequences (`FieldNames`)
//! - The immutable type descriptor (`RecordType`) and its repr template
//! - Per-field accessors resolved through a cached name -> slot layout
//! - Derivation of a child descriptor from a parent (`derive_from`)
//!
//! # Lifecycle
//!
//! A `RecordType` is built once, then shared read-only (normally behind an
//! `Arc`) by every instance of that type. Nothing in a descriptor changes
//! after construction, so descriptors can be shared across threads freely.

mod def;
mod derive;
mod descriptor;
mod errors;
mod field_names;
mod layout;
mod rename;
mod validate;

pub use def::RecordTypeDef;
pub use derive::derive_from;
pub use descriptor::{RecordType, ReprTemplate, MAX_FIELDS, REPR_SLOT};
pub use errors::SchemaError;
pub use field_names::FieldNames;
pub use layout::{Attribute, FieldAccessor, FIELDS_ATTR};
pub use rename::{placeholder, rename};
pub use validate::{check_field_name, check_type_name, classify, Verdict, RESERVED_WORDS};

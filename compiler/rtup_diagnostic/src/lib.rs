//! Diagnostic codes for the record-type factory.
//!
//! Every error surfaced by the workspace maps to exactly one [`ErrorCode`],
//! so callers can match on a stable identifier instead of parsing messages:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - The offending identifier, position, or count in the message

mod error_code;

pub use error_code::{ErrorCode, ErrorPhase};

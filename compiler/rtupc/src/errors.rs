//! Umbrella error for factory operations.

use rtup_diagnostic::ErrorCode;
use rtup_schema::SchemaError;
use rtup_value::{BindError, ConfigError, ConvertError};

/// Any error a factory operation can raise.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Bind(#[from] BindError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Schema(e) => e.code(),
            Error::Bind(e) => e.code(),
            Error::Convert(e) => e.code(),
            Error::Config(e) => e.code(),
        }
    }
}

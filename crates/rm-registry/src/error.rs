use thiserror::Error;

use rm_core::DriverId;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("driver {0} not found")]
    DriverNotFound(DriverId),

    #[error("unknown driver status {0:?}: expected \"Available\" or \"Busy\"")]
    UnknownStatus(String),

    #[error("driver parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

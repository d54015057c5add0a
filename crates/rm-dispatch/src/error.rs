use thiserror::Error;

use rm_core::{CoreError, DriverId, Location};
use rm_registry::RegistryError;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatch configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("driver {0} is no longer available")]
    DriverUnavailable(DriverId),

    #[error("location {0} is not part of the road network")]
    UnknownLocation(Location),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;

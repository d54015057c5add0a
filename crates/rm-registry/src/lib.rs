//! `rm-registry`: driver records and availability lookup.
//!
//! # Crate layout
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`driver`]   | `DriverRecord`, `DriverStatus`                    |
//! | [`registry`] | `DriverRegistry`                                  |
//! | [`loader`]   | `load_drivers_csv`, `load_drivers_reader`         |
//! | [`error`]    | `RegistryError`, `RegistryResult<T>`              |
//!
//! Lookups match on exact location only.  A driver one road segment away is
//! invisible to [`DriverRegistry::find_available`].

pub mod driver;
pub mod error;
pub mod loader;
pub mod registry;

#[cfg(test)]
mod tests;

pub use driver::{DriverRecord, DriverStatus};
pub use error::{RegistryError, RegistryResult};
pub use loader::{load_drivers_csv, load_drivers_reader};
pub use registry::DriverRegistry;

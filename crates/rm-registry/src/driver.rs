//! Driver record and availability status.

use std::fmt;
use std::str::FromStr;

use rm_core::{DriverId, Location};

use crate::RegistryError;

/// Whether a driver can take a new ride.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DriverStatus {
    #[default]
    Available,
    Busy,
}

impl DriverStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DriverStatus::Available => "Available",
            DriverStatus::Busy => "Busy",
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriverStatus {
    type Err = RegistryError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("available") {
            Ok(DriverStatus::Available)
        } else if t.eq_ignore_ascii_case("busy") {
            Ok(DriverStatus::Busy)
        } else {
            Err(RegistryError::UnknownStatus(t.to_owned()))
        }
    }
}

/// One driver's identity, current location, and availability.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverRecord {
    pub id: DriverId,
    pub location: Location,
    pub status: DriverStatus,
}

impl DriverRecord {
    pub fn new(id: impl Into<DriverId>, location: impl Into<Location>, status: DriverStatus) -> Self {
        Self { id: id.into(), location: location.into(), status }
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == DriverStatus::Available
    }
}

//! Structured ride request results.
//!
//! The four outcomes are ordinary values; none of them is an error.  The
//! presentation layer decides how to render each one.

use rm_core::{Distance, DriverId, Location};
use rm_spatial::PathResult;

/// Discriminant of a [`RideOutcome`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RideStatus {
    Matched,
    NoDriverAvailable,
    NoRouteFound,
    UnknownLocation,
}

/// A matched driver with the route and fare for the trip.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RideMatch {
    pub driver: DriverId,
    /// Where the driver was when matched (always the pickup location).
    pub driver_location: Location,
    /// Pickup to destination, both inclusive.
    pub path: PathResult,
    pub fare: f64,
}

impl RideMatch {
    #[inline]
    pub fn distance(&self) -> Distance {
        self.path.distance
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status"))]
pub enum RideOutcome {
    Matched(RideMatch),

    /// No Available driver stands at the pickup location.  Routing was not
    /// attempted.
    NoDriverAvailable { pickup: Location },

    /// A driver was found but the destination cannot be reached by road.
    NoRouteFound { driver: DriverId, pickup: Location, destination: Location },

    /// `location` is not a vertex of the road graph.
    UnknownLocation { location: Location },
}

impl RideOutcome {
    pub fn status(&self) -> RideStatus {
        match self {
            RideOutcome::Matched(_) => RideStatus::Matched,
            RideOutcome::NoDriverAvailable { .. } => RideStatus::NoDriverAvailable,
            RideOutcome::NoRouteFound { .. } => RideStatus::NoRouteFound,
            RideOutcome::UnknownLocation { .. } => RideStatus::UnknownLocation,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, RideOutcome::Matched(_))
    }

    pub fn as_match(&self) -> Option<&RideMatch> {
        match self {
            RideOutcome::Matched(ride) => Some(ride),
            _ => None,
        }
    }

    pub fn into_match(self) -> Option<RideMatch> {
        match self {
            RideOutcome::Matched(ride) => Some(ride),
            _ => None,
        }
    }

    /// The selected driver, present for `Matched` and `NoRouteFound`.
    pub fn driver_id(&self) -> Option<&DriverId> {
        match self {
            RideOutcome::Matched(ride) => Some(&ride.driver),
            RideOutcome::NoRouteFound { driver, .. } => Some(driver),
            _ => None,
        }
    }

    pub fn path(&self) -> Option<&[Location]> {
        self.as_match().map(|ride| ride.path.stops.as_slice())
    }

    pub fn distance(&self) -> Option<Distance> {
        self.as_match().map(RideMatch::distance)
    }

    pub fn fare(&self) -> Option<f64> {
        self.as_match().map(|ride| ride.fare)
    }
}

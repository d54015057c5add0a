//! The ride request orchestrator.

use log::{debug, info};

use rm_core::{DispatchConfig, DriverId, Location};
use rm_registry::{DriverRegistry, DriverStatus};
use rm_spatial::{DijkstraRouter, RoadGraph, Router};

use crate::{DispatchError, DispatchResult, RideMatch, RideOutcome};

/// Owns the road graph, the driver registry, and the fare configuration, and
/// answers ride requests against them.
///
/// Construct with [`DispatcherBuilder`](crate::DispatcherBuilder).
pub struct Dispatcher<R: Router = DijkstraRouter> {
    graph:    RoadGraph,
    registry: DriverRegistry,
    config:   DispatchConfig,
    router:   R,
}

impl<R: Router> Dispatcher<R> {
    pub(crate) fn from_parts(
        graph:    RoadGraph,
        registry: DriverRegistry,
        config:   DispatchConfig,
        router:   R,
    ) -> Self {
        Self { graph, registry, config, router }
    }

    /// Match a driver at `pickup` and price the route to `destination`.
    ///
    /// Selects the first Available driver at `pickup` in registry insertion
    /// order; there is no ranking.  Does not change any driver's status.
    pub fn request_ride(&self, pickup: &str, destination: &str) -> RideOutcome {
        let outcome = self.resolve(pickup, destination);
        match &outcome {
            RideOutcome::Matched(ride) => info!(
                "ride {pickup} -> {destination}: driver {} over {} hops, {}, fare {:.2} {}",
                ride.driver,
                ride.path.hops(),
                ride.distance(),
                ride.fare,
                self.config.currency
            ),
            other => info!("ride {pickup} -> {destination}: {:?}", other.status()),
        }
        outcome
    }

    fn resolve(&self, pickup: &str, destination: &str) -> RideOutcome {
        for location in [pickup, destination] {
            if !self.graph.contains(location) {
                return RideOutcome::UnknownLocation { location: location.into() };
            }
        }

        let Some(driver) = self.registry.find_available(pickup).next() else {
            return RideOutcome::NoDriverAvailable { pickup: pickup.into() };
        };
        debug!("matched driver {} at {pickup}", driver.id);

        let (from, to) = (Location::from(pickup), Location::from(destination));
        match self.router.route(&self.graph, &from, &to) {
            Ok(path) => RideOutcome::Matched(RideMatch {
                driver:          driver.id.clone(),
                driver_location: driver.location.clone(),
                fare:            self.config.fare_for(path.distance),
                path,
            }),
            Err(e) => {
                debug!("routing failed for driver {}: {e}", driver.id);
                RideOutcome::NoRouteFound { driver: driver.id.clone(), pickup: from, destination: to }
            }
        }
    }

    /// Claim the driver of a matched ride by marking them Busy.
    ///
    /// # Errors
    ///
    /// [`DispatchError::DriverUnavailable`] if the driver has gone Busy (for
    /// example, claimed by an earlier `accept`) or has moved away from the
    /// pickup since the match was made.
    pub fn accept(&mut self, ride: &RideMatch) -> DispatchResult<()> {
        let still_here = self
            .registry
            .get(ride.driver.as_str())
            .is_some_and(|d| d.is_available() && d.location == ride.driver_location);
        if !still_here {
            return Err(DispatchError::DriverUnavailable(ride.driver.clone()));
        }
        self.registry.set_status(&ride.driver, DriverStatus::Busy)?;
        info!("driver {} accepted ride from {}", ride.driver, ride.driver_location);
        Ok(())
    }

    /// Return a driver to service at `at` (typically the drop-off location).
    pub fn release(&mut self, driver: &DriverId, at: &str) -> DispatchResult<()> {
        if !self.graph.contains(at) {
            return Err(DispatchError::UnknownLocation(at.into()));
        }
        self.registry.relocate(driver, at)?;
        self.registry.set_status(driver, DriverStatus::Available)?;
        info!("driver {driver} available again at {at}");
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    pub fn registry(&self) -> &DriverRegistry {
        &self.registry
    }

    /// Mutable roster access for adding drivers or changing status between
    /// requests.
    pub fn registry_mut(&mut self) -> &mut DriverRegistry {
        &mut self.registry
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn router(&self) -> &R {
        &self.router
    }
}

//! Fluent builder for constructing a [`Dispatcher`].

use log::warn;

use rm_core::DispatchConfig;
use rm_registry::DriverRegistry;
use rm_spatial::{DijkstraRouter, RoadGraph, Router};

use crate::{Dispatcher, DispatchResult};

/// Fluent builder for [`Dispatcher<R>`].
///
/// # Required inputs
///
/// - [`RoadGraph`]: the road network, already populated
/// - [`DriverRegistry`]: the driver roster
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                        |
/// |---------------|--------------------------------|
/// | `.config(c)`  | `DispatchConfig::default()`    |
/// | `.router(r)`  | `DijkstraRouter`               |
///
/// # Example
///
/// ```rust,ignore
/// let dispatcher = DispatcherBuilder::new(graph, registry)
///     .config(DispatchConfig::default().with_fare_rate(120.0))
///     .build()?;
/// ```
pub struct DispatcherBuilder<R: Router = DijkstraRouter> {
    graph:    RoadGraph,
    registry: DriverRegistry,
    config:   Option<DispatchConfig>,
    router:   R,
}

impl DispatcherBuilder<DijkstraRouter> {
    pub fn new(graph: RoadGraph, registry: DriverRegistry) -> Self {
        Self { graph, registry, config: None, router: DijkstraRouter }
    }
}

impl<R: Router> DispatcherBuilder<R> {
    pub fn config(mut self, config: DispatchConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the routing engine.
    pub fn router<R2: Router>(self, router: R2) -> DispatcherBuilder<R2> {
        DispatcherBuilder {
            graph:    self.graph,
            registry: self.registry,
            config:   self.config,
            router,
        }
    }

    /// Validate the configuration and return a ready [`Dispatcher`].
    ///
    /// Drivers standing at locations the graph does not know are kept but
    /// logged: no request can ever match them until they are relocated.
    pub fn build(self) -> DispatchResult<Dispatcher<R>> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        for driver in self.registry.iter() {
            if !self.graph.contains(driver.location.as_str()) {
                warn!(
                    "driver {} is at {}, which is not in the road network",
                    driver.id, driver.location
                );
            }
        }

        Ok(Dispatcher::from_parts(self.graph, self.registry, config, self.router))
    }
}

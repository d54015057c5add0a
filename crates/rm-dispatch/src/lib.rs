//! `rm-dispatch`: ride request orchestrator.
//!
//! # Request flow
//!
//! ```text
//! request_ride(pickup, destination):
//!   ① Validate: both locations must be graph vertices, else UnknownLocation.
//!   ② Match:    first Available driver at exactly `pickup`, else
//!                 NoDriverAvailable (routing is never attempted).
//!   ③ Route:    Router::route(graph, pickup, destination), else NoRouteFound.
//!   ④ Price:    fare = distance × config.fare_rate.
//! ```
//!
//! `request_ride` is read-only.  Claiming the matched driver is a separate
//! [`Dispatcher::accept`] step, which re-checks availability so two accepted
//! matches can never share a driver.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rm_dispatch::DispatcherBuilder;
//!
//! let dispatcher = DispatcherBuilder::new(graph, registry).build()?;
//! match dispatcher.request_ride("Fort", "Nugegoda") {
//!     RideOutcome::Matched(ride) => println!("{} km, fare {}", ride.distance(), ride.fare),
//!     other => println!("{:?}", other.status()),
//! }
//! ```

pub mod builder;
pub mod dispatcher;
pub mod error;
pub mod outcome;


pub use builder::DispatcherBuilder;
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, DispatchResult};
pub use outcome::{RideMatch, RideOutcome, RideStatus};

//! Built-in Colombo data set.
//!
//! Six locations along the Galle Road / High Level Road corridor and the
//! five-driver roster the demo starts with.

use anyhow::Result;

use rm_registry::{DriverRegistry, DriverStatus};
use rm_spatial::RoadGraph;

pub const LOCATIONS: [&str; 6] =
    ["Fort", "Pettah", "Kollupitiya", "Bambalapitiya", "Nugegoda", "Maharagama"];

/// Undirected roads, distance in km.
pub const ROADS: [(&str, &str, f64); 5] = [
    ("Fort",          "Pettah",        2.0),
    ("Fort",          "Kollupitiya",   3.0),
    ("Kollupitiya",   "Bambalapitiya", 2.0),
    ("Bambalapitiya", "Nugegoda",      5.0),
    ("Maharagama",    "Nugegoda",      7.0),
];

pub fn build_network() -> Result<RoadGraph> {
    let mut g = RoadGraph::new();
    for loc in LOCATIONS {
        g.add_vertex(loc);
    }
    for (a, b, km) in ROADS {
        g.add_edge(a, b, km)?;
    }
    Ok(g)
}

pub fn build_roster() -> DriverRegistry {
    let mut r = DriverRegistry::new();
    r.add_driver("D001", "Fort");
    r.add_driver("D002", "Kollupitiya");
    r.add_driver_with_status("D003", "Nugegoda", DriverStatus::Busy);
    r.add_driver("D004", "Bambalapitiya");
    r.add_driver("D005", "Nugegoda");
    r
}

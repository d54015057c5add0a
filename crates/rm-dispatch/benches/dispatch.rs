//! Performance benchmarks for routing, driver lookup, and ride dispatch
//! using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rm_core::Location;
use rm_dispatch::DispatcherBuilder;
use rm_registry::{DriverRegistry, DriverStatus};
use rm_spatial::{DijkstraRouter, RoadGraph, Router};

/// `side × side` grid with unit-ish weights that vary by position so the
/// heap sees real work.
fn grid(side: usize) -> RoadGraph {
    let name = |r: usize, c: usize| format!("g{r}_{c}");
    let mut g = RoadGraph::new();
    for r in 0..side {
        for c in 0..side {
            g.add_vertex(name(r, c));
        }
    }
    for r in 0..side {
        for c in 0..side {
            let w = 1.0 + ((r * 7 + c * 3) % 5) as f64;
            if c + 1 < side {
                g.add_edge(name(r, c), name(r, c + 1), w).unwrap();
            }
            if r + 1 < side {
                g.add_edge(name(r, c), name(r + 1, c), w).unwrap();
            }
        }
    }
    g
}

fn colombo() -> (RoadGraph, DriverRegistry) {
    let mut g = RoadGraph::new();
    for loc in ["Fort", "Pettah", "Kollupitiya", "Bambalapitiya", "Nugegoda", "Maharagama"] {
        g.add_vertex(loc);
    }
    g.add_edge("Fort", "Pettah", 2.0).unwrap();
    g.add_edge("Fort", "Kollupitiya", 3.0).unwrap();
    g.add_edge("Kollupitiya", "Bambalapitiya", 2.0).unwrap();
    g.add_edge("Bambalapitiya", "Nugegoda", 5.0).unwrap();
    g.add_edge("Maharagama", "Nugegoda", 7.0).unwrap();

    let mut r = DriverRegistry::new();
    r.add_driver("D001", "Fort");
    r.add_driver("D002", "Kollupitiya");
    r.add_driver_with_status("D003", "Nugegoda", DriverStatus::Busy);
    r.add_driver("D004", "Bambalapitiya");
    r.add_driver("D005", "Nugegoda");
    (g, r)
}

fn bench_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_grid");
    for side in [10usize, 30, 100] {
        let g = grid(side);
        let from = Location::from("g0_0");
        let to = Location::from(format!("g{}_{}", side - 1, side - 1));
        group.bench_with_input(BenchmarkId::from_parameter(side * side), &g, |b, g| {
            b.iter(|| black_box(DijkstraRouter.route(g, &from, &to)))
        });
    }
    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let locations = ["Fort", "Pettah", "Kollupitiya", "Bambalapitiya", "Nugegoda", "Maharagama"];

    let mut group = c.benchmark_group("registry");
    for size in [10usize, 100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("insert", size), &size, |b, &size| {
            b.iter(|| {
                let mut r = DriverRegistry::with_capacity(size);
                for i in 0..size {
                    r.add_driver(format!("D{i:05}"), locations[i % locations.len()]);
                }
                black_box(r)
            })
        });

        let mut r = DriverRegistry::with_capacity(size);
        for i in 0..size {
            let status = if i % 3 == 0 { DriverStatus::Busy } else { DriverStatus::Available };
            r.add_driver_with_status(format!("D{i:05}"), locations[i % locations.len()], status);
        }
        group.bench_with_input(BenchmarkId::new("find_available", size), &r, |b, r| {
            b.iter(|| black_box(r.find_available("Nugegoda").count()))
        });
        group.bench_with_input(BenchmarkId::new("get", size), &r, |b, r| {
            b.iter(|| black_box(r.get("D00007")))
        });
    }
    group.finish();
}

fn bench_request_ride(c: &mut Criterion) {
    let (g, r) = colombo();
    let dispatcher = DispatcherBuilder::new(g, r).build().unwrap();
    c.bench_function("request_ride_colombo", |b| {
        b.iter(|| black_box(dispatcher.request_ride("Fort", "Maharagama")))
    });
}

criterion_group!(benches, bench_routing, bench_registry, bench_request_ride);
criterion_main!(benches);

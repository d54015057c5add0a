//! colombo: console front-end for the ride_match dispatcher.
//!
//! Matches one ride request against the built-in Colombo network (or CSV
//! files supplied on the command line) and prints the route and fare.
//!
//! ```text
//! colombo Fort Nugegoda
//! colombo --json --rate 120 Pettah Maharagama
//! colombo --vertices v.csv --edges e.csv --drivers d.csv -v
//! ```

mod network;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};

use rm_core::DispatchConfig;
use rm_dispatch::{Dispatcher, DispatcherBuilder, RideOutcome};
use rm_registry::load_drivers_csv;
use rm_spatial::load_graph_csv;

use network::{build_network, build_roster};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "colombo", about = "Match a ride request to a driver and estimate the fare")]
struct Cli {
    /// Pickup location; prompted for when omitted.
    pickup: Option<String>,

    /// Destination location; prompted for when omitted.
    destination: Option<String>,

    /// Fare per kilometre.
    #[arg(long, default_value_t = rm_core::config::DEFAULT_FARE_RATE)]
    rate: f64,

    /// Currency label for display.
    #[arg(long, default_value = rm_core::config::DEFAULT_CURRENCY)]
    currency: String,

    /// Vertex CSV (`location` header).  Requires `--edges`.
    #[arg(long, requires = "edges")]
    vertices: Option<PathBuf>,

    /// Road segment CSV (`from,to,distance` header).  Requires `--vertices`.
    #[arg(long, requires = "vertices")]
    edges: Option<PathBuf>,

    /// Driver CSV (`id,location,status` header).
    #[arg(long)]
    drivers: Option<PathBuf>,

    /// Print the structured result as JSON instead of a summary.
    #[arg(long)]
    json: bool,

    /// Log to stderr; repeat for more detail (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ── stderr logger ─────────────────────────────────────────────────────────────

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    log::set_logger(&LOGGER).context("installing logger")?;
    log::set_max_level(level);
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let dispatcher = build_dispatcher(&cli)?;

    let pickup = match cli.pickup {
        Some(p) => p,
        None => prompt("enter pickup location: ")?,
    };
    let destination = match cli.destination {
        Some(d) => d,
        None => prompt("enter destination: ")?,
    };

    let outcome = dispatcher.request_ride(&pickup, &destination);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_summary(&dispatcher, &pickup, &destination, &outcome);
    }
    Ok(())
}

fn build_dispatcher(cli: &Cli) -> Result<Dispatcher> {
    let graph = match (&cli.vertices, &cli.edges) {
        (Some(v), Some(e)) => load_graph_csv(v, e)
            .with_context(|| format!("loading road network from {} and {}", v.display(), e.display()))?,
        _ => build_network()?,
    };
    let registry = match &cli.drivers {
        Some(path) => load_drivers_csv(path)
            .with_context(|| format!("loading drivers from {}", path.display()))?,
        None => build_roster(),
    };
    let config = DispatchConfig::default()
        .with_fare_rate(cli.rate)
        .with_currency(cli.currency.clone());

    Ok(DispatcherBuilder::new(graph, registry).config(config).build()?)
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("no input for {:?}", label.trim_end_matches(": "));
    }
    Ok(line.trim().to_owned())
}

fn print_summary(dispatcher: &Dispatcher, pickup: &str, destination: &str, outcome: &RideOutcome) {
    println!();
    println!("=== RIDE REQUEST ===");
    println!("Pickup:      {pickup}");
    println!("Destination: {destination}");
    println!();

    match outcome {
        RideOutcome::UnknownLocation { location } => {
            println!("Unknown location: {location}");
            let known: Vec<_> = dispatcher.graph().locations().map(|l| l.as_str()).collect();
            println!("Known locations: {}", known.join(", "));
        }
        RideOutcome::NoDriverAvailable { .. } => {
            println!("No available drivers found!");
        }
        RideOutcome::NoRouteFound { driver, .. } => {
            println!("Matched with {driver} at {pickup}");
            println!("No route found!");
        }
        RideOutcome::Matched(ride) => {
            let route: Vec<_> = ride.path.stops.iter().map(|l| l.as_str()).collect();
            println!("Matched with {} at {}", ride.driver, ride.driver_location);
            println!();
            println!("=== ROUTE DETAILS ===");
            println!("Driver:         {}", ride.driver);
            println!("Route:          {}", route.join(" → "));
            println!("Distance:       {}", ride.distance());
            // Whole currency units, truncated.
            println!("Estimated Fare: {} {}", dispatcher.config().currency, ride.fare.trunc());
        }
    }
}

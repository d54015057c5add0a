//! CSV driver loader.
//!
//! # CSV format
//!
//! ```csv
//! id,location,status
//! D001,Fort,Available
//! D003,Nugegoda,Busy
//! D004,Bambalapitiya,
//! ```
//!
//! An empty `status` means Available.  Rows are applied in file order, so a
//! repeated id overwrites the earlier row just like
//! [`DriverRegistry::insert`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{DriverRecord, DriverRegistry, DriverStatus, RegistryError, RegistryResult};

#[derive(Deserialize)]
struct DriverRow {
    id:       String,
    location: String,
    #[serde(default)]
    status:   Option<String>,
}

/// Load a [`DriverRegistry`] from a CSV file.
pub fn load_drivers_csv(path: &Path) -> RegistryResult<DriverRegistry> {
    let file = std::fs::File::open(path)?;
    load_drivers_reader(file)
}

/// Like [`load_drivers_csv`] but accepts any `Read` source.
pub fn load_drivers_reader<R: Read>(reader: R) -> RegistryResult<DriverRegistry> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut registry = DriverRegistry::new();

    for result in csv_reader.deserialize::<DriverRow>() {
        let row = result.map_err(|e| RegistryError::Parse(e.to_string()))?;
        if row.id.is_empty() || row.location.is_empty() {
            return Err(RegistryError::Parse(format!(
                "driver row needs both id and location, got id={:?} location={:?}",
                row.id, row.location
            )));
        }
        let status = match row.status.as_deref() {
            None | Some("") => DriverStatus::Available,
            Some(s) => s.parse()?,
        };
        registry.insert(DriverRecord::new(row.id, row.location, status));
    }

    log::debug!(
        "loaded {} drivers ({} available)",
        registry.len(),
        registry.count_available()
    );
    Ok(registry)
}

//! Insertion-ordered driver registry.
//!
//! # Storage
//!
//! Records live in a `Vec` in first-insertion order, with an `FxHashMap`
//! from id to slot for O(1) keyed access.  Re-adding an existing id
//! overwrites the record in its original slot (last write wins, position is
//! kept), so iteration order only ever reflects when an id was first seen.
//!
//! Records are never removed.
//!
//! # Concurrency
//!
//! The registry is a plain owned value with `&mut self` mutation.  Hosts that
//! serve simultaneous ride requests must serialise access to it (for example
//! behind a `Mutex`) so two requests cannot both claim the same driver.

use log::{debug, warn};
use rustc_hash::FxHashMap;

use rm_core::{DriverId, Location};

use crate::{DriverRecord, DriverStatus, RegistryError, RegistryResult};

#[derive(Clone, Debug, Default)]
pub struct DriverRegistry {
    records: Vec<DriverRecord>,
    slots: FxHashMap<DriverId, usize>,
}

impl DriverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(drivers: usize) -> Self {
        Self {
            records: Vec::with_capacity(drivers),
            slots: FxHashMap::with_capacity_and_hasher(drivers, Default::default()),
        }
    }

    /// Insert an Available driver, overwriting any record with the same id.
    pub fn add_driver(&mut self, id: impl Into<DriverId>, location: impl Into<Location>) {
        self.add_driver_with_status(id, location, DriverStatus::Available);
    }

    /// Insert a driver with an explicit status, overwriting any record with
    /// the same id.
    pub fn add_driver_with_status(
        &mut self,
        id: impl Into<DriverId>,
        location: impl Into<Location>,
        status: DriverStatus,
    ) {
        self.insert(DriverRecord::new(id, location, status));
    }

    /// Insert or overwrite `record`.  Returns the displaced record, if any.
    pub fn insert(&mut self, record: DriverRecord) -> Option<DriverRecord> {
        match self.slots.get(&record.id) {
            Some(&slot) => {
                warn!(
                    "driver {} re-added; overwriting {} at {} with {} at {}",
                    record.id,
                    self.records[slot].status,
                    self.records[slot].location,
                    record.status,
                    record.location
                );
                Some(std::mem::replace(&mut self.records[slot], record))
            }
            None => {
                self.slots.insert(record.id.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    /// Available drivers whose location is exactly `location`, in insertion
    /// order.
    ///
    /// The iterator is lazy; call again to restart.  No match yields an
    /// empty iterator, never an error.
    pub fn find_available<'a, 'q>(
        &'a self,
        location: &'q str,
    ) -> impl Iterator<Item = &'a DriverRecord> + 'q
    where
        'a: 'q,
    {
        self.records
            .iter()
            .filter(move |d| d.is_available() && d.location.as_str() == location)
    }

    /// Change a driver's status and return the previous one.
    pub fn set_status(&mut self, id: &DriverId, status: DriverStatus) -> RegistryResult<DriverStatus> {
        let record = self.get_mut(id)?;
        let previous = std::mem::replace(&mut record.status, status);
        debug!("driver {id}: {previous} -> {status}");
        Ok(previous)
    }

    /// Move a driver to `location` without changing its status.
    pub fn relocate(&mut self, id: &DriverId, location: impl Into<Location>) -> RegistryResult<()> {
        let record = self.get_mut(id)?;
        record.location = location.into();
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&DriverRecord> {
        self.slots.get(id).map(|&slot| &self.records[slot])
    }

    fn get_mut(&mut self, id: &DriverId) -> RegistryResult<&mut DriverRecord> {
        match self.slots.get(id) {
            Some(&slot) => Ok(&mut self.records[slot]),
            None => Err(RegistryError::DriverNotFound(id.clone())),
        }
    }

    /// All records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DriverRecord> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn count_available(&self) -> usize {
        self.records.iter().filter(|d| d.is_available()).count()
    }
}

impl FromIterator<DriverRecord> for DriverRegistry {
    fn from_iter<I: IntoIterator<Item = DriverRecord>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl Extend<DriverRecord> for DriverRegistry {
    fn extend<I: IntoIterator<Item = DriverRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

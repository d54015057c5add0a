//! Unit tests for rm-registry.

#[cfg(test)]
mod helpers {
    use crate::{DriverRegistry, DriverStatus};

    /// The demo roster: D003 is the only Busy driver.
    pub fn roster() -> DriverRegistry {
        let mut r = DriverRegistry::new();
        r.add_driver("D001", "Fort");
        r.add_driver("D002", "Kollupitiya");
        r.add_driver_with_status("D003", "Nugegoda", DriverStatus::Busy);
        r.add_driver("D004", "Bambalapitiya");
        r.add_driver("D005", "Nugegoda");
        r
    }

    pub fn ids<'a>(it: impl Iterator<Item = &'a crate::DriverRecord>) -> Vec<&'a str> {
        it.map(|d| d.id.as_str()).collect()
    }
}

// ── Status ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod status {
    use crate::{DriverStatus, RegistryError};

    #[test]
    fn default_is_available() {
        assert_eq!(DriverStatus::default(), DriverStatus::Available);
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("Available".parse::<DriverStatus>().unwrap(), DriverStatus::Available);
        assert_eq!(" busy ".parse::<DriverStatus>().unwrap(), DriverStatus::Busy);
        assert_eq!("BUSY".parse::<DriverStatus>().unwrap(), DriverStatus::Busy);
        assert!(matches!("offline".parse::<DriverStatus>(), Err(RegistryError::UnknownStatus(_))));
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for s in [DriverStatus::Available, DriverStatus::Busy] {
            assert_eq!(s.to_string().parse::<DriverStatus>().unwrap(), s);
        }
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use rm_core::DriverId;

    use super::helpers::{ids, roster};
    use crate::{DriverRecord, DriverRegistry, DriverStatus, RegistryError};

    #[test]
    fn add_defaults_to_available() {
        let mut r = DriverRegistry::new();
        r.add_driver("D001", "Fort");
        let d = r.get("D001").unwrap();
        assert_eq!(d.location.as_str(), "Fort");
        assert_eq!(d.status, DriverStatus::Available);
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn find_available_matches_exact_location_only() {
        let r = roster();
        assert_eq!(ids(r.find_available("Fort")), vec!["D001"]);
        assert_eq!(ids(r.find_available("Kollupitiya")), vec!["D002"]);
        // D003 is Busy at Nugegoda; only D005 is returned.
        assert_eq!(ids(r.find_available("Nugegoda")), vec!["D005"]);
        assert_eq!(r.find_available("Pettah").count(), 0);
        assert_eq!(r.find_available("fort").count(), 0);
    }

    #[test]
    fn busy_only_location_is_empty() {
        let mut r = DriverRegistry::new();
        r.add_driver_with_status("D003", "Nugegoda", DriverStatus::Busy);
        assert_eq!(r.find_available("Nugegoda").count(), 0);
        // The record still exists at that location.
        assert_eq!(r.get("D003").unwrap().location.as_str(), "Nugegoda");
    }

    #[test]
    fn find_available_in_insertion_order() {
        let mut r = DriverRegistry::new();
        r.add_driver("Z9", "Fort");
        r.add_driver_with_status("A1", "Fort", DriverStatus::Busy);
        r.add_driver("M5", "Fort");
        r.add_driver("B2", "Fort");
        assert_eq!(ids(r.find_available("Fort")), vec!["Z9", "M5", "B2"]);
    }

    #[test]
    fn find_available_is_restartable() {
        let r = roster();
        let first: Vec<_> = ids(r.find_available("Nugegoda"));
        let second: Vec<_> = ids(r.find_available("Nugegoda"));
        assert_eq!(first, second);
        // Lazy: taking one does not consume the registry.
        assert_eq!(r.find_available("Fort").next().unwrap().id.as_str(), "D001");
    }

    #[test]
    fn duplicate_id_last_write_wins() {
        let mut r = roster();
        let displaced = r.insert(DriverRecord::new("D001", "Maharagama", DriverStatus::Busy));
        let displaced = displaced.unwrap();
        assert_eq!(displaced.location.as_str(), "Fort");
        assert_eq!(displaced.status, DriverStatus::Available);

        let d = r.get("D001").unwrap();
        assert_eq!(d.location.as_str(), "Maharagama");
        assert_eq!(d.status, DriverStatus::Busy);
        assert_eq!(r.len(), 5);
        assert_eq!(r.find_available("Fort").count(), 0);
    }

    #[test]
    fn overwrite_keeps_original_slot() {
        let mut r = roster();
        r.add_driver("D002", "Nugegoda");
        assert_eq!(ids(r.find_available("Nugegoda")), vec!["D002", "D005"]);
        assert_eq!(ids(r.iter()), vec!["D001", "D002", "D003", "D004", "D005"]);
    }

    #[test]
    fn set_status_toggles_availability() {
        let mut r = roster();
        let d003 = DriverId::from("D003");
        let prev = r.set_status(&d003, DriverStatus::Available).unwrap();
        assert_eq!(prev, DriverStatus::Busy);
        assert_eq!(ids(r.find_available("Nugegoda")), vec!["D003", "D005"]);

        let d005 = DriverId::from("D005");
        r.set_status(&d005, DriverStatus::Busy).unwrap();
        assert_eq!(ids(r.find_available("Nugegoda")), vec!["D003"]);
        assert_eq!(r.count_available(), 4);
    }

    #[test]
    fn set_status_unknown_driver() {
        let mut r = roster();
        let err = r.set_status(&DriverId::from("D999"), DriverStatus::Busy).unwrap_err();
        assert!(matches!(err, RegistryError::DriverNotFound(ref id) if id.as_str() == "D999"));
    }

    #[test]
    fn relocate_moves_driver() {
        let mut r = roster();
        r.relocate(&DriverId::from("D004"), "Pettah").unwrap();
        assert_eq!(ids(r.find_available("Pettah")), vec!["D004"]);
        assert_eq!(r.find_available("Bambalapitiya").count(), 0);
        assert!(r.relocate(&DriverId::from("nobody"), "Fort").is_err());
    }

    #[test]
    fn collect_from_records() {
        let r: DriverRegistry = vec![
            DriverRecord::new("a", "Fort", DriverStatus::Available),
            DriverRecord::new("b", "Fort", DriverStatus::Busy),
            DriverRecord::new("a", "Pettah", DriverStatus::Available),
        ]
        .into_iter()
        .collect();
        assert_eq!(r.len(), 2);
        assert_eq!(ids(r.find_available("Pettah")), vec!["a"]);
        assert!(!r.is_empty());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use super::helpers::ids;
    use crate::{load_drivers_csv, load_drivers_reader, DriverStatus, RegistryError};

    const DRIVERS: &str = "\
id,location,status
D001,Fort,Available
D002,Kollupitiya,
D003,Nugegoda,Busy
D004, Bambalapitiya ,available
D005,Nugegoda,
";

    #[test]
    fn load_from_reader() {
        let r = load_drivers_reader(Cursor::new(DRIVERS)).unwrap();
        assert_eq!(r.len(), 5);
        assert_eq!(r.get("D002").unwrap().status, DriverStatus::Available);
        assert_eq!(r.get("D003").unwrap().status, DriverStatus::Busy);
        assert_eq!(r.get("D004").unwrap().location.as_str(), "Bambalapitiya");
        assert_eq!(ids(r.find_available("Nugegoda")), vec!["D005"]);
    }

    #[test]
    fn status_column_optional() {
        let r = load_drivers_reader(Cursor::new("id,location\nD001,Fort\n")).unwrap();
        assert_eq!(r.count_available(), 1);
    }

    #[test]
    fn unknown_status_rejected() {
        let err = load_drivers_reader(Cursor::new("id,location,status\nD001,Fort,Offline\n")).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownStatus(_)));
    }

    #[test]
    fn blank_location_rejected() {
        let err = load_drivers_reader(Cursor::new("id,location,status\nD001,,Busy\n")).unwrap_err();
        assert!(matches!(err, RegistryError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(DRIVERS.as_bytes()).unwrap();
        let r = load_drivers_csv(f.path()).unwrap();
        assert_eq!(r.count_available(), 4);
    }
}

//! Store adapters for the application layer

use std::path::Path;

use fleetscout_store::VehicleStore;
use fleetscout_types::Result;

use crate::config::Config;

/// Open the vehicle store configured for this installation
pub fn open_vehicle_store(config: &Config) -> Result<VehicleStore> {
    let db_path = config.db_path()?;
    VehicleStore::open(&db_path)
}

/// Open a vehicle store at a custom path
pub fn open_vehicle_store_at(db_path: &Path) -> Result<VehicleStore> {
    VehicleStore::open(db_path)
}

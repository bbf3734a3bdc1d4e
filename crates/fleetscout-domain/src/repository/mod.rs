//! Repository trait definitions for data persistence

use crate::model::{VehicleListing, VehicleRecord};
use fleetscout_types::Error;

/// Repository for scored vehicle records
pub trait VehicleRepository {
    /// Validate, score, and upsert a listing; returns the stored record.
    ///
    /// The ROI score is always recomputed here, never taken from the
    /// caller. A listing matching an existing (make, model, year,
    /// location) fully replaces that row, refreshing its date_added.
    fn save(&mut self, listing: &VehicleListing) -> Result<VehicleRecord, Error>;

    /// Find a record by its surrogate id
    fn find_by_id(&self, id: i64) -> Result<Option<VehicleRecord>, Error>;

    /// All records ordered by roi_score descending; ties keep insertion order
    fn find_all(&self) -> Result<Vec<VehicleRecord>, Error>;
}

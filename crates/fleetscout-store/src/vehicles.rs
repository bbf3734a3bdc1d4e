//! SQLite-backed vehicle store
//!
//! One durable table keyed by a surrogate id, with a unique natural key
//! (make, model, year, location) driving upsert semantics.

use std::fs;
use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use fleetscout_domain::model::{VehicleListing, VehicleRecord};
use fleetscout_domain::repository::VehicleRepository;
use fleetscout_domain::service::calculate_roi;
use fleetscout_types::{Error, Result, StorageError};

const CREATE_VEHICLES_SQL: &str = r"
CREATE TABLE IF NOT EXISTS vehicles (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  make TEXT NOT NULL,
  model TEXT NOT NULL,
  year INTEGER NOT NULL,
  price INTEGER NOT NULL CHECK (price >= 0),
  mileage INTEGER NOT NULL CHECK (mileage >= 0),
  location TEXT NOT NULL,
  url TEXT NOT NULL,
  estimated_daily_rate REAL NOT NULL,
  roi_score REAL NOT NULL,
  date_added TEXT NOT NULL,
  UNIQUE (make, model, year, location)
);

CREATE INDEX IF NOT EXISTS idx_vehicles_roi_score ON vehicles(roi_score);
";

const UPSERT_VEHICLE_SQL: &str = "\
INSERT INTO vehicles \
(make, model, year, price, mileage, location, url, estimated_daily_rate, roi_score, date_added) \
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10) \
ON CONFLICT (make, model, year, location) DO UPDATE SET \
price = excluded.price, \
mileage = excluded.mileage, \
url = excluded.url, \
estimated_daily_rate = excluded.estimated_daily_rate, \
roi_score = excluded.roi_score, \
date_added = excluded.date_added";

const VEHICLE_COLUMNS: &str = "id, make, model, year, price, mileage, location, url, \
estimated_daily_rate, roi_score, date_added";

/// Persistent store for scored vehicles
///
/// Owns its connection; the handle is passed in by the caller, never a
/// process-wide global. Writes take `&mut self`, so a shared handle has
/// exactly one writer at a time; reads take `&self` and each statement
/// sees a consistent snapshot.
pub struct VehicleStore {
    conn: Connection,
}

impl VehicleStore {
    /// Create or open a store at the given database path
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::Open(format!("{}: {}", db_path.display(), e)))?;
        }
        let conn = Connection::open(db_path)
            .map_err(|e| StorageError::Open(format!("{}: {}", db_path.display(), e)))?;
        let store = Self { conn };
        store.init_schema()?;
        log::debug!("opened vehicle store at {}", db_path.display());
        Ok(store)
    }

    /// Open an in-memory store; contents are lost on drop
    pub fn open_in_memory() -> Result<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| StorageError::Open(e.to_string()))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(CREATE_VEHICLES_SQL)
            .map_err(|e| StorageError::Schema(e.to_string()))?;
        Ok(())
    }

    /// Score a listing and upsert it by (make, model, year, location).
    ///
    /// The ROI score is recomputed on every save; there is no way to
    /// store a caller-chosen score. A conflicting row is fully replaced,
    /// including a fresh date_added, while its surrogate id stays stable.
    pub fn save(&mut self, listing: &VehicleListing) -> Result<VehicleRecord> {
        listing.validate()?;
        let roi_score = calculate_roi(f64::from(listing.price), listing.estimated_daily_rate)?;
        let date_added = Utc::now();

        self.conn
            .execute(
                UPSERT_VEHICLE_SQL,
                params![
                    listing.make,
                    listing.model,
                    listing.year,
                    listing.price,
                    listing.mileage,
                    listing.location,
                    listing.url,
                    listing.estimated_daily_rate,
                    roi_score,
                    date_added,
                ],
            )
            .map_err(|e| StorageError::Query(e.to_string()))?;

        let record = self
            .find_by_natural_key(&listing.make, &listing.model, listing.year, &listing.location)?
            .ok_or_else(|| {
                StorageError::Corrupt("row missing immediately after save".to_string())
            })?;
        log::debug!(
            "saved {} with score {:.2}",
            record.display_name(),
            record.roi_score
        );
        Ok(record)
    }

    /// Score and store a batch of listings, in feed order
    pub fn save_all(&mut self, listings: &[VehicleListing]) -> Result<Vec<VehicleRecord>> {
        let mut records = Vec::with_capacity(listings.len());
        for listing in listings {
            records.push(self.save(listing)?);
        }
        Ok(records)
    }

    /// Every stored record, highest ROI score first.
    ///
    /// Ties keep insertion order (ascending id). Each call re-reads
    /// current state; the result is a plain finite vector, not a cursor.
    pub fn list_all(&self) -> Result<Vec<VehicleRecord>> {
        let sql = format!(
            "SELECT {} FROM vehicles ORDER BY roi_score DESC, id ASC",
            VEHICLE_COLUMNS
        );
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| StorageError::Query(e.to_string()))?;
        let rows = stmt
            .query_map([], Self::row_to_record)
            .map_err(|e| StorageError::Query(e.to_string()))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| StorageError::Corrupt(e.to_string()))?);
        }
        Ok(records)
    }

    /// Find a record by its surrogate id
    pub fn find_by_id(&self, id: i64) -> Result<Option<VehicleRecord>> {
        let sql = format!("SELECT {} FROM vehicles WHERE id = ?1", VEHICLE_COLUMNS);
        let record = self
            .conn
            .query_row(&sql, params![id], Self::row_to_record)
            .optional()
            .map_err(|e| StorageError::Query(e.to_string()))?;
        Ok(record)
    }

    /// Find a record by its natural key
    pub fn find_by_natural_key(
        &self,
        make: &str,
        model: &str,
        year: i32,
        location: &str,
    ) -> Result<Option<VehicleRecord>> {
        let sql = format!(
            "SELECT {} FROM vehicles WHERE make = ?1 AND model = ?2 AND year = ?3 AND location = ?4",
            VEHICLE_COLUMNS
        );
        let record = self
            .conn
            .query_row(&sql, params![make, model, year, location], Self::row_to_record)
            .optional()
            .map_err(|e| StorageError::Query(e.to_string()))?;
        Ok(record)
    }

    /// Total number of stored vehicles
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM vehicles", [], |row| row.get(0))
            .map_err(|e| StorageError::Query(e.to_string()))?;
        Ok(count as usize)
    }

    fn row_to_record(row: &Row<'_>) -> rusqlite::Result<VehicleRecord> {
        Ok(VehicleRecord {
            id: row.get(0)?,
            make: row.get(1)?,
            model: row.get(2)?,
            year: row.get(3)?,
            price: row.get(4)?,
            mileage: row.get(5)?,
            location: row.get(6)?,
            url: row.get(7)?,
            estimated_daily_rate: row.get(8)?,
            roi_score: row.get(9)?,
            date_added: row.get(10)?,
        })
    }
}

impl VehicleRepository for VehicleStore {
    fn save(&mut self, listing: &VehicleListing) -> std::result::Result<VehicleRecord, Error> {
        VehicleStore::save(self, listing)
    }

    fn find_by_id(&self, id: i64) -> std::result::Result<Option<VehicleRecord>, Error> {
        VehicleStore::find_by_id(self, id)
    }

    fn find_all(&self) -> std::result::Result<Vec<VehicleRecord>, Error> {
        self.list_all()
    }
}

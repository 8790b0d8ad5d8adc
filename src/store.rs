//! Record store: bulk insert, full scan, distinct-value queries.
//!
//! The dashboard is read-mostly: records are written once at seed time
//! and only ever read afterwards, so a plain in-memory row store is all
//! the crate ships. The trait keeps the seeding and aggregation paths
//! independent of the backing storage.

use crate::core::error::Result;
use crate::core::types::{Continent, CountryYearRecord};

pub trait RecordStore {
    /// Bulk-append records. Used by the generator.
    fn insert_all(&mut self, records: Vec<CountryYearRecord>) -> Result<()>;

    /// Delete every record. Used by reset.
    fn drop_all(&mut self) -> Result<()>;

    /// Full scan of every record.
    fn all(&self) -> Result<Vec<CountryYearRecord>>;

    /// Sorted unique years, for populating the year slider.
    fn distinct_years(&self) -> Result<Vec<i32>>;

    /// Unique continents sorted by display name, for the continent filter.
    fn distinct_continents(&self) -> Result<Vec<Continent>>;
}

/// In-memory row store backing the dashboard and the test suite.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<CountryYearRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn insert_all(&mut self, mut records: Vec<CountryYearRecord>) -> Result<()> {
        self.rows.append(&mut records);
        Ok(())
    }

    fn drop_all(&mut self) -> Result<()> {
        self.rows.clear();
        Ok(())
    }

    fn all(&self) -> Result<Vec<CountryYearRecord>> {
        Ok(self.rows.clone())
    }

    fn distinct_years(&self) -> Result<Vec<i32>> {
        let mut years: Vec<i32> = self.rows.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        Ok(years)
    }

    fn distinct_continents(&self) -> Result<Vec<Continent>> {
        let mut continents: Vec<Continent> = self.rows.iter().map(|r| r.continent).collect();
        continents.sort_unstable();
        continents.dedup();
        continents.sort_by_key(|c| c.name());
        Ok(continents)
    }
}

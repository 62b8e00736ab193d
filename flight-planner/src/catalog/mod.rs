//! Flight catalog ingestion.
//!
//! Loads the comma-delimited flight catalog into validated [`Flight`]
//! records. Malformed rows are reported individually and excluded; the
//! remaining rows still load.

mod error;
mod load;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::domain::{Flight, FlightId};

pub use error::{CatalogError, IngestError, RecordError};
pub use load::convert_record;

/// The immutable list of flights as ingested.
#[derive(Debug, Clone, Default)]
pub struct FlightCatalog {
    flights: Vec<Flight>,
}

/// Outcome of loading a catalog: the accepted flights and every rejected row.
#[derive(Debug)]
pub struct LoadReport {
    pub catalog: FlightCatalog,
    pub rejected: Vec<IngestError>,
}

impl FlightCatalog {
    /// Build a catalog from flights that are already validated.
    ///
    /// Flight ids must be unique; the loader guarantees this for ingested
    /// data.
    pub fn new(flights: Vec<Flight>) -> Self {
        Self { flights }
    }

    /// Load a catalog from CSV text with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<LoadReport, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let parsed = load::read_rows(&mut reader).map_err(CatalogError::Read)?;

        info!(
            flights = parsed.flights.len(),
            rejected = parsed.rejected.len(),
            "Loaded flight catalog"
        );

        Ok(LoadReport {
            catalog: Self::new(parsed.flights),
            rejected: parsed.rejected,
        })
    }

    /// Load a catalog from a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<LoadReport, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// All flights, in source order.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Look up a flight by id.
    pub fn get(&self, id: FlightId) -> Option<&Flight> {
        self.flights.iter().find(|f| f.id == id)
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

//! Station name to index resolution
//!
//! Resolves a station name to its position within the dataset's
//! station-identifying variable and reads the coordinate arrays at that
//! position. Lookups re-read the dataset on every call; there is no cache.
//!
//! Read failures are recovered here: metadata generation must degrade to an
//! exception document, never crash the caller, so a failed coordinate read is
//! logged and mapped to "not found".

use tracing::warn;

use crate::dataset::Dataset;

/// Resolves station names against a borrowed dataset
pub struct StationLocator<'a, D: Dataset> {
    dataset: &'a D,
}

impl<'a, D: Dataset> StationLocator<'a, D> {
    /// Create a locator over the given dataset
    pub fn new(dataset: &'a D) -> Self {
        Self { dataset }
    }

    /// Resolve a station name to its index in the identifying variable.
    ///
    /// Linear scan, exact match as stored (no normalization). When several
    /// stations share an identical name the first occurrence wins.
    pub fn resolve(&self, station_name: &str) -> Option<usize> {
        self.dataset
            .station_names()
            .iter()
            .position(|name| name == station_name)
    }

    /// Read the (latitude, longitude) pair at the given station index.
    ///
    /// Any underlying read failure is logged and mapped to `None`.
    pub fn coordinates_at(&self, index: usize) -> Option<(f64, f64)> {
        let latitude = match self.dataset.latitude_at(index) {
            Ok(value) => value,
            Err(err) => {
                warn!(index, error = %err, "latitude read failed, treating station as unresolved");
                return None;
            }
        };
        let longitude = match self.dataset.longitude_at(index) {
            Ok(value) => value,
            Err(err) => {
                warn!(index, error = %err, "longitude read failed, treating station as unresolved");
                return None;
            }
        };
        Some((latitude, longitude))
    }

    /// Resolve a station name straight to a finite coordinate pair.
    ///
    /// Returns `None` when the name is not found, a coordinate read fails, or
    /// either value is non-finite. The pair is always both-finite or absent.
    pub fn resolved_coordinates(&self, station_name: &str) -> Option<(f64, f64)> {
        let index = self.resolve(station_name)?;
        let (latitude, longitude) = self.coordinates_at(index)?;
        if latitude.is_finite() && longitude.is_finite() {
            Some((latitude, longitude))
        } else {
            warn!(
                station = station_name,
                index, "non-finite coordinates, treating station as unresolved"
            );
            None
        }
    }
}

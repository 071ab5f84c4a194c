//! Error handling for sensor description requests.
//!
//! The displayed text of the terminal variants doubles as the exception
//! document payload, so the wording here is load-bearing: downstream
//! consumers match on these diagnostics.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No station-identifying variable exists in the dataset
    #[error("Could not find a variable containing station info.")]
    MissingStationVariable,

    /// Station name not present in the identifying variable, or its
    /// coordinates could not be resolved to two finite numbers
    #[error("Could not find station {station} in dataset")]
    StationNotResolved { station: String },

    /// Lower-level failure reading a latitude/longitude array by position;
    /// recovered by the locator, never surfaced to callers
    #[error("Coordinate read failed at station index {index}: {message}")]
    CoordinateRead { index: usize, message: String },
}

impl Error {
    /// Create a station-not-resolved error for the named station
    pub fn station_not_resolved(station: impl Into<String>) -> Self {
        Self::StationNotResolved {
            station: station.into(),
        }
    }

    /// Create a coordinate read error with context
    pub fn coordinate_read(index: usize, message: impl Into<String>) -> Self {
        Self::CoordinateRead {
            index,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Read-only dataset access interface.
//!
//! The describer never opens or parses a dataset container itself; callers
//! provide an implementation of [`Dataset`] over whatever storage they use.
//! [`MemoryDataset`] is a complete in-memory implementation suitable for
//! embedding and for tests.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named attribute value from a dataset or one of its variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    /// Create an attribute from a name/value pair
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A dataset variable: its full name plus its attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRef {
    pub full_name: String,
    pub attributes: Vec<Attribute>,
}

impl VariableRef {
    /// Create a variable reference with no attributes
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, builder style
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }
}

/// Read-only view of a time-series dataset.
///
/// Implementations are expected to be cheap to query; the describer reads
/// coordinates directly on every lookup and performs no caching of its own.
pub trait Dataset {
    /// All variables in dataset iteration order
    fn variables(&self) -> Vec<VariableRef>;

    /// All global attributes in dataset iteration order
    fn global_attributes(&self) -> Vec<Attribute>;

    /// The station-identifying variable, if the dataset has one
    fn station_variable(&self) -> Option<VariableRef>;

    /// Values of the station-identifying variable, one name per station, in
    /// the dataset's natural station order
    fn station_names(&self) -> Vec<String>;

    /// Latitude of the station at the given position
    fn latitude_at(&self, index: usize) -> Result<f64>;

    /// Longitude of the station at the given position
    fn longitude_at(&self, index: usize) -> Result<f64>;

    /// Find a single global attribute by name, optionally ignoring case
    fn find_global_attribute(&self, name: &str, ignore_case: bool) -> Option<Attribute> {
        self.global_attributes().into_iter().find(|attr| {
            if ignore_case {
                attr.name.eq_ignore_ascii_case(name)
            } else {
                attr.name == name
            }
        })
    }

    /// Value of a global attribute (case-insensitive lookup), or the default
    /// when the attribute is absent
    fn global_attribute_value(&self, name: &str, default: &str) -> String {
        self.find_global_attribute(name, true)
            .map(|attr| attr.value)
            .unwrap_or_else(|| default.to_string())
    }
}

/// In-memory [`Dataset`] implementation.
///
/// Holds variables, global attributes, and parallel station name/latitude/
/// longitude arrays. Station entries added without coordinates model datasets
/// whose coordinate arrays are shorter than the identifier array, which is
/// how unresolvable stations present in the wild.
#[derive(Debug, Clone, Default)]
pub struct MemoryDataset {
    global_attributes: Vec<Attribute>,
    variables: Vec<VariableRef>,
    station_variable_name: Option<String>,
    station_names: Vec<String>,
    latitudes: Vec<f64>,
    longitudes: Vec<f64>,
}

impl MemoryDataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a global attribute
    pub fn with_global_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.global_attributes.push(Attribute::new(name, value));
        self
    }

    /// Append a variable
    pub fn with_variable(mut self, variable: VariableRef) -> Self {
        self.variables.push(variable);
        self
    }

    /// Append a variable and mark it as the station-identifying variable
    pub fn with_station_variable(mut self, variable: VariableRef) -> Self {
        self.station_variable_name = Some(variable.full_name.clone());
        self.variables.push(variable);
        self
    }

    /// Append a station with its coordinates
    pub fn with_station(mut self, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        self.station_names.push(name.into());
        self.latitudes.push(latitude);
        self.longitudes.push(longitude);
        self
    }

    /// Append a station name with no coordinate entries, leaving the
    /// coordinate arrays shorter than the identifier array
    pub fn with_station_name_only(mut self, name: impl Into<String>) -> Self {
        self.station_names.push(name.into());
        self
    }
}

impl Dataset for MemoryDataset {
    fn variables(&self) -> Vec<VariableRef> {
        self.variables.clone()
    }

    fn global_attributes(&self) -> Vec<Attribute> {
        self.global_attributes.clone()
    }

    fn station_variable(&self) -> Option<VariableRef> {
        let name = self.station_variable_name.as_ref()?;
        self.variables
            .iter()
            .find(|var| &var.full_name == name)
            .cloned()
    }

    fn station_names(&self) -> Vec<String> {
        self.station_names.clone()
    }

    fn latitude_at(&self, index: usize) -> Result<f64> {
        self.latitudes
            .get(index)
            .copied()
            .ok_or_else(|| Error::coordinate_read(index, "latitude index out of range"))
    }

    fn longitude_at(&self, index: usize) -> Result<f64> {
        self.longitudes
            .get(index)
            .copied()
            .ok_or_else(|| Error::coordinate_read(index, "longitude index out of range"))
    }
}

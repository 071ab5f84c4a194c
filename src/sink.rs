//! Document sink contracts.
//!
//! The describers never render markup; they issue one-way signals against a
//! sink supplied by the caller. The sink owns the document template, the
//! schema-specific node names, and the final rendering. Operations come in
//! set/add/remove flavours: a "remove" signal prunes a templated node that
//! does not apply to the dataset being described.
//!
//! [`DocumentSink`] carries the operations shared by both document modes;
//! [`StationSink`] and [`NetworkSink`] extend it with mode-specific
//! operations.

/// One entry of an identification block: a display name, an optional
/// definition URI, and the value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentificationEntry {
    pub name: String,
    pub definition: String,
    pub value: String,
}

impl IdentificationEntry {
    /// Create an identification entry
    pub fn new(
        name: impl Into<String>,
        definition: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
            value: value.into(),
        }
    }
}

/// Address details attached to a contact node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactAddress {
    pub email: String,
    pub phone: String,
}

/// Opaque handle to a per-station sub-entry minted by a [`NetworkSink`].
///
/// Handles are only meaningful to the sink that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationEntry(usize);

impl StationEntry {
    /// Create a handle from the sink's raw entry index
    pub fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// The sink's raw entry index
    pub fn raw(&self) -> usize {
        self.0
    }
}

/// Operations shared by single-station and network documents
pub trait DocumentSink {
    /// Add one classifier to the classification block
    fn add_classifier(&mut self, name: &str, definition: &str, value: &str);

    /// Prune the classification block entirely
    fn remove_classification(&mut self);

    /// Add a contact node with the given role URI and optional address
    fn add_contact(&mut self, role: &str, name: &str, address: Option<&ContactAddress>);

    /// Set the history block to the given provenance text
    fn set_history(&mut self, events: &str);

    /// Prune the history block entirely
    fn remove_history(&mut self);

    /// Replace the whole document body with an exception report
    fn set_exception(&mut self, text: &str);
}

/// Operations specific to a single-station description document
pub trait StationSink: DocumentSink {
    /// Set the document's system identifier
    fn set_system_id(&mut self, id: &str);

    /// Set the description text
    fn set_description(&mut self, text: &str);

    /// Set the identification block
    fn set_identification(&mut self, entries: &[IdentificationEntry]);

    /// Set the location block to the station name and coordinate pair
    fn set_location(&mut self, name: &str, latitude: f64, longitude: f64);

    /// Prune the single-point position node
    fn remove_position(&mut self);

    /// Prune the time-position node
    fn remove_time_position(&mut self);

    /// Prune the multi-point positions node
    fn remove_positions(&mut self);
}

/// Operations specific to a network-wide description document
pub trait NetworkSink: DocumentSink {
    /// Set the network document's system identifier
    fn set_system_id(&mut self, id: &str);

    /// Mark the document as a network identification
    fn set_network_identification(&mut self);

    /// Create a per-station sub-entry with the given component id
    fn add_station(&mut self, id: &str) -> StationEntry;

    /// Prune the sub-entry's description node
    fn remove_station_description(&mut self, station: StationEntry);

    /// Set the sub-entry's identification block
    fn set_station_identification(
        &mut self,
        station: StationEntry,
        entries: &[IdentificationEntry],
    );

    /// Set the sub-entry's two-dimensional location node; an empty coordinate
    /// slice means the station could not be resolved
    fn set_station_location(
        &mut self,
        station: StationEntry,
        name: &str,
        coordinates: &[(f64, f64)],
    );

    /// Prune the sub-entry's single-point position node
    fn remove_station_position(&mut self, station: StationEntry);

    /// Prune the sub-entry's multi-point positions node
    fn remove_station_positions(&mut self, station: StationEntry);

    /// Prune the sub-entry's time-position node
    fn remove_station_time_position(&mut self, station: StationEntry);
}

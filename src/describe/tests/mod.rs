//! Unit tests for the description mapping service
//!
//! Shared fixtures live here: a recording sink that captures every signal in
//! order, and dataset builders for the common scenarios.


use crate::dataset::{MemoryDataset, VariableRef};
use crate::sink::{
    ContactAddress, DocumentSink, IdentificationEntry, NetworkSink, StationEntry, StationSink,
};

/// One recorded sink signal
#[derive(Debug, Clone, PartialEq)]
pub enum SinkOp {
    SystemId(String),
    Description(String),
    Identification(Vec<IdentificationEntry>),
    Classifier {
        name: String,
        definition: String,
        value: String,
    },
    RemoveClassification,
    Contact {
        role: String,
        name: String,
        address: Option<ContactAddress>,
    },
    History(String),
    RemoveHistory,
    Location {
        name: String,
        latitude: f64,
        longitude: f64,
    },
    RemovePosition,
    RemoveTimePosition,
    RemovePositions,
    Exception(String),
    NetworkIdentification,
    AddStation(String),
    RemoveStationDescription(usize),
    StationIdentification {
        station: usize,
        entries: Vec<IdentificationEntry>,
    },
    StationLocation {
        station: usize,
        name: String,
        coordinates: Vec<(f64, f64)>,
    },
    RemoveStationPosition(usize),
    RemoveStationPositions(usize),
    RemoveStationTimePosition(usize),
}

/// Sink that records every signal it receives, in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub ops: Vec<SinkOp>,
    next_station: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentSink for RecordingSink {
    fn add_classifier(&mut self, name: &str, definition: &str, value: &str) {
        self.ops.push(SinkOp::Classifier {
            name: name.to_string(),
            definition: definition.to_string(),
            value: value.to_string(),
        });
    }

    fn remove_classification(&mut self) {
        self.ops.push(SinkOp::RemoveClassification);
    }

    fn add_contact(&mut self, role: &str, name: &str, address: Option<&ContactAddress>) {
        self.ops.push(SinkOp::Contact {
            role: role.to_string(),
            name: name.to_string(),
            address: address.cloned(),
        });
    }

    fn set_history(&mut self, events: &str) {
        self.ops.push(SinkOp::History(events.to_string()));
    }

    fn remove_history(&mut self) {
        self.ops.push(SinkOp::RemoveHistory);
    }

    fn set_exception(&mut self, text: &str) {
        self.ops.push(SinkOp::Exception(text.to_string()));
    }
}

impl StationSink for RecordingSink {
    fn set_system_id(&mut self, id: &str) {
        self.ops.push(SinkOp::SystemId(id.to_string()));
    }

    fn set_description(&mut self, text: &str) {
        self.ops.push(SinkOp::Description(text.to_string()));
    }

    fn set_identification(&mut self, entries: &[IdentificationEntry]) {
        self.ops.push(SinkOp::Identification(entries.to_vec()));
    }

    fn set_location(&mut self, name: &str, latitude: f64, longitude: f64) {
        self.ops.push(SinkOp::Location {
            name: name.to_string(),
            latitude,
            longitude,
        });
    }

    fn remove_position(&mut self) {
        self.ops.push(SinkOp::RemovePosition);
    }

    fn remove_time_position(&mut self) {
        self.ops.push(SinkOp::RemoveTimePosition);
    }

    fn remove_positions(&mut self) {
        self.ops.push(SinkOp::RemovePositions);
    }
}

impl NetworkSink for RecordingSink {
    fn set_system_id(&mut self, id: &str) {
        self.ops.push(SinkOp::SystemId(id.to_string()));
    }

    fn set_network_identification(&mut self) {
        self.ops.push(SinkOp::NetworkIdentification);
    }

    fn add_station(&mut self, id: &str) -> StationEntry {
        let entry = StationEntry::new(self.next_station);
        self.next_station += 1;
        self.ops.push(SinkOp::AddStation(id.to_string()));
        entry
    }

    fn remove_station_description(&mut self, station: StationEntry) {
        self.ops.push(SinkOp::RemoveStationDescription(station.raw()));
    }

    fn set_station_identification(
        &mut self,
        station: StationEntry,
        entries: &[IdentificationEntry],
    ) {
        self.ops.push(SinkOp::StationIdentification {
            station: station.raw(),
            entries: entries.to_vec(),
        });
    }

    fn set_station_location(
        &mut self,
        station: StationEntry,
        name: &str,
        coordinates: &[(f64, f64)],
    ) {
        self.ops.push(SinkOp::StationLocation {
            station: station.raw(),
            name: name.to_string(),
            coordinates: coordinates.to_vec(),
        });
    }

    fn remove_station_position(&mut self, station: StationEntry) {
        self.ops.push(SinkOp::RemoveStationPosition(station.raw()));
    }

    fn remove_station_positions(&mut self, station: StationEntry) {
        self.ops.push(SinkOp::RemoveStationPositions(station.raw()));
    }

    fn remove_station_time_position(&mut self, station: StationEntry) {
        self.ops.push(SinkOp::RemoveStationTimePosition(station.raw()));
    }
}

/// Station-identifying variable with the usual attribute mix: a reserved
/// role marker, a container-internal attribute, and two describable ones
pub fn create_station_variable() -> VariableRef {
    VariableRef::new("station_id")
        .with_attribute("cf_role", "timeseries_id")
        .with_attribute("_hdf5_chunking", "contiguous")
        .with_attribute("long_name", "station identifier")
        .with_attribute("ioos_code", "urn:ioos:station:ncsos")
}

/// Single-station buoy dataset: platformtype set, no history, one station
/// "44013" at (42.3, -70.9)
pub fn create_buoy_dataset() -> MemoryDataset {
    MemoryDataset::new()
        .with_global_attribute("platformtype", "buoy")
        .with_global_attribute("description", "coastal buoy time series")
        .with_station_variable(create_station_variable())
        .with_variable(VariableRef::new("sea_water_temperature"))
        .with_station("44013", 42.3, -70.9)
}

/// Two-station network dataset where station "B" has no coordinate entries
pub fn create_partial_network_dataset() -> MemoryDataset {
    MemoryDataset::new()
        .with_global_attribute("platformtype", "buoy")
        .with_global_attribute("history", "deployed 2009-06-01")
        .with_station_variable(create_station_variable())
        .with_station("A", 42.0, -70.0)
        .with_station_name_only("B")
}

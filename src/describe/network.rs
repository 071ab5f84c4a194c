//! Network-wide document population
//!
//! Describes every station in the dataset: a network-level header plus one
//! sub-entry per station, populated with the same classification and history
//! logic as the single-station mode.
//!
//! The network identification convention differs from the single-station one:
//! per-station entries carry bare definitions instead of prefixed definition
//! URIs. The two schemas expect different conventions, so the asymmetry is
//! deliberate and must not be unified.

use tracing::debug;

use crate::constants::{NETWORK_SYSTEM_ID, STATION_ID_DEFINITION, STATION_ID_ENTRY_NAME,
    STATION_ID_PREFIX, STATION_URN_PREFIX};
use crate::dataset::Dataset;
use crate::describe::locator::StationLocator;
use crate::describe::snapshot::DatasetMetadataSnapshot;
use crate::describe::{contacts, is_identifying_attribute};
use crate::sink::{IdentificationEntry, NetworkSink};

/// Populates a network-wide description document.
///
/// Keeps a borrow of the dataset alongside the snapshot: per-station
/// coordinates are read directly from the dataset as stations are
/// enumerated, not cached in the snapshot.
pub struct NetworkDescriber<'a, D: Dataset> {
    dataset: &'a D,
    snapshot: &'a DatasetMetadataSnapshot,
}

impl<'a, D: Dataset> NetworkDescriber<'a, D> {
    /// Create a describer over a dataset and its snapshot
    pub fn new(dataset: &'a D, snapshot: &'a DatasetMetadataSnapshot) -> Self {
        Self { dataset, snapshot }
    }

    /// Issue the full population sequence against the sink.
    ///
    /// A snapshot with a terminal diagnostic (a dataset with no
    /// station-identifying variable) produces a single exception signal,
    /// exactly as in the single-station mode.
    pub fn populate<S: NetworkSink>(&self, sink: &mut S) {
        if let Some(error_text) = &self.snapshot.error_text {
            debug!(error = %error_text, "emitting exception document");
            sink.set_exception(error_text);
            return;
        }

        sink.set_system_id(NETWORK_SYSTEM_ID);
        sink.set_network_identification();
        contacts::emit_classification(sink, self.snapshot.platform_type.as_ref());
        contacts::emit_history(sink, self.snapshot.history.as_ref());

        let locator = StationLocator::new(self.dataset);
        for name in self.dataset.station_names() {
            self.populate_station(sink, &locator, &name);
        }
    }

    /// Build one per-station sub-entry.
    ///
    /// An unresolvable station still gets its sub-entry and location node,
    /// but the coordinate pair is omitted, never zero-filled.
    fn populate_station<S: NetworkSink>(
        &self,
        sink: &mut S,
        locator: &StationLocator<'_, D>,
        name: &str,
    ) {
        let coordinates: Vec<(f64, f64)> = locator.resolved_coordinates(name).into_iter().collect();
        if coordinates.is_empty() {
            debug!(station = name, "station unresolved, omitting coordinates");
        }

        let entry = sink.add_station(&format!("{STATION_ID_PREFIX}{name}"));
        // per-station descriptions are a known simplification
        sink.remove_station_description(entry);
        sink.set_station_identification(entry, &self.station_identification(name));
        sink.set_station_location(entry, name, &coordinates);
        sink.remove_station_position(entry);
        sink.remove_station_positions(entry);
        sink.remove_station_time_position(entry);
    }

    /// Identification entries for one station: the station URN under the
    /// bare station-id definition, then the station variable's describable
    /// attributes with empty definitions.
    fn station_identification(&self, name: &str) -> Vec<IdentificationEntry> {
        let mut entries = vec![IdentificationEntry::new(
            STATION_ID_ENTRY_NAME,
            STATION_ID_DEFINITION,
            format!("{STATION_URN_PREFIX}{name}"),
        )];
        if let Some(station_variable) = &self.snapshot.station_variable {
            for attr in station_variable
                .attributes
                .iter()
                .filter(|attr| is_identifying_attribute(attr))
            {
                entries.push(IdentificationEntry::new(&attr.name, "", &attr.value));
            }
        }
        entries
    }
}

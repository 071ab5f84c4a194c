//! Single-station document population
//!
//! Runs the fixed population pipeline for one station against a
//! [`StationSink`], or emits the exception document when the snapshot carries
//! a terminal diagnostic.

use tracing::debug;

use crate::config::ServiceConfig;
use crate::constants::{MMI_DEF_URL, STATION_ID_DEFINITION, STATION_ID_ENTRY_NAME,
    STATION_ID_PREFIX};
use crate::describe::snapshot::DatasetMetadataSnapshot;
use crate::describe::{contacts, is_identifying_attribute};
use crate::sink::{IdentificationEntry, StationSink};

/// Populates a single-station description document from a snapshot
pub struct StationDescriber<'a> {
    snapshot: &'a DatasetMetadataSnapshot,
    config: &'a ServiceConfig,
}

impl<'a> StationDescriber<'a> {
    /// Create a describer over a snapshot and service configuration
    pub fn new(snapshot: &'a DatasetMetadataSnapshot, config: &'a ServiceConfig) -> Self {
        Self { snapshot, config }
    }

    /// Issue the full population sequence against the sink.
    ///
    /// The state is chosen once at entry: a snapshot with a terminal
    /// diagnostic produces a single exception signal and nothing else.
    /// Otherwise each step executes exactly once, and the trailing removal
    /// signals are never followed by further set signals.
    pub fn populate<S: StationSink>(&self, sink: &mut S) {
        if let Some(error_text) = &self.snapshot.error_text {
            debug!(error = %error_text, "emitting exception document");
            sink.set_exception(error_text);
            return;
        }

        sink.set_system_id(&format!("{STATION_ID_PREFIX}{}", self.snapshot.station_name));
        sink.set_description(&self.snapshot.description);
        sink.set_identification(&self.identification_entries());
        contacts::emit_classification(sink, self.snapshot.platform_type.as_ref());
        contacts::emit_contacts(sink, self.config, &self.snapshot.contributors);
        contacts::emit_history(sink, self.snapshot.history.as_ref());
        if let Some((latitude, longitude)) = self.snapshot.station_coords {
            sink.set_location(&self.snapshot.station_name, latitude, longitude);
        }
        self.remove_unused_nodes(sink);
    }

    /// Identification entries: the station id under its definition URI,
    /// followed by the station variable's describable attributes, each with a
    /// definition derived from its name.
    fn identification_entries(&self) -> Vec<IdentificationEntry> {
        let mut entries = vec![IdentificationEntry::new(
            STATION_ID_ENTRY_NAME,
            format!("{MMI_DEF_URL}{STATION_ID_DEFINITION}"),
            &self.snapshot.procedure,
        )];
        if let Some(station_variable) = &self.snapshot.station_variable {
            for attr in station_variable
                .attributes
                .iter()
                .filter(|attr| is_identifying_attribute(attr))
            {
                entries.push(IdentificationEntry::new(
                    &attr.name,
                    format!("{MMI_DEF_URL}{}", attr.name),
                    &attr.value,
                ));
            }
        }
        entries
    }

    /// Point features carry a single location; the position node variants do
    /// not apply and are pruned from the template.
    fn remove_unused_nodes<S: StationSink>(&self, sink: &mut S) {
        sink.remove_position();
        sink.remove_time_position();
        sink.remove_positions();
    }
}

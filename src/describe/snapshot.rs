//! One-shot metadata extraction
//!
//! Scans the dataset's variables and global attributes exactly once and
//! classifies what it finds into an immutable [`DatasetMetadataSnapshot`].
//! The snapshot is built per request, read many times by the describer, and
//! discarded once the document is populated.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_DESCRIPTION, attributes};
use crate::dataset::{Attribute, Dataset, VariableRef};
use crate::describe::locator::StationLocator;
use crate::error::Error;

/// The two description document modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Describe one station named by a procedure identifier
    SingleStation,
    /// Describe every station in the dataset
    Network,
}

/// Immutable metadata bundle extracted from a dataset for one description
/// request.
///
/// Missing-but-optional metadata never fails construction; only the two
/// terminal conditions (no station-identifying variable, unresolvable
/// station) set [`error_text`](Self::error_text), which then takes exclusive
/// control of the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadataSnapshot {
    /// Which document mode this snapshot was extracted for
    pub kind: FeatureKind,

    /// Dataset-level platform classification, if present
    pub platform_type: Option<Attribute>,

    /// Free-text provenance log, if present
    pub history: Option<Attribute>,

    /// Contributor name/role attributes in dataset iteration order
    pub contributors: Vec<Attribute>,

    /// Variables whose name carries the document marker, in dataset
    /// iteration order. Collected but not consumed by any formatting step.
    pub document_variables: Vec<VariableRef>,

    /// Dataset description text, defaulted when absent
    pub description: String,

    /// The procedure identifier of the request; empty in network mode
    pub procedure: String,

    /// Last colon-delimited segment of the procedure; empty in network mode
    pub station_name: String,

    /// The station-identifying variable, captured for identification blocks
    pub station_variable: Option<VariableRef>,

    /// Resolved (latitude, longitude) for the named station; both finite or
    /// absent, never mixed
    pub station_coords: Option<(f64, f64)>,

    /// Terminal diagnostic; set exactly when station variable discovery or
    /// station resolution fails
    pub error_text: Option<String>,
}

impl DatasetMetadataSnapshot {
    /// Extract a snapshot for a single-station request.
    ///
    /// The station name is the last `:`-delimited segment of the procedure
    /// identifier. Resolution failures land in `error_text` rather than
    /// returning an error.
    pub fn for_station<D: Dataset>(dataset: &D, procedure: &str) -> Self {
        let mut snapshot = Self::extract_common(dataset, FeatureKind::SingleStation);
        snapshot.procedure = procedure.to_string();
        snapshot.station_name = procedure.rsplit(':').next().unwrap_or("").to_string();

        if snapshot.station_variable.is_some() {
            let locator = StationLocator::new(dataset);
            match locator.resolved_coordinates(&snapshot.station_name) {
                Some(coords) => snapshot.station_coords = Some(coords),
                None => {
                    snapshot.error_text =
                        Some(Error::station_not_resolved(&snapshot.station_name).to_string());
                }
            }
        } else {
            snapshot.error_text = Some(Error::MissingStationVariable.to_string());
        }

        debug!(
            station = %snapshot.station_name,
            resolved = snapshot.station_coords.is_some(),
            "extracted single-station snapshot"
        );
        snapshot
    }

    /// Extract a snapshot for a network-wide request.
    ///
    /// No coordinate resolution happens here; the network describer resolves
    /// each station as it enumerates them. A dataset with no
    /// station-identifying variable at all still produces the terminal
    /// diagnostic so the describer takes the exception path.
    pub fn for_network<D: Dataset>(dataset: &D) -> Self {
        let mut snapshot = Self::extract_common(dataset, FeatureKind::Network);
        if snapshot.station_variable.is_none() {
            snapshot.error_text = Some(Error::MissingStationVariable.to_string());
        }
        snapshot
    }

    /// True when the snapshot carries a terminal diagnostic
    pub fn is_error(&self) -> bool {
        self.error_text.is_some()
    }

    fn extract_common<D: Dataset>(dataset: &D, kind: FeatureKind) -> Self {
        let document_variables: Vec<VariableRef> = dataset
            .variables()
            .into_iter()
            .filter(|var| {
                var.full_name
                    .to_lowercase()
                    .contains(attributes::DOCUMENT_MARKER)
            })
            .collect();

        let platform_type = dataset.find_global_attribute(attributes::PLATFORM_TYPE, true);
        let history = dataset.find_global_attribute(attributes::HISTORY, true);

        let contributors: Vec<Attribute> = dataset
            .global_attributes()
            .into_iter()
            .filter(|attr| {
                attr.name
                    .to_lowercase()
                    .contains(attributes::CONTRIBUTOR_MARKER)
            })
            .collect();

        let description =
            dataset.global_attribute_value(attributes::DESCRIPTION, DEFAULT_DESCRIPTION);

        let station_variable = dataset.station_variable();

        debug!(
            contributors = contributors.len(),
            document_variables = document_variables.len(),
            has_station_variable = station_variable.is_some(),
            "scanned dataset metadata"
        );

        Self {
            kind,
            platform_type,
            history,
            contributors,
            document_variables,
            description,
            procedure: String::new(),
            station_name: String::new(),
            station_variable,
            station_coords: None,
            error_text: None,
        }
    }
}

//! Constants for sensor description mapping
//!
//! This module contains the definition URIs, reserved attribute names, and
//! fixed document values used throughout the describer.

// =============================================================================
// Definition URIs
// =============================================================================

/// Base URL for MMI ontology definitions used in identification and contact
/// blocks of single-station documents
pub const MMI_DEF_URL: &str = "http://mmisw.org/ont/ioos/definition/";

/// Contact role for the inventory (operator) contact
pub const OPERATOR_ROLE: &str = "http://mmisw.org/ont/ioos/definition/operator";

/// Contact role for the data (publisher) contact
pub const PUBLISHER_ROLE: &str = "http://mmisw.org/ont/ioos/definition/publisher";

// =============================================================================
// Document Identifiers
// =============================================================================

/// System identifier for network-wide descriptions
pub const NETWORK_SYSTEM_ID: &str = "network-all";

/// Prefix applied to station names when forming system and component ids
pub const STATION_ID_PREFIX: &str = "station-";

/// URN prefix for per-station identification values in network documents
pub const STATION_URN_PREFIX: &str = "urn:tds:station.sos:";

/// Name of the leading identification entry in both document modes
pub const STATION_ID_ENTRY_NAME: &str = "StationId";

/// Bare definition of the leading identification entry (the single-station
/// mode prepends [`MMI_DEF_URL`])
pub const STATION_ID_DEFINITION: &str = "stationID";

/// Description text used when the dataset carries no description attribute
pub const DEFAULT_DESCRIPTION: &str = "no description";

// =============================================================================
// Attribute Names and Markers
// =============================================================================

/// Well-known dataset attribute names and the substring markers used to
/// classify attributes and variables during extraction
pub mod attributes {
    /// Global attribute holding the dataset-level platform classification
    pub const PLATFORM_TYPE: &str = "platformtype";

    /// Global attribute holding the free-text provenance log
    pub const HISTORY: &str = "history";

    /// Global attribute holding the dataset description
    pub const DESCRIPTION: &str = "description";

    /// Marker identifying contributor name/role global attributes
    pub const CONTRIBUTOR_MARKER: &str = "contributor";

    /// Marker identifying supplementary document variables
    pub const DOCUMENT_MARKER: &str = "doc";

    /// Reserved role attribute excluded from identification blocks
    pub const CF_ROLE: &str = "cf_role";

    /// Marker for container-internal attributes excluded from identification
    pub const HDF5_MARKER: &str = "hdf5";

    /// Marker selecting the role field within contributor attributes
    pub const ROLE_MARKER: &str = "role";

    /// Marker selecting the name field within contributor attributes
    pub const NAME_MARKER: &str = "name";
}

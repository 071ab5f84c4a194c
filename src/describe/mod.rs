//! Description mapping service
//!
//! This module turns a dataset's metadata into the signal sequence that
//! populates a sensor description document. It is organised into logical
//! components:
//! - [`snapshot`] - One-shot metadata extraction into an immutable snapshot
//! - [`locator`] - Station name to coordinate-array index resolution
//! - [`station`] - Single-station document population
//! - [`network`] - Network-wide document population, one sub-entry per station
//! - [`contacts`] - Contact, classification, and history logic shared by both
//!   modes
//!
//! # Request Pipeline
//!
//! A description request is fully self-contained and synchronous:
//!
//! 1. **Extraction**: build a [`DatasetMetadataSnapshot`] from the dataset
//!    (once per request; the snapshot is never mutated afterwards)
//! 2. **Population**: run the mode-appropriate describer, which issues a
//!    fixed sequence of sink operations
//!
//! When extraction hits a terminal condition (no station-identifying
//! variable, or an unresolvable station), both describers emit a single
//! exception document instead; no error ever crosses the describer boundary.

pub mod contacts;
pub mod locator;
pub mod network;
pub mod snapshot;
pub mod station;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use locator::StationLocator;
pub use network::NetworkDescriber;
pub use snapshot::{DatasetMetadataSnapshot, FeatureKind};
pub use station::StationDescriber;

use crate::constants::attributes;
use crate::dataset::Attribute;

/// Whether a station-variable attribute belongs in an identification block.
///
/// The reserved role marker and container-internal attributes are skipped in
/// both document modes.
pub(crate) fn is_identifying_attribute(attr: &Attribute) -> bool {
    !attr.name.eq_ignore_ascii_case(attributes::CF_ROLE)
        && !attr.name.to_lowercase().contains(attributes::HDF5_MARKER)
}

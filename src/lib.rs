//! SensorML Describer Library
//!
//! A Rust library for projecting metadata harvested from scientific
//! time-series datasets onto sensor description documents.
//!
//! This library provides tools for:
//! - Extracting an immutable metadata snapshot from a dataset (global
//!   attributes, variable attributes, station-identifying variables)
//! - Resolving station names to positions in multi-station coordinate arrays
//! - Populating a single-station description document through a sink interface
//! - Enumerating every station in a dataset for a network-wide description
//! - Degrading to a well-formed exception document instead of failing
//!
//! Dataset access and document rendering are external collaborators: callers
//! supply a [`dataset::Dataset`] implementation and one of the sink types in
//! [`sink`], and the describers in [`describe`] drive the signals between
//! them.

pub mod config;
pub mod constants;
pub mod dataset;
pub mod describe;
pub mod error;
pub mod sink;

// Re-export commonly used types
pub use config::{ContactFields, ServiceConfig};
pub use dataset::{Attribute, Dataset, MemoryDataset, VariableRef};
pub use describe::{
    DatasetMetadataSnapshot, FeatureKind, NetworkDescriber, StationDescriber, StationLocator,
};
pub use error::{Error, Result};

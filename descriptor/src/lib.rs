//! Vamp plugin descriptors as typed Rust data.
//!
//! The `vamp-descriptor` crate holds the read-only model of what a Vamp
//! plugin host reports about a plugin (identity, parameters, outputs) and
//! the [`PluginHost`] trait through which descriptors are obtained.
//!
//! # Hosts
//!
//! - [`MemoryHost`]: libraries held in memory, in insertion order.
//! - [`ManifestHost`]: libraries read from JSON manifests in a set of
//!   directories.
//!
//! ```
//! use vamp_descriptor::{MemoryHost, PluginHost};
//!
//! let host = MemoryHost::new();
//! assert!(host.list_plugins().is_empty());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod host;
pub mod manifest;
pub mod model;

pub use host::{LoadError, MemoryHost, PluginHost};
pub use manifest::{LibraryManifest, ManifestError, ManifestHost};
pub use model::{
    library_of, plugin_key, FixedBins, InputDomain, OutputDescriptor, ParameterDescriptor,
    PluginDescriptor, SampleType,
};

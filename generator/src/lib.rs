//! Vamp plugin RDF template generation.
//!
//! The `vamp-rdf-template` crate renders the static descriptors of one Vamp
//! plugin library into a Turtle document using the Vamp plugin ontology. The
//! result is a starting point for hand editing: license, author URI, and
//! feature/event types are left as `FIXME` markers that are deliberately
//! not valid Turtle.
//!
//! # Entry Points
//!
//! - [`describe`] renders already-loaded descriptors.
//! - [`generate`] resolves command-line plugin references against a
//!   [`PluginHost`](vamp_descriptor::PluginHost) and renders the result.
//!
//! ```
//! use vamp_descriptor::{InputDomain, PluginDescriptor};
//!
//! let plugin = PluginDescriptor {
//!     identifier: "zerocrossing".into(),
//!     name: "Zero Crossings".into(),
//!     description: String::new(),
//!     maker: "Vamp SDK".into(),
//!     plugin_version: 2,
//!     api_version: 2,
//!     input_domain: InputDomain::TimeDomain,
//!     parameters: vec![],
//!     outputs: vec![],
//! };
//! let turtle = vamp_rdf_template::describe(
//!     &[plugin],
//!     "http://example.org/plugins/",
//!     "http://example.org/me#",
//!     "vamp-example-plugins",
//! )
//! .unwrap_or_default();
//! assert!(turtle.contains("vamp:available_plugin plugbase:zerocrossing"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod classify;
pub mod driver;
pub mod error;
pub mod formatter;
pub mod literal;

use tracing::info;
use vamp_descriptor::{PluginDescriptor, PluginHost};

pub use classify::{classify, DenseTail, OutputShape};
pub use driver::{resolve, PluginReference, Resolution, LOAD_SAMPLE_RATE};
pub use error::{DriverError, GenerateError};
pub use formatter::{
    format_library, format_namespaces, format_output, format_parameter, format_plugin,
    format_provenance,
};

/// Renders the complete document for `plugins` of library `libname`.
///
/// Blocks appear in a fixed order: prefixes, provenance, library, then for
/// each plugin in the order given its own block, its parameter blocks and
/// its output blocks. Nothing is returned unless every block renders.
///
/// # Errors
///
/// Returns [`GenerateError::UnknownSampleType`] if any output cannot be
/// classified.
pub fn describe(
    plugins: &[PluginDescriptor],
    bundle_base_uri: &str,
    describer_uri: &str,
    libname: &str,
) -> Result<String, GenerateError> {
    let mut out = String::with_capacity(4096 * (plugins.len() + 1));

    out.push_str(&format_namespaces(bundle_base_uri, libname));
    out.push_str(&format_provenance(describer_uri, bundle_base_uri, libname));
    out.push_str(&format_library(libname, plugins));

    for plugin in plugins {
        out.push_str(&format_plugin(plugin));
        for param in &plugin.parameters {
            out.push_str(&format_parameter(plugin, param));
        }
        for output in &plugin.outputs {
            out.push_str(&format_output(plugin, output)?);
        }
    }

    info!(%libname, plugins = plugins.len(), bytes = out.len(), "document generated");
    Ok(out)
}

/// Resolves `arguments` against `host` and renders the resulting library.
///
/// # Errors
///
/// Returns any [`DriverError`] from resolution, or a wrapped
/// [`GenerateError`] from rendering.
pub fn generate<H, S>(
    host: &H,
    bundle_base_uri: &str,
    describer_uri: &str,
    arguments: &[S],
) -> Result<String, DriverError>
where
    H: PluginHost + ?Sized,
    S: AsRef<str>,
{
    let resolution = resolve(host, arguments)?;
    Ok(describe(
        &resolution.plugins,
        bundle_base_uri,
        describer_uri,
        &resolution.libname,
    )?)
}

/// IRI constants used in the document prologue.
pub mod iris {
    /// RDF Schema namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// Vamp plugin ontology namespace.
    pub const VAMP: &str = "http://purl.org/ontology/vamp/";
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// Dublin Core elements namespace.
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    /// Audio features ontology namespace.
    pub const AF: &str = "http://purl.org/ontology/af/";
    /// FOAF namespace.
    pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
    /// Creative Commons namespace.
    pub const CC: &str = "http://web.resource.org/cc/";

    /// Identifies this generator as a maker of every document it writes.
    pub const PROGRAM: &str = "http://www.vamp-plugins.org/doap.rdf#template-generator";
}

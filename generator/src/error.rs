//! Error types for document generation and plugin resolution.

use thiserror::Error;
use vamp_descriptor::LoadError;

/// Failure while rendering descriptors into a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A dense output reports a sample type outside the known categories.
    #[error(
        "incomprehensible sample type {code} for output descriptor \"{output}\" of plugin \"{plugin}\""
    )]
    UnknownSampleType {
        /// Identifier of the plugin owning the output.
        plugin: String,
        /// Identifier of the offending output.
        output: String,
        /// Raw sample-type code reported by the host.
        code: i32,
    },
}

/// Failure while turning command-line plugin references into descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// No plugin references were supplied.
    #[error("no plugin keys given")]
    NoArguments,

    /// A plugin reference has an empty library part.
    #[error("invalid plugin key \"{argument}\": expected [vamp:]library[:plugin]")]
    InvalidKey {
        /// The argument as given.
        argument: String,
    },

    /// Plugin references name more than one library.
    #[error(
        "all plugins specified on command line must originate in the same library (\"{expected}\", then \"{found}\")"
    )]
    LibraryMismatch {
        /// Library pinned by the first reference.
        expected: String,
        /// Library named by the offending reference.
        found: String,
    },

    /// The host could not load a plugin.
    #[error("plugin \"{key}\" could not be loaded")]
    Load {
        /// Key that failed to load.
        key: String,
        /// Host error.
        #[source]
        source: LoadError,
    },

    /// Loaded descriptors could not be rendered.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

impl DriverError {
    /// Returns true for errors caused by malformed invocation arguments
    /// rather than by the plugins they name.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(self, DriverError::NoArguments | DriverError::InvalidKey { .. })
    }
}

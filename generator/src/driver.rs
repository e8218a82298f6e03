//! Resolution of command-line plugin references into loaded descriptors.
//!
//! A reference is `[vamp:]library[:plugin]`. The first reference pins the
//! library; every later one must name the same library. A bare library
//! expands to every plugin the host lists for it, in the host's order.

use tracing::{debug, warn};
use vamp_descriptor::{library_of, PluginDescriptor, PluginHost};

use crate::error::DriverError;

/// Input sample rate plugins are instantiated at. Descriptors do not depend
/// on it for the plugins this tool targets, but hosts require one.
pub const LOAD_SAMPLE_RATE: f32 = 44100.0;

/// A parsed plugin reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginReference {
    /// Every plugin in the named library.
    Library(String),
    /// One plugin, addressed by its full host key.
    Plugin {
        /// Library part of the key.
        library: String,
        /// The `library:plugin` key.
        key: String,
    },
}

impl PluginReference {
    /// Parses `[vamp:]library[:plugin]`.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::InvalidKey`] if the library part is empty.
    pub fn parse(argument: &str) -> Result<Self, DriverError> {
        let key = argument.strip_prefix("vamp:").unwrap_or(argument);
        let library = library_of(key);
        if library.is_empty() {
            return Err(DriverError::InvalidKey {
                argument: argument.to_owned(),
            });
        }
        if library == key {
            Ok(PluginReference::Library(library.to_owned()))
        } else {
            Ok(PluginReference::Plugin {
                library: library.to_owned(),
                key: key.to_owned(),
            })
        }
    }

    /// Returns the library this reference belongs to.
    #[must_use]
    pub fn library(&self) -> &str {
        match self {
            PluginReference::Library(library) => library,
            PluginReference::Plugin { library, .. } => library,
        }
    }
}

/// Loaded plugins sharing one library.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The library every plugin belongs to.
    pub libname: String,
    /// Loaded descriptors, in argument order.
    pub plugins: Vec<PluginDescriptor>,
}

/// Resolves plugin references against `host`, loading every plugin they
/// name. Stops at the first failure.
///
/// # Errors
///
/// - [`DriverError::NoArguments`] if `arguments` is empty
/// - [`DriverError::InvalidKey`] for a reference with no library part
/// - [`DriverError::LibraryMismatch`] when references span libraries
/// - [`DriverError::Load`] when the host cannot load a plugin
pub fn resolve<H, S>(host: &H, arguments: &[S]) -> Result<Resolution, DriverError>
where
    H: PluginHost + ?Sized,
    S: AsRef<str>,
{
    let mut libname: Option<String> = None;
    let mut plugins = Vec::new();

    for argument in arguments {
        let reference = PluginReference::parse(argument.as_ref())?;
        if let Some(expected) = &libname {
            if expected != reference.library() {
                return Err(DriverError::LibraryMismatch {
                    expected: expected.clone(),
                    found: reference.library().to_owned(),
                });
            }
        } else {
            libname = Some(reference.library().to_owned());
        }
        debug!(?reference, "resolving plugin reference");

        match reference {
            PluginReference::Library(library) => {
                let keys: Vec<String> = host
                    .list_plugins()
                    .into_iter()
                    .filter(|key| library_of(key) == library)
                    .collect();
                if keys.is_empty() {
                    warn!(%library, "library provides no plugins");
                }
                for key in keys {
                    plugins.push(load(host, &key)?);
                }
            }
            PluginReference::Plugin { key, .. } => plugins.push(load(host, &key)?),
        }
    }

    let libname = libname.ok_or(DriverError::NoArguments)?;
    Ok(Resolution { libname, plugins })
}

fn load<H: PluginHost + ?Sized>(host: &H, key: &str) -> Result<PluginDescriptor, DriverError> {
    let plugin = host
        .load_plugin(key, LOAD_SAMPLE_RATE)
        .map_err(|source| DriverError::Load {
            key: key.to_owned(),
            source,
        })?;
    debug!(%key, parameters = plugin.parameters.len(), outputs = plugin.outputs.len(), "loaded plugin");
    Ok(plugin)
}

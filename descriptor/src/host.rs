//! The plugin-host seam.
//!
//! A [`PluginHost`] enumerates plugin keys and loads descriptors by key. The
//! generator only ever talks to a host through this trait, so the real Vamp
//! loader, a manifest directory, and test doubles are interchangeable.

use thiserror::Error;

use crate::model::{plugin_key, PluginDescriptor};

/// Failure to load a plugin from a host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The key is not of the form `library:plugin`.
    #[error("malformed plugin key \"{key}\": expected library:plugin")]
    MalformedKey {
        /// The offending key.
        key: String,
    },

    /// No library known to the host provides this plugin.
    #[error("no plugin with key \"{key}\" is known to the host")]
    NotFound {
        /// The key that was requested.
        key: String,
    },

    /// The host found the plugin but refused to instantiate it.
    #[error("plugin \"{key}\" could not be instantiated: {reason}")]
    Rejected {
        /// The key that was requested.
        key: String,
        /// Host-supplied explanation.
        reason: String,
    },
}

/// Source of plugin descriptors.
pub trait PluginHost {
    /// Returns the keys of every plugin the host can load, in the host's
    /// enumeration order.
    fn list_plugins(&self) -> Vec<String>;

    /// Loads the plugin with the given `library:plugin` key at the given
    /// input sample rate and returns its descriptor.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the key is malformed, unknown, or the
    /// plugin cannot be instantiated.
    fn load_plugin(&self, key: &str, input_sample_rate: f32)
        -> Result<PluginDescriptor, LoadError>;
}

impl<H: PluginHost + ?Sized> PluginHost for &H {
    fn list_plugins(&self) -> Vec<String> {
        (**self).list_plugins()
    }

    fn load_plugin(
        &self,
        key: &str,
        input_sample_rate: f32,
    ) -> Result<PluginDescriptor, LoadError> {
        (**self).load_plugin(key, input_sample_rate)
    }
}

/// An in-memory host holding libraries in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    libraries: Vec<(String, Vec<PluginDescriptor>)>,
}

impl MemoryHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a library and returns the host, for chained construction.
    #[must_use]
    pub fn with_library(mut self, name: impl Into<String>, plugins: Vec<PluginDescriptor>) -> Self {
        self.add_library(name, plugins);
        self
    }

    /// Adds a library. Plugins for a library name that is already present
    /// are appended to it.
    pub fn add_library(&mut self, name: impl Into<String>, plugins: Vec<PluginDescriptor>) {
        let name = name.into();
        match self.libraries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => existing.extend(plugins),
            None => self.libraries.push((name, plugins)),
        }
    }

    /// Returns the number of libraries held.
    #[must_use]
    pub fn library_count(&self) -> usize {
        self.libraries.len()
    }

    /// Returns the number of plugins held across all libraries.
    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.libraries.iter().map(|(_, plugins)| plugins.len()).sum()
    }
}

impl PluginHost for MemoryHost {
    fn list_plugins(&self) -> Vec<String> {
        self.libraries
            .iter()
            .flat_map(|(library, plugins)| {
                plugins
                    .iter()
                    .map(move |plugin| plugin_key(library, &plugin.identifier))
            })
            .collect()
    }

    fn load_plugin(
        &self,
        key: &str,
        input_sample_rate: f32,
    ) -> Result<PluginDescriptor, LoadError> {
        let (library, identifier) = key.split_once(':').ok_or_else(|| LoadError::MalformedKey {
            key: key.to_owned(),
        })?;

        if input_sample_rate.is_nan() || input_sample_rate <= 0.0 {
            return Err(LoadError::Rejected {
                key: key.to_owned(),
                reason: format!("input sample rate {input_sample_rate} is not positive"),
            });
        }

        self.libraries
            .iter()
            .filter(|(name, _)| name == library)
            .flat_map(|(_, plugins)| plugins.iter())
            .find(|plugin| plugin.identifier == identifier)
            .cloned()
            .ok_or_else(|| LoadError::NotFound {
                key: key.to_owned(),
            })
    }
}

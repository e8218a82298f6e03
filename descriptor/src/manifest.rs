//! A host backed by JSON library manifests.
//!
//! Each `*.json` file found directly inside a search directory describes one
//! plugin library:
//!
//! ```json
//! {
//!   "library": "vamp-example-plugins",
//!   "plugins": [
//!     { "identifier": "zerocrossing", "name": "Zero Crossings", "outputs": [] }
//!   ]
//! }
//! ```
//!
//! When `library` is omitted the file stem is used. Any other top-level key
//! makes the file a non-manifest. Manifests that cannot be read or parsed
//! are skipped with a warning, the same way a Vamp host skips
//! libraries it cannot open; their plugins later fail to load as not found.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::host::{LoadError, MemoryHost, PluginHost};
use crate::model::PluginDescriptor;

/// Contents of one library manifest file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryManifest {
    /// Library name. Defaults to the manifest's file stem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
    /// The library's plugins, in enumeration order.
    #[serde(default)]
    pub plugins: Vec<PluginDescriptor>,
}

impl LibraryManifest {
    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// manifest.
    pub fn read(path: &Path) -> Result<Self, ManifestError> {
        let text = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Failure to read a single manifest file.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Manifest path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid manifest.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Manifest path.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// A [`PluginHost`] populated from manifest files in a set of directories.
#[derive(Debug, Clone, Default)]
pub struct ManifestHost {
    inner: MemoryHost,
    skipped: Vec<PathBuf>,
}

impl ManifestHost {
    /// Scans each directory (non-recursively, in file-name order) for
    /// `*.json` manifests. Directories are visited in the order given.
    #[must_use]
    pub fn scan<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut host = Self::default();
        for dir in dirs {
            host.scan_dir(dir.as_ref());
        }
        debug!(
            libraries = host.inner.library_count(),
            plugins = host.inner.plugin_count(),
            skipped = host.skipped.len(),
            "plugin manifest scan complete"
        );
        host
    }

    fn scan_dir(&mut self, dir: &Path) {
        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    warn!(dir = %dir.display(), %error, "cannot list plugin directory");
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some("json")
            {
                continue;
            }
            match LibraryManifest::read(path) {
                Ok(manifest) => self.add_manifest(path, manifest),
                Err(error) => {
                    warn!(%error, "skipping plugin manifest");
                    self.skipped.push(path.to_path_buf());
                }
            }
        }
    }

    fn add_manifest(&mut self, path: &Path, manifest: LibraryManifest) {
        let library = manifest.library.or_else(|| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_owned)
        });
        match library {
            Some(library) if !library.is_empty() && !library.contains(':') => {
                debug!(%library, plugins = manifest.plugins.len(), path = %path.display(), "loaded plugin manifest");
                self.inner.add_library(library, manifest.plugins);
            }
            _ => {
                warn!(path = %path.display(), "skipping plugin manifest without a usable library name");
                self.skipped.push(path.to_path_buf());
            }
        }
    }

    /// Returns the manifest files that were skipped during the scan.
    #[must_use]
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }
}

impl PluginHost for ManifestHost {
    fn list_plugins(&self) -> Vec<String> {
        self.inner.list_plugins()
    }

    fn load_plugin(
        &self,
        key: &str,
        input_sample_rate: f32,
    ) -> Result<PluginDescriptor, LoadError> {
        self.inner.load_plugin(key, input_sample_rate)
    }
}

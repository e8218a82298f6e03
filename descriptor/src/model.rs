//! Core descriptor model types.
//!
//! These types are read-only snapshots of what a Vamp plugin host reports
//! about a loaded plugin: its identity, its parameters, and its outputs.
//! Nothing in this workspace mutates them once a host has produced them.

use serde::{Deserialize, Serialize};

/// The domain a plugin expects its input blocks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputDomain {
    /// Raw time-domain audio samples.
    #[default]
    TimeDomain,
    /// Frequency-domain blocks (the host performs the FFT).
    FrequencyDomain,
}

impl InputDomain {
    /// Returns the local name of the matching `vamp:` individual.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            InputDomain::TimeDomain => "TimeDomain",
            InputDomain::FrequencyDomain => "FrequencyDomain",
        }
    }
}

/// Timing category of an output's features.
///
/// Hosts report this as the integer `VampSampleType` from the plugin ABI,
/// which can carry values outside the three defined categories. Those are
/// kept as [`SampleType::Unrecognized`] rather than being mapped onto a
/// known category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SampleTypeRepr", into = "SampleTypeRepr")]
pub enum SampleType {
    /// One feature per process block (ABI code 0).
    OneSamplePerStep,
    /// Features at a fixed rate given by the output's sample rate (ABI code 1).
    FixedSampleRate,
    /// Features carry their own timestamps (ABI code 2).
    VariableSampleRate,
    /// A code the host reported that is none of the above.
    Unrecognized(i32),
}

impl SampleType {
    /// Maps a raw ABI code onto a category.
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => SampleType::OneSamplePerStep,
            1 => SampleType::FixedSampleRate,
            2 => SampleType::VariableSampleRate,
            other => SampleType::Unrecognized(other),
        }
    }

    /// Returns the raw ABI code for this category.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            SampleType::OneSamplePerStep => 0,
            SampleType::FixedSampleRate => 1,
            SampleType::VariableSampleRate => 2,
            SampleType::Unrecognized(code) => code,
        }
    }

    /// Returns the local name of the matching `vamp:` individual, or `None`
    /// for an unrecognized code.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        match self {
            SampleType::OneSamplePerStep => Some("OneSamplePerStep"),
            SampleType::FixedSampleRate => Some("FixedSampleRate"),
            SampleType::VariableSampleRate => Some("VariableSampleRate"),
            SampleType::Unrecognized(_) => None,
        }
    }
}

/// Serialized form of [`SampleType`]: a variant name or a numeric ABI code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum SampleTypeRepr {
    Code(i32),
    Name(String),
}

impl TryFrom<SampleTypeRepr> for SampleType {
    type Error = String;

    fn try_from(repr: SampleTypeRepr) -> Result<Self, Self::Error> {
        match repr {
            SampleTypeRepr::Code(code) => Ok(SampleType::from_code(code)),
            SampleTypeRepr::Name(name) => match name.as_str() {
                "OneSamplePerStep" => Ok(SampleType::OneSamplePerStep),
                "FixedSampleRate" => Ok(SampleType::FixedSampleRate),
                "VariableSampleRate" => Ok(SampleType::VariableSampleRate),
                _ => Err(format!("unknown sample type \"{name}\"")),
            },
        }
    }
}

impl From<SampleType> for SampleTypeRepr {
    fn from(sample_type: SampleType) -> Self {
        match sample_type.name() {
            Some(name) => SampleTypeRepr::Name(name.to_owned()),
            None => SampleTypeRepr::Code(sample_type.code()),
        }
    }
}

/// A user-adjustable plugin parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Machine-readable identifier, unique within the plugin.
    pub identifier: String,
    /// Human-readable name.
    pub name: String,
    /// Unit of the parameter value (may be empty).
    #[serde(default)]
    pub unit: String,
    /// Minimum value.
    pub min_value: f32,
    /// Maximum value.
    pub max_value: f32,
    /// Default value.
    pub default_value: f32,
}

/// Bin layout of an output whose bin count is fixed in advance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedBins {
    /// Number of values per feature.
    pub count: usize,
    /// Optional labels for the bins, in bin order. May be shorter than
    /// `count`.
    #[serde(default)]
    pub names: Vec<String>,
}

/// One of a plugin's outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDescriptor {
    /// Machine-readable identifier, unique within the plugin.
    pub identifier: String,
    /// Human-readable name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Unit of the output values (may be empty).
    #[serde(default)]
    pub unit: String,
    /// Present when the output has a fixed bin count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bins: Option<FixedBins>,
    /// Present when the output values are quantized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantize_step: Option<f32>,
    /// Timing category of the output's features.
    pub sample_type: SampleType,
    /// Feature rate in Hz for fixed and variable rate outputs. Zero means the
    /// host's own rate.
    #[serde(default)]
    pub sample_rate: f32,
}

impl OutputDescriptor {
    /// Returns true if the bin count is known before the plugin runs.
    #[must_use]
    pub fn has_fixed_bin_count(&self) -> bool {
        self.bins.is_some()
    }

    /// Returns true if the output values are quantized.
    #[must_use]
    pub fn is_quantized(&self) -> bool {
        self.quantize_step.is_some()
    }
}

/// Static description of a loaded plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// Machine-readable identifier, unique within its library.
    pub identifier: String,
    /// Human-readable name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Name of the plugin's author or vendor.
    #[serde(default)]
    pub maker: String,
    /// Version of the plugin itself.
    #[serde(default)]
    pub plugin_version: i32,
    /// Version of the Vamp API the plugin was built against.
    #[serde(default = "default_api_version")]
    pub api_version: u32,
    /// Domain the plugin expects its input in.
    #[serde(default)]
    pub input_domain: InputDomain,
    /// Parameters, in the order the plugin reports them.
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    /// Outputs, in the order the plugin reports them.
    #[serde(default)]
    pub outputs: Vec<OutputDescriptor>,
}

fn default_api_version() -> u32 {
    2
}

/// Returns the library part of a plugin key: everything before the first
/// `:`, or the whole key when it has none.
#[must_use]
pub fn library_of(key: &str) -> &str {
    key.split_once(':').map_or(key, |(library, _)| library)
}

/// Builds the `library:plugin` key a host uses to address a plugin.
#[must_use]
pub fn plugin_key(library: &str, identifier: &str) -> String {
    format!("{library}:{identifier}")
}

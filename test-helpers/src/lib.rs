//! Builders and fixtures for constructing descriptors in tests.
//!
//! Every builder starts from sensible defaults so a test only spells out the
//! fields it is about.

#![deny(missing_docs)]

use vamp_descriptor::{
    FixedBins, InputDomain, OutputDescriptor, ParameterDescriptor, PluginDescriptor, SampleType,
};

/// Builds a [`PluginDescriptor`].
#[derive(Debug, Clone)]
pub struct PluginBuilder {
    plugin: PluginDescriptor,
}

impl PluginBuilder {
    /// Starts a time-domain, API version 2 plugin with the given identifier.
    /// The name is the identifier.
    pub fn new(identifier: &str) -> Self {
        Self {
            plugin: PluginDescriptor {
                identifier: identifier.to_owned(),
                name: identifier.to_owned(),
                description: String::new(),
                maker: String::new(),
                plugin_version: 1,
                api_version: 2,
                input_domain: InputDomain::TimeDomain,
                parameters: Vec::new(),
                outputs: Vec::new(),
            },
        }
    }

    /// Sets the display name.
    pub fn name(mut self, name: &str) -> Self {
        self.plugin.name = name.to_owned();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: &str) -> Self {
        self.plugin.description = description.to_owned();
        self
    }

    /// Sets the maker.
    pub fn maker(mut self, maker: &str) -> Self {
        self.plugin.maker = maker.to_owned();
        self
    }

    /// Sets the plugin version.
    pub fn version(mut self, version: i32) -> Self {
        self.plugin.plugin_version = version;
        self
    }

    /// Sets the API version.
    pub fn api_version(mut self, api_version: u32) -> Self {
        self.plugin.api_version = api_version;
        self
    }

    /// Switches the plugin to frequency-domain input.
    pub fn frequency_domain(mut self) -> Self {
        self.plugin.input_domain = InputDomain::FrequencyDomain;
        self
    }

    /// Appends a parameter.
    pub fn parameter(mut self, parameter: ParameterBuilder) -> Self {
        self.plugin.parameters.push(parameter.build());
        self
    }

    /// Appends an output.
    pub fn output(mut self, output: OutputBuilder) -> Self {
        self.plugin.outputs.push(output.build());
        self
    }

    /// Finishes the descriptor.
    pub fn build(self) -> PluginDescriptor {
        self.plugin
    }
}

/// Builds a [`ParameterDescriptor`].
#[derive(Debug, Clone)]
pub struct ParameterBuilder {
    parameter: ParameterDescriptor,
}

impl ParameterBuilder {
    /// Starts a unitless `0..1` parameter defaulting to 0.
    pub fn new(identifier: &str) -> Self {
        Self {
            parameter: ParameterDescriptor {
                identifier: identifier.to_owned(),
                name: identifier.to_owned(),
                unit: String::new(),
                min_value: 0.0,
                max_value: 1.0,
                default_value: 0.0,
            },
        }
    }

    /// Sets the display name.
    pub fn name(mut self, name: &str) -> Self {
        self.parameter.name = name.to_owned();
        self
    }

    /// Sets the unit.
    pub fn unit(mut self, unit: &str) -> Self {
        self.parameter.unit = unit.to_owned();
        self
    }

    /// Sets minimum, maximum and default values.
    pub fn range(mut self, min: f32, max: f32, default: f32) -> Self {
        self.parameter.min_value = min;
        self.parameter.max_value = max;
        self.parameter.default_value = default;
        self
    }

    /// Finishes the descriptor.
    pub fn build(self) -> ParameterDescriptor {
        self.parameter
    }
}

/// Builds an [`OutputDescriptor`].
#[derive(Debug, Clone)]
pub struct OutputBuilder {
    output: OutputDescriptor,
}

impl OutputBuilder {
    /// Starts an unquantized one-sample-per-step output with a variable bin
    /// count.
    pub fn new(identifier: &str) -> Self {
        Self {
            output: OutputDescriptor {
                identifier: identifier.to_owned(),
                name: identifier.to_owned(),
                description: String::new(),
                unit: String::new(),
                bins: None,
                quantize_step: None,
                sample_type: SampleType::OneSamplePerStep,
                sample_rate: 0.0,
            },
        }
    }

    /// Sets the display name.
    pub fn name(mut self, name: &str) -> Self {
        self.output.name = name.to_owned();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: &str) -> Self {
        self.output.description = description.to_owned();
        self
    }

    /// Sets the unit.
    pub fn unit(mut self, unit: &str) -> Self {
        self.output.unit = unit.to_owned();
        self
    }

    /// Gives the output a fixed bin count with the given bin names.
    pub fn bins(mut self, count: usize, names: &[&str]) -> Self {
        self.output.bins = Some(FixedBins {
            count,
            names: names.iter().map(|name| (*name).to_owned()).collect(),
        });
        self
    }

    /// Quantizes the output values.
    pub fn quantize(mut self, step: f32) -> Self {
        self.output.quantize_step = Some(step);
        self
    }

    /// Sets the sample type.
    pub fn sample_type(mut self, sample_type: SampleType) -> Self {
        self.output.sample_type = sample_type;
        self
    }

    /// Sets the output sample rate.
    pub fn sample_rate(mut self, rate: f32) -> Self {
        self.output.sample_rate = rate;
        self
    }

    /// Finishes the descriptor.
    pub fn build(self) -> OutputDescriptor {
        self.output
    }
}

/// A pitch tracker with one `threshold` parameter (0..1, default 0.3) and
/// one dense, unquantized, single-bin `pitchvalue` output in Hz.
pub fn pitch_plugin() -> PluginDescriptor {
    PluginBuilder::new("pitch")
        .name("Pitch Tracker")
        .description("Estimates the fundamental frequency")
        .maker("Example Maker")
        .version(3)
        .parameter(
            ParameterBuilder::new("threshold")
                .name("Threshold")
                .range(0.0, 1.0, 0.3),
        )
        .output(
            OutputBuilder::new("pitchvalue")
                .name("Pitch")
                .description("Estimated pitch")
                .unit("Hz")
                .bins(1, &["Hz"]),
        )
        .build()
}

/// An onset detector with a sparse, variable-rate, binless output.
pub fn onset_plugin() -> PluginDescriptor {
    PluginBuilder::new("onsets")
        .name("Onset Detector")
        .maker("Example Maker")
        .frequency_domain()
        .output(
            OutputBuilder::new("onset")
                .name("Onset")
                .sample_type(SampleType::VariableSampleRate),
        )
        .build()
}

//! Output-shape classification.
//!
//! Every output maps to exactly one RDF shape. Variable-rate outputs are
//! `vamp:SparseOutput`; everything else is `vamp:DenseOutput`, whose
//! sample-type annotation depends on quantization and category:
//!
//! | Category | Quantized | Shape |
//! |----------|-----------|-------|
//! | VariableSampleRate | any | Sparse, `sample_rate` only if > 0 |
//! | any other | yes | Dense, no `sample_type` |
//! | FixedSampleRate | no | Dense, `sample_type` + `sample_rate` |
//! | OneSamplePerStep | no | Dense, `sample_type` |
//! | Unrecognized | no | error |

use vamp_descriptor::{OutputDescriptor, PluginDescriptor, SampleType};

use crate::error::GenerateError;

/// RDF shape selected for one output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputShape {
    /// `vamp:SparseOutput`: features carry their own timestamps.
    Sparse {
        /// Rate to state in `vamp:sample_rate`, if positive.
        sample_rate: Option<f32>,
    },
    /// `vamp:DenseOutput`: features arrive at a regular cadence.
    Dense(DenseTail),
}

/// Sample-type annotation closing a dense output block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DenseTail {
    /// Quantized outputs state no sample type.
    Quantized,
    /// `vamp:FixedSampleRate` with a mandatory rate.
    FixedSampleRate {
        /// Rate to state in `vamp:sample_rate`, even when zero.
        sample_rate: f32,
    },
    /// `vamp:OneSamplePerStep`.
    OneSamplePerStep,
}

impl OutputShape {
    /// Returns the local name of the `vamp:` class for this shape.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            OutputShape::Sparse { .. } => "SparseOutput",
            OutputShape::Dense(_) => "DenseOutput",
        }
    }
}

/// Selects the shape for `output` of `plugin`.
///
/// # Errors
///
/// Returns [`GenerateError::UnknownSampleType`] for an unquantized output
/// whose sample type is [`SampleType::Unrecognized`].
pub fn classify(
    plugin: &PluginDescriptor,
    output: &OutputDescriptor,
) -> Result<OutputShape, GenerateError> {
    let tail = match output.sample_type {
        SampleType::VariableSampleRate => {
            let sample_rate = (output.sample_rate > 0.0).then_some(output.sample_rate);
            return Ok(OutputShape::Sparse { sample_rate });
        }
        _ if output.is_quantized() => DenseTail::Quantized,
        SampleType::FixedSampleRate => DenseTail::FixedSampleRate {
            sample_rate: output.sample_rate,
        },
        SampleType::OneSamplePerStep => DenseTail::OneSamplePerStep,
        SampleType::Unrecognized(code) => {
            return Err(GenerateError::UnknownSampleType {
                plugin: plugin.identifier.clone(),
                output: output.identifier.clone(),
                code,
            })
        }
    };
    Ok(OutputShape::Dense(tail))
}

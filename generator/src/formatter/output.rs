//! Output blocks.

use std::fmt::Write as _;

use vamp_descriptor::{OutputDescriptor, PluginDescriptor};

use crate::classify::{classify, DenseTail, OutputShape};
use crate::error::GenerateError;
use crate::literal::{flag, number, turtle_string};

/// Renders one output resource in the shape chosen by [`classify`].
///
/// Feature and event type URIs cannot be known without running the plugin,
/// so both are emitted as `FIXME` markers.
///
/// # Errors
///
/// Returns [`GenerateError::UnknownSampleType`] if the output cannot be
/// classified.
pub fn format_output(
    plugin: &PluginDescriptor,
    output: &OutputDescriptor,
) -> Result<String, GenerateError> {
    let shape = classify(plugin, output)?;
    let mut out = String::with_capacity(1024);

    let _ = write!(
        out,
        "plugbase:{}_output_{} a  vamp:{} ;\n    \
         vamp:identifier       {} ;\n    \
         dc:title              {} ;\n    \
         dc:description        {}  ;\n    \
         vamp:fixed_bin_count  {} ;\n    \
         vamp:is_quantized     {}  ;\n    \
         vamp:unit             {} ;\n",
        plugin.identifier,
        output.identifier,
        shape.class_name(),
        turtle_string(&output.identifier),
        turtle_string(&output.name),
        turtle_string(&output.description),
        flag(output.has_fixed_bin_count()),
        flag(output.is_quantized()),
        turtle_string(&output.unit),
    );

    if let Some(bins) = &output.bins {
        let _ = writeln!(out, "    vamp:bin_count        {} ;", bins.count);
        out.push_str("    vamp:bin_names        (");
        for name in &bins.names {
            out.push(' ');
            out.push_str(&turtle_string(name));
        }
        out.push_str(");\n");
    }

    if let Some(step) = output.quantize_step {
        let _ = writeln!(out, "    vamp:quantize_step    {}  ;", number(step));
    }

    match shape {
        OutputShape::Sparse { sample_rate } => {
            sample_type(&mut out, "VariableSampleRate");
            if let Some(rate) = sample_rate {
                sample_rate_line(&mut out, rate);
            }
        }
        OutputShape::Dense(DenseTail::Quantized) => {}
        OutputShape::Dense(DenseTail::FixedSampleRate { sample_rate }) => {
            sample_type(&mut out, "FixedSampleRate");
            sample_rate_line(&mut out, sample_rate);
        }
        OutputShape::Dense(DenseTail::OneSamplePerStep) => {
            sample_type(&mut out, "OneSamplePerStep");
        }
    }

    out.push_str("    vamp:computes_feature_type  <FIXME feature type URI> ;\n");
    out.push_str("    vamp:computes_event_type    <FIXME event type URI> ;\n");
    out.push_str("    .\n");
    Ok(out)
}

fn sample_type(out: &mut String, name: &str) {
    let _ = writeln!(out, "    vamp:sample_type      vamp:{name} ;");
}

fn sample_rate_line(out: &mut String, rate: f32) {
    let _ = writeln!(out, "    vamp:sample_rate      {} ;", number(rate));
}

#[cfg(test)]
mod tests {
    use super::*;
    use vamp_descriptor::SampleType;
    use vamp_test_helpers::{pitch_plugin, OutputBuilder, PluginBuilder};

    fn render(output: OutputBuilder) -> String {
        let plugin = PluginBuilder::new("p").build();
        format_output(&plugin, &output.build()).unwrap()
    }

    #[test]
    fn dense_one_sample_per_step_block() {
        let plugin = pitch_plugin();
        let turtle = format_output(&plugin, &plugin.outputs[0]).unwrap();
        assert_eq!(
            turtle,
            "plugbase:pitch_output_pitchvalue a  vamp:DenseOutput ;\n    \
             vamp:identifier       \"pitchvalue\" ;\n    \
             dc:title              \"Pitch\" ;\n    \
             dc:description        \"Estimated pitch\"  ;\n    \
             vamp:fixed_bin_count  \"true\" ;\n    \
             vamp:is_quantized     \"false\"  ;\n    \
             vamp:unit             \"Hz\" ;\n    \
             vamp:bin_count        1 ;\n    \
             vamp:bin_names        ( \"Hz\");\n    \
             vamp:sample_type      vamp:OneSamplePerStep ;\n    \
             vamp:computes_feature_type  <FIXME feature type URI> ;\n    \
             vamp:computes_event_type    <FIXME event type URI> ;\n    \
             .\n"
        );
    }

    #[test]
    fn sparse_block_with_everything() {
        let turtle = render(
            OutputBuilder::new("notes")
                .name("Notes")
                .unit("MIDI")
                .bins(2, &["pitch", "velocity"])
                .quantize(1.0)
                .sample_type(SampleType::VariableSampleRate)
                .sample_rate(44100.0),
        );
        assert_eq!(
            turtle,
            "plugbase:p_output_notes a  vamp:SparseOutput ;\n    \
             vamp:identifier       \"notes\" ;\n    \
             dc:title              \"Notes\" ;\n    \
             dc:description        \"\"  ;\n    \
             vamp:fixed_bin_count  \"true\" ;\n    \
             vamp:is_quantized     \"true\"  ;\n    \
             vamp:unit             \"MIDI\" ;\n    \
             vamp:bin_count        2 ;\n    \
             vamp:bin_names        ( \"pitch\" \"velocity\");\n    \
             vamp:quantize_step    1  ;\n    \
             vamp:sample_type      vamp:VariableSampleRate ;\n    \
             vamp:sample_rate      44100 ;\n    \
             vamp:computes_feature_type  <FIXME feature type URI> ;\n    \
             vamp:computes_event_type    <FIXME event type URI> ;\n    \
             .\n"
        );
    }

    #[test]
    fn sparse_zero_rate_is_omitted() {
        let turtle = render(OutputBuilder::new("o").sample_type(SampleType::VariableSampleRate));
        assert!(turtle.contains("vamp:sample_type      vamp:VariableSampleRate ;\n"));
        assert!(!turtle.contains("vamp:sample_rate"));
    }

    #[test]
    fn binless_outputs_have_no_bin_triples() {
        let turtle = render(OutputBuilder::new("o"));
        assert!(turtle.contains("vamp:fixed_bin_count  \"false\" ;\n"));
        assert!(!turtle.contains("vamp:bin_count"));
        assert!(!turtle.contains("vamp:bin_names"));
    }

    #[test]
    fn fixed_bins_without_names_render_an_empty_list() {
        let turtle = render(OutputBuilder::new("o").bins(3, &[]));
        assert!(turtle.contains("    vamp:bin_count        3 ;\n    vamp:bin_names        ();\n"));
    }

    #[test]
    fn dense_fixed_rate_states_rate_even_when_zero() {
        let turtle = render(OutputBuilder::new("o").sample_type(SampleType::FixedSampleRate));
        assert!(turtle.contains("vamp:sample_type      vamp:FixedSampleRate ;\n"));
        assert!(turtle.contains("vamp:sample_rate      0 ;\n"));

        let turtle = render(
            OutputBuilder::new("o")
                .sample_type(SampleType::FixedSampleRate)
                .sample_rate(86.5),
        );
        assert!(turtle.contains("vamp:sample_rate      86.5 ;\n"));
    }

    #[test]
    fn dense_quantized_suppresses_sample_type() {
        let turtle = render(
            OutputBuilder::new("o")
                .sample_type(SampleType::FixedSampleRate)
                .sample_rate(10.0)
                .quantize(0.25),
        );
        assert!(turtle.contains("vamp:quantize_step    0.25  ;\n"));
        assert!(!turtle.contains("sample_type"));
        assert!(!turtle.contains("sample_rate"));
        assert!(turtle.ends_with("<FIXME event type URI> ;\n    .\n"));
    }

    #[test]
    fn unrecognized_sample_type_fails() {
        let plugin = PluginBuilder::new("p")
            .output(OutputBuilder::new("bad").sample_type(SampleType::Unrecognized(12)))
            .build();
        let error = format_output(&plugin, &plugin.outputs[0]).unwrap_err();
        assert_eq!(
            error,
            GenerateError::UnknownSampleType {
                plugin: "p".into(),
                output: "bad".into(),
                code: 12,
            }
        );
    }
}

//! Plugin and parameter blocks.

use std::fmt::Write as _;

use vamp_descriptor::{ParameterDescriptor, PluginDescriptor};

use crate::literal::{number, turtle_string};

/// Renders a plugin resource, followed by links to each of its parameter
/// and output resources in descriptor order.
///
/// License and author URI are left as `FIXME` markers for hand editing.
#[must_use]
pub fn format_plugin(plugin: &PluginDescriptor) -> String {
    let id = &plugin.identifier;
    let name = turtle_string(&plugin.name);
    let mut out = String::with_capacity(1024);

    let _ = write!(
        out,
        "plugbase:{id} a   vamp:Plugin ;\n    \
         dc:title              {name} ;\n    \
         vamp:name             {name} ;\n    \
         dc:description        {} ;\n    \
         foaf:maker            [ foaf:name {}] ; # FIXME could give plugin author's URI here\n    \
         cc:license            <FIXME license for the plugin> ; \n    \
         vamp:identifier       {} ;\n    \
         vamp:vamp_API_version vamp:api_version_{} ;\n    \
         owl:versionInfo       \"{}\" ;\n    \
         vamp:input_domain     vamp:{} ;\n\n",
        turtle_string(&plugin.description),
        turtle_string(&plugin.maker),
        turtle_string(id),
        plugin.api_version,
        plugin.plugin_version,
        plugin.input_domain.as_str(),
    );

    for param in &plugin.parameters {
        let _ = writeln!(
            out,
            "    vamp:parameter_descriptor   {} ;",
            parameter_subject(plugin, param)
        );
    }
    out.push('\n');

    for output in &plugin.outputs {
        let _ = writeln!(
            out,
            "    vamp:output_descriptor      plugbase:{id}_output_{} ;",
            output.identifier
        );
    }
    out.push_str("    .\n");
    out
}

/// Renders one parameter resource with its range and default.
#[must_use]
pub fn format_parameter(plugin: &PluginDescriptor, param: &ParameterDescriptor) -> String {
    format!(
        "{} a  vamp:ParameterDescriptor ;\n    \
         vamp:identifier     {} ;\n    \
         dc:title            {} ;\n    \
         dc:format           {} ;\n    \
         vamp:min_value       {} ;\n    \
         vamp:max_value       {} ;\n    \
         vamp:default_value   {} .\n\n",
        parameter_subject(plugin, param),
        turtle_string(&param.identifier),
        turtle_string(&param.name),
        turtle_string(&param.unit),
        number(param.min_value),
        number(param.max_value),
        number(param.default_value),
    )
}

fn parameter_subject(plugin: &PluginDescriptor, param: &ParameterDescriptor) -> String {
    format!("plugbase:{}_param_{}", plugin.identifier, param.identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vamp_test_helpers::{pitch_plugin, OutputBuilder, PluginBuilder};

    #[test]
    fn plugin_block() {
        let turtle = format_plugin(&pitch_plugin());
        assert_eq!(
            turtle,
            "plugbase:pitch a   vamp:Plugin ;\n    \
             dc:title              \"Pitch Tracker\" ;\n    \
             vamp:name             \"Pitch Tracker\" ;\n    \
             dc:description        \"Estimates the fundamental frequency\" ;\n    \
             foaf:maker            [ foaf:name \"Example Maker\"] ; # FIXME could give plugin author's URI here\n    \
             cc:license            <FIXME license for the plugin> ; \n    \
             vamp:identifier       \"pitch\" ;\n    \
             vamp:vamp_API_version vamp:api_version_2 ;\n    \
             owl:versionInfo       \"3\" ;\n    \
             vamp:input_domain     vamp:TimeDomain ;\n\n    \
             vamp:parameter_descriptor   plugbase:pitch_param_threshold ;\n\n    \
             vamp:output_descriptor      plugbase:pitch_output_pitchvalue ;\n    \
             .\n"
        );
    }

    #[test]
    fn frequency_domain_and_ordering() {
        let plugin = PluginBuilder::new("order")
            .frequency_domain()
            .output(OutputBuilder::new("b"))
            .output(OutputBuilder::new("a"))
            .build();
        let turtle = format_plugin(&plugin);
        assert!(turtle.contains("    vamp:input_domain     vamp:FrequencyDomain ;\n"));
        let b = turtle.find("plugbase:order_output_b").unwrap();
        let a = turtle.find("plugbase:order_output_a").unwrap();
        assert!(b < a, "outputs must keep descriptor order");
        assert!(!turtle.contains("parameter_descriptor"));
    }

    #[test]
    fn api_version_names_the_individual() {
        let plugin = PluginBuilder::new("legacy").api_version(1).build();
        let turtle = format_plugin(&plugin);
        assert!(
            turtle.contains("    vamp:vamp_API_version vamp:api_version_1 ;\n"),
            "{turtle}"
        );
        assert!(!turtle.contains("api_version_2"));
    }

    #[test]
    fn parameter_block() {
        let plugin = pitch_plugin();
        let turtle = format_parameter(&plugin, &plugin.parameters[0]);
        assert_eq!(
            turtle,
            "plugbase:pitch_param_threshold a  vamp:ParameterDescriptor ;\n    \
             vamp:identifier     \"threshold\" ;\n    \
             dc:title            \"Threshold\" ;\n    \
             dc:format           \"\" ;\n    \
             vamp:min_value       0 ;\n    \
             vamp:max_value       1 ;\n    \
             vamp:default_value   0.3 .\n\n"
        );
    }
}

//! Document-level blocks: prefixes, provenance, and the library resource.

use std::fmt::Write as _;

use vamp_descriptor::PluginDescriptor;

use crate::iris;
use crate::literal::turtle_string;

/// Renders the `@prefix` prologue.
///
/// `plugbase:` is bound to `bundle_base_uri + libname + "#"`, and the empty
/// prefix to the document itself.
#[must_use]
pub fn format_namespaces(bundle_base_uri: &str, libname: &str) -> String {
    let plugbase = format!("{bundle_base_uri}{libname}#");
    let prefixes = [
        ("rdfs", iris::RDFS),
        ("xsd", iris::XSD),
        ("vamp", iris::VAMP),
        ("plugbase", plugbase.as_str()),
        ("owl", iris::OWL),
        ("dc", iris::DC),
        ("af", iris::AF),
        ("foaf", iris::FOAF),
        ("cc", iris::CC),
        ("", ""),
    ];

    let mut out = String::with_capacity(512);
    for (prefix, iri) in prefixes {
        let _ = writeln!(out, "@prefix {:<10}<{iri}> .", format!("{prefix}:"));
    }
    out.push('\n');
    out
}

/// Renders the block describing this document: who made it and what it is
/// about.
#[must_use]
pub fn format_provenance(describer_uri: &str, bundle_base_uri: &str, libname: &str) -> String {
    format!(
        "<>  a   vamp:PluginDescription ;\n    \
         foaf:maker          <{describer_uri}> ;\n    \
         foaf:maker          <{}> ;\n    \
         foaf:primaryTopic   <{bundle_base_uri}{libname}> .\n\n",
        iris::PROGRAM
    )
}

/// Renders the library resource with one `vamp:available_plugin` per
/// plugin, in the order given.
#[must_use]
pub fn format_library(libname: &str, plugins: &[PluginDescriptor]) -> String {
    let mut out = format!(
        ":{libname} a  vamp:PluginLibrary ;\n    vamp:identifier {} ",
        turtle_string(libname)
    );
    for plugin in plugins {
        let _ = write!(
            out,
            "; \n    vamp:available_plugin plugbase:{}",
            plugin.identifier
        );
    }
    out.push_str(" .\n\n");
    out
}

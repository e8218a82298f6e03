//! Block formatters.
//!
//! Each function renders one descriptor entity into one block of Turtle
//! text. Subjects follow a fixed scheme that downstream tools parse:
//!
//! | Entity | Subject |
//! |--------|---------|
//! | Library | `:<libname>` |
//! | Plugin | `plugbase:<plugin>` |
//! | Parameter | `plugbase:<plugin>_param_<parameter>` |
//! | Output | `plugbase:<plugin>_output_<output>` |

pub mod document;
pub mod output;
pub mod plugin;

pub use document::{format_library, format_namespaces, format_provenance};
pub use output::format_output;
pub use plugin::{format_parameter, format_plugin};

//! `template-generator` — Writes a Turtle RDF template describing a Vamp
//! plugin library.
//!
//! Plugins are looked up in JSON library manifests found on the plugin path
//! (`--plugin-path`, or `VAMP_PATH`). The document goes to standard output
//! in one piece, and only once every plugin has loaded and rendered.
//!
//! **Usage:**
//! ```text
//! template-generator -i vamp:soname[:plugin] [vamp:soname[:plugin] ...]
//! template-generator PLUGIN_BASE_URI YOUR_URI vamp:soname[:plugin] [vamp:soname[:plugin] ...]
//! ```
//!
//! Exits 2 on usage errors and 1 on any load or generation failure.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::ffi::OsString;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vamp_descriptor::ManifestHost;
use vamp_rdf_template::{generate, DriverError};

const USAGE: &str = "\
usage: template-generator -i vamp:soname[:plugin] [vamp:soname[:plugin] ...]
usage: template-generator PLUGIN_BASE_URI YOUR_URI vamp:soname[:plugin] [vamp:soname[:plugin] ...]";

/// Generate an RDF template for a Vamp plugin library.
#[derive(Parser)]
#[command(
    name = "template-generator",
    version,
    about = "Generate a Turtle RDF template describing a Vamp plugin library",
    after_help = USAGE
)]
struct Args {
    /// Prompt for the plugin bundle base URI and your URI on the terminal.
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Directories holding plugin library manifests.
    #[arg(long, env = "VAMP_PATH", value_name = "DIRS")]
    plugin_path: Option<OsString>,

    /// Write the document to a file instead of standard output.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Log more (-v for progress, -vv for every plugin loaded).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// PLUGIN_BASE_URI YOUR_URI KEY..., or only KEY... with -i.
    #[arg(value_name = "ARGS", required = true)]
    args: Vec<String>,
}

/// Bundle base URI, describer URI and plugin keys for one run.
struct Invocation {
    bundle_base_uri: String,
    describer_uri: String,
    keys: Vec<String>,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if !args.interactive && args.args.len() < 3 {
        Args::command()
            .error(
                ErrorKind::TooFewValues,
                format!(
                    "expected PLUGIN_BASE_URI YOUR_URI and at least one plugin key\n\n{USAGE}"
                ),
            )
            .exit();
    }

    if let Err(error) = run(args) {
        eprintln!("ERROR: {error:#}");
        process::exit(exit_code(&error));
    }
}

fn run(args: Args) -> Result<()> {
    let invocation = if args.interactive {
        let mut stdin = io::stdin().lock();
        Invocation {
            bundle_base_uri: prompt(&mut stdin, "Please enter the base URI for the plugin bundle : ")?,
            describer_uri: prompt(&mut stdin, "Please enter your URI : ")?,
            keys: args.args,
        }
    } else {
        let mut positional = args.args.into_iter();
        Invocation {
            bundle_base_uri: positional.next().unwrap_or_default(),
            describer_uri: positional.next().unwrap_or_default(),
            keys: positional.collect(),
        }
    };

    let search_path: Vec<PathBuf> = match &args.plugin_path {
        Some(value) => std::env::split_paths(value).collect(),
        None => vec![PathBuf::from(".")],
    };
    debug!(?search_path, "scanning for plugin manifests");
    let host = ManifestHost::scan(&search_path);

    let document = generate(
        &host,
        &invocation.bundle_base_uri,
        &invocation.describer_uri,
        &invocation.keys,
    )?;

    match &args.out {
        Some(path) => fs::write(path, format!("{document}\n"))
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{document}").context("Failed to write to standard output")?;
            stdout.flush().context("Failed to write to standard output")?;
        }
    }
    Ok(())
}

/// Writes `message` to stderr and reads one line from `input`, without its
/// line terminator.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{message}")?;
    stderr.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from standard input")?;
    Ok(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_owned())
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<DriverError>() {
        Some(driver) if driver.is_usage() => 2,
        _ => 1,
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

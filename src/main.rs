//! DFD Illustrator CLI
//!
//! Usage:
//!   dfd-illustrator [OPTIONS] <FILES>...
//!
//! Options:
//!   -o, --output-dir <DIR>   Directory for generated .drawio files [default: .]
//!   -c, --config <FILE>      Render configuration (TOML)
//!       --strict             Reject dangling references and duplicate ids
//!       --stdout             Print documents instead of writing files
//!       --log-level <LEVEL>  off, error, warn, info, debug, trace [default: warn]
//!   -h, --help               Print help

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{debug, info, LevelFilter};

use dfd_illustrator::{load_config, render_with_config, Diagram, RenderConfig};

#[derive(Parser, Debug)]
#[command(name = "dfd-illustrator")]
#[command(about = "Lay out data-flow diagrams and write draw.io documents")]
struct Cli {
    /// Diagram description files (TOML)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory for generated .drawio files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Render configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reject dangling flow endpoints, duplicate ids and duplicate flows
    #[arg(long)]
    strict: bool,

    /// Print documents to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(cli:?; "Parsed arguments");

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => {
            let strict = cli.strict || config.strict;
            config.with_strict(strict)
        }
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let mut failed = false;
    for input in &cli.inputs {
        if let Err(message) = generate(input, &cli, &config) {
            eprintln!("{}", message);
            failed = true;
        }
    }

    if failed {
        process::exit(1);
    }
}

/// Render one description file and write (or print) the document
fn generate(input: &Path, cli: &Cli, config: &RenderConfig) -> Result<(), String> {
    let diagram = Diagram::from_file(input)
        .map_err(|e| format!("Error reading '{}': {}", input.display(), e))?;

    let doc = render_with_config(&diagram, config)
        .map_err(|e| format!("Error rendering '{}': {}", input.display(), e))?;

    if cli.stdout {
        println!("{}", doc);
        return Ok(());
    }

    let output = cli.output_dir.join(output_file_name(input, &diagram));
    fs::write(&output, doc)
        .map_err(|e| format!("Error writing '{}': {}", output.display(), e))?;

    info!(input:? = input, output:? = output; "Generated diagram");
    println!("Generated {}", output.display());
    Ok(())
}

/// The diagram's own `output` name, or the input stem with a `.drawio` extension
fn output_file_name(input: &Path, diagram: &Diagram) -> PathBuf {
    match &diagram.output {
        Some(name) => PathBuf::from(name),
        None => {
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| diagram.name.to_lowercase());
            PathBuf::from(format!("{}.drawio", stem))
        }
    }
}

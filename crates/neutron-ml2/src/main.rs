//! ml2-configgen - ML2 plugin configuration generator
//!
//! Reads ML2 parameter overrides, validates them and writes `ml2_conf.ini`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use neutron_config_common::cli::{write_entries, OutputFormat};
use neutron_config_common::{init_logging, overrides, ConfigGenerator};
use neutron_ml2::{Ml2Plugin, ParameterSet};

#[derive(Parser, Debug)]
#[command(name = "ml2-configgen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML file with parameter overrides (defaults are used when omitted)
    #[arg(short = 'p', long)]
    params: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Write to the standard ml2_conf.ini location
    #[arg(long, conflicts_with = "output")]
    install: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Ini)]
    format: OutputFormat,

    /// Fail when validation produces warnings
    #[arg(long)]
    strict: bool,

    /// Log level
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,

    /// Log as JSON
    #[arg(long)]
    log_json: bool,
}

fn run(args: &Args) -> anyhow::Result<bool> {
    let plugin = Ml2Plugin::new();

    let params: ParameterSet = match &args.params {
        Some(path) => overrides::load_yaml_file(path)
            .with_context(|| format!("loading ML2 parameters from {}", path.display()))?,
        None => ParameterSet::default(),
    };

    let generated = plugin
        .generate(&params)
        .context("ML2 parameters are invalid")?;

    if args.strict && !generated.warnings.is_empty() {
        error!(
            "{} warnings raised in strict mode, nothing written",
            generated.warnings.len()
        );
        return Ok(false);
    }

    let output = if args.install {
        Some(PathBuf::from(plugin.config_path()))
    } else {
        args.output.clone()
    };
    write_entries(&generated.entries, args.format, output.as_deref())
        .context("writing ML2 configuration")?;

    Ok(true)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level, args.log_json);

    info!("--- Starting ml2-configgen ---");

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

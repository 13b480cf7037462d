//! sfc-configgen - networking-sfc configuration generator

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use neutron_config_common::cli::{write_entries, OutputFormat};
use neutron_config_common::{init_logging, overrides, ConfigGenerator};
use neutron_sfc::{SfcParameters, SfcService};

#[derive(Parser, Debug)]
#[command(name = "sfc-configgen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML file with `sfc_driver` / `fc_driver` overrides
    #[arg(short = 'p', long)]
    params: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Write to the standard networking_sfc.conf location
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
    let service = SfcService::new();

    let params: SfcParameters = match &args.params {
        Some(path) => overrides::load_yaml_file(path)
            .with_context(|| format!("loading SFC parameters from {}", path.display()))?,
        None => SfcParameters::default(),
    };

    let generated = service
        .generate(&params)
        .context("SFC parameters are invalid")?;

    if args.strict && !generated.warnings.is_empty() {
        error!(
            "{} warnings raised in strict mode, nothing written",
            generated.warnings.len()
        );
        return Ok(false);
    }

    let output = if args.install {
        Some(PathBuf::from(service.config_path()))
    } else {
        args.output.clone()
    };
    write_entries(&generated.entries, args.format, output.as_deref())
        .context("writing SFC configuration")?;

    Ok(true)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level, args.log_json);

    info!("--- Starting sfc-configgen ---");

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

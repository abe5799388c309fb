//! certinfo - print human-readable details of X.509 certificates

use certinfo::cert_ops::{read_input, CertificateAnalyzer};
use certinfo::cli::{Cli, OutputFormat, SubCommand};
use certinfo::config::Settings;
use certinfo::output;
use certinfo::Result;
use clap::Parser;
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

/// Initialize logging on stderr; `RUST_LOG` wins over `--debug` and config
fn init_logging(cli: &Cli, settings: &Settings) {
    let fallback = if cli.debug {
        "debug"
    } else {
        settings.log.level.as_str()
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::try_new(fallback).unwrap_or_else(|_| EnvFilter::new("warn"))
        }))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    init_logging(&cli, &settings);

    // Handle color preference
    if cli.no_color || !settings.output.color {
        console::set_colors_enabled(false);
    }

    let format = cli.format.unwrap_or(settings.output.format);

    match cli.command {
        SubCommand::Print(args) => {
            let raw = read_input(&args.file)?;
            debug!(bytes = raw.len(), file = %args.file.display(), "Read input");

            let set = CertificateAnalyzer::new().analyze(&raw);
            debug!(
                entries = set.len(),
                certificates = set.certificate_count(),
                "Analysis complete"
            );

            match format {
                OutputFormat::Text => output::print_report_set(&set)?,
                OutputFormat::Json => output::print_json(&set)?,
            }
        }
    }

    Ok(())
}

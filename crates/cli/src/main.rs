use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "report-utilization")]
#[command(about = "Generate XML utilization report from a hierarchical utilization table")]
struct Cli {
    /// Path to the resource file (hierarchical utilization report text)
    #[arg(long = "resource_file")]
    resource_file: PathBuf,
    /// Output XML path; its directory must already exist
    #[arg(long, default_value = vrt_utilization::DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Also write the hierarchy as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
    /// Log every table row and attachment decision
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    let report = vrt_utilization::read_report(&cli.resource_file)
        .with_context(|| format!("report-utilization: loading {:?}", cli.resource_file))?;

    vrt_utilization::write_xml(&report, &cli.output)?;
    info!(path = %cli.output.display(), "xml report written");

    if let Some(json) = &cli.json {
        vrt_utilization::write_json(&report, json)?;
        info!(path = %json.display(), "json report written");
    }

    println!(
        "XML file created successfully: {} ({} instances)",
        cli.output.display(),
        report.instance_count()
    );
    Ok(())
}

use anyhow::Context;
use clap::Parser;
use health_risk::cli::Cli;
use health_risk::report::{ReportRequest, build_report};
use health_risk::utils::logging::init_logging;
use health_risk::{Catalog, EngineConfig};
use log::{debug, info};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Setup logging
    init_logging(&args.log_level);

    let config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    debug!("{config}");

    let custom_catalog = match &args.catalog {
        Some(path) => Some(
            Catalog::from_json_file(path)
                .with_context(|| format!("loading catalog from {}", path.display()))?,
        ),
        None => None,
    };
    let catalog = custom_catalog.as_ref().unwrap_or(Catalog::builtin());

    let contents = std::fs::read_to_string(&args.request)
        .with_context(|| format!("reading {}", args.request.display()))?;
    let request: ReportRequest = serde_json::from_str(&contents)
        .with_context(|| format!("parsing {}", args.request.display()))?;

    info!(
        "Building report from {} records and {} simulated diseases",
        request.history.len(),
        request.answers.len()
    );
    let report = build_report(catalog, &config, &request)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "health-risk")]
#[command(about = "Lifestyle risk report from assessment history and what-if answers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Report request (history and hypothetical answers) as JSON
    pub request: PathBuf,

    /// Engine configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Questionnaire catalog replacing the built-in one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

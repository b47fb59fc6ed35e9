use chrono::NaiveDate;
use clap::Parser;
use device_reports::application::dto::OutputFormat;
use device_reports::config::CliOptions;
use device_reports::reporting::services::SortSpec;

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}': {}. Expected YYYY-MM-DD", s, e))
}

/// Run predefined device reports over an asset inventory
#[derive(Parser, Debug)]
#[command(name = "device-reports")]
#[command(version)]
#[command(about = "Run predefined device reports over an asset inventory", long_about = None)]
pub struct Args {
    /// Path to the device inventory (JSON, or YAML with a .yml/.yaml extension)
    #[arg(short, long, value_name = "PATH")]
    pub inventory: Option<String>,

    /// Report key (see --list-reports); unknown keys fall back to no_ping1
    #[arg(short, long, value_name = "KEY")]
    pub report: Option<String>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Sort column, prefixed with '-' for descending (e.g. -lastseen)
    #[arg(short, long, value_name = "SPEC", allow_hyphen_values = true)]
    pub sort: Option<SortSpec>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Reference date for thresholds, YYYY-MM-DD (defaults to the local date)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Path to a config file (defaults to ./device-reports.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// Print the available reports and exit
    #[arg(long)]
    pub list_reports: bool,
}

impl Args {
    pub fn cli_options(&self) -> CliOptions {
        CliOptions {
            inventory: self.inventory.as_ref().map(Into::into),
            report: self.report.clone(),
            format: self.format,
            sort: self.sort,
            output: self.output.as_ref().map(Into::into),
            today: self.today,
        }
    }
}

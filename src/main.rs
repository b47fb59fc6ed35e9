mod cli;

use clap::Parser;
use cli::Args;
use device_reports::adapters::outbound::clock::{FixedClock, SystemClock};
use device_reports::adapters::outbound::console::StderrProgressReporter;
use device_reports::adapters::outbound::filesystem::FileSystemInventoryReader;
use device_reports::application::dto::ReportRequest;
use device_reports::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use device_reports::application::read_models::ReportReadModelBuilder;
use device_reports::application::use_cases::GenerateReportUseCase;
use device_reports::config::{self, ConfigFile, EffectiveOptions};
use device_reports::ports::outbound::{Clock, ProgressReporter};
use device_reports::reporting::services::ReportCatalog;
use device_reports::shared::error::ExitCode;
use device_reports::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // clap prints help/version with exit 0 and usage errors with exit 2
        Err(e) => e.exit(),
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    if args.list_reports {
        print_report_list();
        return Ok(());
    }

    let progress_reporter = StderrProgressReporter::new();

    let config_file = load_config(args.config.as_deref(), &progress_reporter)?;
    let options = config::merge(args.cli_options(), config_file.as_ref())?;

    match options.today {
        Some(date) => generate(&options, FixedClock::new(date), progress_reporter),
        None => generate(&options, SystemClock::new(), progress_reporter),
    }
}

fn generate<CL: Clock>(
    options: &EffectiveOptions,
    clock: CL,
    progress_reporter: StderrProgressReporter,
) -> Result<()> {
    let use_case = GenerateReportUseCase::new(
        FileSystemInventoryReader::new(),
        progress_reporter,
        clock,
    );

    let request = ReportRequest::new(
        options.inventory.clone(),
        options.report.clone(),
        options.sort,
    );
    let response = use_case.execute(request)?;
    let model = ReportReadModelBuilder::build(&response);

    let reporter = use_case.progress_reporter();
    reporter.report(FormatterFactory::progress_message(options.format));
    let rendered = FormatterFactory::create(options.format).format(&model)?;

    let presenter_type = PresenterType::from_output(options.output.clone());
    PresenterFactory::create(presenter_type.clone()).present(&rendered)?;

    if let PresenterType::File(path) = presenter_type {
        reporter.report_completion(&format!("✅ Output complete: {}", path.display()));
    }

    Ok(())
}

/// Explicit `--config` must exist; otherwise look for the default file in the cwd
fn load_config(
    explicit: Option<&str>,
    reporter: &StderrProgressReporter,
) -> Result<Option<ConfigFile>> {
    let config_file = match explicit {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(Path::new("."))?,
    };

    if let Some(ref config) = config_file {
        for warning in config.unknown_field_warnings() {
            reporter.report_error(&warning);
        }
    }

    Ok(config_file)
}

fn print_report_list() {
    for report in ReportCatalog::all() {
        println!("{}\t{}", report.key(), report.label());
    }
}

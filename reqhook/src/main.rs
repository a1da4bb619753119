use anyhow::{Context, Result};
use clap::Parser;
use reqhook::cli::Args;
use reqhook::config::Settings;
use reqhook::hook::RequirementsHook;
use reqhook::parsers::LockKind;
use requirements_hook_core::StatusReporter;
use std::process;

fn main() -> Result<()> {
    let args = Args::parse();

    // Reject unsupported lock files before reading anything from disk
    let kind = LockKind::from_path(&args.lock_file)?;

    let settings = Settings::load(&args).context("Failed to load configuration")?;
    let hook = RequirementsHook::new(args.lock_file.clone(), kind, settings.hook_options());

    let report = hook.run().with_context(|| {
        format!(
            "Failed to generate requirements from {}",
            args.lock_file.display()
        )
    })?;

    let reporter = StatusReporter::new(settings.show_colors).quiet(settings.quiet);
    for drift in &report.drifts {
        reporter.report(drift);
        if settings.diff {
            reporter.report_diff(drift);
        }
    }

    process::exit(report.exit_code());
}

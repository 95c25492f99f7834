use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use box_prices_lib::settings::Settings;
use box_prices_lib::{MatchSummary, pipeline, to_json_pretty, write_final_mapping};

use crate::error::CliError;

/// Parse the listing, match the catalog, report, and write the mapping.
pub(crate) fn run_match(settings: &Settings, dry_run: bool) -> Result<(), CliError> {
    let output = pipeline::run(&settings.listing.path, &settings.assets.path)?;
    let report = &output.report;

    log_summary(&report.summary());
    log::debug!(
        "exact: {}, fuzzy: {}, unmatched: {}",
        report.exact_count(),
        report.fuzzy_count(),
        report.unmatched_count(),
    );

    let mapping = report.final_mapping();
    let path = &settings.output.path;

    if dry_run {
        log::info!("");
        log::info!(
            "{} would write {} entries to {}",
            "[dry run]".if_supports_color(Stdout, |t| t.yellow()),
            mapping.len(),
            path.display(),
        );
        log::info!("{}", to_json_pretty(&mapping)?);
        return Ok(());
    }

    write_final_mapping(path, &mapping)?;
    log::info!(
        "{} Wrote {} entries to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        mapping.len(),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    Ok(())
}

fn log_summary(summary: &MatchSummary) {
    log::info!("prices parsed: {}", summary.prices);
    log::info!("assets: {}", summary.assets);

    let missing = summary.unmatched.len();
    if missing == 0 {
        log::info!(
            "missing after fuzzy: {}",
            missing.if_supports_color(Stdout, |t| t.green()),
        );
        return;
    }

    log::info!(
        "missing after fuzzy: {}",
        missing.if_supports_color(Stdout, |t| t.red()),
    );
    log::info!(
        "{}",
        "Missing final list:".if_supports_color(Stdout, |t| t.bold()),
    );
    for name in &summary.unmatched {
        log::info!("  - {}", name);
    }
}

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use box_prices_lib::settings::{Resolved, Settings};

/// Show resolved paths and their sources.
pub(crate) fn run_config_show(settings: &Settings) {
    log::info!(
        "{}",
        "box-prices Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    match &settings.settings_file {
        Some(p) => log::info!(
            "  Settings file: {}",
            p.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::info!(
            "  Settings file: {}",
            "(none)".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
    log::info!("");

    let fields: [(&str, &Resolved); 3] = [
        ("listing", &settings.listing),
        ("assets", &settings.assets),
        ("output", &settings.output),
    ];
    for (name, resolved) in fields {
        let source = format!("({})", resolved.source);
        log::info!(
            "  {:<8} {} {}",
            name,
            resolved.path.display(),
            source.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

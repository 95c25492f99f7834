//! Logger setup.
//!
//! Normal output is plain `log::info!` lines, so the logger prints bare
//! messages unless `--verbose` asks for level and target prefixes.

use std::io::Write;

use log::LevelFilter;

pub(crate) fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| {
            if record.level() <= log::Level::Warn {
                writeln!(buf, "{}: {}", record.level().as_str().to_lowercase(), record.args())
            } else {
                writeln!(buf, "{}", record.args())
            }
        });
    }

    // RUST_LOG still wins when set
    builder.parse_default_env();
    builder.init();
}

use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Listing, catalog, settings, or output failure
    #[error("{0}")]
    Prices(#[from] box_prices_lib::Error),
}

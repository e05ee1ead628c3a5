//! Log setup for the binary

/// Install the global logger
///
/// Default filter is `warn`, or `info` with `--verbose`. `RUST_LOG` wins over both.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };

    // A logger may already be installed
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}

//! Console tracing setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug` for the
/// clickforge crates when `verbose` is on. Logs go to stderr so stdout stays
/// clean for `--json` output.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "info,clickforge=debug,clickforge_studio=debug,clickforge_models=debug"
    } else {
        "warn,clickforge=info,clickforge_studio=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

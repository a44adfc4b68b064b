//! Logging setup for the `multipage-config` binary.
//!
//! Logs go to stderr so the configuration JSON on stdout stays machine readable.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `--verbose` wins over `--quiet`; without either flag `RUST_LOG` is honoured and the
/// default is `info` for this crate.
pub fn init_logger(verbose: bool, quiet: bool) {
  let filter = if verbose {
    EnvFilter::new("multipage_config=debug")
  } else if quiet {
    EnvFilter::new("multipage_config=error")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("multipage_config=info"))
  };

  let fmt_layer = fmt::layer()
    .with_target(false)
    .with_writer(std::io::stderr);

  // A subscriber may already be installed when embedded in another tool.
  let _ = tracing_subscriber::registry()
    .with(filter)
    .with(fmt_layer)
    .try_init();
}

use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

use crate::cli::Verbosity;

/// Installs the global fmt subscriber on stderr.
///
/// `RUST_LOG` directives win over the level picked by `verbosity`.
pub fn init(verbosity: &Verbosity) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(verbosity.to_level_filter().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .finish()
        .init();
}

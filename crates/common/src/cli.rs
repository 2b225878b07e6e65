use std::{net::SocketAddr, path::PathBuf};

use serde::Serialize;
use tracing::metadata::LevelFilter;

#[derive(clap::Args, Debug, Clone, Default, Serialize)]
pub struct Verbosity {
    /// Increase verbosity, can be repeated up to 2 times
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Verbosity {
    pub fn to_level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Arguments accepted by every stub server binary.
///
/// Only the fields that override configuration values are serialized; they are
/// merged last into the [`figment::Figment`] built by [`crate::Config::figment`].
#[derive(clap::Args, Debug, Clone, Default, Serialize)]
pub struct ServerArgs {
    /// Increase log verbosity
    #[command(flatten)]
    #[serde(skip)]
    pub verbose: Verbosity,

    /// Path to a TOML configuration file
    #[arg(long)]
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// <ip>:<port> the gRPC listener binds to
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen_addr: Option<SocketAddr>,
}

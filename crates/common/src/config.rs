use std::net::{Ipv4Addr, SocketAddr};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::{cli::ServerArgs, error::Error};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// <ip>:<port> the gRPC listener binds to
    pub listen_addr: SocketAddr,
}

/// Built-in settings that differ between the stub services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDefaults {
    /// Port bound on all interfaces when nothing else is configured
    pub port: u16,
    /// Prefix of the environment variables read for this service, e.g. `SERVICE1_`
    pub env_prefix: &'static str,
}

impl ServiceDefaults {
    pub const fn new(port: u16, env_prefix: &'static str) -> Self {
        Self { port, env_prefix }
    }

    pub fn config(&self) -> Config {
        Config {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port)),
        }
    }
}

impl Config {
    /// Layers, lowest precedence first: defaults, `--config` TOML file,
    /// prefixed environment variables, CLI flags.
    pub fn figment(defaults: &ServiceDefaults, args: &ServerArgs) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(defaults.config()));
        if let Some(path) = &args.config {
            figment = figment.merge(Toml::file_exact(path));
        }
        figment
            .merge(Env::prefixed(defaults.env_prefix))
            .merge(Serialized::defaults(args))
    }

    pub fn load(defaults: &ServiceDefaults, args: &ServerArgs) -> Result<Self, Error> {
        if let Some(path) = &args.config {
            if !path.is_file() {
                return Err(Error::PathNotFile(path.display().to_string()));
            }
        }

        Ok(Self::figment(defaults, args).extract()?)
    }
}

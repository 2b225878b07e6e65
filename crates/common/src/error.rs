use std::{io, net::SocketAddr};

use displaydoc::Display;
use thiserror::Error;

#[derive(Debug, Display, Error)]
pub enum Error {
    /// failed to bind {addr}: {source}
    Bind { addr: SocketAddr, source: io::Error },
    /// Tonic transport error: {0}
    Transport(#[from] tonic::transport::Error),
    /// Config error: {0}
    Config(#[from] figment::Error),
    /// Specified config file `{0}` does not exist
    PathNotFile(String),
}

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::checked_conversions,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    trivial_casts,
    trivial_numeric_casts,
    rust_2018_idioms,
    unused_lifetimes,
    unused_import_braces,
    unused_qualifications
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod server;

pub use crate::{
    cli::{ServerArgs, Verbosity},
    config::{Config, ServiceDefaults},
    error::Error,
    handler::Handler,
};

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

pub use stubs_proto::service2::{
    service2_client::Service2Client,
    service2_server::{Service2, Service2Server},
    DataReply, DataRequest,
};
use stubs_common::{server::IntoServer, Handler, ServiceDefaults};
use tonic::{Request, Response, Status};
use tracing::debug;

pub const DEFAULTS: ServiceDefaults = ServiceDefaults::new(50052, "SERVICE2_");

pub const DATA_PREFIX: &str = "Data: ";

/// Answers `GetData` by prefixing the query; holds no state.
#[derive(Clone, Copy, Debug, Default)]
pub struct DataLookup;

impl IntoServer for DataLookup {
    type Server = Service2Server<Self>;

    fn into_server(self) -> Self::Server {
        Service2Server::new(self)
    }
}

#[tonic::async_trait]
impl Handler<DataLookup> for DataRequest {
    type Error = Status;
    type Response = DataReply;

    async fn handle(self, _ctx: &DataLookup) -> Result<Self::Response, Self::Error> {
        Ok(DataReply {
            message: format!("{DATA_PREFIX}{}", self.query),
        })
    }
}

#[tonic::async_trait]
impl Service2 for DataLookup {
    async fn get_data(&self, request: Request<DataRequest>) -> Result<Response<DataReply>, Status> {
        debug!(query = %request.get_ref().query, "GetData");
        request.handle(self).await
    }
}

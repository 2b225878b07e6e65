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

pub use stubs_proto::service1::{
    service1_client::Service1Client,
    service1_server::{Service1, Service1Server},
    HelloReply, HelloRequest,
};
use stubs_common::{server::IntoServer, Handler, ServiceDefaults};
use tonic::{Request, Response, Status};
use tracing::debug;

pub const DEFAULTS: ServiceDefaults = ServiceDefaults::new(50051, "SERVICE1_");

pub const GREETING_PREFIX: &str = "Hello ";

/// Answers `SayHello` by prefixing the name; holds no state.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greeter;

impl IntoServer for Greeter {
    type Server = Service1Server<Self>;

    fn into_server(self) -> Self::Server {
        Service1Server::new(self)
    }
}

#[tonic::async_trait]
impl Handler<Greeter> for HelloRequest {
    type Error = Status;
    type Response = HelloReply;

    async fn handle(self, _ctx: &Greeter) -> Result<Self::Response, Self::Error> {
        Ok(HelloReply {
            message: format!("{GREETING_PREFIX}{}", self.name),
        })
    }
}

#[tonic::async_trait]
impl Service1 for Greeter {
    async fn say_hello(
        &self,
        request: Request<HelloRequest>,
    ) -> Result<Response<HelloReply>, Status> {
        debug!(name = %request.get_ref().name, "SayHello");
        request.handle(self).await
    }
}

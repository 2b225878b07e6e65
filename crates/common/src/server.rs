use std::{convert::Infallible, future::Future, net::SocketAddr};

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{
    body::BoxBody,
    codegen::{http, Service},
    server::NamedService,
    transport::Server,
};
use tracing::{error, info};

use crate::error::Error;

/// A trait for wrapping a service handler with its generated gRPC server
pub trait IntoServer {
    type Server;

    fn into_server(self) -> Self::Server;
}

/// Binds the listening socket. There is no retry: callers treat an error as fatal.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, Error> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })
}

/// Serves `service` on `listener` until `shutdown` resolves, then drains
/// in-flight calls. Each inbound call runs as its own task on the runtime.
pub async fn serve<S, F>(service: S, listener: TcpListener, shutdown: F) -> Result<(), Error>
where
    S: Service<
            http::request::Request<BoxBody>,
            Response = http::response::Response<BoxBody>,
            Error = Infallible,
        > + NamedService
        + Clone
        + Send
        + 'static,
    S::Future: Send + 'static,
    F: Future<Output = ()>,
{
    match listener.local_addr() {
        Ok(addr) => info!(%addr, service = S::NAME, "server listening"),
        Err(e) => info!(service = S::NAME, error = %e, "server listening on unknown address"),
    }

    Server::builder()
        .add_service(service)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await?;

    info!(service = S::NAME, "server stopped");
    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed it never resolves,
/// leaving the server running.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl-C, shutting down"),
        Err(e) => {
            error!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await
        }
    }
}

#![allow(dead_code)]

use std::net::{Ipv4Addr, SocketAddr};

use stubs_common::server;
use stubs_service1::{Greeter, Service1, Service1Client, Service1Server};
use tokio::{sync::oneshot, task::JoinHandle};
use tonic::transport::Channel;

/// An in-process service1 bound to an ephemeral localhost port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<(), stubs_common::Error>>,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with(Greeter).await
    }

    pub async fn start_with<S: Service1>(service: S) -> Self {
        let listener = server::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(server::serve(Service1Server::new(service), listener, async {
            let _ = rx.await;
        }));

        Self {
            addr,
            shutdown: Some(shutdown),
            handle,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn channel(&self) -> Channel {
        Channel::from_shared(self.endpoint())
            .unwrap()
            .connect()
            .await
            .unwrap()
    }

    pub async fn client(&self) -> Service1Client<Channel> {
        Service1Client::new(self.channel().await)
    }

    /// Resolves the shutdown future without waiting for the server to finish.
    pub fn trigger_shutdown(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.handle.is_finished()
    }

    /// Clients must be dropped first: shutdown waits for open connections to drain.
    pub async fn stop(mut self) {
        self.trigger_shutdown();
        self.handle.await.unwrap().unwrap();
    }
}

/// Port from the "server listening" log line, e.g. `addr=127.0.0.1:4321`.
pub fn listening_port(line: &str) -> Option<u16> {
    if !line.contains("server listening") {
        return None;
    }
    let host = "127.0.0.1:";
    let rest = &line[line.find(host)? + host.len()..];
    rest.split(|c: char| !c.is_ascii_digit()).next()?.parse().ok()
}

use clap::Parser;
use color_eyre::eyre::Result;
use stubs_common::{logging, Verbosity};
use stubs_service1::{HelloRequest, Service1Client};
use tracing::debug;

/// Calls `SayHello` on a running service1 and prints the reply
#[derive(Debug, Parser)]
#[command(version, long_about = None)]
struct Cli {
    /// Name to greet
    #[arg(default_value = "World")]
    name: String,

    /// gRPC endpoint of the service
    #[arg(long, default_value = "http://127.0.0.1:50051")]
    endpoint: String,

    #[command(flatten)]
    verbose: Verbosity,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    logging::init(&args.verbose);

    debug!(endpoint = %args.endpoint, "connecting");
    let mut client = Service1Client::connect(args.endpoint).await?;
    let reply = client
        .say_hello(HelloRequest { name: args.name })
        .await?
        .into_inner();

    println!("{}", reply.message);
    Ok(())
}

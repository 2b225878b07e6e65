use clap::Parser;
use color_eyre::eyre::Result;
use stubs_common::{logging, Verbosity};
use stubs_service2::{DataRequest, Service2Client};
use tracing::debug;

/// Calls `GetData` on a running service2 and prints the reply
#[derive(Debug, Parser)]
#[command(version, long_about = None)]
struct Cli {
    /// Query to look up
    #[arg(default_value = "users")]
    query: String,

    /// gRPC endpoint of the service
    #[arg(long, default_value = "http://127.0.0.1:50052")]
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
    let mut client = Service2Client::connect(args.endpoint).await?;
    let reply = client
        .get_data(DataRequest { query: args.query })
        .await?
        .into_inner();

    println!("{}", reply.message);
    Ok(())
}

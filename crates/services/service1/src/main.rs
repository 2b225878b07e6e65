use clap::Parser;
use color_eyre::eyre::Result;
use stubs_common::{
    logging,
    server::{self, IntoServer},
    Config, ServerArgs,
};
use stubs_service1::{Greeter, DEFAULTS};

/// Greeting stub: answers `SayHello` with "Hello <name>"
#[derive(Debug, Parser)]
#[command(version, long_about = None)]
struct Cli {
    #[command(flatten)]
    server: ServerArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    logging::init(&args.server.verbose);

    let config = Config::load(&DEFAULTS, &args.server)?;
    let listener = server::bind(config.listen_addr).await?;
    server::serve(Greeter.into_server(), listener, server::shutdown_signal()).await?;

    Ok(())
}

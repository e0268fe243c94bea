use anyhow::Context;
use clap::Parser;
use tokio::io::{stdin, stdout, BufReader};

use remote_calculator::client::cli_client;
use remote_calculator::client::config::ClientConfig;
use remote_calculator::client::controller::CalculatorController;
use remote_calculator::client::services::remote_calculator::RemoteCalculator;
use remote_calculator::utils::logger;

/// Terminal calculator backed by the remote calculator service.
#[derive(Debug, Parser)]
#[command(name = "calculator-cli", version, about)]
struct Args {
    /// Service host (overrides CALCULATOR_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Service port (overrides CALCULATOR_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = ClientConfig::from_env().context("invalid client configuration")?;
    if let Some(host) = args.host {
        config.service_host = host;
    }
    if let Some(port) = args.port {
        config.service_port = port;
    }

    logger::init(&config.log_level).context("failed to initialise logging")?;
    config.log_summary();

    // Connection is lazy: an unreachable service shows up as "Error" on the first calculation.
    let backend = RemoteCalculator::new(config.service_addr());
    let mut controller = CalculatorController::new(backend);
    cli_client::run(&mut controller, BufReader::new(stdin()), stdout()).await
}

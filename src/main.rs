use std::sync::Arc;

use anyhow::Context;
use iced::Application;

use remote_calculator::client::config::ClientConfig;
use remote_calculator::client::gui::app::{AppFlags, CalculatorApp};
use remote_calculator::client::services::remote_calculator::RemoteCalculator;
use remote_calculator::utils::logger;

fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env().context("invalid client configuration")?;
    logger::init(&config.log_level).context("failed to initialise logging")?;
    config.log_summary();

    let flags = AppFlags {
        backend: Arc::new(RemoteCalculator::new(config.service_addr())),
        service_addr: config.service_addr(),
    };
    let mut settings = iced::Settings::with_flags(flags);
    settings.window.size = iced::Size::new(360.0, 480.0);
    CalculatorApp::run(settings).map_err(|e| anyhow::anyhow!("calculator window failed: {}", e))
}

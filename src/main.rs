use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use webshield::utils::{logger, validation::Validate};
use webshield::{
    BreachedAccountChecker, CliConfig, ConfigProvider, PwnedPasswordChecker, SecurityCheckEngine,
    ServerTomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_logger(cli.verbose);
    }

    tracing::info!("Starting webshield server");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => {
            tracing::info!(path = %path, "Loading configuration file");
            let file_config = ServerTomlConfig::from_file(path)?;
            abort_on_invalid(file_config.validate());
            Box::new(file_config)
        }
        None => {
            abort_on_invalid(cli.validate());
            Box::new(cli.clone())
        }
    };

    let timeout = Duration::from_secs(config.timeout_seconds());
    let email_checker = BreachedAccountChecker::new(
        config.breached_account_endpoint(),
        config.user_agent(),
        timeout,
    )?;
    let password_checker =
        PwnedPasswordChecker::new(config.password_range_endpoint(), config.user_agent(), timeout)?;

    let engine = Arc::new(SecurityCheckEngine::new(email_checker, password_checker));

    webshield::http_server::run(engine, config.bind_address()?).await;

    Ok(())
}

fn abort_on_invalid(result: webshield::Result<()>) {
    if let Err(e) = result {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

use anyhow::Result;
use prospector::api::ApiClient;
use prospector::config::Config;
use prospector::logger::{self, Logger};
use prospector::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;

    let app_logger = Logger::from_config(config.logging.enabled)?;
    logger::init_log_facade(&app_logger)?;

    let api = ApiClient::new(&config.backend.base_url)?;
    ui::run_app(api, &config, app_logger).await?;

    Ok(())
}

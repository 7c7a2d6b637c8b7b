use contract_assistant::{log_info, util::log, App, ClientConfig};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let config = ClientConfig::from_env();
    let _ = log::LOG_DIR.set(config.log_dir.clone());
    log::init_tracing(&config.log_dir)?;
    color_eyre::install()?;

    log_info!("Starting contract assistant against {}", config.base_url);

    let app = App::new(config)?;
    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}

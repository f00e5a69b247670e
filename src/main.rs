use axum::serve;
use go_term_mapper::build_app;
use go_term_mapper::config::AppConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Info unless RUST_LOG says otherwise; transport crates stay at Warn
    use env_logger::{Builder, Env};
    use log::LevelFilter;

    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("hyper", LevelFilter::Warn)
        .filter_module("reqwest", LevelFilter::Warn)
        .init();

    log::info!("GO Term Mapper service starting");

    let config = AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}:{}, upstream={}",
        config.server.host,
        config.server.port,
        config.upstream.base_url
    );

    run_server(build_app(&config), &config).await?;

    Ok(())
}

async fn run_server(app: axum::Router, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("{} listening on http://{}", config.service.name, bind_address);
    log::info!("Tool description available at GET http://{}/", bind_address);

    serve(listener, app).await?;

    Ok(())
}

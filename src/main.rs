use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use sarvam_tools::application::tools::SarvamToolset;
use sarvam_tools::infrastructure::http::ReqwestTransport;
use sarvam_tools::infrastructure::observability::init_tracing;
use sarvam_tools::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&settings.logging.tracing_config(environment));

    let transport = ReqwestTransport::new(
        &settings.sarvam.api_key,
        settings.sarvam.request_timeout(),
    )
    .context("Failed to build Sarvam HTTP transport")?;

    let toolset = SarvamToolset::new(Arc::new(transport), settings.sarvam.toolset_config())
        .context("Failed to build Sarvam toolset")?;

    tracing::info!(
        tools = toolset.all_tools().len(),
        base_url = %settings.sarvam.base_url,
        max_poll_attempts = settings.sarvam.poll_max_attempts,
        "Sarvam toolset configured"
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        toolset: Arc::new(toolset),
        settings,
    };
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

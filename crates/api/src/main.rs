use anyhow::Context;

use salebook_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;

    salebook_observability::init_with(config.log_format);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let app = salebook_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

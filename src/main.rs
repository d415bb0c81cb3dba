use anyhow::Context;

use task_manager_api::{app, config::Config, db, state::AppState, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init(&config)?;

    let pool = db::connect(&config)
        .await
        .context("Error connecting DB")?;

    if config.run_migrations {
        db::migrate(&pool).await.context("Error running migrations")?;
    }

    let state = AppState { db: pool };

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("Error binding {}", config.addr()))?;

    tracing::info!("server is chilling at http://{}", config.addr());

    axum::serve(listener, app(state)).await?;
    Ok(())
}

use std::sync::Arc;

use anyhow::Context;

mod app;
mod config;
mod db;
mod error;
mod state;
mod uploads;
mod users;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "signboard=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = Arc::new(AppConfig::from_env()?);
    let state = AppState::init(Arc::clone(&config)).await?;

    // Schema and upload dir must exist before the first request is accepted.
    db::ensure_schema(&state.db).await?;
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| format!("create upload dir {}", config.upload_dir.display()))?;

    let app = app::build_app(state);
    app::serve(app, &config).await
}

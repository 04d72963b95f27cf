use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;

use ripple_content::auth::jwt::Jwt;
use ripple_content::handlers::{self, AppState};
use ripple_content::{db, Config};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = Config::from_env()
        .map_err(anyhow::Error::msg)
        .context("failed to load configuration")?;
    info!(
        env = %config.app.env,
        host = %config.app.host,
        port = config.app.port,
        "starting ripple-content"
    );

    let pool = db::connect(&config.database.url, config.database.max_connections)
        .await
        .context("failed to connect to database")?;

    let state = AppState::new(pool, Jwt::new(&config.jwt));
    let bind_addr = (config.app.host.clone(), config.app.port);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}

use actix_cors::Cors;
use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use clubhouse::app::AppState;
use clubhouse::config::{database, Config, SecurityConfig};
use clubhouse::logging::init_logging;
use clubhouse::middleware::{RateLimiter, RequestId};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_logging(&config.app);

    tracing::info!("Starting Clubhouse membership service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let state = match &config.database {
        Some(db) => {
            let pool = db
                .create_pool()
                .await
                .context("Failed to create database pool")?;
            tracing::info!(
                "Database pool initialized ({} connections)",
                db.max_connections
            );

            if db.run_migrations {
                database::run_migrations(&pool)
                    .await
                    .context("Failed to run database migrations")?;
                tracing::info!("Database migrations applied");
            }

            AppState::mysql(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using the in-memory store");
            AppState::in_memory()
        }
    };

    let rate_limiter = RateLimiter::new(config.security.rate_limit_per_minute);
    let security = config.security.clone();
    let development = config.app.is_development();

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(rate_limiter.clone())
            .wrap(cors(&security, development))
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(|cfg| state.configure(cfg))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}

fn cors(security: &SecurityConfig, development: bool) -> Cors {
    if security.cors_allowed_origins.is_empty() {
        return if development {
            Cors::permissive()
        } else {
            Cors::default()
        };
    }

    security
        .cors_allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, LogFormat};

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "clubhouse={level},actix_web=info,sqlx=warn",
            level = config.log_level
        ))
    });

    match config.log_format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_current_span(true))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true))
                .init();
        }
    }

    tracing::info!(
        level = %config.log_level,
        format = ?config.log_format,
        "Logging initialized"
    );
}

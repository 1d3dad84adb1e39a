use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub storage: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    /// `None` when running on the in-memory store
    pub database: Option<bool>,
    pub application: bool,
}

fn storage_name(pool: &Option<web::Data<MySqlPool>>) -> &'static str {
    if pool.is_some() {
        "mysql"
    } else {
        "memory"
    }
}

/// GET /health - Liveness probe
/// Does not check dependencies
pub async fn health_check(pool: Option<web::Data<MySqlPool>>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        storage: storage_name(&pool).to_string(),
    })
}

/// GET /ready - Readiness probe
/// Pings MySQL when the service runs against a database
pub async fn readiness_check(pool: Option<web::Data<MySqlPool>>) -> impl Responder {
    let database = match pool {
        Some(pool) => match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
            Ok(_) => Some(true),
            Err(e) => {
                tracing::error!("Database readiness check failed: {}", e);
                Some(false)
            }
        },
        None => None,
    };

    let ready = database.unwrap_or(true);
    let response = ReadinessResponse {
        ready,
        checks: ReadinessChecks {
            database,
            application: true,
        },
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}

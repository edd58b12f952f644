// src/web/handlers/system_handlers.rs
use crate::web::types::*;

use chrono::Utc;
use rocket::serde::json::Json;
use tracing::debug;

pub const ENDPOINTS: [&str; 4] = [
    "GET  /api/health",
    "POST /api/wholesale-inquiry",
    "POST /api/newsletter-subscribe",
    "POST /api/job-application",
];

pub async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "i-Clean API".to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

pub async fn health_handler() -> Json<HealthResponse> {
    debug!("Health check");
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "i-Clean API is running".to_string(),
        timestamp: Utc::now(),
    })
}

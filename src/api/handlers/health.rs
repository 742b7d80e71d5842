//! Handlers for health and service-info endpoints.

use axum::Json;

use crate::api::dto::health::{ApiHealthResponse, HealthResponse, ServiceInfo};

/// Root endpoint of the user directory service.
///
/// `GET /`
pub async fn home_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        status: "ok",
        message: "User Management System",
    })
}

/// Root endpoint of the shortener service.
///
/// `GET /`
pub async fn shortener_home_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "URL Shortener API",
    })
}

/// Health endpoint of the shortener service.
///
/// `GET /api/health`
pub async fn shortener_health_handler() -> Json<ApiHealthResponse> {
    Json(ApiHealthResponse {
        status: "ok",
        message: "URL Shortener API is running",
    })
}

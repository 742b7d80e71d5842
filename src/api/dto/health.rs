//! DTOs for health and service-info endpoints.

use serde::Serialize;

/// Root response of the user directory service.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub status: &'static str,
    pub message: &'static str,
}

/// Root response of the shortener service.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Response of the shortener's API health endpoint.
#[derive(Debug, Serialize)]
pub struct ApiHealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

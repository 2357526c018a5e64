use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

const SERVICE_NAME: &str = "product-catalog";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[oai(rename_all = "lowercase")]
pub enum HealthStatus {
    Up,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: HealthStatus,
    /// Service identifier
    pub service: String,
    /// Crate version of the running binary
    pub version: String,
    /// When this process started serving
    pub started_at: DateTime<Utc>,
    /// Whole seconds since `startedAt`
    pub uptime_seconds: i64,
}

/// Liveness endpoint. Answers from process state only; the catalog store is
/// not queried.
pub struct HealthApi {
    started_at: DateTime<Utc>,
}

impl HealthApi {
    pub fn new() -> Self {
        Self::started_at(Utc::now())
    }

    fn started_at(started_at: DateTime<Utc>) -> Self {
        Self { started_at }
    }

    fn report(&self, now: DateTime<Utc>) -> HealthResponse {
        HealthResponse {
            status: HealthStatus::Up,
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: self.started_at,
            uptime_seconds: (now - self.started_at).num_seconds().max(0),
        }
    }
}

#[OpenApi]
impl HealthApi {
    /// Liveness check
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthResponse> {
        Json(self.report(Utc::now()))
    }
}

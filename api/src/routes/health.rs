use std::collections::HashMap;
use std::time::Instant;

use actix_web::{web, HttpResponse};

use crate::app::AppState;

use tg_core::{Clock, RevocationStore, UserRepository};
use tg_shared::{HealthResponse, HealthStatus, ServiceHealth};

/// Handler for GET /health
///
/// Probes the revocation store. Answers 200 while it responds and 503 otherwise.
pub async fn health_check<U, S, C>(state: web::Data<AppState<U, S, C>>) -> HttpResponse
where
    U: UserRepository + 'static,
    S: RevocationStore + 'static,
    C: Clock + 'static,
{
    let started = Instant::now();
    let store_health = match state.session_service.token_service().store().health_check().await {
        Ok(()) => ServiceHealth::healthy(started.elapsed().as_millis() as u64),
        Err(e) => {
            tracing::warn!(error = %e, "Revocation store health check failed");
            ServiceHealth::unhealthy("revocation store unreachable")
        }
    };

    let mut services = HashMap::new();
    services.insert("revocation_store".to_string(), store_health);

    let response = HealthResponse::from_services(services, env!("CARGO_PKG_VERSION"));
    match response.status {
        HealthStatus::Unhealthy => HttpResponse::ServiceUnavailable().json(response),
        _ => HttpResponse::Ok().json(response),
    }
}

use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;

use crate::content::application::ports::outgoing::ContentStore;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    content_store: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - No store round trip
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings the remote content store with its cheapest read
#[get("/ready")]
pub async fn readiness(store: web::Data<Arc<dyn ContentStore>>) -> impl Responder {
    let store_status = match store.get_skills().await {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    };

    if store_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            content_store: store_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            content_store: store_status,
        })
    }
}

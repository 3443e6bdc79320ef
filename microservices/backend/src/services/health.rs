use actix_web::{HttpResponse, Responder};

use crate::models::HealthResponse;

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy())
}

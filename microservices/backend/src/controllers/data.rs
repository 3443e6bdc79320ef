use actix_web::{HttpResponse, Responder};
use tracing::debug;

use crate::models::DataResponse;
use crate::services::metrics::generate_metrics;

// Serve a freshly generated metrics payload
pub async fn get_data() -> impl Responder {
    let metrics = generate_metrics(&mut rand::rng());
    debug!(users = metrics.users, requests = metrics.requests, "Generated metrics");

    HttpResponse::Ok().json(DataResponse::new(metrics))
}

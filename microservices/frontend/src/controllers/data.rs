use actix_web::{web, HttpResponse};
use tracing::{debug, error};

use crate::errors::Result;
use crate::services::backend::fetch_data;
use crate::state::AppState;

// Relay the backend's data payload; any failure becomes a 500 with an error body
pub async fn get_data(data: web::Data<AppState>) -> Result<HttpResponse> {
    match fetch_data(&data.http_client, &data.backend_url).await {
        Ok(body) => {
            debug!("Relaying backend payload from {}", data.backend_url);
            Ok(HttpResponse::Ok().json(body))
        }
        Err(e) => {
            error!("Failed to fetch data from backend {}: {}", data.backend_url, e);
            Err(e)
        }
    }
}

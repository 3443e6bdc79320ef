use actix_web::{HttpResponse, Responder};

use crate::models::WelcomeResponse;

pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(WelcomeResponse::default())
}

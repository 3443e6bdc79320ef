//! Backend service
//!
//! Serves synthetic usage metrics and a liveness probe for the k3s
//! microservices demo.

pub mod config;
pub mod controllers;
pub mod models;
pub mod services;

use actix_web::dev::Server;
use actix_web::{middleware, web, App, HttpServer};
use std::net::TcpListener;

pub use config::Config;
pub use models::{DataResponse, HealthResponse, Metrics};

/// Register the backend routes on an actix app.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/data", web::get().to(controllers::data::get_data))
        .route("/health", web::get().to(services::health::health_check));
}

/// Build the backend server on an already bound listener.
pub fn serve(listener: TcpListener) -> std::io::Result<Server> {
    let server = HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

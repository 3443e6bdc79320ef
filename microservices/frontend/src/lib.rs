//! Frontend service
//!
//! Serves a welcome payload and relays metrics requests to the backend
//! service, forwarding its JSON body to the caller.

pub mod config;
pub mod controllers;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;

use actix_web::dev::Server;
use actix_web::{middleware, web, App, HttpServer};
use std::net::TcpListener;

pub use config::Config;
pub use errors::{FrontendError, Result};
pub use state::AppState;

/// Register the frontend routes on an actix app.
///
/// The app must also carry `web::Data<AppState>` for `/data`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(controllers::home::home))
        .route("/data", web::get().to(controllers::data::get_data));
}

/// Build the frontend server on an already bound listener.
pub fn serve(listener: TcpListener, state: AppState) -> std::io::Result<Server> {
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

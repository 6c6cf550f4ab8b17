pub mod args;
pub mod controller {
    pub mod challonge;
    pub mod players;
}
pub mod error;
pub mod logging;
pub mod model;
pub mod state;

use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{HttpResponse, web};

pub use error::{ProxyError, UpstreamCause};
pub use model::{PlayerAggregate, aggregate, resolve};
pub use state::AppState;

/// Headers the browser client relies on: open CORS and the usual hardening set.
#[must_use]
pub fn default_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "SAMEORIGIN"))
        .add(("Referrer-Policy", "no-referrer"))
}

/// Access log without the query string, which carries the api key.
#[must_use]
pub fn request_logger() -> Logger {
    Logger::new("%{method}xi %U %s %Dms")
        .custom_request_replace("method", |req| req.method().to_string())
}

/// Registers every route. Shared by the binary and the integration tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/hello", web::get().to(controller::players::hello))
        .route("/players", web::get().to(controller::players::players))
        .route("/players-set", web::get().to(controller::players::players_set))
        .route("/health", web::get().to(HttpResponse::Ok));
}

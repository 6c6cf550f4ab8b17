use challonge_proxy::args;
use challonge_proxy::controller::challonge::ReqwestChallongeClient;
use challonge_proxy::{AppState, configure_routes, default_headers, logging, request_logger};

use actix_web::web::Data;
use actix_web::{App, HttpServer};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();
    logging::setup_logging(args.log_filter.as_deref())?;

    let api = ReqwestChallongeClient::new(args.upstream_base_url.clone(), args.upstream_timeout())?;
    let state = AppState::new(Arc::new(api), args.fetch_settings());

    tracing::info!(
        bind = %args.bind,
        port = args.port,
        upstream = %args.upstream_base_url,
        fanout = args.fetch_fanout,
        "starting challonge proxy"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .wrap(default_headers())
            .wrap(request_logger())
            .configure(configure_routes)
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}

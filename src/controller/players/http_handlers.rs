use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;

use super::data_service::{get_players, get_players_set};
use super::request::{parse_players_request, parse_players_set_request};
use crate::error::ProxyError;
use crate::state::AppState;

fn error_response(err: &ProxyError) -> HttpResponse {
    if err.status_code().is_server_error() {
        tracing::error!(error = %err, "request failed");
    }
    HttpResponse::build(err.status_code()).json(json!({"error": err.to_string()}))
}

/// `GET /players-set?tournament_ids=a,b&api_key=..`
pub async fn players_set(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let request = match parse_players_set_request(&query, state.fetch.max_tournaments) {
        Ok(request) => request,
        Err(e) => return error_response(&e),
    };

    match get_players_set(state.api.as_ref(), &state.fetch, &request).await {
        Ok(players) => HttpResponse::Ok().json(players),
        Err(e) => error_response(&e),
    }
}

/// `GET /players?api_key=..&tournament_id=..` or `..&subdomain=..&name=..`
pub async fn players(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let request = match parse_players_request(&query) {
        Ok(request) => request,
        Err(e) => return error_response(&e),
    };

    match get_players(state.api.as_ref(), &state.fetch, &request).await {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => error_response(&e),
    }
}

pub async fn hello() -> impl Responder {
    HttpResponse::Ok().json(json!({"hello": true}))
}

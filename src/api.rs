//! REST handlers over a shared [`Tournament`].

use crate::models::{PlayerId, Tournament, TournamentError};
use crate::store::Store;
use actix_web::{
    delete, get, post,
    web::{self, Data, Json},
    HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};

/// Shared app state: the tournament over whichever store was configured.
pub type AppState = Data<Tournament<Box<dyn Store>>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
pub struct RegisterPlayerBody {
    pub name: String,
}

#[derive(Deserialize)]
pub struct ReportMatchBody {
    pub winner: PlayerId,
    pub loser: PlayerId,
}

fn error_response(e: TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::UnknownPlayer(_)
        | TournamentError::InvalidMatch(_)
        | TournamentError::EmptyName => HttpResponse::BadRequest().json(body),
        TournamentError::OddPlayerCount { .. } | TournamentError::PlayersReferenced { .. } => {
            HttpResponse::Conflict().json(body)
        }
        TournamentError::StoreUnavailable(_) => {
            log::error!("{}", e);
            HttpResponse::ServiceUnavailable().json(body)
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament",
    })
}

/// Register a player (name trimmed, duplicates allowed).
#[post("/api/players")]
async fn api_register_player(state: AppState, body: Json<RegisterPlayerBody>) -> HttpResponse {
    match state.register_player(&body.name) {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => error_response(e),
    }
}

#[get("/api/players/count")]
async fn api_count_players(state: AppState) -> HttpResponse {
    match state.count_players() {
        Ok(count) => HttpResponse::Ok().json(serde_json::json!({ "count": count })),
        Err(e) => error_response(e),
    }
}

/// Record a match result.
#[post("/api/matches")]
async fn api_report_match(state: AppState, body: Json<ReportMatchBody>) -> HttpResponse {
    match state.report_match(body.winner, body.loser) {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "id": id })),
        Err(e) => error_response(e),
    }
}

#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    match state.standings() {
        Ok(standings) => HttpResponse::Ok().json(standings),
        Err(e) => error_response(e),
    }
}

/// Pairings for the next round (409 on an odd player count).
#[get("/api/pairings")]
async fn api_pairings(state: AppState) -> HttpResponse {
    match state.next_round_pairings() {
        Ok(pairings) => HttpResponse::Ok().json(pairings),
        Err(e) => error_response(e),
    }
}

/// Delete all matches, then all players.
#[delete("/api/tournament")]
async fn api_reset(state: AppState) -> HttpResponse {
    match state.reset() {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}

/// Register every route on an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_register_player)
        .service(api_count_players)
        .service(api_report_match)
        .service(api_standings)
        .service(api_pairings)
        .service(api_reset);
}

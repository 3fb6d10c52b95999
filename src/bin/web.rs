//! Web server exposing the Swiss tournament API.
//! Run with: cargo run --bin web
//! Env: HOST (default 0.0.0.0), PORT (default 8080), TOURNAMENT_DATA_DIR (CSV store; in-memory if unset).

use actix_web::{web::Data, App, HttpServer};
use swiss_tournament::{api, open_store, Config, Tournament};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let store = open_store(&config.store).map_err(std::io::Error::other)?;
    let state = Data::new(Tournament::new(store));

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || App::new().app_data(state.clone()).configure(api::configure))
        .bind(bind)?
        .run()
        .await
}

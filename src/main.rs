//! Main entry point for the game server.
//!
//! Validates the built-in track, starts the game session actor, and launches
//! the HTTP server with the game WebSocket endpoint.

use actix::Actor;
use actix_web::{web, App, HttpServer};

use crate::game::track::Track;
use crate::server::game_session::server::GameSession;

pub mod config;
mod server;
mod game;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    // Validate the built-in track once; a data fault is a startup error.
    let track = Track::builtin()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    // Start the game session actor (the single local table).
    let game_addr = GameSession::new(track).start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(game_addr));

    // Start the HTTP server with the game WebSocket endpoint.
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}

// src/server/state.rs

//! Application state for the game server.
//!
//! Holds the address of the game session actor, shared between WebSocket
//! handlers and the actor system.

use actix::Addr;
use crate::server::game_session::server::GameSession;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the game session actor (the single local table).
    pub game_addr: Addr<GameSession>,
}

impl AppState {
    /// Create a new AppState with the given actor address.
    pub fn new(game_addr: Addr<GameSession>) -> Self {
        AppState { game_addr }
    }
}

/// WebSocket session handler for the game table.
///
/// Each connected window gets one of these actors. It parses client intents
/// and forwards them to the game session actor, and serializes server
/// notifications (state snapshots, sound cues) back down the socket.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::error;
use std::borrow::Cow;
use uuid::Uuid;

use crate::server::game_session::messages::{
    ClientWsMessage, Connect, Disconnect, ProcessClientMessage, ServerWsMessage,
};
use crate::server::game_session::server::GameSession;

pub struct GameSessionActor {
    pub viewer_id: Uuid,
    pub names: Option<(String, String)>,
    pub game_addr: Addr<GameSession>,
}

impl Actor for GameSessionActor {
    type Context = ws::WebsocketContext<Self>;

    /// Register with the game session; the reply is a full state snapshot.
    fn started(&mut self, ctx: &mut Self::Context) {
        self.game_addr.do_send(Connect {
            viewer_id: self.viewer_id,
            addr: ctx.address(),
            names: self.names.take(),
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.game_addr.do_send(Disconnect {
            viewer_id: self.viewer_id,
        });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameSessionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                let msg: ClientWsMessage = match serde_json::from_str(&text) {
                    Ok(m) => m,
                    Err(_) => {
                        // Invalid client message format; the connection stays open.
                        ctx.notify(ServerWsMessage::error(
                            "INVALID_ACTION",
                            "Invalid client message",
                            None,
                        ));
                        return;
                    }
                };
                self.game_addr.do_send(ProcessClientMessage { msg });
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(_)) => ctx.stop(),
            _ => (),
        }
    }
}

impl Handler<ServerWsMessage> for GameSessionActor {
    type Result = ();

    /// Serialize a server notification down the socket.
    fn handle(&mut self, msg: ServerWsMessage, ctx: &mut Self::Context) -> Self::Result {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                // Serialization error: drop this viewer and close the connection.
                error!("[GameSessionActor] Failed to serialize server message: {}", e);
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
            }
        }
    }
}

/// WebSocket endpoint for the game table.
///
/// Optional query parameters `p1` and `p2` (urlencoded) set the display
/// names; they only apply while the game has not started yet.
pub async fn ws_game(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    let mut p1: Option<String> = None;
    let mut p2: Option<String> = None;
    for kv in req.query_string().split('&') {
        let mut split = kv.split('=');
        match (split.next(), split.next()) {
            (Some("p1"), Some(name)) => p1 = decode_name(name),
            (Some("p2"), Some(name)) => p2 = decode_name(name),
            _ => {}
        }
    }
    // Names come as a pair or not at all.
    let names = match (p1, p2) {
        (Some(p1), Some(p2)) => Some((p1, p2)),
        _ => None,
    };

    ws::start(
        GameSessionActor {
            viewer_id: Uuid::new_v4(),
            names,
            game_addr: data.game_addr.clone(),
        },
        &req,
        stream,
    )
}

fn decode_name(raw: &str) -> Option<String> {
    let name = urlencoding::decode(raw)
        .unwrap_or_else(|_| Cow::Borrowed(""))
        .into_owned();
    if name.is_empty() { None } else { Some(name) }
}

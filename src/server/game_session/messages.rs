use actix::prelude::*;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use super::session::GameSessionActor;
use crate::game::types::{ChallengeMode, ChallengeOutcome, DecisionChoice, Player, SoundCue};

/// Intent sent by a client over the game WebSocket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", content = "data")]
pub enum ClientWsMessage {
    RollDice,
    ClickTile { index: usize },
    SubmitDecision { choice: DecisionChoice },
    SubmitCorrection { text: String },
    Restart,
    Ping,
}

/// Notification sent by the server to every connected client.
#[derive(Message, Serialize, Clone, Debug)]
#[rtype(result = "()")]
#[serde(tag = "action", content = "data")]
pub enum ServerWsMessage {
    State(GameStateUpdate),
    Sound { cue: SoundCue },
    Error {
        code: String,
        message: String,
        context: Option<String>,
    },
}

impl ServerWsMessage {
    /// Build an error frame.
    ///
    /// # Arguments
    /// - `code`: Unique error code (e.g. "INVALID_ACTION").
    /// - `message`: Human-readable error message (in English).
    /// - `context`: Optional context (e.g. the offending payload).
    pub fn error(code: &str, message: &str, context: Option<&str>) -> Self {
        Self::Error {
            code: code.to_string(),
            message: message.to_string(),
            context: context.map(|c| c.to_string()),
        }
    }
}

/// Observable snapshot of the game, broadcast after every transition.
#[derive(Serialize, Clone, Debug)]
pub struct GameStateUpdate {
    pub players: Vec<Player>,
    pub active_player_index: usize,
    pub phase: PhaseView,
    pub dice_value: u8,
    /// True while the dice animation is in flight.
    pub rolling: bool,
    pub turn: u32,
    pub challenge: Option<ChallengeView>,
}

/// Wire-level phase tag; the phase payloads live in dedicated snapshot fields.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseView {
    Rolling,
    Moving,
    AwaitingTileClick,
    Answering,
    Win,
}

/// Snapshot of the open challenge session, present only while answering.
#[derive(Serialize, Clone, Debug)]
pub struct ChallengeView {
    pub text: String,
    pub mode: ChallengeMode,
    pub time_left: u32,
    pub attempts_left: u32,
    pub outcome: Option<ChallengeOutcome>,
}

/// A parsed client intent, forwarded by the WebSocket session actor.
#[derive(Message)]
#[rtype(result = "()")]
pub struct ProcessClientMessage {
    pub msg: ClientWsMessage,
}

/// A viewer connection opened; optional display names are applied only while
/// the game is still pristine.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub viewer_id: Uuid,
    pub addr: Addr<GameSessionActor>,
    pub names: Option<(String, String)>,
}

/// A viewer connection closed.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub viewer_id: Uuid,
}

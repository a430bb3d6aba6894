use actix::prelude::*;
use std::collections::HashMap;
use uuid::Uuid;
use log::{debug, info};

use crate::game::state::{GameState, Phase, RollState};
use crate::game::track::Track;
use crate::game::types::SoundCue;
use crate::server::game_session::messages::{
    ChallengeView, ClientWsMessage, Connect, Disconnect, GameStateUpdate, PhaseView,
    ProcessClientMessage, ServerWsMessage,
};
use crate::server::game_session::session::GameSessionActor;
use crate::server::game_session::{challenge_flow, turn_flow};

/// The game session actor: the only writer of game state and the only
/// scheduler of game timers. External intents and timer callbacks are
/// serialized through its mailbox, so no other synchronization exists.
pub struct GameSession {
    pub game_id: Uuid,
    pub track: Track,
    pub state: GameState,
    viewers: HashMap<Uuid, Addr<GameSessionActor>>,

    /// Handle of the pending turn-sequencing delay (dice, step, settle, result).
    pub flow_timer: Option<SpawnHandle>,
    /// Handle of the 1-second challenge countdown.
    pub countdown_timer: Option<SpawnHandle>,
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!(
            "[GameSession] Game ready: game_id={} track_len={}",
            self.game_id,
            self.track.len()
        );
    }
}

impl GameSession {
    pub fn new(track: Track) -> Self {
        Self {
            game_id: Uuid::new_v4(),
            track,
            state: GameState::new(),
            viewers: HashMap::new(),
            flow_timer: None,
            countdown_timer: None,
        }
    }

    /// Build the observable snapshot for the current state.
    pub fn snapshot(&self) -> GameStateUpdate {
        let (phase, rolling, challenge) = match &self.state.phase {
            Phase::Rolling { roll } => (PhaseView::Rolling, *roll == RollState::Spinning, None),
            Phase::Moving { .. } => (PhaseView::Moving, false, None),
            Phase::AwaitingTileClick => (PhaseView::AwaitingTileClick, false, None),
            Phase::Answering { session } => (
                PhaseView::Answering,
                false,
                Some(ChallengeView {
                    text: session.text().to_string(),
                    mode: session.mode(),
                    time_left: session.time_left(),
                    attempts_left: session.attempts_left(),
                    outcome: session.outcome().cloned(),
                }),
            ),
            Phase::Win => (PhaseView::Win, false, None),
        };
        GameStateUpdate {
            players: self.state.players.clone(),
            active_player_index: self.state.active_idx,
            phase,
            dice_value: self.state.dice_value,
            rolling,
            turn: self.state.turn,
            challenge,
        }
    }

    /// Broadcast the current snapshot to every connected viewer.
    pub fn send_state(&self) {
        debug!(
            "[GameSession] Broadcast state: game_id={} turn={} positions={:?}",
            self.game_id,
            self.state.turn,
            self.state.players.iter().map(|p| p.position).collect::<Vec<_>>()
        );
        let msg = ServerWsMessage::State(self.snapshot());
        for addr in self.viewers.values() {
            addr.do_send(msg.clone());
        }
    }

    /// Broadcast a sound cue; synthesis happens client side.
    pub fn send_sound(&self, cue: SoundCue) {
        for addr in self.viewers.values() {
            addr.do_send(ServerWsMessage::Sound { cue });
        }
    }

    /// Cancel every pending timer. Stray callbacks that already left the queue
    /// re-check the phase before touching state.
    fn cancel_timers(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.flow_timer.take() {
            ctx.cancel_future(handle);
        }
        if let Some(handle) = self.countdown_timer.take() {
            ctx.cancel_future(handle);
        }
    }

    /// Full game restart: discard in-flight timers and reset the table.
    fn restart(&mut self, ctx: &mut Context<Self>) {
        self.cancel_timers(ctx);
        self.state.reset();
        info!("[GameSession] Game restarted: game_id={}", self.game_id);
        self.send_state();
    }
}

impl Handler<Connect> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: Connect, _: &mut Context<Self>) -> Self::Result {
        if let Some((p1, p2)) = msg.names {
            if self.state.is_pristine() {
                self.state.players[0].name = p1;
                self.state.players[1].name = p2;
            } else {
                debug!("[GameSession] Display names ignored: game already started");
            }
        }
        self.viewers.insert(msg.viewer_id, msg.addr.clone());
        // Every new connection immediately sees the full table.
        msg.addr.do_send(ServerWsMessage::State(self.snapshot()));
    }
}

impl Handler<Disconnect> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _: &mut Context<Self>) -> Self::Result {
        self.viewers.remove(&msg.viewer_id);
    }
}

impl Handler<ProcessClientMessage> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: ProcessClientMessage, ctx: &mut Context<Self>) -> Self::Result {
        match msg.msg {
            ClientWsMessage::RollDice => turn_flow::request_roll(self, ctx),
            ClientWsMessage::ClickTile { index } => challenge_flow::open_challenge(self, ctx, index),
            ClientWsMessage::SubmitDecision { choice } => {
                challenge_flow::handle_decision(self, ctx, choice)
            }
            ClientWsMessage::SubmitCorrection { text } => {
                challenge_flow::handle_correction(self, ctx, &text)
            }
            ClientWsMessage::Restart => self.restart(ctx),
            ClientWsMessage::Ping => {
                // Keep-alive only.
            }
        }
    }
}

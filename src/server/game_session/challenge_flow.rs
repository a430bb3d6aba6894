/// Challenge session driver for GameSession.
/// Opens a session on a valid tile click, runs the 1-second countdown, and
/// converts the outcome into a penalty movement or a turn handover.

use std::time::Duration;
use actix::prelude::*;
use log::{debug, error, info, warn};

use crate::config::game::{POST_RESULT_PAUSE_MS, RESULT_DISPLAY_MS};
use crate::game::challenge::{ChallengeSession, SubmitResult};
use crate::game::state::{AfterMove, Phase};
use crate::game::types::{DecisionChoice, SoundCue};
use crate::server::game_session::server::GameSession;
use crate::server::game_session::turn_flow::begin_movement;

/// Handle a tile click. Accepted only while waiting for one, and only on the
/// tile the active player stands on; anything else is a silent no-op.
pub fn open_challenge(this: &mut GameSession, ctx: &mut Context<GameSession>, index: usize) {
    if !matches!(this.state.phase, Phase::AwaitingTileClick) {
        debug!("[GameSession] Tile click ignored: not awaiting one");
        return;
    }
    if index != this.state.active_player().position {
        debug!(
            "[GameSession] Click on tile {} ignored: active player is on {}",
            index,
            this.state.active_player().position
        );
        return;
    }
    let challenge = match this.track.challenge_at(index) {
        Ok(challenge) => challenge.clone(),
        Err(e) => {
            // Unreachable: the active position is always on the track.
            error!("[GameSession] {}", e);
            return;
        }
    };
    this.state.phase = Phase::Answering {
        session: ChallengeSession::new(challenge),
    };
    this.send_state();
    this.countdown_timer = Some(ctx.run_interval(Duration::from_secs(1), |act, ctx| {
        tick_countdown(act, ctx);
    }));
}

/// One countdown second. Settles the session with a timeout when the budget
/// runs out; otherwise the remaining time is observable in the snapshot.
fn tick_countdown(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    let settled = match &mut this.state.phase {
        Phase::Answering { session } => session.tick(),
        _ => {
            // Stray tick after the session ended.
            if let Some(handle) = this.countdown_timer.take() {
                ctx.cancel_future(handle);
            }
            return;
        }
    };
    if settled {
        settle(this, ctx, SoundCue::Timeout);
    } else {
        this.send_state();
    }
}

pub fn handle_decision(
    this: &mut GameSession,
    ctx: &mut Context<GameSession>,
    choice: DecisionChoice,
) {
    let (result, success) = match &mut this.state.phase {
        Phase::Answering { session } => {
            let result = session.submit_decision(choice);
            (result, session.outcome().is_some_and(|o| o.success))
        }
        _ => {
            warn!("[GameSession] Decision ignored: no open challenge");
            return;
        }
    };
    match result {
        SubmitResult::Settled => {
            settle(this, ctx, if success { SoundCue::Correct } else { SoundCue::Wrong })
        }
        SubmitResult::Advanced => this.send_state(),
        SubmitResult::Retry | SubmitResult::Ignored => {}
    }
}

pub fn handle_correction(this: &mut GameSession, ctx: &mut Context<GameSession>, text: &str) {
    let (result, success) = match &mut this.state.phase {
        Phase::Answering { session } => {
            let result = session.submit_correction(text);
            (result, session.outcome().is_some_and(|o| o.success))
        }
        _ => {
            warn!("[GameSession] Correction ignored: no open challenge");
            return;
        }
    };
    match result {
        SubmitResult::Settled => {
            settle(this, ctx, if success { SoundCue::Correct } else { SoundCue::Wrong })
        }
        SubmitResult::Retry => {
            // Wrong attempt, budget left: the player may type again.
            this.send_sound(SoundCue::Wrong);
            this.send_state();
        }
        SubmitResult::Advanced | SubmitResult::Ignored => {}
    }
}

/// The session reached its single outcome: stop the countdown, surface the
/// result, and hold it on screen before consumption.
fn settle(this: &mut GameSession, ctx: &mut Context<GameSession>, cue: SoundCue) {
    if let Some(handle) = this.countdown_timer.take() {
        ctx.cancel_future(handle);
    }
    this.send_sound(cue);
    this.send_state();
    this.flow_timer = Some(ctx.run_later(Duration::from_millis(RESULT_DISPLAY_MS), |act, ctx| {
        hold_result(act, ctx);
    }));
}

/// The result display closed; a short pause before the board reacts.
fn hold_result(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    if !matches!(this.state.phase, Phase::Answering { .. }) {
        return;
    }
    this.flow_timer = Some(ctx.run_later(Duration::from_millis(POST_RESULT_PAUSE_MS), |act, ctx| {
        consume_outcome(act, ctx);
    }));
}

/// Convert the outcome into the turn transition: success hands the turn over,
/// failure first plays the two-square penalty movement (which never triggers
/// another challenge).
fn consume_outcome(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    let success = match &this.state.phase {
        Phase::Answering { session } => match session.outcome() {
            Some(outcome) => outcome.success,
            None => return,
        },
        _ => return,
    };
    if success {
        this.state.advance_turn();
        info!(
            "[GameSession] Turn {}: player {} to roll",
            this.state.turn, this.state.active_idx
        );
        this.send_state();
    } else {
        let target = this.state.penalty_target();
        begin_movement(this, ctx, target, AfterMove::TurnEnd);
    }
}

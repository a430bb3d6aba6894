/// Dice and movement sequencing for GameSession.
/// Encapsulates the timed chain from a roll intent to arrival on a tile:
/// dice animation, reveal pause, square-by-square steps, settle delay.

use std::time::Duration;
use actix::prelude::*;
use log::{info, warn};
use rand::Rng;

use crate::config::game::{DICE_REVEAL_PAUSE_MS, DICE_ROLL_MS, MOVE_SETTLE_MS, STEP_INTERVAL_MS};
use crate::game::movement::MovementPlan;
use crate::game::state::{AfterMove, Phase, RollState};
use crate::game::types::SoundCue;
use crate::server::game_session::server::GameSession;

/// Handle a roll intent. Accepted only while the dice is idle in the rolling
/// phase; a second click during the animation or the reveal pause is a no-op.
pub fn request_roll(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    match &mut this.state.phase {
        Phase::Rolling { roll } if *roll == RollState::Idle => *roll = RollState::Spinning,
        _ => {
            warn!("[GameSession] Roll request ignored: dice not idle");
            return;
        }
    }
    this.send_state();
    this.flow_timer = Some(ctx.run_later(Duration::from_millis(DICE_ROLL_MS), |act, ctx| {
        reveal_dice(act, ctx);
    }));
}

/// End of the dice animation: pick the value, show it, pause so the players
/// can read it.
fn reveal_dice(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    match &mut this.state.phase {
        Phase::Rolling { roll } if *roll == RollState::Spinning => *roll = RollState::Revealed,
        _ => return,
    }
    this.state.dice_value = rand::rng().random_range(1..=6);
    info!(
        "[GameSession] Player {} rolled a {}",
        this.state.active_idx, this.state.dice_value
    );
    this.send_state();
    this.flow_timer = Some(ctx.run_later(Duration::from_millis(DICE_REVEAL_PAUSE_MS), |act, ctx| {
        launch_movement(act, ctx);
    }));
}

/// End of the reveal pause: compute the landing tile (capped at the goal) and
/// start the forward movement.
fn launch_movement(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    if !matches!(this.state.phase, Phase::Rolling { roll: RollState::Revealed }) {
        return;
    }
    let target = this.state.roll_target(this.state.dice_value, this.track.last_index());
    begin_movement(this, ctx, target, AfterMove::TileArrival);
}

/// Start a movement plan from the active player's position to `target`.
/// `target` must already be clamped to the track bounds by the caller.
pub fn begin_movement(
    this: &mut GameSession,
    ctx: &mut Context<GameSession>,
    target: usize,
    after: AfterMove,
) {
    let start = this.state.active_player().position;
    this.state.phase = Phase::Moving {
        plan: MovementPlan::new(start, target),
        after,
    };
    this.send_state();
    if start == target {
        // Nothing to animate: no step events, but the phase still passed
        // through Moving for any observer that watches it.
        finish_movement(this, ctx);
    } else {
        schedule_step(this, ctx);
    }
}

fn schedule_step(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    this.flow_timer = Some(ctx.run_later(Duration::from_millis(STEP_INTERVAL_MS), |act, ctx| {
        step(act, ctx);
    }));
}

/// One movement step: advance the plan, move the token, emit the step cue.
fn step(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    let advanced = match &mut this.state.phase {
        Phase::Moving { plan, .. } => plan.advance().map(|pos| (pos, plan.is_done())),
        _ => return,
    };
    let Some((position, done)) = advanced else {
        finish_movement(this, ctx);
        return;
    };
    this.state.apply_step(position);
    this.send_sound(SoundCue::Move);
    this.send_state();
    if done {
        this.flow_timer = Some(ctx.run_later(Duration::from_millis(MOVE_SETTLE_MS), |act, ctx| {
            finish_movement(act, ctx);
        }));
    } else {
        schedule_step(this, ctx);
    }
}

/// The plan completed: a forward arrival either wins the game or waits for
/// the tile click; a penalty arrival hands the turn over.
fn finish_movement(this: &mut GameSession, _ctx: &mut Context<GameSession>) {
    let (landing, after) = match &this.state.phase {
        Phase::Moving { plan, after } => (plan.end(), *after),
        _ => return,
    };
    match after {
        AfterMove::TileArrival => {
            if landing == this.track.last_index() {
                this.state.phase = Phase::Win;
                this.send_sound(SoundCue::Correct);
                info!(
                    "[GameSession] Player {} ({}) wins: game_id={}",
                    this.state.active_idx,
                    this.state.active_player().name,
                    this.game_id
                );
            } else {
                this.state.phase = Phase::AwaitingTileClick;
            }
            this.send_state();
        }
        AfterMove::TurnEnd => {
            this.state.advance_turn();
            info!(
                "[GameSession] Turn {}: player {} to roll",
                this.state.turn, this.state.active_idx
            );
            this.send_state();
        }
    }
}

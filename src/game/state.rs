//! Game state.
//!
//! The single mutable record of a running game: the two players, whose turn
//! it is, the current phase, and the last dice value. Owned exclusively by
//! the game session actor; everything here is pure state transitions so the
//! turn logic can be exercised without the actor runtime.

use crate::config::game::{PENALTY_STEPS, PLAYER_COUNT};
use crate::game::challenge::ChallengeSession;
use crate::game::movement::MovementPlan;
use crate::game::types::Player;

/// Default display names and token colors, in player order.
const DEFAULT_PLAYERS: [(&str, &str); PLAYER_COUNT] =
    [("Jugador 1", "bg-rose-500"), ("Jugador 2", "bg-sky-500")];

/// Dice animation sub-state while the game is in the rolling phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollState {
    /// Waiting for a roll intent.
    Idle,
    /// Dice animation in flight; the value is not chosen yet.
    Spinning,
    /// Value chosen and shown; movement starts after the reveal pause.
    Revealed,
}

/// What happens when a movement plan completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterMove {
    /// Forward movement: the landing tile is inspected (win or tile click).
    TileArrival,
    /// Penalty movement: the turn ends, no challenge is re-triggered.
    TurnEnd,
}

/// Top-level game phase. Each variant carries only the data that exists in
/// that phase, so an in-flight plan or challenge session cannot outlive it.
#[derive(Debug, Clone)]
pub enum Phase {
    Rolling { roll: RollState },
    Moving { plan: MovementPlan, after: AfterMove },
    AwaitingTileClick,
    Answering { session: ChallengeSession },
    Win,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub players: Vec<Player>,
    pub active_idx: usize,
    pub phase: Phase,
    pub dice_value: u8,
    pub turn: u32,
}

impl GameState {
    pub fn new() -> Self {
        let players = DEFAULT_PLAYERS
            .iter()
            .enumerate()
            .map(|(i, (name, color))| Player::new(i as u8, name.to_string(), color.to_string()))
            .collect();
        GameState {
            players,
            active_idx: 0,
            phase: Phase::Rolling { roll: RollState::Idle },
            dice_value: 1,
            turn: 1,
        }
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.active_idx]
    }

    /// True until the first roll of the first turn: used to allow renaming
    /// players from a fresh connection.
    pub fn is_pristine(&self) -> bool {
        self.turn == 1
            && matches!(self.phase, Phase::Rolling { roll: RollState::Idle })
            && self.players.iter().all(|p| p.position == 0)
    }

    /// Landing tile for a roll, capped at the goal tile.
    pub fn roll_target(&self, roll: u8, last_index: usize) -> usize {
        (self.active_player().position + roll as usize).min(last_index)
    }

    /// Landing tile for a failed challenge, floored at the start tile.
    pub fn penalty_target(&self) -> usize {
        self.active_player().position.saturating_sub(PENALTY_STEPS)
    }

    /// Write one movement step to the active player.
    pub fn apply_step(&mut self, position: usize) {
        self.players[self.active_idx].position = position;
    }

    /// Hand the turn to the other player. The dice value is deliberately kept
    /// so the table still shows the previous roll.
    pub fn advance_turn(&mut self) {
        self.active_idx = (self.active_idx + 1) % self.players.len();
        self.turn += 1;
        self.phase = Phase::Rolling { roll: RollState::Idle };
    }

    /// Full game restart: positions, phase, dice and turn counter. Names and
    /// colors survive.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.position = 0;
        }
        self.active_idx = 0;
        self.phase = Phase::Rolling { roll: RollState::Idle };
        self.dice_value = 1;
        self.turn = 1;
    }
}

/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as animation delays,
/// the challenge time budget, and the movement penalty.
pub const DICE_ROLL_MS: u64 = 1000; // Duration of the dice roll animation in milliseconds.

/// Pause (in milliseconds) after the dice value is revealed, so players can read it.
pub const DICE_REVEAL_PAUSE_MS: u64 = 1000;

/// Delay (in milliseconds) between two movement steps.
pub const STEP_INTERVAL_MS: u64 = 400;

/// Settle delay (in milliseconds) after the last movement step lands.
pub const MOVE_SETTLE_MS: u64 = 200;

/// Time budget (in seconds) for a whole challenge, decision and correction included.
pub const CHALLENGE_TIME_BUDGET: u32 = 60;

/// Number of correction attempts per challenge.
pub const CORRECTION_ATTEMPTS: u32 = 2;

/// How long (in milliseconds) the challenge result stays visible.
pub const RESULT_DISPLAY_MS: u64 = 2500;

/// Pause (in milliseconds) between result consumption and the penalty movement or turn end.
pub const POST_RESULT_PAUSE_MS: u64 = 500;

/// Number of squares a player moves back after a failed challenge.
pub const PENALTY_STEPS: usize = 2;

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

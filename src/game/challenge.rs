//! Challenge sessions.
//!
//! A session is the stateful interaction opened when a player clicks the tile
//! they landed on: decide whether the phrase is correct, optionally type a
//! correction, under a shared countdown. The session computes exactly one
//! outcome; the actor layer owns the timers and consumes the result.

use crate::config::game::{CHALLENGE_TIME_BUDGET, CORRECTION_ATTEMPTS};
use crate::game::track::TileChallenge;
use crate::game::types::{ChallengeMode, ChallengeOutcome, DecisionChoice};
use crate::game::verify::is_accepted;

const MSG_CORRECT_NO_ERROR: &str = "¡Correcto! La frase está bien.";
const MSG_WRONG_HAD_ERRORS: &str = "¡Error! La frase tenía fallos.";
const MSG_WRONG_NO_CORRECTION_NEEDED: &str = "¡Error! La frase era correcta, no necesitaba corrección.";
const MSG_CORRECTED: &str = "¡Muy bien! Has corregido la frase.";
const MSG_TIMEOUT: &str = "¡Tiempo agotado!";

/// What a submission did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// Rejected: wrong sub-mode, or the session already reached its outcome.
    Ignored,
    /// Decision accepted without settling: the session moved into correction.
    Advanced,
    /// Wrong correction with attempts remaining; the player may resubmit.
    Retry,
    /// The session reached its outcome.
    Settled,
}

/// Per-tile challenge state. Created on tile click, discarded once the turn
/// controller consumes the outcome.
#[derive(Debug, Clone)]
pub struct ChallengeSession {
    challenge: TileChallenge,
    mode: ChallengeMode,
    time_left: u32,
    attempts_left: u32,
    outcome: Option<ChallengeOutcome>,
}

impl ChallengeSession {
    pub fn new(challenge: TileChallenge) -> Self {
        Self {
            challenge,
            mode: ChallengeMode::Decision,
            time_left: CHALLENGE_TIME_BUDGET,
            attempts_left: CORRECTION_ATTEMPTS,
            outcome: None,
        }
    }

    pub fn mode(&self) -> ChallengeMode {
        self.mode
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    pub fn outcome(&self) -> Option<&ChallengeOutcome> {
        self.outcome.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.challenge.text
    }

    /// One countdown tick. The budget is shared between decision and
    /// correction and does not reset on sub-mode changes. Returns true when
    /// the tick exhausted the budget and settled the session.
    pub fn tick(&mut self) -> bool {
        if self.mode == ChallengeMode::Result {
            return false;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.settle(false, MSG_TIMEOUT.to_string());
            return true;
        }
        false
    }

    pub fn submit_decision(&mut self, choice: DecisionChoice) -> SubmitResult {
        if self.mode != ChallengeMode::Decision {
            return SubmitResult::Ignored;
        }
        match (choice, self.challenge.ok) {
            (DecisionChoice::Correct, true) => {
                self.settle(true, MSG_CORRECT_NO_ERROR.to_string());
                SubmitResult::Settled
            }
            (DecisionChoice::Correct, false) => {
                self.settle(false, MSG_WRONG_HAD_ERRORS.to_string());
                SubmitResult::Settled
            }
            (DecisionChoice::HasError, true) => {
                self.settle(false, MSG_WRONG_NO_CORRECTION_NEEDED.to_string());
                SubmitResult::Settled
            }
            (DecisionChoice::HasError, false) => {
                self.mode = ChallengeMode::Correction;
                SubmitResult::Advanced
            }
        }
    }

    pub fn submit_correction(&mut self, text: &str) -> SubmitResult {
        if self.mode != ChallengeMode::Correction {
            return SubmitResult::Ignored;
        }
        if is_accepted(text, &self.challenge.answers) {
            self.settle(true, MSG_CORRECTED.to_string());
            return SubmitResult::Settled;
        }
        self.attempts_left = self.attempts_left.saturating_sub(1);
        if self.attempts_left == 0 {
            let answer = self.challenge.answers.first().cloned().unwrap_or_default();
            self.settle(false, format!("Has fallado. La respuesta era: \"{}\"", answer));
            SubmitResult::Settled
        } else {
            SubmitResult::Retry
        }
    }

    fn settle(&mut self, success: bool, message: String) {
        self.mode = ChallengeMode::Result;
        self.outcome = Some(ChallengeOutcome { success, message });
    }
}

use serde::{Serialize, Deserialize};

/// A player token on the track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u8,
    pub name: String,
    pub color: String,
    pub position: usize,
}

impl Player {
    pub fn new(id: u8, name: String, color: String) -> Self {
        Self {
            id,
            name,
            color,
            position: 0,
        }
    }
}

/// Choice offered when a challenge opens: the phrase is correct, or it has an
/// error the player wants to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionChoice {
    Correct,
    HasError,
}

/// Sub-mode of an open challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeMode {
    Decision,
    Correction,
    Result,
}

/// Final outcome of a challenge session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeOutcome {
    pub success: bool,
    pub message: String,
}

/// Sound cues surfaced to the presentation layer. Synthesis happens client side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundCue {
    Move,
    Correct,
    Wrong,
    Timeout,
}

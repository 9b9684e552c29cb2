//! Offline commentary
//!
//! Round results and tips normally come from a remote text service owned by
//! the frontend. That service may be slow or down, so the frontend shows
//! these canned lines until (or instead of) a real reply.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Won,
    GameOver,
}

/// What a commentary service needs to know about a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub outcome: RoundOutcome,
    pub score: u64,
    pub level: u32,
}

impl RoundSummary {
    /// Pull a summary out of a round-ending event
    pub fn from_event(event: &GameEvent) -> Option<Self> {
        match *event {
            GameEvent::LevelWon { score, level } => Some(Self {
                outcome: RoundOutcome::Won,
                score,
                level,
            }),
            GameEvent::GameOver { score, level } => Some(Self {
                outcome: RoundOutcome::GameOver,
                score,
                level,
            }),
            _ => None,
        }
    }

    /// Prompt text for a generative commentary service
    pub fn prompt(&self) -> String {
        let verb = match self.outcome {
            RoundOutcome::Won => "won",
            RoundOutcome::GameOver => "lost",
        };
        format!(
            "The player just {} a round of a maze-chase arcade game. \
             Final score: {}. Level reached: {}. \
             Give a short retro arcade announcer line, at most 30 words.",
            verb, self.score, self.level
        )
    }
}

/// Line shown before a session starts
pub const READY_MESSAGE: &str = "READY PLAYER ONE?";

/// Line shown when a session starts
pub const START_MESSAGE: &str = "WAKA WAKA WAKA!";

const TIPS: [&str; 4] = [
    "USE ARROW KEYS TO MOVE.",
    "KEEP MOVING, DON'T GET CORNERED!",
    "SAVE POWER PELLETS FOR WHEN THE GHOSTS CLOSE IN.",
    "THE SIDE TUNNELS ARE YOUR ESCAPE HATCH.",
];

/// Canned line for a finished round
pub fn fallback_commentary(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Won => "YOU ARE THE MAZE MASTER!",
        RoundOutcome::GameOver => "GAME OVER. TRY AGAIN?",
    }
}

/// Canned strategy tip; `index` wraps around the list
pub fn fallback_tip(index: usize) -> &'static str {
    TIPS[index % TIPS.len()]
}

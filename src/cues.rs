//! Sound cues for simulation events
//!
//! The simulation does no audio itself. Frontends feed each tick's events
//! through `cues_for` and play whatever comes out.

use crate::sim::{GameEvent, GameStatus};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Regular pellet eaten
    Waka,
    /// Power pellet eaten, ghosts turn blue
    PowerUp,
    /// Frightened ghost caught
    GhostEaten,
    /// Frightened mode ended
    PowerDown,
    /// Caught by a ghost
    Death,
    /// Out of lives
    GameOver,
    /// Board cleared
    LevelClear,
}

impl SoundCue {
    /// Cue for a single event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::PelletEaten { .. } => SoundCue::Waka,
            GameEvent::PowerPelletEaten { .. } => SoundCue::PowerUp,
            GameEvent::GhostEaten { .. } => SoundCue::GhostEaten,
            GameEvent::PowerExpired => SoundCue::PowerDown,
            GameEvent::LifeLost { .. } => SoundCue::Death,
            GameEvent::GameOver { .. } => SoundCue::GameOver,
            GameEvent::LevelWon { .. } => SoundCue::LevelClear,
        }
    }

    /// Cues that take over the channel; anything queued before them is dropped
    pub fn is_exclusive(self) -> bool {
        matches!(self, SoundCue::Death | SoundCue::GameOver | SoundCue::LevelClear)
    }
}

/// Cues for one tick's events.
///
/// An exclusive cue (death, game over, level clear) silences the chatter that
/// came before it in the same tick, and repeated cues collapse to one.
pub fn cues_for(events: &[GameEvent]) -> Vec<SoundCue> {
    let mut cues: Vec<SoundCue> = Vec::with_capacity(events.len());
    for cue in events.iter().map(SoundCue::for_event) {
        if cue.is_exclusive() {
            cues.retain(|c| c.is_exclusive());
        }
        if !cues.contains(&cue) {
            cues.push(cue);
        }
    }
    cues
}

/// Whether the background siren should be running
pub fn siren_active(status: GameStatus) -> bool {
    status == GameStatus::Playing
}

//! Game session state machine.
//!
//! The session is a caller-ticked countdown. It does not use internal
//! threads -- the caller is responsible for calling `tick()` once per
//! second (see [`super::Countdown`] for a cancellable ticker).
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Ended -> Idle
//! ```
//!
//! `Ended` is transient: the timer reaching zero and the user ending the
//! session early both drain through [`GameSession::finish`], which yields
//! the final score for reward application and folds back to `Idle`.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::chore::{Chore, Difficulty};
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Running,
    Ended,
}

/// Final score of a session, ready to feed into the chore store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishedSession {
    pub chore_id: String,
    pub difficulty: Difficulty,
    pub points: u32,
    /// True when the timer ran out rather than the user ending early.
    pub expired: bool,
}

/// Per-chore timed scoring session.
///
/// Ephemeral: never persisted. A new session is created for every play.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: SessionState,
    chore_id: Option<String>,
    difficulty: Option<Difficulty>,
    remaining_secs: u32,
    total_secs: u32,
    points: u32,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            chore_id: None,
            difficulty: None,
            remaining_secs: 0,
            total_secs: 0,
            points: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    pub fn active_chore_id(&self) -> Option<&str> {
        self.chore_id.as_deref()
    }

    /// 0.0 .. 1.0 progress through the session.
    pub fn progress(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_secs as f64 / self.total_secs as f64)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            chore_id: self.chore_id.clone(),
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs,
            points: self.points,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start a session for `chore`. Only valid in `Idle`.
    pub fn start(&mut self, chore: &Chore) -> Option<Event> {
        match self.state {
            SessionState::Idle => {
                let secs = chore.difficulty.session_secs();
                self.state = SessionState::Running;
                self.chore_id = Some(chore.id.clone());
                self.difficulty = Some(chore.difficulty);
                self.remaining_secs = secs;
                self.total_secs = secs;
                self.points = 0;
                Some(Event::GameStarted {
                    chore_id: chore.id.clone(),
                    difficulty: chore.difficulty,
                    duration_secs: secs,
                    at: Utc::now(),
                })
            }
            _ => None, // A session is already underway.
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `Some(Event::GameEnded)` exactly once, on the tick that
    /// brings the timer to zero. Ignored outside `Running`.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != SessionState::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = SessionState::Ended;
            return Some(Event::GameEnded {
                chore_id: self.chore_id.clone().unwrap_or_default(),
                points: self.points,
                expired: true,
                at: Utc::now(),
            });
        }
        None
    }

    /// Score one point. Valid only while `Running`; ignored otherwise.
    pub fn score_point(&mut self) -> Option<Event> {
        if self.state != SessionState::Running {
            return None;
        }
        self.points += 1;
        Some(Event::PointScored {
            chore_id: self.chore_id.clone().unwrap_or_default(),
            points: self.points,
            at: Utc::now(),
        })
    }

    /// Close the session and take its final score.
    ///
    /// Valid in `Running` (the user ended early) and `Ended` (the timer
    /// expired); both produce the same `FinishedSession` for the reward
    /// path. Clears the active chore and folds back to `Idle`.
    pub fn finish(&mut self) -> Option<FinishedSession> {
        let expired = match self.state {
            SessionState::Running => false,
            SessionState::Ended => true,
            SessionState::Idle => return None,
        };
        let finished = FinishedSession {
            chore_id: self.chore_id.take()?,
            difficulty: self.difficulty.take()?,
            points: self.points,
            expired,
        };
        self.state = SessionState::Idle;
        self.remaining_secs = 0;
        self.total_secs = 0;
        self.points = 0;
        Some(finished)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

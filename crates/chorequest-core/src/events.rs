use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chore::Difficulty;
use crate::game::SessionState;

/// Every state change in the system produces an Event.
/// The CLI prints them; a GUI would poll for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ChoreAdded {
        chore_id: String,
        name: String,
        difficulty: Difficulty,
        emoji: String,
        at: DateTime<Utc>,
    },
    ChoreRemoved {
        chore_id: String,
        name: String,
        at: DateTime<Utc>,
    },
    GameStarted {
        chore_id: String,
        difficulty: Difficulty,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    PointScored {
        chore_id: String,
        points: u32,
        at: DateTime<Utc>,
    },
    GameEnded {
        chore_id: String,
        points: u32,
        /// True when the timer ran out rather than the user ending early.
        expired: bool,
        at: DateTime<Utc>,
    },
    RewardApplied {
        chore_id: String,
        final_points: u64,
        xp: u64,
        level: u32,
        streak: u32,
        at: DateTime<Utc>,
    },
    LevelUp {
        level: u32,
        /// How long the celebratory effect should run.
        celebration_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: SessionState,
        chore_id: Option<String>,
        remaining_secs: u32,
        total_secs: u32,
        points: u32,
        at: DateTime<Utc>,
    },
}

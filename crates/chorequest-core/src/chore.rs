//! Chore data model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::emoji;
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Session length in seconds for a chore of this difficulty.
    pub fn session_secs(self) -> u32 {
        match self {
            Difficulty::Easy => 45,
            Difficulty::Medium => 30,
            Difficulty::Hard => 15,
        }
    }

    /// Reward multiplier applied to raw session points.
    pub fn multiplier(self) -> u64 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ValidationError::InvalidDifficulty(other.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}

/// A tracked household chore.
///
/// `difficulty` is fixed at creation; `emoji` is resolved once from the
/// name and stored so later keyword-table edits do not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chore {
    pub id: String,
    pub name: String,
    pub difficulty: Difficulty,
    pub emoji: String,
    #[serde(default)]
    pub last_completed: Option<DateTime<Utc>>,
    /// Consecutive qualifying completions. Only incremented or reset to 1.
    #[serde(default)]
    pub streak: u32,
    pub created_at: DateTime<Utc>,
}

impl Chore {
    pub fn new(name: impl Into<String>, difficulty: Difficulty) -> Self {
        let name = name.into();
        let emoji = emoji::find_emoji(&name).to_string();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            difficulty,
            emoji,
            last_completed: None,
            streak: 0,
            created_at: Utc::now(),
        }
    }

    /// Record a finished session at `now` and update the streak.
    ///
    /// First completion starts the streak at 1. Afterwards, a whole-day
    /// gap of at most 1 from the previous completion extends the streak;
    /// anything longer resets it to 1.
    pub(crate) fn record_completion(&mut self, now: DateTime<Utc>) {
        self.streak = match self.last_completed {
            None => 1,
            Some(last) if (now - last).num_days() <= 1 => self.streak + 1,
            Some(_) => 1,
        };
        self.last_completed = Some(now);
    }
}

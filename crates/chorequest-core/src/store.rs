//! Chore store: the chore collection plus aggregate player progress.
//!
//! Mutations are plain in-memory updates; callers persist the store via
//! [`crate::storage::StateFile`] after each committed change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chore::{Chore, Difficulty};
use crate::error::ValidationError;
use crate::events::Event;

/// Aggregate player progress.
///
/// `level` is derived: after every mutation `level == xp / 1000 + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub level: u32,
    pub xp: u64,
}

impl Progress {
    pub fn level_for_xp(xp: u64) -> u32 {
        (xp / 1000) as u32 + 1
    }

    /// Add experience and recompute the level. Returns true on level-up.
    fn add_xp(&mut self, points: u64) -> bool {
        let old_level = self.level;
        self.xp += points;
        self.level = Self::level_for_xp(self.xp);
        self.level > old_level
    }

    /// Experience accumulated within the current level (0..1000).
    pub fn xp_into_level(&self) -> u64 {
        self.xp % 1000
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self { level: 1, xp: 0 }
    }
}

/// Result of applying one finished session to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardOutcome {
    pub chore_id: String,
    pub raw_points: u32,
    pub final_points: u64,
    pub xp: u64,
    pub level: u32,
    pub streak: u32,
    pub leveled_up: bool,
    pub at: DateTime<Utc>,
}

impl RewardOutcome {
    /// Events describing this outcome. `celebration_secs` is how long the
    /// frontend should run the level-up effect.
    pub fn events(&self, celebration_secs: u64) -> Vec<Event> {
        let mut events = vec![Event::RewardApplied {
            chore_id: self.chore_id.clone(),
            final_points: self.final_points,
            xp: self.xp,
            level: self.level,
            streak: self.streak,
            at: self.at,
        }];
        if self.leveled_up {
            events.push(Event::LevelUp {
                level: self.level,
                celebration_secs,
                at: self.at,
            });
        }
        events
    }
}

/// The persisted application state: chores in insertion order plus
/// player progress. Serializes to `{ "chores": [...], "level": n, "xp": n }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoreStore {
    #[serde(default)]
    pub chores: Vec<Chore>,
    #[serde(flatten)]
    pub progress: Progress,
}

impl ChoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chores(&self) -> &[Chore] {
        &self.chores
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn get(&self, id: &str) -> Option<&Chore> {
        self.chores.iter().find(|c| c.id == id)
    }

    /// Add a chore. Blank names are a silent no-op returning `None`;
    /// otherwise yields the `ChoreAdded` event.
    pub fn add_chore(&mut self, name: &str, difficulty: Difficulty) -> Option<Event> {
        if name.trim().is_empty() {
            return None;
        }
        let chore = Chore::new(name, difficulty);
        let event = Event::ChoreAdded {
            chore_id: chore.id.clone(),
            name: chore.name.clone(),
            difficulty: chore.difficulty,
            emoji: chore.emoji.clone(),
            at: Utc::now(),
        };
        self.chores.push(chore);
        Some(event)
    }

    /// Remove the chore with `id`, yielding the `ChoreRemoved` event.
    /// Unknown ids are a no-op.
    pub fn remove_chore(&mut self, id: &str) -> Option<Event> {
        let index = self.chores.iter().position(|c| c.id == id)?;
        let chore = self.chores.remove(index);
        Some(Event::ChoreRemoved {
            chore_id: chore.id,
            name: chore.name,
            at: Utc::now(),
        })
    }

    /// Apply a finished session's score to the store.
    ///
    /// `final_points = raw_points * multiplier(difficulty)` is added to xp,
    /// the level is recomputed, and the chore's completion time and streak
    /// are updated.
    pub fn apply_reward(
        &mut self,
        chore_id: &str,
        raw_points: u32,
    ) -> Result<RewardOutcome, ValidationError> {
        self.apply_reward_at(chore_id, raw_points, Utc::now())
    }

    /// [`Self::apply_reward`] with an explicit clock, for deterministic tests.
    pub fn apply_reward_at(
        &mut self,
        chore_id: &str,
        raw_points: u32,
        now: DateTime<Utc>,
    ) -> Result<RewardOutcome, ValidationError> {
        let chore = self
            .chores
            .iter_mut()
            .find(|c| c.id == chore_id)
            .ok_or_else(|| ValidationError::UnknownChore(chore_id.to_string()))?;

        let final_points = raw_points as u64 * chore.difficulty.multiplier();
        chore.record_completion(now);
        let streak = chore.streak;
        let id = chore.id.clone();

        let leveled_up = self.progress.add_xp(final_points);

        Ok(RewardOutcome {
            chore_id: id,
            raw_points,
            final_points,
            xp: self.progress.xp,
            level: self.progress.level,
            streak,
            leveled_up,
            at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    /// Add a chore and return its id.
    fn add(store: &mut ChoreStore, name: &str, difficulty: Difficulty) -> String {
        store.add_chore(name, difficulty).unwrap();
        store.chores().last().unwrap().id.clone()
    }

    #[test]
    fn add_chore_appends_in_insertion_order() {
        let mut store = ChoreStore::new();
        add(&mut store, "Wash the dishes", Difficulty::Easy);
        add(&mut store, "Vacuum", Difficulty::Hard);
        assert_eq!(store.chores().len(), 2);
        assert_eq!(store.chores()[0].name, "Wash the dishes");
        assert_eq!(store.chores()[1].name, "Vacuum");
    }

    #[test]
    fn new_chore_has_no_history() {
        let mut store = ChoreStore::new();
        add(&mut store, "Mop the floor", Difficulty::Medium);
        let chore = store.chores().last().unwrap();
        assert_eq!(chore.streak, 0);
        assert!(chore.last_completed.is_none());
    }

    #[test]
    fn add_yields_the_chore_added_event() {
        let mut store = ChoreStore::new();
        let event = store.add_chore("Wash the dishes", Difficulty::Hard).unwrap();
        match event {
            Event::ChoreAdded {
                chore_id,
                name,
                difficulty,
                emoji,
                ..
            } => {
                assert_eq!(chore_id, store.chores()[0].id);
                assert_eq!(name, "Wash the dishes");
                assert_eq!(difficulty, Difficulty::Hard);
                assert_eq!(emoji, store.chores()[0].emoji);
            }
            other => panic!("Expected ChoreAdded, got {other:?}"),
        }
    }

    #[test]
    fn blank_names_are_ignored() {
        let mut store = ChoreStore::new();
        assert!(store.add_chore("", Difficulty::Easy).is_none());
        assert!(store.add_chore("   ", Difficulty::Hard).is_none());
        assert!(store.chores().is_empty());
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut store = ChoreStore::new();
        add(&mut store, "Vacuum", Difficulty::Easy);
        assert!(store.remove_chore("no-such-id").is_none());
        assert_eq!(store.chores().len(), 1);
    }

    #[test]
    fn remove_yields_the_chore_removed_event() {
        let mut store = ChoreStore::new();
        let id = add(&mut store, "Vacuum", Difficulty::Easy);
        match store.remove_chore(&id).unwrap() {
            Event::ChoreRemoved { chore_id, name, .. } => {
                assert_eq!(chore_id, id);
                assert_eq!(name, "Vacuum");
            }
            other => panic!("Expected ChoreRemoved, got {other:?}"),
        }
        assert!(store.chores().is_empty());
    }

    #[test]
    fn hard_reward_is_tripled() {
        let mut store = ChoreStore::new();
        let id = add(&mut store, "Scrub the bathroom", Difficulty::Hard);
        let outcome = store.apply_reward(&id, 5).unwrap();
        assert_eq!(outcome.final_points, 15);
        assert_eq!(store.progress().xp, 15);
    }

    #[test]
    fn reward_for_unknown_chore_is_an_error() {
        let mut store = ChoreStore::new();
        assert!(matches!(
            store.apply_reward("ghost", 5),
            Err(ValidationError::UnknownChore(_))
        ));
    }

    #[test]
    fn crossing_a_thousand_xp_levels_up() {
        let mut store = ChoreStore::new();
        let id = add(&mut store, "Vacuum", Difficulty::Hard);

        let outcome = store.apply_reward(&id, 300).unwrap(); // 900 xp
        assert_eq!(outcome.level, 1);
        assert!(!outcome.leveled_up);

        let outcome = store.apply_reward(&id, 100).unwrap(); // 1200 xp
        assert_eq!(outcome.level, 2);
        assert!(outcome.leveled_up);
        assert_eq!(outcome.events(5).len(), 2);
    }

    #[test]
    fn reward_updates_streak_and_completion_time() {
        let mut store = ChoreStore::new();
        let id = add(&mut store, "Vacuum", Difficulty::Easy);
        let day_one = Utc::now() - Duration::days(3);

        store.apply_reward_at(&id, 1, day_one).unwrap();
        assert_eq!(store.get(&id).unwrap().streak, 1);

        // Next day: streak extends.
        let outcome = store.apply_reward_at(&id, 1, day_one + Duration::hours(23)).unwrap();
        assert_eq!(outcome.streak, 2);

        // Two whole days later: streak resets.
        let outcome = store.apply_reward_at(&id, 1, day_one + Duration::days(3)).unwrap();
        assert_eq!(outcome.streak, 1);
    }

    #[test]
    fn xp_never_decreases() {
        let mut store = ChoreStore::new();
        let id = add(&mut store, "Vacuum", Difficulty::Easy);
        let mut last_xp = 0;
        for points in [0, 5, 0, 12] {
            let outcome = store.apply_reward(&id, points).unwrap();
            assert!(outcome.xp >= last_xp);
            last_xp = outcome.xp;
        }
    }

    proptest! {
        #[test]
        fn level_always_matches_the_formula(points in proptest::collection::vec(0u32..500, 1..20)) {
            let mut store = ChoreStore::new();
            let id = add(&mut store, "Vacuum", Difficulty::Medium);
            for p in points {
                let outcome = store.apply_reward(&id, p).unwrap();
                prop_assert_eq!(outcome.level, (outcome.xp / 1000) as u32 + 1);
                prop_assert_eq!(store.progress().level, Progress::level_for_xp(store.progress().xp));
            }
        }
    }
}

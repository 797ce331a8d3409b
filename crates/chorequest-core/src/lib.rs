//! # Chorequest Core Library
//!
//! This library provides the core business logic for Chorequest, a gamified
//! chore tracker. All operations are available via a standalone CLI binary;
//! any GUI is expected to be a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Chore Store**: The chore list plus aggregate player progress
//!   (level, experience), persisted as a single JSON state file
//! - **Game Session**: A caller-ticked countdown state machine that scores
//!   points for one chore and produces a reward on completion
//! - **Storage**: JSON state file and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`ChoreStore`]: Chore collection and reward application
//! - [`GameSession`]: Per-chore timed scoring state machine
//! - [`StateFile`]: State persistence
//! - [`Config`]: Application configuration management

pub mod chore;
pub mod emoji;
pub mod error;
pub mod events;
pub mod game;
pub mod storage;
pub mod store;

pub use chore::{Chore, Difficulty};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use game::{Countdown, FinishedSession, GameSession, SessionState};
pub use storage::{data_dir, Config, StateFile};
pub use store::{ChoreStore, Progress, RewardOutcome};

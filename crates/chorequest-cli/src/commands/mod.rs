pub mod chore;
pub mod config;
pub mod play;
pub mod progress;

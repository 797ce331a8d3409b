mod countdown;
mod session;

pub use countdown::Countdown;
pub use session::{FinishedSession, GameSession, SessionState};

//! Interactive play session.
//!
//! Runs one game session for a chore: a one-second countdown where every
//! Enter press scores a point and `q` ends the session early. The reward
//! is applied to the store and saved before the command exits.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;

use chorequest_core::{
    Config, Countdown, Event, FinishedSession, GameSession, SessionState, StateFile,
};
use chrono::Utc;

#[derive(Clone)]
enum Msg {
    Tick,
    Line(String),
}

pub fn run(chore_id: &str, auto_points: Option<u32>) -> Result<(), Box<dyn std::error::Error>> {
    let state = StateFile::open_default()?;
    let mut store = state.load();
    let chore = store
        .get(chore_id)
        .ok_or_else(|| format!("Chore not found: {chore_id}"))?
        .clone();
    let config = Config::load_or_default();

    let mut session = GameSession::new();
    if let Some(event) = session.start(&chore) {
        println!("{}", serde_json::to_string_pretty(&event)?);
    }

    if let Some(n) = auto_points {
        for _ in 0..n {
            session.score_point();
        }
    } else {
        run_interactive(&mut session)?;
    }

    let Some(finished) = session.finish() else {
        return Ok(());
    };
    print_end(&finished)?;

    let outcome = store.apply_reward(&finished.chore_id, finished.points)?;
    state.save(&store)?;

    for event in outcome.events(config.celebration.duration_secs) {
        if let Event::LevelUp { level, .. } = &event {
            if config.notifications.enabled {
                println!("🎉 Level up! You are now level {level}.");
            }
        }
        println!("{}", serde_json::to_string_pretty(&event)?);
    }
    Ok(())
}

fn print_end(finished: &FinishedSession) -> Result<(), Box<dyn std::error::Error>> {
    let event = Event::GameEnded {
        chore_id: finished.chore_id.clone(),
        points: finished.points,
        expired: finished.expired,
        at: Utc::now(),
    };
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}

/// Drive the session from a ticker thread and a stdin reader thread.
///
/// The ticker is cancelled before returning so it never outlives the
/// session it drives.
fn run_interactive(session: &mut GameSession) -> Result<(), Box<dyn std::error::Error>> {
    println!("Press Enter to score a point, q + Enter to end early.");

    let (tx, rx) = mpsc::channel();
    let mut countdown = Countdown::start(tx.clone(), Msg::Tick);

    std::thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(Msg::Line(line)).is_err() {
                break;
            }
        }
    });

    while session.state() == SessionState::Running {
        match rx.recv() {
            Ok(Msg::Tick) => {
                if session.tick().is_some() {
                    println!("\nTime! {} points scored.", session.points());
                    break;
                }
                print!(
                    "\r{:>3}s remaining | {} points ",
                    session.remaining_secs(),
                    session.points()
                );
                io::stdout().flush()?;
            }
            Ok(Msg::Line(line)) => {
                if line.trim() == "q" {
                    println!("Ending early with {} points.", session.points());
                    break;
                }
                session.score_point();
            }
            Err(_) => break,
        }
    }

    countdown.cancel();
    Ok(())
}

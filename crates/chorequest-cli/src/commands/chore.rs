//! Chore management commands for CLI.

use chorequest_core::{Difficulty, Event, StateFile};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ChoreAction {
    /// Add a new chore
    Add {
        /// Chore name
        name: String,
        /// Difficulty: easy, medium, or hard (default: easy)
        #[arg(long, default_value = "easy")]
        difficulty: String,
    },
    /// List chores in insertion order
    List,
    /// Remove a chore
    Remove {
        /// Chore ID
        id: String,
    },
}

pub fn run(action: ChoreAction) -> Result<(), Box<dyn std::error::Error>> {
    let state = StateFile::open_default()?;
    let mut store = state.load();

    match action {
        ChoreAction::Add { name, difficulty } => {
            let difficulty: Difficulty = difficulty.parse()?;
            match store.add_chore(&name, difficulty) {
                Some(event) => {
                    state.save(&store)?;
                    if let Event::ChoreAdded { chore_id, .. } = &event {
                        println!("Chore added: {chore_id}");
                    }
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
                None => println!("Chore name is empty; nothing added."),
            }
        }
        ChoreAction::List => {
            println!("{}", serde_json::to_string_pretty(store.chores())?);
        }
        ChoreAction::Remove { id } => match store.remove_chore(&id) {
            Some(event) => {
                state.save(&store)?;
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
            None => println!("Chore not found: {id}"),
        },
    }
    Ok(())
}

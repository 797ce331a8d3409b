//! Player progress command.

use chorequest_core::StateFile;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let state = StateFile::open_default()?;
    let store = state.load();
    let progress = store.progress();
    let summary = serde_json::json!({
        "level": progress.level,
        "xp": progress.xp,
        "xp_into_level": progress.xp_into_level(),
        "chores": store.chores().len(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

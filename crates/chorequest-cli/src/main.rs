use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "chorequest", version, about = "Chorequest CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chore management
    Chore {
        #[command(subcommand)]
        action: commands::chore::ChoreAction,
    },
    /// Play a timed scoring session for a chore
    Play {
        /// Chore ID
        chore_id: String,
        /// Score this many points and end immediately (non-interactive)
        #[arg(long)]
        auto_points: Option<u32>,
    },
    /// Show level and experience
    Progress,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Chore { action } => commands::chore::run(action),
        Commands::Play {
            chore_id,
            auto_points,
        } => commands::play::run(&chore_id, auto_points),
        Commands::Progress => commands::progress::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

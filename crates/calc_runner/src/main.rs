//! Matchup calculator CLI.
//!
//! Reads a matchup description as JSON and prints computed results as JSON.
//!
//! Usage:
//!   cargo run -p calc_runner -- damage --file matchup.json --pretty
//!   echo '{...}' | cargo run -p calc_runner -- damage
//!   cargo run -p calc_runner -- speed --file matchup.json

mod cmd;
mod models;

use clap::{Parser, Subcommand};
use cmd::{damage, speed};

#[derive(Parser)]
#[command(name = "calc_runner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate damage ranges for a matchup
    Damage(damage::DamageArgs),

    /// Compare effective speeds for a matchup
    Speed(speed::SpeedArgs),
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Some(Commands::Damage(args)) => damage::execute(args),
        Some(Commands::Speed(args)) => speed::execute(args),
        None => {
            // Require explicit subcommand to avoid flag ambiguity at the root.
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            cmd.print_help().expect("help prints");
            return;
        }
    };

    if let Err(message) = outcome {
        eprintln!("error: {}", message);
        std::process::exit(1);
    }
}

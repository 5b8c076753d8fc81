//! `speed` subcommand: matchup JSON in, turn-order comparison out.

use clap::Args;
use poke_calc::{compare_speed, Dex};

use crate::models::MatchupInput;

#[derive(Args)]
pub struct SpeedArgs {
    /// Matchup JSON file; stdin when omitted
    #[arg(short, long)]
    pub file: Option<String>,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,
}

pub fn execute(args: SpeedArgs) -> Result<(), String> {
    let body = super::read_input(args.file.as_deref()).map_err(|e| e.to_string())?;
    let request: MatchupInput = serde_json::from_str(&body).map_err(|e| e.to_string())?;

    let dex = Dex::standard();
    let conditions = request
        .field
        .clone()
        .into_conditions()
        .map_err(|e| e.to_string())?;
    let a = request
        .attacker
        .clone()
        .into_snapshot(&dex)
        .map_err(|e| e.to_string())?;
    let b = request
        .defender
        .clone()
        .into_snapshot(&dex)
        .map_err(|e| e.to_string())?;

    // Both sides share the request's field; per-side conditions are a
    // library-level feature the CLI doesn't expose yet.
    let comparison =
        compare_speed(&a, &b, &conditions, &conditions, &dex).map_err(|e| e.to_string())?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&comparison)
    } else {
        serde_json::to_string(&comparison)
    }
    .map_err(|e| e.to_string())?;
    println!("{}", output);
    Ok(())
}

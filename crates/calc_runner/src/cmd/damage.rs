//! `damage` subcommand: matchup JSON in, damage results JSON out.

use clap::Args;
use poke_calc::{calculate_all_moves, calculate_damage, DamageResult, Dex};

use crate::models::MatchupInput;

#[derive(Args)]
pub struct DamageArgs {
    /// Matchup JSON file; stdin when omitted
    #[arg(short, long)]
    pub file: Option<String>,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,
}

pub fn execute(args: DamageArgs) -> Result<(), String> {
    let body = super::read_input(args.file.as_deref()).map_err(|e| e.to_string())?;
    let request: MatchupInput = serde_json::from_str(&body).map_err(|e| e.to_string())?;

    let dex = Dex::standard();
    let conditions = request
        .field
        .clone()
        .into_conditions()
        .map_err(|e| e.to_string())?;
    let attacker = request
        .attacker
        .clone()
        .into_snapshot(&dex)
        .map_err(|e| e.to_string())?;
    let defender = request
        .defender
        .clone()
        .into_snapshot(&dex)
        .map_err(|e| e.to_string())?;

    let results: Vec<DamageResult> = match &request.move_name {
        Some(move_name) => {
            vec![
                calculate_damage(&dex, &attacker, &defender, move_name, &conditions)
                    .map_err(|e| e.to_string())?,
            ]
        }
        None => calculate_all_moves(&dex, &attacker, &defender, &conditions)
            .map_err(|e| e.to_string())?,
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&results)
    } else {
        serde_json::to_string(&results)
    }
    .map_err(|e| e.to_string())?;
    println!("{}", output);
    Ok(())
}

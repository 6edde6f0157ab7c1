//! Replay command - play a pit sequence and show every board

use anyhow::Result;
use clap::Parser;

use crate::{
    app::SearchConfig,
    cli::output::{print_kv, print_section},
    mancala::{Board, Ending},
    search::{parse_pit_sequence, replay},
};

#[derive(Parser, Debug)]
#[command(about = "Replay a pit sequence from the opening and show each board")]
pub struct ReplayArgs {
    /// Pits to play, e.g. "5,2,1" or "521"
    pub sequence: String,
}

pub fn execute(args: ReplayArgs) -> Result<()> {
    let pits = parse_pit_sequence(&args.sequence)?;
    let attempt = replay(&pits, &SearchConfig::default())?;

    print_section(&format!("Replay {}", attempt.sequence_label()));
    println!("Opening:");
    println!("{}", Board::opening());

    for (step, mv) in attempt.moves.iter().enumerate() {
        println!("\nMove {} (pit {}):", step + 1, mv.pit);
        println!("{}", mv.after);
    }

    println!();
    let ending = match attempt.ending {
        Ending::Capture { pit, captured } => {
            format!("capture at pit {pit} ({captured} stones)")
        }
        Ending::Exhausted => "player's side exhausted".to_string(),
    };
    print_kv("Ending", &ending);
    print_kv("Score", &attempt.score.to_string());

    Ok(())
}

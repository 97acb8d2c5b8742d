//! Context scoring command.

use clap::Args;

use coachkit_core::scoring::{self, Category};
use coachkit_core::Config;

use super::ContextArgs;

#[derive(Args)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub context: ContextArgs,
    /// Emit scores as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let context = args.context.build(config.display.timezone_offset_hours)?;
    let scores = scoring::evaluate(&context);

    if args.json || config.display.json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
        return Ok(());
    }

    println!("=== Context Scores (hour {:02}) ===\n", context.hour());
    for category in Category::ALL {
        let score = scores.get(category);
        let bar_length = (score * 30.0) as usize;
        let bar = "█".repeat(bar_length);
        let empty = " ".repeat(30 - bar_length);
        println!("{:>12} {}{} {:.0}%", category.name(), bar, empty, score * 100.0);
    }

    let (best, relevance) = scores.best();
    println!("\nMost relevant: {} ({:.0}%)", best.name(), relevance * 100.0);
    Ok(())
}

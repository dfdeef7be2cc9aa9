extern crate bluff_odds;

mod common;

use bluff_odds::core::CardSet;
use bluff_odds::solver::{Catalog, Combination, Solver};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "odds_table",
    about = "Print exact combination probabilities for a known hand",
    long_about = "Print the exact probability of every catalog combination once a number of\n\
                  unknown cards join a known hand. Cards are written rank then suit, e.g.\n\
                  `9sTs` or `9♠T♠`."
)]
struct Args {
    #[command(flatten)]
    log: common::LogArgs,

    /// Cards already known (e.g. "AsKh"). Empty for none.
    #[arg(default_value = "")]
    hand: String,

    /// Number of unknown cards that will be revealed
    #[arg(short = 'n', long, default_value_t = 5)]
    draw: usize,

    /// Only show these combinations (catalog names, e.g. pair_A)
    #[arg(short = 'c', long = "combination")]
    combinations: Vec<String>,

    /// Only show the most likely combinations
    #[arg(long)]
    top: Option<usize>,

    /// Print the table as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.log.init();

    let hand: CardSet = args.hand.parse()?;
    let solver = Solver::new(hand, args.draw)?;
    let filter = args
        .combinations
        .iter()
        .map(|name| name.parse::<Combination>())
        .collect::<Result<Vec<_>, _>>()?;

    info!(%hand, draw = args.draw, "Computing odds table");
    let mut table = Catalog::global().odds(&solver);
    if !filter.is_empty() {
        table.retain(|row| filter.contains(&row.combination));
    }
    if let Some(top) = args.top {
        // Stable sort keeps catalog order between equal probabilities.
        table.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        table.truncate(top);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    println!("Hand: [{hand}]  unknown cards: {}", args.draw);
    println!("{:<16} {:>22} {:>10}", "combination", "odds", "percent");
    for row in &table {
        let odds = row.odds.reduced();
        println!(
            "{:<16} {:>22} {:>9.4}%",
            row.combination.to_string(),
            odds.to_string(),
            row.probability * 100.0
        );
    }
    Ok(())
}

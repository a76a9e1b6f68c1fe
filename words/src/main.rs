//! The `ladder` CLI: solve a word-ladder instance from the command line.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::fmt::SubscriberBuilder;

use ladder_search::engine::AStar;
use ladder_words::dict::Dictionary;
use ladder_words::morph::{HeuristicMode, WordMorph};
use ladder_words::report::LadderReport;

#[derive(Parser)]
#[command(name = "ladder")]
#[command(about = "Morph one word into another, one letter at a time, through real words")]
struct Cmd {
    /// Heuristic mode
    #[arg(long, value_enum, default_value_t = HeuristicArg::Null)]
    heuristic: HeuristicArg,

    /// Dictionary file, one word per line
    #[arg(long, default_value = "words.txt")]
    dict: PathBuf,

    /// Emit the report as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// The word to start from
    start: String,

    /// The word to reach
    goal: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicArg {
    /// h(state) = 0 (uniform-cost search)
    Null,
    /// Edit distance to the goal word
    EditDistance,
}

impl From<HeuristicArg> for HeuristicMode {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Null => HeuristicMode::Null,
            HeuristicArg::EditDistance => HeuristicMode::EditDistance,
        }
    }
}

/// Lowercase both words and reject a length mismatch up front.
fn normalize(start: &str, goal: &str) -> Result<(String, String)> {
    let start = start.to_lowercase();
    let goal = goal.to_lowercase();
    if start.chars().count() != goal.chars().count() {
        bail!("words must be the same length: {start:?} vs {goal:?}");
    }
    Ok((start, goal))
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();

    let (start, goal) = normalize(&cmd.start, &cmd.goal)?;

    let dict = Dictionary::load(&cmd.dict, start.chars().count())
        .with_context(|| format!("loading dictionary {}", cmd.dict.display()))?;
    tracing::info!(words = dict.len(), word_len = dict.word_len(), "dictionary loaded");

    let domain = WordMorph::new(dict, goal.clone(), cmd.heuristic.into());
    let mut engine = AStar::new(domain, start.clone());
    tracing::info!(%start, %goal, "starting search");

    if !engine.search()? {
        if cmd.json {
            println!("{}", serde_json::json!({ "found": false }));
        } else {
            println!("Search failed -- no route between those words");
        }
        std::process::exit(1);
    }

    let report = LadderReport {
        nodes: engine.num_nodes(),
        // NoData only when start == goal (nothing was expanded).
        branching_factor: engine.branching_factor().ok(),
        cost: engine.path_cost()?,
        path: engine.result_path()?,
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report.json())?);
    } else {
        println!("{}", report.text());
    }
    Ok(())
}

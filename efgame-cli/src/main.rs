#[no_link]
extern crate git_version;

use std::fs::File;
use std::io::Write;
use std::process::exit;
use std::time::Instant;

use humantime::format_duration;

use efgame_engine::algorithms::game_strategy::format::MovesWithFormatting;
use efgame_engine::algorithms::game_strategy::{find_duplicator_strategy, GameOutcome};
use efgame_engine::game_structure::{Graph, RawGraph, VertexId};

use crate::args::parse_arguments;
use crate::load::load_raw_graph;
use crate::options::{CliOptions, SubcommandOption};

mod args;
mod load;
mod options;

#[tracing::instrument]
fn main() {
    if let Err(msg) = main_inner() {
        println!("{}", msg);
        exit(1);
    }
}

fn main_inner() -> Result<(), String> {
    let options = parse_arguments()?;

    match options.subcommand {
        SubcommandOption::Solve => solve(&options),
        SubcommandOption::Demo => demo(),
    }
}

fn solve(options: &CliOptions) -> Result<(), String> {
    let g1 = Graph::symmetric_closure(&load_raw_graph(&options.graph1_path)?);
    let g2 = Graph::symmetric_closure(&load_raw_graph(&options.graph2_path)?);

    if !options.quiet && !options.initial_moves.is_empty() {
        println!(
            "Initial position: {}",
            MovesWithFormatting(&options.initial_moves)
        );
    }

    let now = Instant::now();
    let outcome = find_duplicator_strategy(options.rounds, &g1, &g2, &options.initial_moves)
        .map_err(|err| err.to_string())?;

    if !options.quiet {
        println!(
            "Time elapsed searching: {}ms ({})",
            now.elapsed().as_millis(),
            format_duration(now.elapsed())
        );
    }
    println!("{}", outcome);

    if let (Some(path), Some(strategy)) = (&options.output_path, outcome.strategy()) {
        let json = serde_json::to_string_pretty(strategy)
            .map_err(|err| format!("Failed to serialize strategy. {}", err))?;
        let mut file = File::create(path)
            .map_err(|err| format!("Failed to create output file. {}", err))?;
        file.write_all(json.as_bytes())
            .map_err(|err| format!("Failed to write to output file. {}", err))?;
    }

    Ok(())
}

/// Runs the 2-round game on the built-in teaching graphs and prints the
/// resulting strategy as JSON
fn demo() -> Result<(), String> {
    let g1 = Graph::symmetric_closure(
        &RawGraph::new()
            .declare(1, vec![2, 3])
            .declare(2, vec![3, 4, 5])
            .declare(3, vec![4, 5])
            .declare(4, vec![5]),
    );
    let g2 = Graph::symmetric_closure(
        &RawGraph::new()
            .declare("a", vec!["b", "c"])
            .declare("b", vec!["c", "d", "e"])
            .declare("c", Vec::<VertexId>::new())
            .declare("d", vec!["e"]),
    );

    let outcome = find_duplicator_strategy(2, &g1, &g2, &[]).map_err(|err| err.to_string())?;
    match &outcome {
        GameOutcome::DuplicatorWins(strategy) => {
            let json = serde_json::to_string_pretty(strategy)
                .map_err(|err| format!("Failed to serialize strategy. {}", err))?;
            println!("{}", json);
        }
        GameOutcome::SpoilerWins => println!("{}", outcome),
    }
    Ok(())
}

use std::fmt::{Display, Formatter};

use joinery::prelude::*;

use crate::algorithms::game_strategy::{DuplicatorStrategy, GameOutcome, Response};
use crate::moves::Move;

/// A wrapper for displaying a sequence of moves as a single comma-joined line.
pub struct MovesWithFormatting<'a>(pub &'a [Move]);

impl<'a> Display for MovesWithFormatting<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join_with(", "))
    }
}

impl Display for GameOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::DuplicatorWins(strategy) if strategy.is_empty() => {
                write!(f, "Duplicator wins without moving")
            }
            GameOutcome::DuplicatorWins(strategy) => {
                writeln!(f, "Duplicator wins:")?;
                write!(f, "{}", strategy)
            }
            GameOutcome::SpoilerWins => write!(f, "Spoiler wins; no duplicator strategy exists"),
        }
    }
}

impl Display for DuplicatorStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fmt_level(self, f, 0)
    }
}

/// One line per covered Spoiler pick, nested strategies indented below their
/// round. Entries are sorted by canonical key so the rendering is stable
/// despite the map's iteration order.
fn fmt_level(
    strategy: &DuplicatorStrategy,
    f: &mut Formatter<'_>,
    indent: usize,
) -> std::fmt::Result {
    let mut entries: Vec<_> = strategy.iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (pick, response) in entries {
        match response {
            Response::Terminal(answer) => {
                writeln!(f, "{:indent$}{} -> {}", "", pick, answer, indent = indent)?;
            }
            Response::Continue(answer, sub) => {
                writeln!(f, "{:indent$}{} -> {}, then:", "", pick, answer, indent = indent)?;
                fmt_level(sub, f, indent + 2)?;
            }
        }
    }
    Ok(())
}

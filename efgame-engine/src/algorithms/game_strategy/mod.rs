use std::collections::{HashMap, HashSet};

use crate::algorithms::game_strategy::error::Error;
use crate::algorithms::partial_iso::is_partial_iso;
use crate::game_structure::{Graph, VertexId};
use crate::moves::{is_vertex_used, reverse_all, Move};

pub mod error;
pub mod format;

/// A single entry of a [DuplicatorStrategy]: Duplicator's answer to one
/// Spoiler pick. Tagged explicitly so pattern matching is unambiguous;
/// serialization stays compact (a bare id, or an `[id, {..}]` pair).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    /// The answer for the final round; no further rounds remain.
    Terminal(VertexId),
    /// The answer together with the strategy covering the remaining rounds.
    Continue(VertexId, DuplicatorStrategy),
}

impl Response {
    /// The vertex Duplicator answers with.
    pub fn vertex(&self) -> &VertexId {
        match self {
            Response::Terminal(vertex) => vertex,
            Response::Continue(vertex, _) => vertex,
        }
    }

    /// The strategy for the remaining rounds, if any remain.
    pub fn continuation(&self) -> Option<&DuplicatorStrategy> {
        match self {
            Response::Terminal(_) => None,
            Response::Continue(_, sub) => Some(sub),
        }
    }
}

/// Duplicator's precomputed answers from one game position. One map jointly
/// covers Spoiler picks originating from either graph; keys never collide
/// since well-formed inputs have disjoint vertex sets.
///
/// The empty strategy is a *win* requiring zero further moves. It is not the
/// "no strategy exists" outcome, which is [GameOutcome::SpoilerWins].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DuplicatorStrategy {
    responses: HashMap<VertexId, Response>,
}

impl DuplicatorStrategy {
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Duplicator's answer to the given Spoiler pick, if the pick is covered.
    pub fn response(&self, spoiler_pick: &VertexId) -> Option<&Response> {
        self.responses.get(spoiler_pick)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VertexId, &Response)> {
        self.responses.iter()
    }

    fn insert(&mut self, spoiler_pick: VertexId, response: Response) {
        self.responses.insert(spoiler_pick, response);
    }
}

/// The decided outcome of the k-round game from a given position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameOutcome {
    /// Duplicator survives all k rounds; the witness strategy says how.
    DuplicatorWins(DuplicatorStrategy),
    /// Some sequence of Spoiler picks has no consistent answer within k rounds.
    SpoilerWins,
}

impl GameOutcome {
    pub fn is_duplicator_win(&self) -> bool {
        matches!(self, GameOutcome::DuplicatorWins(_))
    }

    pub fn strategy(&self) -> Option<&DuplicatorStrategy> {
        match self {
            GameOutcome::DuplicatorWins(strategy) => Some(strategy),
            GameOutcome::SpoilerWins => None,
        }
    }
}

/// Searches for a Duplicator strategy covering `k` further rounds of the
/// Ehrenfeucht-Fraisse pebble game from the position given by
/// `initial_moves`.
///
/// Each round Spoiler picks an unplaced vertex from either graph and
/// Duplicator must answer with an unplaced vertex from the other graph such
/// that the extended position stays a partial isomorphism. The search commits
/// the first answer, in the graphs' enumeration order, that is both
/// immediately consistent and recursively winning; it makes no attempt to
/// find all winning answers or a "best" one.
///
/// Work is exponential in `k` and the vertex counts, with no memoization.
/// That is the intended operating range: small teaching-scale graphs.
///
/// Fails with [Error::ReusedVertex] if `initial_moves` places some vertex
/// twice. Duplicator having no winning strategy is a regular outcome, not an
/// error.
pub fn find_duplicator_strategy(
    k: u32,
    g1: &Graph,
    g2: &Graph,
    initial_moves: &[Move],
) -> Result<GameOutcome, Error> {
    check_initial_moves(initial_moves)?;
    debug!(k, initial_moves = initial_moves.len(), "starting duplicator strategy search");

    let outcome = match search(k, g1, g2, initial_moves) {
        Some(strategy) => GameOutcome::DuplicatorWins(strategy),
        None => GameOutcome::SpoilerWins,
    };
    Ok(outcome)
}

fn check_initial_moves(moves: &[Move]) -> Result<(), Error> {
    let mut used: HashSet<&VertexId> = HashSet::new();
    for mv in moves {
        if !used.insert(&mv.left) {
            return Err(Error::ReusedVertex(mv.left.clone()));
        }
        if !used.insert(&mv.right) {
            return Err(Error::ReusedVertex(mv.right.clone()));
        }
    }
    Ok(())
}

/// Recursive minimax over Spoiler's picks. Returns `None` as soon as any
/// pick, at any depth, is left without a winning answer.
fn search(k: u32, g1: &Graph, g2: &Graph, moves: &[Move]) -> Option<DuplicatorStrategy> {
    let mut strategy = DuplicatorStrategy::default();
    if k == 0 {
        // Zero rounds left to survive; the empty strategy wins
        return Some(strategy);
    }

    // Spoiler may pick from either graph, so both directions must succeed
    // independently and merge into one map
    if !cover_spoiler_picks(&mut strategy, k, g1, g2, moves) {
        return None;
    }
    let reversed = reverse_all(moves);
    if !cover_spoiler_picks(&mut strategy, k, g2, g1, &reversed) {
        return None;
    }

    Some(strategy)
}

/// Finds an answer for every unplaced Spoiler pick in `spoiler_graph`,
/// recording it in `strategy`. `moves` is oriented spoiler side first.
/// Returns false if some pick has no winning answer, in which case Spoiler
/// wins by making exactly that pick.
fn cover_spoiler_picks(
    strategy: &mut DuplicatorStrategy,
    k: u32,
    spoiler_graph: &Graph,
    duplicator_graph: &Graph,
    moves: &[Move],
) -> bool {
    for pick in spoiler_graph.vertices() {
        if is_vertex_used(moves, pick) {
            continue;
        }
        match find_response(k, spoiler_graph, duplicator_graph, moves, pick) {
            Some(response) => strategy.insert(pick.clone(), response),
            None => {
                trace!(%pick, k, "spoiler pick has no winning answer");
                return false;
            }
        }
    }
    true
}

/// Tries Duplicator's candidates in enumeration order and returns the first
/// that keeps the position consistent and wins the remaining `k - 1` rounds.
fn find_response(
    k: u32,
    spoiler_graph: &Graph,
    duplicator_graph: &Graph,
    moves: &[Move],
    pick: &VertexId,
) -> Option<Response> {
    for candidate in duplicator_graph.vertices() {
        if candidate == pick || is_vertex_used(moves, candidate) {
            continue;
        }

        // Each branch extends its own copy of the position; sibling branches
        // never observe each other's attempts
        let mut extended = moves.to_vec();
        extended.push(Move::new(pick.clone(), candidate.clone()));

        if !is_partial_iso(spoiler_graph, duplicator_graph, &extended) {
            continue;
        }

        // Consistent this round, but the answer must also survive the rest
        // of the game
        if let Some(sub) = search(k - 1, spoiler_graph, duplicator_graph, &extended) {
            trace!(%pick, %candidate, k, "committed answer");
            let response = if sub.is_empty() {
                Response::Terminal(candidate.clone())
            } else {
                Response::Continue(candidate.clone(), sub)
            };
            return Some(response);
        }
    }
    None
}

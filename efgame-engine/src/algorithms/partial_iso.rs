use crate::game_structure::Graph;
use crate::moves::{reverse_all, Move};

/// Decides whether the committed moves form a partial isomorphism, i.e.
/// whether mapping every move's left vertex to its right vertex preserves
/// both adjacency and non-adjacency between the two graphs.
///
/// Both directions must be scanned. A single scan only tests edges induced
/// from the left graph's side; an edge of `g2` between two mapped vertices
/// whose counterparts in `g1` carry no edge would never be derived by it, so
/// the same scan runs again with the graphs and move orientation swapped.
///
/// This check only covers the given partial mapping. It says nothing about
/// connectivity of unmapped vertices, and it is not an isomorphism test.
pub fn is_partial_iso(g1: &Graph, g2: &Graph, moves: &[Move]) -> bool {
    check_direction(g1, g2, moves) && check_direction(g2, g1, &reverse_all(moves))
}

/// One-directional scan: every ordered pair of distinct moves must agree on
/// adjacency across the two graphs. Returns false on the first violation.
/// The scan order never affects the result, only how early it short-circuits.
fn check_direction(ga: &Graph, gb: &Graph, moves: &[Move]) -> bool {
    for mv in moves {
        for other in moves {
            // A vertex is never compared against itself
            if mv.left == other.left {
                continue;
            }
            if ga.has_edge(&mv.left, &other.left) != gb.has_edge(&mv.right, &other.right) {
                return false;
            }
        }
    }
    true
}

use std::fmt::{Display, Formatter};

use crate::game_structure::VertexId;

/// One committed correspondence of the pebble game: a pebble pair placed on
/// `left`, a vertex of the first graph, and `right`, a vertex of the second.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Move {
    pub left: VertexId,
    pub right: VertexId,
}

impl Move {
    pub fn new<L: Into<VertexId>, R: Into<VertexId>>(left: L, right: R) -> Self {
        Move {
            left: left.into(),
            right: right.into(),
        }
    }

    /// The same correspondence seen from the other graph's side.
    pub fn reversed(&self) -> Move {
        Move {
            left: self.right.clone(),
            right: self.left.clone(),
        }
    }

    /// True iff `vertex` occurs on either side of this move.
    pub fn touches(&self, vertex: &VertexId) -> bool {
        self.left == *vertex || self.right == *vertex
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}

/// Reverses every move, giving the same position oriented from the second
/// graph's side.
pub fn reverse_all(moves: &[Move]) -> Vec<Move> {
    moves.iter().map(Move::reversed).collect()
}

/// True iff `vertex` was already placed by some move, on either side.
/// Comparison is by canonical form, as everywhere.
pub fn is_vertex_used(moves: &[Move], vertex: &VertexId) -> bool {
    moves.iter().any(|mv| mv.touches(vertex))
}

use std::fmt::{Display, Formatter};

use crate::game_structure::VertexId;

/// Error produced when the strategy search is given a malformed position.
/// Running out of winning answers is not an error; that outcome is
/// [GameOutcome::SpoilerWins](crate::algorithms::game_strategy::GameOutcome).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A vertex occurs in more than one initial move, or on both sides of one.
    ReusedVertex(VertexId),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ReusedVertex(vertex) => write!(
                f,
                "Vertex '{}' is placed by more than one initial move",
                vertex
            ),
        }
    }
}

impl std::error::Error for Error {}

#[macro_use]
extern crate serde;
#[macro_use]
extern crate tracing;

pub mod algorithms;
pub mod game_structure;
pub mod moves;

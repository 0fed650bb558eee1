use efgame_engine::moves::Move;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SubcommandOption {
    Solve,
    Demo,
}

/// Parsed command line options. Filled in by [parse_arguments](crate::args::parse_arguments).
#[derive(Debug)]
pub struct CliOptions {
    pub subcommand: SubcommandOption,
    pub graph1_path: String,
    pub graph2_path: String,
    pub rounds: u32,
    pub initial_moves: Vec<Move>,
    pub output_path: Option<String>,
    pub quiet: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            subcommand: SubcommandOption::Demo,
            graph1_path: String::new(),
            graph2_path: String::new(),
            rounds: 0,
            initial_moves: Vec::new(),
            output_path: None,
            quiet: false,
        }
    }
}

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use git_version::git_version;

use efgame_engine::game_structure::RawId;
use efgame_engine::moves::Move;

use crate::options::{CliOptions, SubcommandOption};

const PKG_NAME: &str = env!("CARGO_PKG_NAME");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const GIT_VERSION: &str = git_version!(fallback = "unknown");

/// Define and parse command line arguments
pub fn parse_arguments() -> Result<CliOptions, String> {
    let version_text = format!("{} ({})", VERSION, GIT_VERSION);
    let authors = AUTHORS.replace(':', "\n");
    let app = App::new(PKG_NAME)
        .version(version_text.as_str())
        .author(authors.as_str())
        .arg(
            Arg::with_name("log_filter")
                .short("l")
                .long("log-filter")
                .env("RUST_LOG")
                .default_value("warn")
                .global(true)
                .help("Comma separated list of filter directives"),
        )
        .subcommand(
            SubCommand::with_name("solve")
                .about("Decides who wins the k-round pebble game on two graphs")
                .add_positional_graph_args()
                .add_rounds_arg()
                .add_moves_arg()
                .add_positional_output_arg()
                .add_quiet_arg(),
        )
        .subcommand(
            SubCommand::with_name("demo")
                .about("Runs the 2-round game on the built-in teaching graphs"),
        )
        .setting(AppSettings::SubcommandRequiredElseHelp);

    let arg_matches = app.get_matches();

    setup_tracing(&arg_matches)?;

    let mut options = CliOptions::default();
    match arg_matches.subcommand() {
        ("solve", Some(args)) => {
            options.subcommand = SubcommandOption::Solve;
            options.graph1_path = args.value_of("graph1_path").unwrap().to_string();
            options.graph2_path = args.value_of("graph2_path").unwrap().to_string();
            options.rounds = parse_rounds_arg(args)?;
            options.initial_moves = parse_moves_arg(args)?;
            options.output_path = args.value_of("output").map(|s| s.to_string());
            options.quiet = args.is_present("quiet");
        }
        ("demo", Some(_)) => {
            options.subcommand = SubcommandOption::Demo;
        }
        _ => unreachable!("Unhandled subcommand"),
    }

    Ok(options)
}

/// Parse the required number of game rounds
fn parse_rounds_arg(args: &ArgMatches) -> Result<u32, String> {
    args.value_of("rounds")
        .unwrap()
        .parse()
        .map_err(|err| format!("Invalid number of rounds. {}", err))
}

/// Parse the initial moves argument if given: a JSON list of pairs such as
/// '[[3, "c"], [1, "e"]]', the first id of each pair naming a vertex of the
/// first graph and the second a vertex of the second graph
fn parse_moves_arg(args: &ArgMatches) -> Result<Vec<Move>, String> {
    match args.value_of("moves") {
        None => Ok(Vec::new()),
        Some(raw) => {
            let pairs: Vec<(RawId, RawId)> = serde_json::from_str(raw)
                .map_err(|err| format!("Invalid initial moves. {}", err))?;
            Ok(pairs
                .into_iter()
                .map(|(left, right)| Move::new(left, right))
                .collect())
        }
    }
}

fn setup_tracing(args: &ArgMatches) -> Result<(), String> {
    // Configure a filter for tracing data if one have been set
    if let Some(filter) = args.value_of("log_filter") {
        let filter = tracing_subscriber::EnvFilter::try_new(filter)
            .map_err(|err| format!("Invalid log filter.\n{}", err))?;
        tracing_subscriber::fmt().with_env_filter(filter).init()
    } else {
        tracing_subscriber::fmt().init()
    }
    Ok(())
}

/// Trait that allows us to easily add common arguments to the CLI, avoiding duplicate code while
/// remaining flexible in terms of which subcommands have which arguments
pub(crate) trait CommonArgs {
    fn add_positional_graph_args(self) -> Self;
    fn add_rounds_arg(self) -> Self;
    fn add_moves_arg(self) -> Self;
    fn add_positional_output_arg(self) -> Self;
    fn add_quiet_arg(self) -> Self;
}

/// Add the common arguments to clap::App
impl CommonArgs for App<'_, '_> {
    /// Adds both graph paths as required positional arguments
    fn add_positional_graph_args(self) -> Self {
        self.arg(
            Arg::with_name("graph1_path")
                .help("Path to the first graph (JSON adjacency object)")
                .required(true),
        )
        .arg(
            Arg::with_name("graph2_path")
                .help("Path to the second graph (JSON adjacency object)")
                .required(true),
        )
    }

    /// Adds "-k"/"--rounds" as a required argument
    fn add_rounds_arg(self) -> Self {
        self.arg(
            Arg::with_name("rounds")
                .short("k")
                .long("rounds")
                .takes_value(true)
                .required(true)
                .help("Number of game rounds"),
        )
    }

    /// Adds "-m"/"--moves" as an optional argument
    fn add_moves_arg(self) -> Self {
        self.arg(
            Arg::with_name("moves")
                .short("m")
                .long("moves")
                .takes_value(true)
                .help("Initial position as a JSON list of vertex pairs"),
        )
    }

    /// Adds output as an optional positional argument
    fn add_positional_output_arg(self) -> Self {
        self.arg(
            Arg::with_name("output")
                .help("Path to write the strategy to as JSON"),
        )
    }

    /// Adds "-q"/"--quiet" as an argument
    fn add_quiet_arg(self) -> Self {
        self.arg(
            Arg::with_name("quiet")
                .short("q")
                .takes_value(false)
                .long("quiet")
                .help("Suppress timing output"),
        )
    }
}

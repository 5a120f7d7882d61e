use clap::{Parser, Subcommand};
use vslwatch_core::cli::{self, WatchArgs, config::ConfigCmd};
use vslwatch_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "vslwatch",
    version,
    about = "vslwatch: follow varnishlog output one request at a time",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    watch: WatchArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Settings file tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let result = match cli.command {
        Some(Command::Config { cmd }) => cli::config::run(cmd),
        None => cli::run_watch(cli.watch),
    };

    if let Err(e) = result {
        eprintln!("vslwatch: {e:#}");
        std::process::exit(1);
    }
}

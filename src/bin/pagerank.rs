use clap::Parser;
use colored::Colorize;
use pagerank_core::cli::{self, Cli};
use pagerank_core::exit::RankExit;

fn main() -> RankExit {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(RankExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            RankExit::from_error(&e)
        }
    }
}

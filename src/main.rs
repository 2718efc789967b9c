use algos::cli::{Cli, Commands};
use algos::cli_handlers;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Toposort { graph, verify } => {
            cli_handlers::handle_toposort(&graph, verify, cli.json)
        }
        Commands::Bfs { graph, start } => cli_handlers::handle_bfs(&graph, start, cli.json),
        Commands::Search { target, values } => {
            cli_handlers::handle_search(target, &values, cli.json)
        }
        Commands::Sort { algorithm, values } => {
            cli_handlers::handle_sort(algorithm, &values, cli.json)
        }
        Commands::Demo => cli_handlers::handle_demo(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

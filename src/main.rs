//! huntseed - seed, reset and inspect test data in a running job-hunt API

use clap::{CommandFactory, Parser};

mod cli;
mod client;
mod config;
mod error;
mod fixtures;
mod loader;
mod output;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

// Requests are awaited one at a time; a single thread is enough
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "huntseed=debug" } else { "huntseed=info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Seed(args) => cli::seed::run(&opts, &args).await,
        Commands::Reset { only } => cli::reset::run(&opts, only).await,
        Commands::Dump { collection, auth } => cli::dump::run(&opts, collection, auth).await,
        Commands::Explore {
            method,
            path,
            body,
            auth,
        } => cli::explore::run(&opts, method, &path, body.as_ref(), auth).await,
        Commands::Shell { auth } => cli::shell::run(&opts, auth).await,
        Commands::Fixtures => cli::fixtures::run(&opts),
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "huntseed", &mut std::io::stdout());
            Ok(())
        }
    }
}

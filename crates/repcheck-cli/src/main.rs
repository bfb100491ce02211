mod config;
mod display;

use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use repcheck_cicero::{CiceroClient, PlacesLoader, QueryExecutor, QueryState};
use repcheck_core::ResultsView;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "repcheck",
    version,
    about = "Know your squad. From City Hall to Capitol Hill."
)]
struct Cli {
    /// Output machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    config: config::Config,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up the officials representing an address
    Lookup {
        /// Resolve the address through Places autocomplete first
        #[arg(long)]
        autocomplete: bool,

        /// Full address works best (123 Main St, City, State ZIP)
        address: Vec<String>,
    },
    /// Suggest complete addresses for a partial one
    Suggest { input: Vec<String> },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!("repcheck v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Lookup {
            autocomplete,
            address,
        } => lookup(&cli.config, cli.json, autocomplete, &address.join(" ")).await,
        Command::Suggest { input } => {
            let places = PlacesLoader::new(cli.config.places());
            let suggestions = places.suggest(&input.join(" ")).await;
            display::print_suggestions(cli.json, &suggestions)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn lookup(
    config: &config::Config,
    json: bool,
    autocomplete: bool,
    address: &str,
) -> anyhow::Result<ExitCode> {
    // Blank input never reaches Cicero, so it needs no credentials.
    if address.trim().is_empty() {
        display::print_empty_state(json)?;
        return Ok(ExitCode::SUCCESS);
    }
    let executor = QueryExecutor::new(CiceroClient::new(config.endpoint()?));

    let address = if autocomplete {
        PlacesLoader::new(config.places()).resolve(address).await
    } else {
        address.to_string()
    };

    let mut states = executor.subscribe();
    let submit = executor.submit(&address);
    tokio::pin!(submit);
    let submission = loop {
        tokio::select! {
            outcome = &mut submit => break outcome,
            Ok(()) = states.changed() => {
                if states.borrow_and_update().is_loading() && !json {
                    display::print_loading();
                }
            }
        }
    };
    tracing::debug!(?submission, "lookup finished");

    match executor.state() {
        QueryState::Idle => {
            display::print_empty_state(json)?;
            Ok(ExitCode::SUCCESS)
        }
        QueryState::Loading => {
            // submit only returns after leaving Loading
            display::print_loading();
            Ok(ExitCode::SUCCESS)
        }
        QueryState::Success {
            normalized_address,
            officials,
        } => {
            let view = ResultsView::build(&normalized_address, &officials);
            display::print_results(json, &view)?;
            Ok(ExitCode::SUCCESS)
        }
        QueryState::Failure { message } => {
            display::print_error(json, &message)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, error};

use travel_advisor::{AdvisorConfig, BudgetTier, InterestCategory, interactive, logging, render};

/// Travel & Visa Consultant: destination recommendations from a rule-based knowledge base
#[derive(Parser, Debug)]
#[command(name = "travel-advisor", version, about)]
struct Cli {
    /// Configuration file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Knowledge base file to consult at startup
    #[arg(long, short = 'k', global = true)]
    knowledge_base: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search once and print the matching destinations
    Search {
        /// Budget tier: low, medium or high
        #[arg(long, short)]
        budget: Option<BudgetTier>,

        /// Interest: beach, nature, history, shopping or city
        #[arg(long, short)]
        interest: Option<InterestCategory>,

        /// Print the destinations as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the available budgets and interests
    Options,
    /// Fill in the search form line by line (default)
    Interactive,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = AdvisorConfig::load_from_path(cli.config.clone())?;
    if let Some(path) = cli.knowledge_base {
        config.knowledge_base.path = path;
    }
    logging::init(&config.logging, cli.verbose)?;
    debug!("Using configuration: {:?}", config);

    let mut advisor = match travel_advisor::start(&config) {
        Ok(advisor) => advisor,
        Err(e) => {
            error!("Startup failed: {}", e);
            eprintln!("Error: {}", e.user_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Search {
            budget,
            interest,
            json,
        } => {
            if let Some(budget) = budget {
                advisor.select_budget(budget);
            }
            if let Some(interest) = interest {
                advisor.select_interest(interest);
            }
            let outcome = advisor.search();
            if json {
                let text = serde_json::to_string_pretty(outcome.records())
                    .context("Failed to serialize destinations")?;
                println!("{text}");
            } else {
                print!("{}", render::outcome(&outcome));
            }
        }
        Command::Options => {
            let state = advisor.state();
            print!("{}", render::budget_options(&state));
            print!("{}", render::interest_options(&state));
        }
        Command::Interactive => {
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            interactive::run(&mut advisor, stdin.lock(), &mut stdout)
                .context("Interactive session failed")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

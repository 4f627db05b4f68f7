//! AOC CLI - Command-line interface for the Advent of Code daily workflow

mod cli;
mod config;
mod error;
mod output;
mod solver;

use aoc_kit::SubmitOptions;
use clap::Parser;
use cli::{Args, Commands};
use config::Config;
use error::CliError;
use output::OutputFormatter;
use solver::CommandSolver;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run the selected command; `Ok(false)` means a test or submission did not go through
fn run(args: Args) -> Result<bool, CliError> {
    let config = Config::from_args(args)?;
    let formatter = OutputFormatter::new(config.quiet);
    let (day, year) = (config.day, config.year);

    match &config.command {
        Commands::Open => {
            let url = config.kit(None)?.open_day(day, year)?;
            formatter.print_opened(&url);
        }
        Commands::Fetch => {
            let input = config.kit(None)?.fetch_day_input(day, year)?;
            formatter.print_input(&input);
        }
        Commands::Save { path } => {
            let written = config.kit(None)?.save_day_input(path.as_deref(), day, year)?;
            formatter.print_written("Input", &written);
        }
        Commands::Scaffold {
            path,
            part,
            template,
        } => {
            let kit = config.kit(template.as_deref())?;
            let written = kit.scaffold_day(path.as_deref(), *part, day, year)?;
            formatter.print_written("Solution", &written);
        }
        Commands::Test {
            expected,
            test_path,
            solver,
        } => {
            let mut solver = CommandSolver::new(solver)?;
            let passed =
                config
                    .kit(None)?
                    .run_test(&mut solver, *expected, test_path, config.verbose())?;
            formatter.print_test(passed);
            return Ok(passed);
        }
        Commands::Submit {
            part,
            input,
            no_test,
            test_path,
            expected,
            solver,
        } => {
            let mut solver = CommandSolver::new(solver)?;
            let mut options = SubmitOptions::new(*part)
                .input_path(input)
                .test(!no_test)
                .test_path(test_path)
                .test_expected(*expected)
                .verbose(config.verbose());
            options.day = day;
            options.year = year;

            let outcome = config.kit(None)?.submit(&mut solver, &options)?;
            formatter.print_submission(&outcome);
            return Ok(outcome.succeeded());
        }
    }

    Ok(true)
}

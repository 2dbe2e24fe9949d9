use clap::Parser;

use grid_search::config::Config;
use grid_search::prompt::Prompter;
use grid_search::simulation::{self, Simulation};
use grid_search::{Agent, AgentKind, Grid};
use std::error::Error;
use std::io;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn init_logging(quiet: bool) {
    let default = if quiet { "warn" } else { "grid_search=info,warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let (grid, kind) = if config.interactive {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        let grid = prompter.grid()?;
        (grid, Some(prompter.agent_kind()?))
    } else {
        (simulation::build_grid(&config)?, config.agent.kind())
    };

    if !config.quiet {
        println!("Starting grid search...");
        println!("Grid size: {}x{}", grid.width(), grid.height());
        println!("Start: {}, Goal: {}", grid.start(), grid.goal());
        println!("Walls: {}", grid.walls().count());
        if config.no_visualization {
            println!("Visualization disabled - running in fast mode");
        } else {
            println!("Visualization enabled with {}ms delay", config.delay_ms);
        }
        println!();
    }

    let Some(kind) = kind else {
        let reports = Simulation::run_all(&config, &grid)?;
        Simulation::print_comparison_results(&reports);
        return Ok(());
    };

    run_single(config, kind, grid)
}

fn run_single(config: Config, kind: AgentKind, grid: Grid) -> Result<(), Box<dyn Error>> {
    let quiet = config.quiet;
    let mut simulation = Simulation::new(config, Agent::new(kind, grid));
    let report = simulation.run()?;

    println!("\n=== FINAL RESULTS ===");
    println!("{}", report.outcome);
    if !quiet {
        println!("Ticks: {} in {:.2?}", report.ticks, report.elapsed);
        println!("{}", report.stats);
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = Config::parse();
    init_logging(config.quiet);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

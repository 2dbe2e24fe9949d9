use crate::agent::{Agent, AgentKind};
use crate::algorithms::{SearchAgent, StepOutcome};
use crate::config::{Config, MapSource};
use crate::error::{GridError, SearchError};
use crate::grid::Grid;
use crate::render::{self, CLEAR_SCREEN, HIDE_CURSOR, SHOW_CURSOR};
use crate::statistics::SearchStats;
use crate::terrain;
use std::fmt;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// How long the final frame stays up before the summary.
const FINAL_FRAME_PAUSE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    GoalReached,
    /// The frontier emptied without reaching the goal.
    Exhausted,
    MaxIterations,
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            RunOutcome::GoalReached => "Goal reached!",
            RunOutcome::Exhausted => "Search exhausted: the goal is unreachable.",
            RunOutcome::MaxIterations => "Max iterations reached!",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub ticks: usize,
    pub elapsed: Duration,
    pub stats: SearchStats,
}

/// Builds the grid the configuration asks for. Random maps draw a seed
/// when none is given; it is logged so the run can be repeated.
pub fn build_grid(config: &Config) -> Result<Grid, GridError> {
    match config.map {
        MapSource::Preset => terrain::preset_grid(),
        MapSource::Random => {
            let seed = config.seed.unwrap_or_else(rand::random);
            terrain::generate(&config.terrain(), seed)
        }
        MapSource::Custom => Grid::new(
            config.width,
            config.height,
            config.start,
            config.goal,
            &config.walls,
        ),
    }
}

/// Restores the terminal cursor however the run ends.
struct CursorGuard;

impl CursorGuard {
    fn hide() -> Self {
        print!("{}", HIDE_CURSOR);
        CursorGuard
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        print!("{}", SHOW_CURSOR);
    }
}

/// Drives one agent, one step per tick.
pub struct Simulation {
    agent: Agent,
    config: Config,
}

impl Simulation {
    pub fn new(config: Config, agent: Agent) -> Self {
        Simulation { agent, config }
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    fn visualize(&self) -> bool {
        !self.config.no_visualization
    }

    fn draw(&self, tick: usize) {
        print!("{}", CLEAR_SCREEN);
        println!("{}", render::render_frame(&self.agent, tick, true));
    }

    /// Steps until the goal is reached, the frontier empties, or
    /// `max_iterations` ticks have passed.
    pub fn run(&mut self) -> Result<RunReport, SearchError> {
        let kind = self.agent.kind();
        info!(%kind, max_iterations = self.config.max_iterations, "starting search");

        let _cursor = self.visualize().then(CursorGuard::hide);
        let delay = Duration::from_millis(self.config.delay_ms);
        let started = Instant::now();
        let mut ticks = 0;

        if self.visualize() {
            self.draw(ticks);
            thread::sleep(delay);
        }

        let outcome = loop {
            if self.agent.grid().is_finished() {
                break RunOutcome::GoalReached;
            }
            if ticks >= self.config.max_iterations {
                break RunOutcome::MaxIterations;
            }
            if self.agent.step()? == StepOutcome::Exhausted {
                break RunOutcome::Exhausted;
            }
            ticks += 1;

            if self.visualize() {
                self.draw(ticks);
                thread::sleep(delay);
            }
        };
        let elapsed = started.elapsed();

        if self.visualize() {
            println!("{}", outcome);
            thread::sleep(FINAL_FRAME_PAUSE.min(delay * 20));
        }

        match outcome {
            RunOutcome::GoalReached => info!(%kind, ticks, cost = self.agent.cost(), "search finished"),
            RunOutcome::Exhausted => warn!(%kind, ticks, "search exhausted without reaching the goal"),
            RunOutcome::MaxIterations => warn!(%kind, ticks, "iteration limit reached"),
        }

        Ok(RunReport {
            outcome,
            ticks,
            elapsed,
            stats: SearchStats::from_agent(&self.agent),
        })
    }

    /// Runs every strategy on its own copy of `grid`, without visualization.
    pub fn run_all(config: &Config, grid: &Grid) -> Result<Vec<RunReport>, SearchError> {
        let mut config = config.clone();
        config.no_visualization = true;

        AgentKind::ALL
            .iter()
            .map(|&kind| {
                let agent = Agent::new(kind, grid.clone());
                Simulation::new(config.clone(), agent).run()
            })
            .collect()
    }

    /// Prints a comparison table of `run_all` results.
    pub fn print_comparison_results(reports: &[RunReport]) {
        println!("\n=== ALGORITHM COMPARISON RESULTS ===\n");
        println!(
            "{:<15} {:<8} {:<8} {:<8} {:<8} {:<8} {:<10} {:<12}",
            "Algorithm", "Success", "Steps", "Visited", "Edges", "Cost", "Efficiency", "Time"
        );
        println!("{}", "-".repeat(84));

        for report in reports {
            let stats = &report.stats;
            let success = if stats.reached { "✓" } else { "✗" };
            let edges = stats
                .path_edges
                .map_or_else(|| "-".to_string(), |edges| edges.to_string());
            let cost = stats
                .path_cost
                .map_or_else(|| "-".to_string(), |cost| cost.to_string());
            let efficiency = stats
                .route_efficiency()
                .map_or_else(|| "-".to_string(), |e| format!("{:.3}", e));

            println!(
                "{:<15} {:<8} {:<8} {:<8} {:<8} {:<8} {:<10} {:<12}",
                stats.kind.to_string(),
                success,
                stats.steps,
                stats.visited,
                edges,
                cost,
                efficiency,
                format!("{:.2?}", report.elapsed)
            );
        }

        if let Some(first) = reports.first() {
            match (first.stats.optimal_edges, first.stats.optimal_cost) {
                (Some(edges), Some(cost)) => {
                    println!("\nShortest possible: {} steps, cheapest possible: cost {}", edges, cost)
                }
                _ => println!("\nNo path exists between start and goal."),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    fn quiet_config() -> Config {
        Config {
            no_visualization: true,
            ..Config::default()
        }
    }

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn preset_is_solved_by_every_agent() {
        let grid = build_grid(&quiet_config()).unwrap();
        let reports = Simulation::run_all(&quiet_config(), &grid).unwrap();

        assert_eq!(reports.len(), 3);
        for report in &reports {
            assert_eq!(report.outcome, RunOutcome::GoalReached);
            assert!(report.stats.reached);
        }
        assert_eq!(reports[0].stats.path_edges, reports[0].stats.optimal_edges);
        assert_eq!(reports[2].stats.path_cost, reports[2].stats.optimal_cost);
    }

    #[test]
    fn iteration_limit_stops_the_run() {
        let config = Config {
            max_iterations: 3,
            ..quiet_config()
        };
        let grid = build_grid(&config).unwrap();
        let mut simulation = Simulation::new(config, Agent::new(AgentKind::Bfs, grid));

        let report = simulation.run().unwrap();
        assert_eq!(report.outcome, RunOutcome::MaxIterations);
        assert_eq!(report.ticks, 3);
        assert_eq!(simulation.agent().steps(), 3);
        assert_eq!(report.outcome.to_string(), "Max iterations reached!");
    }

    #[test]
    fn walled_off_goal_exhausts() {
        let config = Config {
            map: MapSource::Custom,
            width: 3,
            height: 3,
            start: p(0, 0),
            goal: p(2, 2),
            walls: vec![p(1, 0), p(1, 1), p(1, 2)],
            ..quiet_config()
        };
        let grid = build_grid(&config).unwrap();
        let mut simulation = Simulation::new(config, Agent::new(AgentKind::Ufs, grid));

        let report = simulation.run().unwrap();
        assert_eq!(report.outcome, RunOutcome::Exhausted);
        assert!(!simulation.agent().grid().is_finished());
        assert!(simulation.agent().reconstructed_path().is_empty());
        assert_eq!(report.stats.optimal_edges, None);
    }

    #[test]
    fn random_maps_are_reproducible() {
        let config = Config {
            map: MapSource::Random,
            seed: Some(42),
            ..quiet_config()
        };
        let a = build_grid(&config).unwrap();
        let b = build_grid(&config).unwrap();
        assert_eq!(a.start(), b.start());
        assert_eq!(a.walls().collect::<Vec<_>>(), b.walls().collect::<Vec<_>>());
    }

    #[test]
    fn custom_map_errors_surface() {
        let config = Config {
            map: MapSource::Custom,
            goal: p(0, 0),
            ..quiet_config()
        };
        assert_eq!(
            build_grid(&config).unwrap_err(),
            GridError::StartIsGoal(p(0, 0))
        );
    }
}

use crate::agent::AgentKind;
use crate::grid::Position;
use crate::terrain::TerrainConfig;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentSelection {
    Bfs,
    Dfs,
    Ufs,
    /// Run every strategy on the same grid and compare.
    All,
}

impl AgentSelection {
    pub fn kind(self) -> Option<AgentKind> {
        match self {
            AgentSelection::Bfs => Some(AgentKind::Bfs),
            AgentSelection::Dfs => Some(AgentKind::Dfs),
            AgentSelection::Ufs => Some(AgentKind::Ufs),
            AgentSelection::All => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MapSource {
    /// The built-in 20x20 scenario.
    Preset,
    /// Seeded random walls and mountains.
    Random,
    /// Dimensions, endpoints and walls from the command line.
    Custom,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Step-by-step grid search visualizer", long_about = None)]
pub struct Config {
    #[arg(long, value_enum, default_value_t = AgentSelection::Ufs)]
    pub agent: AgentSelection,

    #[arg(long, value_enum, default_value_t = MapSource::Preset)]
    pub map: MapSource,

    #[arg(long, default_value_t = 20)]
    pub width: usize,

    #[arg(long, default_value_t = 20)]
    pub height: usize,

    #[arg(long, value_name = "X,Y", default_value = "0,0")]
    pub start: Position,

    #[arg(long, value_name = "X,Y", default_value = "19,19")]
    pub goal: Position,

    /// Wall cell for a custom map. Repeatable.
    #[arg(long = "wall", value_name = "X,Y")]
    pub walls: Vec<Position>,

    /// Seed for random maps. Drawn at random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 50)]
    pub num_walls: usize,

    #[arg(long, default_value_t = 3)]
    pub num_peaks: usize,

    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = 1000)]
    pub max_iterations: usize,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    /// Ask for the grid and agent on stdin instead of using flags.
    #[arg(long, default_value_t = false)]
    pub interactive: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Config {
    pub fn terrain(&self) -> TerrainConfig {
        TerrainConfig {
            width: self.width,
            height: self.height,
            num_walls: self.num_walls,
            num_peaks: self.num_peaks,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            agent: AgentSelection::Ufs,
            map: MapSource::Preset,
            width: 20,
            height: 20,
            start: Position::new(0, 0),
            goal: Position::new(19, 19),
            walls: Vec::new(),
            seed: None,
            num_walls: 50,
            num_peaks: 3,
            delay_ms: 100,
            max_iterations: 1000,
            no_visualization: false,
            interactive: false,
            quiet: false,
        }
    }
}

pub mod bfs;
pub mod common;
pub mod dfs;
pub mod ufs;

pub use bfs::{BfsAgent, FifoFrontier};
pub use common::{reconstruct_path, Frontier, Search, SearchAgent, StepOutcome};
pub use dfs::{DfsAgent, LifoFrontier};
pub use ufs::{PriorityFrontier, UfsAgent};

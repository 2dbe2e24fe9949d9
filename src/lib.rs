//! Step-by-step grid search: breadth-first, depth-first and uniform-cost
//! agents that advance one expansion per tick over a walled, weighted grid.

pub mod agent;
pub mod algorithms;
pub mod config;
pub mod error;
pub mod grid;
pub mod prompt;
pub mod render;
pub mod simulation;
pub mod statistics;
pub mod terrain;

pub use agent::{Agent, AgentKind};
pub use algorithms::{SearchAgent, StepOutcome};
pub use error::{GridError, SearchError};
pub use grid::{Direction, Grid, Position};

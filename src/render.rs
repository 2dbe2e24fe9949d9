use crate::agent::AgentKind;
use crate::algorithms::SearchAgent;
use crate::grid::Position;
use crate::terrain::MAX_ELEVATION;
use std::fmt::Write;

pub const RESET: &str = "\x1b[0m";
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";

const GAP: &str = "  ";

/// 256-color foregrounds from elevation 0 (deep blue) to 5 (red).
const ELEVATION_COLORS: [&str; MAX_ELEVATION as usize + 1] = [
    "\x1b[38;5;21m",
    "\x1b[38;5;51m",
    "\x1b[38;5;46m",
    "\x1b[38;5;226m",
    "\x1b[38;5;214m",
    "\x1b[38;5;196m",
];

pub fn elevation_color(elevation: u32) -> &'static str {
    ELEVATION_COLORS[elevation.min(MAX_ELEVATION) as usize]
}

/// Glyph for one cell. Cells the agent has never generated stay blank.
pub fn glyph(agent: &dyn SearchAgent, pos: Position) -> char {
    let grid = agent.grid();
    if !agent.seen().contains(&pos) {
        ' '
    } else if pos == grid.goal() {
        'G'
    } else if pos == grid.start() {
        'S'
    } else if grid.is_wall(pos) {
        '#'
    } else if pos == agent.current_position() {
        'A'
    } else if agent.reconstructed_path().contains(&pos) {
        '='
    } else if agent.visited_set().contains(&pos) {
        'o'
    } else if agent.is_in_frontier(pos) {
        '*'
    } else {
        '.'
    }
}

/// The grid body, one line per row. With `color` each glyph is tinted by
/// the cell's elevation.
pub fn render_grid(agent: &dyn SearchAgent, color: bool) -> String {
    let grid = agent.grid();
    let mut out = String::new();

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let pos = Position::new(x, y);
            let glyph = glyph(agent, pos);
            if color {
                out.push_str(elevation_color(grid.cost(pos)));
                out.push(glyph);
                out.push_str(RESET);
            } else {
                out.push(glyph);
            }
            out.push_str(GAP);
        }
        out.push('\n');
    }
    out
}

/// Diagnostic lines printed above the grid.
pub fn render_header(agent: &dyn SearchAgent, tick: usize) -> String {
    let mut out = String::new();
    let kind: AgentKind = agent.kind();

    let _ = writeln!(out, "=== {} SEARCH | tick {} ===", kind.to_string().to_uppercase(), tick);
    let _ = writeln!(
        out,
        "Legend: S=Start, G=Goal, A=Agent, #=Wall, o=Visited, *=Frontier, '='=Path"
    );
    let _ = writeln!(out, "Agent position: {}", agent.current_position());
    let _ = writeln!(out, "Visited: {}", agent.visited_set().len());
    let _ = writeln!(out, "Frontier: {}", agent.frontier().len());
    if !agent.reconstructed_path().is_empty() {
        let _ = writeln!(
            out,
            "Path steps: {} (cost {})",
            agent.reconstructed_path().len() - 1,
            agent.cost()
        );
    }
    let neighbors: Vec<String> = agent
        .discovered_neighbors()
        .iter()
        .map(|pos| pos.to_string())
        .collect();
    let _ = writeln!(out, "Current neighbors: {}", neighbors.join(" "));
    out
}

pub fn render_frame(agent: &dyn SearchAgent, tick: usize, color: bool) -> String {
    let mut frame = render_header(agent, tick);
    frame.push('\n');
    frame.push_str(&render_grid(agent, color));
    frame
}

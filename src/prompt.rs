use crate::agent::AgentKind;
use crate::error::PromptError;
use crate::grid::{Grid, Position};
use std::io::{BufRead, Write};

const MAX_DIMENSION: i64 = 50;

/// Line-oriented interactive setup over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Re-asks until the answer is an integer in `min..=max`.
    pub fn bounded_int(&mut self, min: i64, max: i64, prompt: &str) -> Result<i64, PromptError> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                _ => writeln!(
                    self.output,
                    "Invalid input! Must be integer between {} and {}.",
                    min, max
                )?,
            }
        }
    }

    fn position(&mut self, width: i64, height: i64, label: &str) -> Result<Position, PromptError> {
        let x = self.bounded_int(0, width - 1, &format!("Enter {} x coordinate: ", label))?;
        let y = self.bounded_int(0, height - 1, &format!("Enter {} y coordinate: ", label))?;
        Ok(Position::new(x as i32, y as i32))
    }

    /// Dimensions, start, goal and walls, asked in that order.
    pub fn grid(&mut self) -> Result<Grid, PromptError> {
        let width = self.bounded_int(2, MAX_DIMENSION, "Enter grid width: ")?;
        let height = self.bounded_int(2, MAX_DIMENSION, "Enter grid height: ")?;
        let start = self.position(width, height, "starting")?;

        let goal = loop {
            let goal = self.position(width, height, "goal")?;
            if goal != start {
                break goal;
            }
            writeln!(self.output, "Goal must differ from start.")?;
        };

        let mut walls = Vec::new();
        loop {
            let answer = self.ask("Enter walls? (any key for yes, or \"N\" for no): ")?;
            if answer.eq_ignore_ascii_case("n") {
                break;
            }
            let label = format!("wall {}", walls.len() + 1);
            let wall = self.position(width, height, &label)?;
            if wall == start || wall == goal {
                writeln!(self.output, "Start and goal cannot be walls.")?;
                continue;
            }
            walls.push(wall);
        }

        Ok(Grid::new(
            width as usize,
            height as usize,
            start,
            goal,
            &walls,
        )?)
    }

    pub fn agent_kind(&mut self) -> Result<AgentKind, PromptError> {
        let prompt = "Enter agent type:\n  1. Breadth-first agent\n  2. Depth-first agent\n  3. Uniform-cost agent\n> ";
        let choice = self.bounded_int(1, 3, prompt)?;
        Ok(AgentKind::ALL[(choice - 1) as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn bounded_int_reprompts_until_valid() {
        let mut prompter = prompter("x\n99\n7\n");
        assert_eq!(prompter.bounded_int(0, 10, "n: ").unwrap(), 7);
        let output = String::from_utf8(prompter.output).unwrap();
        assert_eq!(
            output.matches("Invalid input! Must be integer between 0 and 10.").count(),
            2
        );
    }

    #[test]
    fn reads_a_full_grid() {
        let mut prompter = prompter("4\n3\n0\n0\n3\n2\ny\n1\n1\nyes\n0\n0\nn\n");
        let grid = prompter.grid().unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert_eq!(grid.start(), Position::new(0, 0));
        assert_eq!(grid.goal(), Position::new(3, 2));
        assert_eq!(grid.walls().collect::<Vec<_>>(), vec![Position::new(1, 1)]);
        let output = String::from_utf8(prompter.output).unwrap();
        assert!(output.contains("Start and goal cannot be walls."));
    }

    #[test]
    fn goal_on_start_is_asked_again() {
        let mut prompter = prompter("2\n2\n0\n0\n0\n0\n1\n1\nN\n");
        let grid = prompter.grid().unwrap();
        assert_eq!(grid.goal(), Position::new(1, 1));
    }

    #[test]
    fn agent_choice_maps_to_kind() {
        assert_eq!(prompter("3\n").agent_kind().unwrap(), AgentKind::Ufs);
        assert_eq!(prompter("0\n1\n").agent_kind().unwrap(), AgentKind::Bfs);
    }

    #[test]
    fn closed_input_is_an_error() {
        assert!(matches!(
            prompter("5\n").grid().unwrap_err(),
            PromptError::Closed
        ));
    }
}

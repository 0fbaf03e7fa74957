//! Human player reading moves from a line-oriented input.

use super::{Choice, MoveSource};
use anyhow::Result;
use std::io::{BufRead, Write};
use tictac_core::{Board, Position};
use tracing::{debug, instrument};

const HELP: &str = "Enter a cell number 1-9, 'row col' (0-2), a name like 'center', or q to quit.";

/// Human player typing moves at a prompt.
///
/// Accepted input per line:
/// - a keypad digit `1`-`9` (row-major, matching the rendered board)
/// - `row col` or `row,col`, 0-based
/// - a position label such as `top-left`
/// - `q` / `quit`
///
/// End of input is treated as quitting.
pub struct HumanInput<R, W> {
    name: String,
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> HumanInput<R, W> {
    /// Creates a human player reading from `input` and prompting on `prompt`.
    pub fn new(name: impl Into<String>, input: R, prompt: W) -> Self {
        Self {
            name: name.into(),
            input,
            prompt,
        }
    }
}

/// Parses one input line; `None` means the line was not understood.
#[instrument]
pub(crate) fn parse_choice(line: &str) -> Option<Choice> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Some(Choice::Quit);
    }

    let numbers: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    match numbers.as_slice() {
        [single] => {
            if let Ok(digit) = single.parse::<usize>() {
                return (1..=9)
                    .contains(&digit)
                    .then(|| Position::from_index(digit - 1))
                    .flatten()
                    .map(Choice::from);
            }
        }
        [row, col] => {
            if let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) {
                return Some(Choice::Cell { row, col });
            }
        }
        _ => {}
    }

    Position::from_label(line).map(Choice::from)
}

impl<R: BufRead, W: Write> MoveSource for HumanInput<R, W> {
    fn choose(&mut self, _board: &Board) -> Result<Choice> {
        loop {
            write!(self.prompt, "Your move: ")?;
            self.prompt.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!(player = %self.name, "Input closed");
                return Ok(Choice::Quit);
            }
            if line.trim().is_empty() {
                continue;
            }
            match parse_choice(&line) {
                Some(choice) => {
                    debug!(player = %self.name, ?choice, "Player move");
                    return Ok(choice);
                }
                None => writeln!(self.prompt, "{HELP}")?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn rejected(&mut self, reason: &str) -> Result<()> {
        writeln!(self.prompt, "Invalid Move: {reason}")?;
        Ok(())
    }
}

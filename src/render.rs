//! Rendering of a solved grid: terminal text, file output, and JSON export.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::puzzle::{Crossword, Direction, Variable};
use crate::solver::Assignment;

/// Projects an assignment onto the grid: one letter per filled open cell.
pub fn letter_grid(puzzle: &Crossword, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let mut letters = vec![vec![None; puzzle.width()]; puzzle.height()];
    for (var, word) in assignment.iter() {
        for (k, (row, col)) in var.cells().enumerate() {
            letters[row][col] = Some(word.as_bytes()[k] as char);
        }
    }
    letters
}

/// Renders the grid as text: letters in open cells, `█` in blocked ones.
pub fn render_grid(puzzle: &Crossword, assignment: &Assignment) -> String {
    let letters = letter_grid(puzzle, assignment);
    let mut out = String::new();
    for row in 0..puzzle.height() {
        for col in 0..puzzle.width() {
            if puzzle.is_open(row, col) {
                out.push(letters[row][col].unwrap_or(' '));
            } else {
                out.push('█');
            }
        }
        out.push('\n');
    }
    out
}

/// Writes the rendered grid to a file.
pub fn write_grid(puzzle: &Crossword, assignment: &Assignment, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_grid(puzzle, assignment)).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// One solved slot, flattened for serialization.
#[derive(Debug, Serialize)]
pub struct SolvedSlot<'a> {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
    pub word: &'a str,
}

impl<'a> SolvedSlot<'a> {
    fn new(var: Variable, word: &'a str) -> Self {
        Self {
            row: var.row,
            col: var.col,
            direction: var.direction,
            length: var.length,
            word,
        }
    }
}

/// The solved slots in canonical order.
pub fn solved_slots(assignment: &Assignment) -> Vec<SolvedSlot<'_>> {
    let mut slots: Vec<(Variable, &str)> = assignment
        .iter()
        .map(|(&var, word)| (var, word.as_str()))
        .collect();
    slots.sort();
    slots
        .into_iter()
        .map(|(var, word)| SolvedSlot::new(var, word))
        .collect()
}

/// Serializes the solved slots as pretty-printed JSON.
pub fn to_json(assignment: &Assignment) -> Result<String> {
    Ok(serde_json::to_string_pretty(&solved_slots(assignment))?)
}

//! The immutable puzzle model: grid structure, word slots, and the overlap
//! relation between crossing slots.
//!
//! A structure file describes the grid one row per line, with `_` marking an
//! open cell and any other character a blocked one. Lines shorter than the
//! widest line are padded with blocked cells. The word list holds one word
//! per line; words are uppercased and anything that is not purely ASCII
//! alphabetic is dropped.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};

/// Reading direction of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// One word-length run in the grid — a CSP variable.
///
/// Identity is the full tuple (row, col, direction, length). The derived
/// `Ord` (row, then col, then direction, then length) is the canonical
/// tie-break order used by the search heuristics, so iteration over sorted
/// variables is reproducible across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Variable {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    /// The grid cell holding the `k`-th letter of this slot's word.
    pub fn cell(&self, k: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        }
    }

    /// All cells covered by this slot, in word order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(|k| self.cell(k))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} [{}]",
            self.row, self.col, self.direction, self.length
        )
    }
}

/// An immutable crossword puzzle: the grid, its slots, the vocabulary, and
/// the precomputed overlap/neighbor relations.
#[derive(Debug, Clone)]
pub struct Crossword {
    height: usize,
    width: usize,
    grid: Vec<Vec<bool>>,
    words: im::HashSet<String>,
    variables: Vec<Variable>,
    overlaps: HashMap<(Variable, Variable), (usize, usize)>,
    neighbors: HashMap<Variable, Vec<Variable>>,
}

impl Crossword {
    /// Builds a puzzle from the contents of a structure file and a word list.
    pub fn parse(structure: &str, words: &str) -> Result<Self> {
        let lines: Vec<&str> = structure.lines().collect();
        if lines.iter().all(|line| line.trim().is_empty()) {
            return Err(Error::EmptyStructure);
        }

        let height = lines.len();
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let grid: Vec<Vec<bool>> = lines
            .iter()
            .map(|line| {
                let mut row: Vec<bool> = line.chars().map(|c| c == '_').collect();
                row.resize(width, false);
                row
            })
            .collect();

        let words: im::HashSet<String> = words
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_alphabetic()))
            .map(str::to_uppercase)
            .collect();
        if words.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        let variables = scan_variables(&grid, height, width);
        if variables.is_empty() {
            return Err(Error::NoSlots);
        }

        let (overlaps, neighbors) = compute_overlaps(&variables);

        Ok(Self {
            height,
            width,
            grid,
            words,
            variables,
            overlaps,
            neighbors,
        })
    }

    /// Reads and parses a structure file and a word-list file.
    pub fn from_files(
        structure_path: impl AsRef<Path>,
        words_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let structure_path = structure_path.as_ref();
        let words_path = words_path.as_ref();
        let structure = fs::read_to_string(structure_path).map_err(|source| Error::Io {
            path: structure_path.to_path_buf(),
            source,
        })?;
        let words = fs::read_to_string(words_path).map_err(|source| Error::Io {
            path: words_path.to_path_buf(),
            source,
        })?;
        Self::parse(&structure, &words)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at (row, col) is open (fillable).
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.grid[row][col]
    }

    /// All slots, in canonical (sorted) order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The full vocabulary.
    pub fn words(&self) -> &im::HashSet<String> {
        &self.words
    }

    /// The shared-cell constraint between two slots, if they cross:
    /// `(px, py)` means letter `px` of `x`'s word equals letter `py` of
    /// `y`'s word. `None` if the slots do not cross.
    pub fn overlap(&self, x: Variable, y: Variable) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Slots crossing `x`, in canonical order.
    ///
    /// Panics if `x` is not a slot of this puzzle.
    pub fn neighbors(&self, x: &Variable) -> &[Variable] {
        &self.neighbors[x]
    }
}

fn scan_variables(grid: &[Vec<bool>], height: usize, width: usize) -> Vec<Variable> {
    let mut variables = Vec::new();
    for row in 0..height {
        for col in 0..width {
            if !grid[row][col] {
                continue;
            }
            if col == 0 || !grid[row][col - 1] {
                let mut length = 1;
                while col + length < width && grid[row][col + length] {
                    length += 1;
                }
                if length > 1 {
                    variables.push(Variable {
                        row,
                        col,
                        direction: Direction::Across,
                        length,
                    });
                }
            }
            if row == 0 || !grid[row - 1][col] {
                let mut length = 1;
                while row + length < height && grid[row + length][col] {
                    length += 1;
                }
                if length > 1 {
                    variables.push(Variable {
                        row,
                        col,
                        direction: Direction::Down,
                        length,
                    });
                }
            }
        }
    }
    variables.sort();
    variables
}

type Overlaps = HashMap<(Variable, Variable), (usize, usize)>;
type Neighbors = HashMap<Variable, Vec<Variable>>;

fn compute_overlaps(variables: &[Variable]) -> (Overlaps, Neighbors) {
    // Offset of each cell within each slot, for crossing lookups.
    let cell_offsets: Vec<HashMap<(usize, usize), usize>> = variables
        .iter()
        .map(|v| v.cells().enumerate().map(|(k, cell)| (cell, k)).collect())
        .collect();

    let mut overlaps = Overlaps::new();
    let mut neighbors: Neighbors = variables.iter().map(|&v| (v, Vec::new())).collect();

    for (i, &x) in variables.iter().enumerate() {
        for (j, &y) in variables.iter().enumerate() {
            if i == j {
                continue;
            }
            // Two distinct slots share at most one cell.
            let crossing = y
                .cells()
                .enumerate()
                .find_map(|(py, cell)| cell_offsets[i].get(&cell).map(|&px| (px, py)));
            if let Some((px, py)) = crossing {
                overlaps.insert((x, y), (px, py));
                neighbors.get_mut(&x).unwrap().push(y);
            }
        }
    }

    for adjacent in neighbors.values_mut() {
        adjacent.sort();
    }
    (overlaps, neighbors)
}

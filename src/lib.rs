//! crossfill solves crossword fill as a constraint satisfaction problem.
//!
//! Given a grid structure (open and blocked cells) and a vocabulary, it
//! assigns one word to every slot so that all words are pairwise distinct
//! and every pair of crossing slots agrees on the shared letter. The
//! pipeline is the classic CSP one:
//!
//! 1. **Node consistency** — drop candidates whose length doesn't fit the slot.
//! 2. **Arc consistency (AC-3)** — drop candidates with no compatible partner
//!    in a crossing slot's domain, propagating until a fixed point.
//! 3. **Backtracking search** — fill the remaining choices, picking slots by
//!    minimum-remaining-values (ties by degree) and trying words
//!    least-constraining first.
//!
//! "No solution" is a normal outcome reported as `None`; errors only arise
//! from malformed input.
//!
//! # Example
//!
//! ```
//! use crossfill::Crossword;
//!
//! // A 3x3 corner: one across slot and one down slot sharing their first cell.
//! let structure = "___\n_##\n_##";
//! let words = "CAT\nCAB\nDOG";
//!
//! let puzzle = Crossword::parse(structure, words).unwrap();
//! let solution = crossfill::solve(&puzzle).expect("this grid is fillable");
//!
//! let across = puzzle.variables()[0];
//! let down = puzzle.variables()[1];
//! assert_ne!(solution[&across], solution[&down]);
//! assert_eq!(solution[&across].as_bytes()[0], solution[&down].as_bytes()[0]);
//! ```

pub mod error;
pub mod puzzle;
pub mod render;
pub mod solver;

pub use error::{Error, Result};
pub use puzzle::{Crossword, Direction, Variable};
pub use solver::{solve, Assignment, Solver};

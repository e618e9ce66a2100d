//! The constraint solver: node consistency, AC-3 arc consistency, and
//! heuristic backtracking search over the pruned domains.

pub mod consistency;
pub mod domains;
pub mod heuristics;
pub mod search;
pub mod stats;
pub mod work_list;

use tracing::debug;

use crate::puzzle::{Crossword, Variable};
use crate::solver::domains::{DomainStore, Word};
use crate::solver::stats::SearchStats;

/// A partial or complete mapping from slot to chosen word.
///
/// Persistent: extending it for a tentative guess is a cheap
/// structural-sharing update, and a failed branch leaves the caller's map
/// untouched.
pub type Assignment = im::HashMap<Variable, Word>;

/// One solving run over a puzzle. Holds the domain store and the counters;
/// stateless between calls aside from those.
pub struct Solver<'p> {
    puzzle: &'p Crossword,
    domains: DomainStore,
    stats: SearchStats,
}

impl<'p> Solver<'p> {
    pub fn new(puzzle: &'p Crossword) -> Self {
        Self {
            puzzle,
            domains: DomainStore::new(puzzle),
            stats: SearchStats::default(),
        }
    }

    /// Enforces node consistency, then arc consistency, then searches.
    ///
    /// Returns a complete assignment, or `None` if the puzzle has no
    /// solution. Unsatisfiability is a normal outcome, not an error.
    pub fn solve(&mut self) -> Option<Assignment> {
        self.domains.enforce_node_consistency();
        if !self.ac3() {
            debug!("arc consistency emptied a domain; no solution");
            return None;
        }
        let result = self.backtrack(Assignment::new());
        debug!(
            nodes = self.stats.nodes_visited,
            backtracks = self.stats.backtracks,
            solved = result.is_some(),
            "search finished"
        );
        result
    }

    pub fn puzzle(&self) -> &Crossword {
        self.puzzle
    }

    pub fn domains(&self) -> &DomainStore {
        &self.domains
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Solves `puzzle` with a fresh [`Solver`].
pub fn solve(puzzle: &Crossword) -> Option<Assignment> {
    let mut solver = Solver::new(puzzle);
    solver.solve()
}

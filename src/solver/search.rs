//! Backtracking search over the pruned domains.
//!
//! The search never prunes the domain store; it reads candidate pools from
//! it and builds up a persistent assignment, so a failed branch leaves
//! everything the caller can observe unchanged.

use std::collections::HashSet;

use tracing::trace;

use crate::solver::{heuristics, Assignment, Solver};

impl Solver<'_> {
    /// Recursive backtracking: extends `assignment` one slot at a time and
    /// returns the first complete consistent assignment found, or `None`
    /// when every candidate at this level fails.
    pub(crate) fn backtrack(&mut self, assignment: Assignment) -> Option<Assignment> {
        self.stats.nodes_visited += 1;

        if assignment.len() == self.puzzle.variables().len() {
            return Some(assignment);
        }

        let var = heuristics::select_unassigned_variable(self.puzzle, &self.domains, &assignment)?;

        for word in heuristics::order_domain_values(self.puzzle, &self.domains, &assignment, var) {
            trace!(slot = %var, %word, "trying candidate");
            let guess = assignment.update(var, word);
            if self.consistent(&guess) {
                if let Some(solution) = self.backtrack(guess) {
                    return Some(solution);
                }
            }
            self.stats.backtracks += 1;
        }

        None
    }

    /// Whether a partial assignment is consistent: all assigned words are
    /// pairwise distinct and every assigned pair of crossing slots agrees at
    /// the shared cell.
    ///
    /// Distinctness is an N-ary constraint that pairwise arc consistency
    /// cannot enforce, so this check is load-bearing even after `ac3`.
    fn consistent(&self, assignment: &Assignment) -> bool {
        let mut seen = HashSet::with_capacity(assignment.len());
        for word in assignment.values() {
            if !seen.insert(word) {
                return false;
            }
        }

        for (&x, wx) in assignment.iter() {
            for &y in self.puzzle.neighbors(&x) {
                if let Some(wy) = assignment.get(&y) {
                    let (px, py) = self.puzzle.overlap(x, y).unwrap();
                    if wx.as_bytes()[px] != wy.as_bytes()[py] {
                        return false;
                    }
                }
            }
        }
        true
    }
}

//! Variable- and value-ordering heuristics for the backtracking search.
//!
//! Both orderings are fully deterministic: ties in variable selection break
//! on the slot's `Ord` (row, col, direction, length), ties in value ordering
//! break lexicographically on the word. Results are therefore reproducible
//! across runs.

use std::cmp::Reverse;

use crate::puzzle::{Crossword, Variable};
use crate::solver::domains::{DomainStore, Word};
use crate::solver::Assignment;

/// Picks the unassigned slot to branch on next: minimum remaining values,
/// ties broken by maximum degree (most neighbors), then by slot order.
///
/// `None` once every slot is assigned.
pub fn select_unassigned_variable(
    puzzle: &Crossword,
    domains: &DomainStore,
    assignment: &Assignment,
) -> Option<Variable> {
    puzzle
        .variables()
        .iter()
        .copied()
        .filter(|v| !assignment.contains_key(v))
        .min_by_key(|&v| {
            (
                domains.get(&v).len(),
                Reverse(puzzle.neighbors(&v).len()),
                v,
            )
        })
}

/// Orders `var`'s candidates least-constraining first: by how many candidate
/// words each would eliminate from the domains of unassigned neighbors.
/// Already-assigned neighbors are skipped; their domains are no longer live.
///
/// Assumes node-consistent domains (words are exactly slot-length, so
/// overlap offsets are in bounds).
pub fn order_domain_values(
    puzzle: &Crossword,
    domains: &DomainStore,
    assignment: &Assignment,
    var: Variable,
) -> Vec<Word> {
    let mut ranked: Vec<(usize, Word)> = domains
        .get(&var)
        .iter()
        .map(|word| {
            let eliminated: usize = puzzle
                .neighbors(&var)
                .iter()
                .filter(|n| !assignment.contains_key(n))
                .map(|&n| {
                    let (px, py) = puzzle.overlap(var, n).unwrap();
                    let cx = word.as_bytes()[px];
                    domains
                        .get(&n)
                        .iter()
                        .filter(|wy| wy.as_bytes()[py] != cx)
                        .count()
                })
                .sum();
            (eliminated, word.clone())
        })
        .collect();

    ranked.sort();
    ranked.into_iter().map(|(_, word)| word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{Crossword, Direction};
    use crate::solver::domains::DomainStore;
    use pretty_assertions::assert_eq;

    // Two across slots (rows 0 and 3) crossed by two down slots (cols 0 and
    // 3); every slot has degree 2.
    const RING: &str = "____\n_##_\n_##_\n____";

    fn ring() -> Crossword {
        Crossword::parse(RING, "GRAB\nGLEN\nNAVY\nBUOY\nIDEA\nLAMB").unwrap()
    }

    #[test]
    fn mrv_prefers_the_smallest_domain() {
        let puzzle = ring();
        let mut domains = DomainStore::new(&puzzle);
        domains.enforce_node_consistency();

        let top = puzzle.variables()[0];
        let mut narrowed: im::HashSet<String> = im::HashSet::new();
        narrowed.insert("GLEN".to_string());
        domains.set(top, narrowed);

        let chosen = select_unassigned_variable(&puzzle, &domains, &Assignment::new());
        assert_eq!(chosen, Some(top));
    }

    #[test]
    fn mrv_ties_break_on_degree() {
        // A down slot crossing both across slots (degree 2) against two
        // across slots of degree 1; all domains are equal in size.
        let puzzle = Crossword::parse("___\n#_#\n___", "CAT\nDOG\nTIP").unwrap();
        let down = puzzle.variables()[1];
        assert_eq!(down.direction, Direction::Down);
        assert_eq!(puzzle.neighbors(&down).len(), 2);

        let mut domains = DomainStore::new(&puzzle);
        domains.enforce_node_consistency();

        let chosen = select_unassigned_variable(&puzzle, &domains, &Assignment::new());
        assert_eq!(chosen, Some(down));
    }

    #[test]
    fn mrv_ties_break_on_slot_order_last() {
        // One across and one down slot, each of degree 1 and equal domains.
        let puzzle = Crossword::parse("___\n#_#\n#_#", "CAT\nDOG\nTIP").unwrap();
        let across = puzzle.variables()[0];
        let down = puzzle.variables()[1];
        assert_eq!(across.direction, Direction::Across);
        assert_eq!(down.direction, Direction::Down);
        assert_eq!(puzzle.neighbors(&across).len(), 1);
        assert_eq!(puzzle.neighbors(&down).len(), 1);

        let mut domains = DomainStore::new(&puzzle);
        domains.enforce_node_consistency();

        // Equal domain sizes and equal degree: the tie falls through to slot
        // order, which puts the across slot first.
        let chosen = select_unassigned_variable(&puzzle, &domains, &Assignment::new());
        assert_eq!(chosen, Some(across));
    }

    #[test]
    fn all_assigned_yields_none() {
        let puzzle = ring();
        let domains = DomainStore::new(&puzzle);
        let assignment: Assignment = puzzle
            .variables()
            .iter()
            .map(|&v| (v, "GRAB".to_string()))
            .collect();
        assert_eq!(
            select_unassigned_variable(&puzzle, &domains, &assignment),
            None
        );
    }

    #[test]
    fn lcv_orders_least_constraining_first() {
        let puzzle = Crossword::parse("___\n_##\n_##", "CAT\nCAB\nABC\nBAT").unwrap();
        let mut domains = DomainStore::new(&puzzle);
        domains.enforce_node_consistency();

        let across = puzzle.variables()[0];
        // The down neighbor shares offset 0. Candidates starting with the
        // most common first letter among the neighbor's domain eliminate the
        // fewest of its words: first letters are C, C, A, B, so C-words
        // eliminate 2, A- and B-words eliminate 3.
        let ordered = order_domain_values(&puzzle, &domains, &Assignment::new(), across);
        assert_eq!(ordered, vec!["CAB", "CAT", "ABC", "BAT"]);
    }

    #[test]
    fn lcv_skips_assigned_neighbors() {
        let puzzle = Crossword::parse("___\n_##\n_##", "CAT\nCAB\nABC\nBAT").unwrap();
        let mut domains = DomainStore::new(&puzzle);
        domains.enforce_node_consistency();

        let across = puzzle.variables()[0];
        let down = puzzle.variables()[1];
        let assignment = Assignment::new().update(down, "ABC".to_string());

        // With the only neighbor assigned, nothing is eliminated and the
        // order is the lexicographic tie-break.
        let ordered = order_domain_values(&puzzle, &domains, &assignment, across);
        assert_eq!(ordered, vec!["ABC", "BAT", "CAB", "CAT"]);
    }
}

//! The domain store: each slot's live set of candidate words.
//!
//! Domains start as the full vocabulary and only ever shrink. Persistent
//! `im` collections make the scratch copies taken during value ordering and
//! the snapshots taken by tests cheap structural-sharing clones.

use crate::puzzle::{Crossword, Variable};

pub type Word = String;
pub type Domains = im::HashMap<Variable, im::HashSet<Word>>;

#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: Domains,
}

impl DomainStore {
    /// Seeds every slot's domain with the full vocabulary.
    pub fn new(puzzle: &Crossword) -> Self {
        let domains = puzzle
            .variables()
            .iter()
            .map(|&var| (var, puzzle.words().clone()))
            .collect();
        Self { domains }
    }

    /// The live candidate set for `var`.
    ///
    /// Panics if `var` is not a slot of the puzzle this store was built from.
    pub fn get(&self, var: &Variable) -> &im::HashSet<Word> {
        self.domains.get(var).unwrap()
    }

    /// Replaces the candidate set for `var`.
    pub fn set(&mut self, var: Variable, candidates: im::HashSet<Word>) {
        self.domains.insert(var, candidates);
    }

    /// A cheap snapshot of all domains.
    pub fn snapshot(&self) -> Domains {
        self.domains.clone()
    }

    /// Removes every candidate whose length differs from its slot's length.
    ///
    /// Idempotent; may leave a domain empty, which is a valid (unsolvable)
    /// state detected later.
    pub fn enforce_node_consistency(&mut self) {
        let vars: Vec<Variable> = self.domains.keys().copied().collect();
        for var in vars {
            let current = self.domains.get(&var).unwrap();
            if current.iter().any(|w| w.len() != var.length) {
                let pruned = current
                    .iter()
                    .filter(|w| w.len() == var.length)
                    .cloned()
                    .collect();
                self.domains.insert(var, pruned);
            }
        }
    }
}

//! Arc-consistency enforcement (AC-3).
//!
//! An arc `(x, y)` is consistent when every candidate for `x` has at least
//! one candidate in `y`'s domain agreeing at the crossing cell. Revisions
//! propagate: when `x`'s domain shrinks, every arc `(z, x)` for a neighbor
//! `z` is re-queued, since a constraint on `x` that held before may no
//! longer.
//!
//! The fixed point is the same for any arc-removal order; the worklist runs
//! FIFO so runs are reproducible.

use tracing::{debug, trace};

use crate::puzzle::Variable;
use crate::solver::work_list::{Arc, WorkList};
use crate::solver::Solver;

impl Solver<'_> {
    /// Makes `x` arc-consistent with `y`: removes from `x`'s domain every
    /// word with no partner in `y`'s domain at the overlap offsets. A no-op
    /// returning `false` if the slots do not cross.
    ///
    /// Returns `true` iff `x`'s domain shrank.
    pub fn revise(&mut self, x: Variable, y: Variable) -> bool {
        self.stats.revise_calls += 1;
        let Some((px, py)) = self.puzzle.overlap(x, y) else {
            return false;
        };

        let x_domain = self.domains.get(&x);
        let y_domain = self.domains.get(&y);
        let retained: im::HashSet<_> = x_domain
            .iter()
            .filter(|wx| match wx.as_bytes().get(px) {
                Some(&cx) => y_domain
                    .iter()
                    .any(|wy| wy.as_bytes().get(py) == Some(&cx)),
                None => false,
            })
            .cloned()
            .collect();

        let removed = x_domain.len() - retained.len();
        if removed == 0 {
            return false;
        }
        trace!(slot = %x, against = %y, removed, "revised domain");
        self.stats.prunings += removed as u64;
        self.domains.set(x, retained);
        true
    }

    /// Enforces arc consistency starting from every arc `(x, y)` where `y`
    /// is a neighbor of `x`.
    ///
    /// Returns `false` if some domain was emptied during propagation (the
    /// puzzle is unsatisfiable), `true` once the fixed point is reached.
    pub fn ac3(&mut self) -> bool {
        let mut arcs = Vec::new();
        for &x in self.puzzle.variables() {
            for &y in self.puzzle.neighbors(&x) {
                arcs.push((x, y));
            }
        }
        self.ac3_with(arcs)
    }

    /// [`ac3`](Self::ac3) seeded with a caller-supplied set of arcs, for
    /// re-establishing consistency after a localized domain change.
    pub fn ac3_with(&mut self, arcs: impl IntoIterator<Item = Arc>) -> bool {
        let mut worklist = WorkList::new();
        for (x, y) in arcs {
            worklist.push_back(x, y);
        }

        while let Some((x, y)) = worklist.pop_front() {
            if self.revise(x, y) {
                if self.domains.get(&x).is_empty() {
                    debug!(slot = %x, "domain wiped out during propagation");
                    return false;
                }
                for &z in self.puzzle.neighbors(&x) {
                    if z != y {
                        worklist.push_back(z, x);
                    }
                }
            }
        }
        true
    }
}

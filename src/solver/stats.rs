use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters accumulated over one `solve` call.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SearchStats {
    /// Calls to `revise` during arc-consistency enforcement.
    pub revise_calls: u64,
    /// Candidate words removed by `revise`.
    pub prunings: u64,
    /// Recursive `backtrack` entries.
    pub nodes_visited: u64,
    /// Candidate words that were tried and undone.
    pub backtracks: u64,
}

/// Renders the counters as a two-column table for terminal output.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));

    let rows = [
        ("Revise calls", stats.revise_calls),
        ("Prunings", stats.prunings),
        ("Nodes visited", stats.nodes_visited),
        ("Backtracks", stats.backtracks),
    ];
    for (name, count) in rows {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&count.to_string()),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_all_counters() {
        let stats = SearchStats {
            revise_calls: 4,
            prunings: 2,
            nodes_visited: 7,
            backtracks: 1,
        };
        let rendered = render_stats_table(&stats);
        for label in ["Revise calls", "Prunings", "Nodes visited", "Backtracks"] {
            assert!(rendered.contains(label));
        }
    }
}

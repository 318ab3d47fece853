use prettytable::{Cell, Row, Table};

use crate::solver::{
    propagate::Rule,
    search::{PerRuleStats, SolveStats},
};

pub fn render_stats_table(stats: &SolveStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Rule"),
        Cell::new("Applications"),
        Cell::new("Prunings"),
        Cell::new("Time / Call (µs)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&Rule, &PerRuleStats)> = stats.rule_stats.iter().collect();
    sorted_stats.sort_by_key(|(_, rule_stats)| rule_stats.time_spent_micros);

    for (rule, rule_stats) in sorted_stats {
        let avg_time = if rule_stats.applications > 0 {
            rule_stats.time_spent_micros as f64 / rule_stats.applications as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(&format!("{rule:?}")),
            Cell::new(&rule_stats.applications.to_string()),
            Cell::new(&rule_stats.prunings.to_string()),
            Cell::new(&format!("{avg_time:.2}")),
            Cell::new(&format!(
                "{:.2}",
                rule_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}

use serde::Serialize;

use cyoa_api::Stats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsView {
    pub lines: Vec<StatLine>,
}

pub fn present_stats(stats: &Stats) -> StatsView {
    let known = [
        ("Total games", stats.total),
        ("Indexed", stats.indexed),
        ("With summary", stats.with_summary),
        ("With text", stats.with_text),
    ];
    let mut lines: Vec<StatLine> = known
        .into_iter()
        .filter_map(|(label, value)| {
            value.map(|v| StatLine { label: label.to_string(), value: v.to_string() })
        })
        .collect();
    // extras are opaque; only scalar values get a line
    for (key, value) in &stats.extra {
        let value = if value.is_number() {
            value.to_string()
        } else if let Some(s) = value.as_str() {
            s.to_string()
        } else {
            continue;
        };
        lines.push(StatLine { label: key.clone(), value });
    }
    StatsView { lines }
}

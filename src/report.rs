use std::collections::BTreeMap;
use std::fmt::Write;

use crate::analyzer::category::Category;
use crate::models::{AnalysisReport, ProjectIdea};

const BAR_CELLS: usize = 10;

pub fn to_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// `█` per tenth of the score, padded with `░`.
fn score_bar(score: f64) -> String {
    // scores are already rounded to hundredths
    let filled = ((score * 100.0).round() as usize / 10).min(BAR_CELLS);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

fn feasibility_mark(idea: &ProjectIdea) -> &'static str {
    if idea.weekend_feasible() {
        "✅"
    } else {
        "⏰"
    }
}

/// Human-readable report, one section per category in priority order.
pub fn to_markdown(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Bookmark-Mined Project Ideas\n");
    let _ = writeln!(
        out,
        "**Generated:** {}\n",
        report.generated_at().format("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(out, "**Total Ideas:** {}", report.total_ideas());
    let _ = writeln!(out, "**Weekend-Feasible:** {}\n", report.weekend_feasible());
    let _ = writeln!(out, "---");

    if report.ideas().is_empty() {
        let _ = writeln!(out, "\n_No project ideas found._");
        return out;
    }

    let mut by_category: BTreeMap<Category, Vec<&ProjectIdea>> = BTreeMap::new();
    for idea in report.ideas() {
        by_category.entry(idea.category()).or_default().push(idea);
    }

    for (category, ideas) in &by_category {
        let noun = if ideas.len() == 1 { "idea" } else { "ideas" };
        let _ = writeln!(
            out,
            "\n## {} ({} {})\n",
            category.as_str().to_uppercase(),
            ideas.len(),
            noun
        );
        for (i, idea) in ideas.iter().enumerate() {
            let _ = writeln!(out, "### {}. {} {}", i + 1, idea.title(), feasibility_mark(idea));
            let _ = writeln!(
                out,
                "**Buildability:** `{}` ({:.2})",
                score_bar(idea.buildable_score()),
                idea.buildable_score()
            );
            let _ = writeln!(out, "**URL:** {}", idea.url());
            let _ = writeln!(out, "**Concepts:** {}", idea.concepts().join(", "));
            let _ = writeln!(out, "**Reasoning:** {}\n", idea.reasoning());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::analyzer::aggregate::analyze_at;
    use crate::loader::BookmarkRecord;

    fn sample() -> AnalysisReport {
        let at = DateTime::parse_from_rfc3339("2024-05-01T12:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        analyze_at(
            &[
                BookmarkRecord::new("Markdown to HTML Converter CLI - GitHub", "https://github.com/example/md-converter"),
                BookmarkRecord::new("Personal website starter in plain HTML and CSS", "https://example.com/site"),
                BookmarkRecord::new("Sprite sheet editor CLI", "https://example.com/sprites"),
            ],
            at,
        )
    }

    #[test]
    fn bar_is_proportional() {
        assert_eq!(score_bar(0.95), "█████████░");
        assert_eq!(score_bar(0.7), "███████░░░");
        assert_eq!(score_bar(0.0), "░░░░░░░░░░");
        assert_eq!(score_bar(1.0), "██████████");
    }

    #[test]
    fn markdown_header_and_counts() {
        let md = to_markdown(&sample());
        assert!(md.starts_with("# Bookmark-Mined Project Ideas\n"));
        assert!(md.contains("**Generated:** 2024-05-01 12:30"));
        assert!(md.contains("**Total Ideas:** 3"));
        assert!(md.contains("**Weekend-Feasible:** 3"));
    }

    #[test]
    fn markdown_groups_by_category_in_priority_order() {
        let md = to_markdown(&sample());
        let tools = md.find("## TOOLS (2 ideas)").unwrap();
        let web = md.find("## WEB (1 idea)").unwrap();
        assert!(tools < web);
        assert!(md.contains("### 1. Markdown to HTML Converter CLI ✅"));
        assert!(md.contains("**Buildability:** `█████████░` (0.95)"));
        assert!(md.contains("**Concepts:** markdown, html, converter, cli"));
    }

    #[test]
    fn markdown_marks_long_projects() {
        let report = analyze_at(
            &[BookmarkRecord::new("Distributed Infrastructure Platform for Enterprise Scale", "https://example.com/platform")],
            Utc::now(),
        );
        let md = to_markdown(&report);
        assert!(md.contains("## DEV_OPS (1 idea)"));
        assert!(md.contains("Scale ⏰"));
    }

    #[test]
    fn empty_report_markdown() {
        let md = to_markdown(&analyze_at(&[], Utc::now()));
        assert!(md.contains("**Total Ideas:** 0"));
        assert!(md.contains("_No project ideas found._"));
    }

    #[test]
    fn json_uses_report_field_names() {
        let json = to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_ideas"], 3);
        assert_eq!(value["weekend_feasible"], 3);
        assert_eq!(value["generated_at"], "2024-05-01T12:30:00Z");
        assert_eq!(value["ideas"][0]["category"], "tools");
        assert_eq!(value["ideas"][0]["title"], "Markdown to HTML Converter CLI");
    }
}

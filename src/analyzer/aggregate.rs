use chrono::{DateTime, Utc};
use itertools::Itertools;
use tracing::{debug, info};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use super::build_idea;
use crate::loader::BookmarkRecord;
use crate::models::{AnalysisReport, ProjectIdea};

#[cfg(feature = "rayon")]
fn build_ideas(records: &[BookmarkRecord]) -> Vec<Option<ProjectIdea>> {
    records.par_iter().map(build_idea).collect()
}

#[cfg(not(feature = "rayon"))]
fn build_ideas(records: &[BookmarkRecord]) -> Vec<Option<ProjectIdea>> {
    records.iter().map(build_idea).collect()
}

/// Highest score first; equal scores keep their input order.
pub fn rank(ideas: &mut [ProjectIdea]) {
    ideas.sort_by(|a, b| b.buildable_score().total_cmp(&a.buildable_score()));
}

pub fn analyze(records: &[BookmarkRecord]) -> AnalysisReport {
    analyze_at(records, Utc::now())
}

/// Build, dedupe by URL (first wins) and rank one idea per usable record.
pub fn analyze_at(records: &[BookmarkRecord], generated_at: DateTime<Utc>) -> AnalysisReport {
    let built = build_ideas(records);

    let mut skipped = 0usize;
    let kept: Vec<ProjectIdea> = records
        .iter()
        .zip(built)
        .filter_map(|(record, idea)| {
            if idea.is_none() {
                skipped += 1;
                debug!(url = %record.url, "skipping bookmark with empty title");
            }
            idea
        })
        .collect();

    let before_dedup = kept.len();
    let mut ideas: Vec<ProjectIdea> = kept
        .into_iter()
        .unique_by(|idea| idea.url().to_string())
        .collect();
    if ideas.len() < before_dedup {
        debug!(duplicates = before_dedup - ideas.len(), "dropped duplicate URLs");
    }

    rank(&mut ideas);
    let report = AnalysisReport::new(generated_at, ideas);
    info!(
        records = records.len(),
        skipped,
        ideas = report.total_ideas(),
        weekend_feasible = report.weekend_feasible(),
        "analysis complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(report: &AnalysisReport) -> Vec<&str> {
        report.ideas().iter().map(|i| i.url()).collect()
    }

    #[test]
    fn ranks_by_score_descending() {
        let records = vec![
            BookmarkRecord::new("Grandma's lasagne", "https://food.example/lasagne"),
            BookmarkRecord::new("Markdown to HTML Converter CLI - GitHub", "https://github.com/a/b"),
            BookmarkRecord::new("Distributed Platform", "https://example.com/p"),
        ];
        let report = analyze(&records);
        assert_eq!(
            urls(&report),
            ["https://github.com/a/b", "https://food.example/lasagne", "https://example.com/p"]
        );
        let scores: Vec<f64> = report.ideas().iter().map(|i| i.buildable_score()).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn duplicate_urls_keep_first_record() {
        let records = vec![
            BookmarkRecord::new("Sudoku solver", "https://example.com/sudoku"),
            BookmarkRecord::new("Sudoku bot", "https://example.com/sudoku"),
        ];
        let report = analyze(&records);
        assert_eq!(report.total_ideas(), 1);
        assert_eq!(report.ideas()[0].title(), "Sudoku solver");
    }

    #[test]
    fn skipped_record_does_not_claim_url() {
        let records = vec![
            BookmarkRecord::new(" - YouTube", "https://example.com/x"),
            BookmarkRecord::new("Tiny bot", "https://example.com/x"),
        ];
        let report = analyze(&records);
        assert_eq!(report.total_ideas(), 1);
        assert_eq!(report.ideas()[0].title(), "Tiny bot");
    }

    #[test]
    fn empty_titles_not_counted() {
        let records = vec![
            BookmarkRecord::new("", "https://example.com/a"),
            BookmarkRecord::new("Recipe box", "https://example.com/b"),
        ];
        let report = analyze(&records);
        assert_eq!(report.total_ideas(), 1);
        assert_eq!(urls(&report), ["https://example.com/b"]);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let records = vec![
            BookmarkRecord::new("Sourdough starter notes", "https://a.example"),
            BookmarkRecord::new("Birdwatching log", "https://b.example"),
            BookmarkRecord::new("Knitting patterns", "https://c.example"),
        ];
        let report = analyze(&records);
        assert_eq!(report.ideas()[1].url(), "https://b.example");
        assert_eq!(report.ideas()[2].url(), "https://c.example");
    }

    #[test]
    fn rank_is_idempotent() {
        let records = vec![
            BookmarkRecord::new("Twitter bot", "https://one.example"),
            BookmarkRecord::new("Knitting patterns", "https://two.example"),
            BookmarkRecord::new("Web scraper CLI", "https://three.example"),
        ];
        let report = analyze(&records);
        let mut again = report.ideas().to_vec();
        rank(&mut again);
        assert_eq!(again, report.ideas());
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let report = analyze(&[]);
        assert_eq!(report.total_ideas(), 0);
        assert_eq!(report.weekend_feasible(), 0);
        assert!(report.ideas().is_empty());
    }

    #[test]
    fn uses_given_timestamp() {
        let at = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(analyze_at(&[], at).generated_at(), at);
    }
}

use super::category::Category;
use super::domain::{extract_domain, source_host};

/// Ideas scoring at or above this are weekend-feasible. Filters over a
/// report must compare against this and nothing else.
pub const WEEKEND_FEASIBLE_THRESHOLD: f64 = 0.6;

pub const BASELINE_SCORE: f64 = 0.5;
pub const EASY_INDICATOR_WEIGHT: f64 = 0.1;
pub const EASY_INDICATOR_CAP: f64 = 0.3;
pub const WEEKEND_CATEGORY_BONUS: f64 = 0.15;
pub const HARD_INDICATOR_WEIGHT: f64 = 0.15;
pub const HARD_INDICATOR_CAP: f64 = 0.45;
pub const HARD_CATEGORY_PENALTY: f64 = 0.2;
pub const SOURCE_HOST_BONUS: f64 = 0.1;

pub const DEFAULT_REASONING: &str = "No strong indicators either way";

const EASY_INDICATORS: &[&str] = &[
    "cli", "script", "scripts", "bot", "scraper", "parser", "converter", "simple", "basic",
    "tiny", "minimal", "starter", "template",
];

const HARD_INDICATORS: &[&str] = &[
    "platform", "enterprise", "scale", "scalable", "infrastructure", "distributed", "complex",
    "cluster", "orchestration",
];

const WEEKEND_CATEGORIES: &[Category] = &[Category::Tools, Category::Web];
const HARD_CATEGORIES: &[Category] = &[Category::Hardware, Category::DevOps];

fn count_hits(concepts: &[String], indicators: &[&str]) -> usize {
    concepts
        .iter()
        .filter(|c| indicators.contains(&c.as_str()))
        .count()
}

/// Score an idea on the 0-1 weekend scale and explain which signals fired.
///
/// The result is clamped to `[0, 1]` and rounded to hundredths, so
/// comparisons against [`WEEKEND_FEASIBLE_THRESHOLD`] are exact.
pub fn score_buildability(concepts: &[String], category: Category, url: &str) -> (f64, String) {
    let mut score = BASELINE_SCORE;
    let mut reasons = Vec::new();

    let easy = count_hits(concepts, EASY_INDICATORS);
    if easy > 0 {
        score += (EASY_INDICATOR_WEIGHT * easy as f64).min(EASY_INDICATOR_CAP);
        reasons.push(format!("Contains {easy} easy-build indicator(s)"));
    }

    if WEEKEND_CATEGORIES.contains(&category) {
        score += WEEKEND_CATEGORY_BONUS;
        reasons.push("Category is weekend-friendly".to_string());
    }

    let hard = count_hits(concepts, HARD_INDICATORS);
    if hard > 0 {
        score -= (HARD_INDICATOR_WEIGHT * hard as f64).min(HARD_INDICATOR_CAP);
        reasons.push(format!("Contains {hard} complex indicator(s)"));
    }

    if HARD_CATEGORIES.contains(&category) {
        score -= HARD_CATEGORY_PENALTY;
        reasons.push("Category typically requires more time".to_string());
    }

    if let Some(host) = extract_domain(url).as_deref().and_then(source_host) {
        score += SOURCE_HOST_BONUS;
        reasons.push(format!("{host} project (likely has code reference)"));
    }

    let score = (score.clamp(0.0, 1.0) * 100.0).round() / 100.0;
    let reasoning = if reasons.is_empty() {
        DEFAULT_REASONING.to_string()
    } else {
        reasons.join("; ")
    };
    (score, reasoning)
}

pub fn is_weekend_feasible(score: f64) -> bool {
    score >= WEEKEND_FEASIBLE_THRESHOLD
}

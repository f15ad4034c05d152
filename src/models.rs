use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analyzer::category::Category;
use crate::analyzer::score::is_weekend_feasible;

/// One scored project idea derived from a single bookmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectIdea {
    title: String,
    url: String,
    category: Category,
    concepts: Vec<String>,
    buildable_score: f64,
    weekend_feasible: bool,
    reasoning: String,
    source_bookmark: String,
}

impl ProjectIdea {
    /// `weekend_feasible` is always derived from `buildable_score`.
    pub fn new(
        title: String,
        url: String,
        category: Category,
        concepts: Vec<String>,
        buildable_score: f64,
        reasoning: String,
        source_bookmark: String,
    ) -> Self {
        let buildable_score = buildable_score.clamp(0.0, 1.0);
        ProjectIdea {
            title,
            url,
            category,
            concepts,
            buildable_score,
            weekend_feasible: is_weekend_feasible(buildable_score),
            reasoning,
            source_bookmark,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn concepts(&self) -> &[String] {
        &self.concepts
    }

    pub fn buildable_score(&self) -> f64 {
        self.buildable_score
    }

    pub fn weekend_feasible(&self) -> bool {
        self.weekend_feasible
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    pub fn source_bookmark(&self) -> &str {
        &self.source_bookmark
    }
}

/// Ranked ideas plus summary counts. Only constructed through
/// [`AnalysisReport::new`], which keeps the counts in step with `ideas`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    generated_at: DateTime<Utc>,
    total_ideas: usize,
    weekend_feasible: usize,
    ideas: Vec<ProjectIdea>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: Category,
    pub ideas: usize,
    pub weekend_feasible: usize,
}

impl AnalysisReport {
    /// `ideas` must already be ranked.
    pub fn new(generated_at: DateTime<Utc>, ideas: Vec<ProjectIdea>) -> Self {
        let weekend_feasible = ideas.iter().filter(|i| i.weekend_feasible()).count();
        AnalysisReport {
            generated_at,
            total_ideas: ideas.len(),
            weekend_feasible,
            ideas,
        }
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn total_ideas(&self) -> usize {
        self.total_ideas
    }

    pub fn weekend_feasible(&self) -> usize {
        self.weekend_feasible
    }

    pub fn ideas(&self) -> &[ProjectIdea] {
        &self.ideas
    }

    /// Keep only weekend-feasible ideas, preserving rank order.
    pub fn buildable_only(self) -> Self {
        let ideas = self
            .ideas
            .into_iter()
            .filter(ProjectIdea::weekend_feasible)
            .collect();
        AnalysisReport::new(self.generated_at, ideas)
    }

    /// Per-category totals in priority order, skipping empty categories.
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        Category::PRIORITY
            .iter()
            .map(|&category| {
                let in_category = self.ideas.iter().filter(|i| i.category() == category);
                CategoryCount {
                    category,
                    ideas: in_category.clone().count(),
                    weekend_feasible: in_category.filter(|i| i.weekend_feasible()).count(),
                }
            })
            .filter(|c| c.ideas > 0)
            .collect()
    }
}

pub mod aggregate;
pub mod category;
pub mod concepts;
pub mod domain;
pub mod score;

use crate::loader::BookmarkRecord;
use crate::models::ProjectIdea;

/// Three-pass pipeline: title/url → concepts → category → score.
/// Returns `None` when nothing is left of the title after cleaning.
pub fn build_idea(record: &BookmarkRecord) -> Option<ProjectIdea> {
    let title = concepts::clean_title(&record.title);
    if title.is_empty() {
        return None;
    }

    let concepts = concepts::extract_concepts(&title, &record.url);
    let category = category::categorize(&concepts, &record.url);
    let (score, reasoning) = score::score_buildability(&concepts, category, &record.url);

    Some(ProjectIdea::new(
        title,
        record.url.clone(),
        category,
        concepts,
        score,
        reasoning,
        record.title.clone(),
    ))
}

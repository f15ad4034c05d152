pub mod analyzer;
pub mod loader;
pub mod models;
pub mod report;

pub use analyzer::aggregate::{analyze, analyze_at};
pub use analyzer::category::Category;
pub use analyzer::score::WEEKEND_FEASIBLE_THRESHOLD;
pub use loader::{load_chrome_bookmarks, parse_chrome_bookmarks, BookmarkRecord, LoadError};
pub use models::{AnalysisReport, CategoryCount, ProjectIdea};

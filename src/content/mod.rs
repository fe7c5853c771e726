//! Content module - post discovery, metadata extraction, and rendering

mod index;
mod keywords;
mod markdown;
mod post;
mod scanner;
mod summary;

pub use index::build_index;
pub use keywords::extract_keywords;
pub use markdown::MarkdownRenderer;
pub use post::Post;
pub use scanner::scan_posts;
pub use summary::{is_calendar_date, PostSummary};

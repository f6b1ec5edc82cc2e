//! Blog content: CMS records and the normalizer that prepares them for display.
//!
//! # Pipeline
//!
//! ```text
//! BlogClient ──fetch──▶ ApiCache ──▶ Vec<BlogPost>
//!      │
//!      └─ enrich() ──▶ EnrichedPost { category, excerpt, read_time_minutes, display_date }
//!                          │
//!                          └─ select_related() for the post page
//! ```
//!
//! When the CMS is unreachable and nothing is cached, the listing shows
//! `placeholder_posts()` instead.

pub mod category;
pub mod client;
pub mod fallback;
pub mod normalize;
pub mod post;
pub mod related;

pub use category::{assign_category, Category, CategoryRule, CATEGORY_RULES};
pub use client::{BlogClient, PostPage};
pub use fallback::placeholder_posts;
pub use normalize::{
    estimate_read_time, format_display_date, strip_html_tags, truncate_text,
    DEFAULT_EXCERPT_LINES, DEFAULT_READ_TIME_MINUTES, WORDS_PER_LINE, WORDS_PER_MINUTE,
};
pub use post::{enrich, BlogPost, EnrichedPost, FeaturedImage, PostId};
pub use related::{select_related, DEFAULT_RELATED_COUNT};

//! Blog client: cached post listing and post pages.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{info, warn};

use super::fallback::placeholder_posts;
use super::post::{enrich, BlogPost, EnrichedPost};
use super::related::select_related;
use crate::cache::{ApiCache, FetchError, FetchOptions};

/// A single post with its related posts
#[derive(Debug, Clone)]
pub struct PostPage {
    pub post: EnrichedPost,
    pub related: Vec<EnrichedPost>,
}

/// Reads blog posts from the CMS through a shared [`ApiCache`]
pub struct BlogClient {
    cache: Arc<ApiCache>,
    /// Full URL of the blogs endpoint
    endpoint: String,
    ttl: Duration,
}

impl BlogClient {
    /// Create a client for `<api_base_url>/blogs`
    pub fn new(cache: Arc<ApiCache>, api_base_url: &str, ttl: Duration) -> Self {
        Self {
            cache,
            endpoint: format!("{}/blogs", api_base_url.trim_end_matches('/')),
            ttl,
        }
    }

    /// URL the client reads posts from
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch raw posts (fresh, cached or stale).
    ///
    /// The body must be a JSON array. Elements that are not valid posts are
    /// skipped with a warning so one bad record cannot hide the rest.
    pub async fn fetch_posts(&self) -> Result<Vec<BlogPost>, FetchError> {
        let value = self
            .cache
            .fetch_with_cache(&self.endpoint, &FetchOptions::default(), self.ttl)
            .await?;

        let Value::Array(items) = value else {
            return Err(FetchError::Parse {
                url: self.endpoint.clone(),
                message: "expected a JSON array of posts".to_string(),
            });
        };

        let posts = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<BlogPost>(item) {
                Ok(post) => Some(post),
                Err(e) => {
                    warn!(index, error = %e, "Skipping malformed blog post");
                    None
                }
            })
            .collect();

        Ok(posts)
    }

    /// Enriched posts for the listing.
    ///
    /// Never fails: if nothing can be loaded the placeholder posts are returned.
    pub async fn enriched_posts(&self) -> Vec<EnrichedPost> {
        match self.fetch_posts().await {
            Ok(posts) => {
                info!(count = posts.len(), "Loaded blog posts");
                posts.into_iter().map(enrich).collect()
            }
            Err(err) => {
                warn!(error = %err, "Failed to load blog posts, showing placeholders");
                placeholder_posts()
            }
        }
    }

    /// Load the post with `slug` plus up to `max_related` related posts.
    ///
    /// Returns `Ok(None)` when no post has that slug.
    pub async fn post_page(
        &self,
        slug: &str,
        max_related: usize,
    ) -> Result<Option<PostPage>, FetchError> {
        let posts: Vec<EnrichedPost> = self
            .fetch_posts()
            .await?
            .into_iter()
            .map(enrich)
            .collect();

        let Some(post) = posts.iter().find(|p| p.slug() == slug) else {
            return Ok(None);
        };

        let related = select_related(&posts, post, max_related)
            .into_iter()
            .cloned()
            .collect();

        Ok(Some(PostPage {
            post: post.clone(),
            related,
        }))
    }
}

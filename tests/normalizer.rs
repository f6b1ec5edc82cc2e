//! Normalizer Integration Tests
//!
//! Excerpts, category priority, related selection and the placeholder path.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use blogfeed::cache::{ApiCache, FetchError, FetchOptions};
use blogfeed::content::{
    assign_category, enrich, placeholder_posts, select_related, truncate_text, BlogClient,
    BlogPost, Category, EnrichedPost,
};
use blogfeed::Fetcher;
use serde_json::{json, Value};

struct FixedFetcher(Result<Value, FetchError>);

#[async_trait]
impl Fetcher for FixedFetcher {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn fetch_json(&self, _url: &str, _options: &FetchOptions) -> Result<Value, FetchError> {
        self.0.clone()
    }
}

fn client(response: Result<Value, FetchError>) -> BlogClient {
    let cache = Arc::new(ApiCache::new(Arc::new(FixedFetcher(response))));
    BlogClient::new(cache, "https://api.example.com", Duration::from_secs(60))
}

fn post(id: &str, title: &str) -> EnrichedPost {
    enrich(BlogPost::new(id, title, format!("post-{}", id)))
}

#[test]
fn test_truncate_one_line() {
    assert_eq!(
        truncate_text("one two three four five six seven eight nine ten eleven", 1),
        "one two three four five six seven eight nine ten..."
    );
}

#[test]
fn test_hiring_beats_skill() {
    assert_eq!(
        assign_category("Hiring trends", "...skill development..."),
        Category::Recruitment
    );
}

#[test]
fn test_related_backfills_from_other_categories() {
    let all = vec![
        post("current", "Hiring managers guide"),
        post("a", "Productivity rituals"),
        post("b", "Recruitment metrics"),
        post("c", "Learning paths"),
        post("d", "Career growth"),
        post("e", "Team offsite"),
    ];
    let current = &all[0];

    let related = select_related(&all, current, 3);
    assert_eq!(related.len(), 3);
    assert_eq!(related[0].id().as_str(), "b");
    assert_eq!(related[0].category, current.category);
    assert!(related[1..].iter().all(|p| p.category != current.category));
    assert_eq!(related[1].id().as_str(), "a");
    assert_eq!(related[2].id().as_str(), "c");
}

#[tokio::test]
async fn test_listing_enriches_api_posts() {
    let client = client(Ok(json!([
        {
            "id": 1,
            "title": "Boosting productivity",
            "slug": "boosting-productivity",
            "content": "<p>Small <em>changes</em> add up.</p>",
            "date_uploaded": "2024-05-01",
            "featured_image": { "thumbnail": "t.jpg", "main_image": "m.jpg" }
        },
        { "id": 2, "title": "Untitled", "slug": "untitled" }
    ])));

    let posts = client.enriched_posts().await;
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].category, Category::Productivity);
    assert_eq!(posts[0].excerpt, "Small changes add up.");
    assert_eq!(posts[0].display_date, "May 1, 2024");
    assert_eq!(posts[1].category, Category::General);
    assert_eq!(posts[1].read_time_minutes, 5);
}

#[tokio::test]
async fn test_listing_falls_back_to_placeholders() {
    let client = client(Err(FetchError::Network {
        url: "https://api.example.com/blogs".to_string(),
        message: "connection refused".to_string(),
    }));

    let posts = client.enriched_posts().await;
    assert_eq!(posts, placeholder_posts());
}

#[tokio::test]
async fn test_listing_keeps_valid_posts_around_malformed_one() {
    let client = client(Ok(json!([
        { "id": 1, "title": "Hiring engineers", "slug": "hiring-engineers" },
        { "id": 2, "title": 2025 }
    ])));

    let posts = client.enriched_posts().await;
    assert_ne!(posts, placeholder_posts());
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].slug(), "hiring-engineers");
    assert_eq!(posts[0].category, Category::Recruitment);
}

#[tokio::test]
async fn test_post_page_includes_related() {
    let client = client(Ok(json!([
        { "id": 1, "title": "Hiring engineers", "slug": "hiring-engineers" },
        { "id": 2, "title": "Recruitment at scale", "slug": "recruitment-at-scale" },
        { "id": 3, "title": "Career advice", "slug": "career-advice" }
    ])));

    let page = client
        .post_page("hiring-engineers", 3)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(page.post.title(), "Hiring engineers");
    let slugs: Vec<_> = page.related.iter().map(|p| p.slug()).collect();
    assert_eq!(slugs, vec!["recruitment-at-scale", "career-advice"]);
}

#[tokio::test]
async fn test_post_page_propagates_fetch_error() {
    let client = client(Err(FetchError::HttpStatus {
        url: "https://api.example.com/blogs".to_string(),
        status: 500,
    }));

    let result = client.post_page("anything", 3).await;
    assert!(matches!(result, Err(FetchError::HttpStatus { status: 500, .. })));
}

//! Blog post records as served by the CMS, and their display-ready form.

use serde::{Deserialize, Deserializer, Serialize};

use super::category::{assign_category, Category};
use super::normalize::{
    estimate_read_time, format_display_date, strip_html_tags, truncate_text,
    DEFAULT_EXCERPT_LINES, DEFAULT_READ_TIME_MINUTES,
};

/// Post identifier (the CMS sends numbers or strings)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PostId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPostId {
    Number(serde_json::Number),
    Text(String),
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawPostId>::deserialize(deserializer)? {
            Some(RawPostId::Number(n)) => Self(n.to_string()),
            Some(RawPostId::Text(s)) => Self(s),
            None => Self::default(),
        })
    }
}

impl PostId {
    /// Create an ID from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Image references attached to a post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedImage {
    #[serde(default)]
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub main_image: Option<String>,
}

/// A blog post as returned by the CMS.
///
/// Every field tolerates absence or `null`; the API makes no promises.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(default)]
    pub id: PostId,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,

    /// HTML body
    #[serde(default)]
    pub content: Option<String>,

    /// Upload date as sent by the CMS
    #[serde(default)]
    pub date_uploaded: Option<String>,

    #[serde(default)]
    pub featured_image: Option<FeaturedImage>,
}

impl BlogPost {
    /// Create a post with the fields the normalizer reads
    pub fn new(id: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: PostId::new(id),
            title: title.into(),
            slug: slug.into(),
            ..Default::default()
        }
    }

    /// Set the HTML body
    pub fn with_content(mut self, html: impl Into<String>) -> Self {
        self.content = Some(html.into());
        self
    }

    /// Set the upload date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date_uploaded = Some(date.into());
        self
    }

    /// Best image for list views
    pub fn thumbnail(&self) -> Option<&str> {
        let image = self.featured_image.as_ref()?;
        image
            .thumbnail
            .as_deref()
            .or(image.main_image.as_deref())
    }
}

/// A post plus the fields derived for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedPost {
    #[serde(flatten)]
    pub post: BlogPost,

    pub category: Category,

    /// Plain-text excerpt of the body
    pub excerpt: String,

    pub read_time_minutes: u32,

    /// Human-readable upload date (empty when unknown)
    pub display_date: String,
}

impl EnrichedPost {
    pub fn id(&self) -> &PostId {
        &self.post.id
    }

    pub fn slug(&self) -> &str {
        &self.post.slug
    }

    pub fn title(&self) -> &str {
        &self.post.title
    }
}

/// Derive display fields for a post
pub fn enrich(post: BlogPost) -> EnrichedPost {
    let body = post.content.as_deref();
    let plain = strip_html_tags(body.unwrap_or_default());

    let category = assign_category(&post.title, &plain);
    let excerpt = truncate_text(&plain, DEFAULT_EXCERPT_LINES);
    let read_time_minutes = estimate_read_time(body).unwrap_or(DEFAULT_READ_TIME_MINUTES);
    let display_date = post
        .date_uploaded
        .as_deref()
        .map(format_display_date)
        .unwrap_or_default();

    EnrichedPost {
        post,
        category,
        excerpt,
        read_time_minutes,
        display_date,
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_deserializes_api_shape() {
        let post: BlogPost = serde_json::from_value(json!({
            "id": 42,
            "title": "Hiring in 2024",
            "slug": "hiring-in-2024",
            "content": "<p>Body</p>",
            "date_uploaded": "2024-03-05",
            "featured_image": {
                "thumbnail": "https://cdn.example.com/t.jpg",
                "main_image": "https://cdn.example.com/m.jpg"
            }
        }))
        .unwrap();

        assert_eq!(post.id.as_str(), "42");
        assert_eq!(post.slug, "hiring-in-2024");
        assert_eq!(post.thumbnail(), Some("https://cdn.example.com/t.jpg"));
    }

    #[test]
    fn test_post_tolerates_missing_and_null_fields() {
        let post: BlogPost = serde_json::from_value(json!({
            "id": "abc",
            "title": null,
            "featured_image": { "main_image": "https://cdn.example.com/m.jpg" }
        }))
        .unwrap();

        assert_eq!(post.id.as_str(), "abc");
        assert_eq!(post.title, "");
        assert_eq!(post.content, None);
        assert_eq!(post.thumbnail(), Some("https://cdn.example.com/m.jpg"));

        let empty: BlogPost = serde_json::from_value(json!({ "id": null })).unwrap();
        assert_eq!(empty.id.as_str(), "");
    }

    #[test]
    fn test_enrich_derives_fields() {
        let post = BlogPost::new("1", "Career moves", "career-moves")
            .with_content("<p>Ten tips for planning your next role.</p>")
            .with_date("2024-03-05T09:00:00Z");

        let enriched = enrich(post);
        assert_eq!(enriched.category, Category::Career);
        assert_eq!(enriched.excerpt, "Ten tips for planning your next role.");
        assert_eq!(enriched.read_time_minutes, 1);
        assert_eq!(enriched.display_date, "March 5, 2024");
    }

    #[test]
    fn test_enrich_without_body_uses_defaults() {
        let enriched = enrich(BlogPost::new("2", "Office news", "office-news"));
        assert_eq!(enriched.category, Category::General);
        assert_eq!(enriched.excerpt, "");
        assert_eq!(enriched.read_time_minutes, DEFAULT_READ_TIME_MINUTES);
        assert_eq!(enriched.display_date, "");
    }

    #[test]
    fn test_enriched_post_serializes_flat() {
        let enriched = enrich(BlogPost::new("3", "Hiring", "hiring"));
        let value = serde_json::to_value(&enriched).unwrap();
        assert_eq!(value["slug"], "hiring");
        assert_eq!(value["category"], "Recruitment");
    }
}

//! Related post selection for the post page.

use super::post::EnrichedPost;

/// Number of related posts shown under a post
pub const DEFAULT_RELATED_COUNT: usize = 3;

/// Pick up to `max_count` posts related to `current`.
///
/// `current` itself is excluded by ID. Posts in the same category come
/// first; the rest is backfilled from other categories in list order.
pub fn select_related<'a>(
    all: &'a [EnrichedPost],
    current: &EnrichedPost,
    max_count: usize,
) -> Vec<&'a EnrichedPost> {
    let (same, other): (Vec<_>, Vec<_>) = all
        .iter()
        .filter(|post| post.id() != current.id())
        .partition(|post| post.category == current.category);

    same.into_iter().chain(other).take(max_count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::category::Category;
    use crate::content::post::{enrich, BlogPost};

    fn post(id: &str, title: &str) -> EnrichedPost {
        enrich(BlogPost::new(id, title, id))
    }

    fn ids(posts: &[&EnrichedPost]) -> Vec<String> {
        posts.iter().map(|p| p.id().to_string()).collect()
    }

    #[test]
    fn test_same_category_first_then_backfill() {
        let all = vec![
            post("1", "Hiring playbook"),
            post("2", "Productivity hacks"),
            post("3", "Learning Rust"),
            post("4", "Recruitment funnels"),
            post("5", "Career ladders"),
            post("6", "Company picnic"),
        ];
        let current = &all[0];
        assert_eq!(current.category, Category::Recruitment);

        let related = select_related(&all, current, 3);
        assert_eq!(ids(&related), vec!["4", "2", "3"]);
    }

    #[test]
    fn test_excludes_current_and_caps_count() {
        let all = vec![
            post("1", "Hiring A"),
            post("2", "Hiring B"),
            post("3", "Hiring C"),
            post("4", "Hiring D"),
            post("5", "Hiring E"),
        ];

        let related = select_related(&all, &all[2], 3);
        assert_eq!(ids(&related), vec!["1", "2", "4"]);
    }

    #[test]
    fn test_small_pool_returns_everything_else() {
        let all = vec![post("1", "Hiring"), post("2", "Career")];
        let related = select_related(&all, &all[0], 3);
        assert_eq!(ids(&related), vec!["2"]);

        assert!(select_related(&all[..1], &all[0], 3).is_empty());
        assert!(select_related(&all, &all[0], 0).is_empty());
    }
}

//! Keyword-based category inference.
//!
//! The CMS does not tag posts, so a category is inferred from the title and
//! body text. Rules are checked in order and the first match wins.

use serde::{Deserialize, Serialize};

/// Post category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Recruitment,
    Productivity,
    #[serde(rename = "Skills Development")]
    SkillsDevelopment,
    Career,
    General,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Recruitment => write!(f, "Recruitment"),
            Category::Productivity => write!(f, "Productivity"),
            Category::SkillsDevelopment => write!(f, "Skills Development"),
            Category::Career => write!(f, "Career"),
            Category::General => write!(f, "General"),
        }
    }
}

/// One inference rule: any keyword present selects the category
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub keywords: &'static [&'static str],
    pub category: Category,
}

impl CategoryRule {
    /// Check the rule against already lower-cased text
    pub fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|keyword| haystack.contains(keyword))
    }
}

/// Inference rules in priority order
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        keywords: &["hiring", "recruitment"],
        category: Category::Recruitment,
    },
    CategoryRule {
        keywords: &["productivity"],
        category: Category::Productivity,
    },
    CategoryRule {
        keywords: &["skill", "learning"],
        category: Category::SkillsDevelopment,
    },
    CategoryRule {
        keywords: &["work", "career"],
        category: Category::Career,
    },
];

/// Infer a category from a post's title and plain-text body.
///
/// Falls back to [`Category::General`] when no rule matches.
pub fn assign_category(title: &str, body: &str) -> Category {
    let haystack = format!("{} {}", title, body).to_lowercase();

    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(&haystack))
        .map(|rule| rule.category)
        .unwrap_or(Category::General)
}

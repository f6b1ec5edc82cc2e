//! Placeholder posts shown when the CMS cannot be reached.

use super::post::{enrich, BlogPost, EnrichedPost};

/// Fixed list of placeholder posts, already enriched
pub fn placeholder_posts() -> Vec<EnrichedPost> {
    [
        BlogPost::new(
            "placeholder-1",
            "How to Build a Hiring Process That Scales",
            "hiring-process-that-scales",
        )
        .with_content(
            "<p>Growing teams need a repeatable way to find, assess and onboard people. \
             We walk through the stages of a recruitment pipeline that keeps quality high \
             as volume grows.</p>",
        )
        .with_date("2024-01-15"),
        BlogPost::new(
            "placeholder-2",
            "Productivity Habits of Distributed Teams",
            "productivity-habits-distributed-teams",
        )
        .with_content(
            "<p>Clear ownership, written updates and protected focus time make remote \
             teams effective. Here is what we have seen work across dozens of clients.</p>",
        )
        .with_date("2024-02-02"),
        BlogPost::new(
            "placeholder-3",
            "Closing Skill Gaps Without Slowing Down",
            "closing-skill-gaps",
        )
        .with_content(
            "<p>Targeted training and mentoring help people grow into new roles while \
             delivery continues. A practical guide for team leads.</p>",
        )
        .with_date("2024-02-20"),
        BlogPost::new(
            "placeholder-4",
            "Planning Your Next Career Move",
            "planning-your-next-career-move",
        )
        .with_content(
            "<p>Before you change roles, take stock of what you want from the next few \
             years and which experiences will get you there.</p>",
        )
        .with_date("2024-03-11"),
    ]
    .into_iter()
    .map(enrich)
    .collect()
}

//! Command-line interface for blogfeed.
//!
//! Lists posts, shows a single post with related posts, and prints the
//! resolved configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::adapters::HttpFetcher;
use crate::cache::ApiCache;
use crate::content::{BlogClient, EnrichedPost, DEFAULT_RELATED_COUNT};

/// blogfeed - Cached CMS blog feed
#[derive(Parser, Debug)]
#[command(name = "blogfeed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Override the CMS base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List blog posts
    List {
        /// Maximum number of posts to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show a post and its related posts
    Show {
        /// Post slug
        slug: String,

        /// Number of related posts
        #[arg(short, long, default_value_t = DEFAULT_RELATED_COUNT)]
        related: usize,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::List { limit } => {
                let client = build_client(self.api_url.as_deref())?;
                list_posts(&client, limit).await
            }
            Commands::Show { slug, related } => {
                let client = build_client(self.api_url.as_deref())?;
                show_post(&client, &slug, related).await
            }
            Commands::Config => show_config(),
        }
    }
}

/// Wire config, HTTP fetcher and cache into a client
fn build_client(api_url: Option<&str>) -> Result<BlogClient> {
    let config = crate::config::config()?;
    let fetcher = HttpFetcher::new(config.request_timeout)?;
    let cache = Arc::new(ApiCache::new(Arc::new(fetcher)));
    let base_url = api_url.unwrap_or(&config.api_base_url);

    Ok(BlogClient::new(cache, base_url, config.cache_ttl))
}

/// List posts (placeholders when the CMS is unavailable)
async fn list_posts(client: &BlogClient, limit: usize) -> Result<()> {
    let posts = client.enriched_posts().await;

    if posts.is_empty() {
        println!("No posts found");
        return Ok(());
    }

    println!("{:<20} {:<20} {:<6} {}", "DATE", "CATEGORY", "READ", "TITLE");
    println!("{}", "-".repeat(80));

    for post in posts.iter().take(limit) {
        println!(
            "{:<20} {:<20} {:<6} {}",
            post.display_date,
            post.category.to_string(),
            format!("{}m", post.read_time_minutes),
            post.title()
        );
    }

    if posts.len() > limit {
        println!("\n({} more)", posts.len() - limit);
    }

    Ok(())
}

/// Show one post with related posts
async fn show_post(client: &BlogClient, slug: &str, related: usize) -> Result<()> {
    let page = client
        .post_page(slug, related)
        .await
        .with_context(|| format!("Failed to load post '{}'", slug))?;

    let Some(page) = page else {
        anyhow::bail!("Post '{}' not found", slug);
    };

    print_post(&page.post);

    if !page.related.is_empty() {
        println!("\nRelated posts:");
        for post in &page.related {
            println!("  {} [{}] ({})", post.title(), post.category, post.slug());
        }
    }

    Ok(())
}

fn print_post(post: &EnrichedPost) {
    println!("Title: {}", post.title());
    println!("Slug: {}", post.slug());
    println!("Category: {}", post.category);
    if !post.display_date.is_empty() {
        println!("Published: {}", post.display_date);
    }
    println!("Read time: {} min", post.read_time_minutes);
    if let Some(thumbnail) = post.post.thumbnail() {
        println!("Image: {}", thumbnail);
    }
    println!("\n{}", post.excerpt);
}

/// Show resolved configuration
fn show_config() -> Result<()> {
    let config = crate::config::config()?;

    println!("blogfeed configuration");
    println!("{}", "=".repeat(50));
    println!();

    if let Some(ref path) = config.config_file {
        println!("Config file: {}", path.display());
    } else {
        println!("Config file: (none - using defaults)");
    }

    println!();
    println!("API base URL:    {}", config.api_base_url);
    println!("Request timeout: {}s", config.request_timeout.as_secs());
    println!("Cache TTL:       {}s", config.cache_ttl.as_secs());

    Ok(())
}

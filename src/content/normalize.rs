//! Text normalization for post bodies.
//!
//! Every function here is total: missing or malformed input degrades to an
//! empty string or `None` instead of an error.

use chrono::{DateTime, NaiveDate};

/// Words counted as one displayed line when truncating excerpts
pub const WORDS_PER_LINE: usize = 10;

/// Lines shown in a post excerpt
pub const DEFAULT_EXCERPT_LINES: usize = 2;

/// Reading speed used for read time estimates
pub const WORDS_PER_MINUTE: usize = 200;

/// Read time shown when a post has no body
pub const DEFAULT_READ_TIME_MINUTES: u32 = 5;

/// Elements that break the text flow; they separate the words around them
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "img", "li", "nav",
    "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Remove all markup from an HTML fragment and return its text.
///
/// `<script>` and `<style>` blocks are dropped with their contents, common
/// entities are decoded and runs of whitespace collapse to one space.
/// Block-level tags separate words; inline tags vanish without a trace.
pub fn strip_html_tags(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let without_blocks = remove_blocks(html, &["script", "style"]);

    let mut text = String::with_capacity(without_blocks.len());
    let mut tag: Option<String> = None;
    for ch in without_blocks.chars() {
        match tag.as_mut() {
            None if ch == '<' => tag = Some(String::new()),
            None => text.push(ch),
            Some(inner) if ch == '>' => {
                if is_block_tag(inner) {
                    text.push(' ');
                }
                tag = None;
            }
            Some(inner) => inner.push(ch),
        }
    }

    collapse_whitespace(&decode_entities(&text))
}

/// Whether the inside of a tag (`p class="x"`, `/div`, `br/`) names a block element
fn is_block_tag(inner: &str) -> bool {
    let name: String = inner
        .trim_start_matches('/')
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase();
    BLOCK_TAGS.contains(&name.as_str())
}

/// Cut text down to `max_lines` pseudo-lines of [`WORDS_PER_LINE`] words.
///
/// Appends `...` when words were left out. A line count of zero yields an
/// empty string.
pub fn truncate_text(text: &str, max_lines: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let limit = max_lines.saturating_mul(WORDS_PER_LINE);
    let taken = words.len().min(limit);

    if taken == 0 {
        return String::new();
    }

    let mut excerpt = words[..taken].join(" ");
    if taken < words.len() {
        excerpt.push_str("...");
    }
    excerpt
}

/// Estimate reading time in whole minutes, rounded up.
///
/// Returns `None` when there is no body text, leaving the default to the caller.
pub fn estimate_read_time(body: Option<&str>) -> Option<u32> {
    let text = strip_html_tags(body?);
    let words = text.split_whitespace().count();
    if words == 0 {
        return None;
    }

    let minutes = words.div_ceil(WORDS_PER_MINUTE);
    Some(u32::try_from(minutes).unwrap_or(u32::MAX))
}

/// Format an upload date for display, e.g. `March 5, 2024`.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates. Anything else
/// is returned unchanged.
pub fn format_display_date(raw: &str) -> String {
    let raw = raw.trim();

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .or_else(|_| {
            // Some CMS exports use "YYYY-MM-DD HH:MM:SS"
            raw.get(..10)
                .ok_or(())
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").map_err(|_| ()))
        });

    match date {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn remove_blocks(html: &str, tags: &[&str]) -> String {
    let mut buf = html.to_string();

    for tag in tags {
        let open = format!("<{}", tag);
        let close = format!("</{}>", tag);

        loop {
            // ASCII lowercasing keeps byte offsets aligned with `buf`
            let lower = buf.to_ascii_lowercase();
            let Some(start) = lower.find(&open) else {
                break;
            };
            match lower[start..].find(&close) {
                Some(rel) => buf.replace_range(start..start + rel + close.len(), " "),
                None => buf.truncate(start),
            }
        }
    }

    buf
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&tail[1..semi]).map(|ch| (ch, semi)));

        match decoded {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

use std::collections::HashSet;
use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use super::domain::{extract_domain, is_noise_domain};

pub const MAX_CONCEPTS: usize = 8;
pub const MIN_TOKEN_LEN: usize = 3;

/// Site names browsers append to page titles.
const SITE_SUFFIXES: &[&str] = &[
    "YouTube",
    "GitHub",
    "GitLab",
    "Codeberg.org",
    "SourceForge.net",
    "Medium",
    "Stack Overflow",
    "Reddit",
    "Wikipedia",
    "Hacker News",
    "DEV Community",
    "Product Hunt",
    "Hackaday",
    "Instructables",
    "npm",
    "crates.io: Rust Package Registry",
    "PyPI",
];

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "your", "you", "this", "that", "how", "what", "why",
    "are", "into", "about", "using", "use", "our", "its", "was", "via", "all", "not", "can",
    "get", "new", "one", "www", "http", "https", "com", "org", "net",
];

// Longest names first so "DEV Community" wins over a shorter prefix.
static SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    let names = SITE_SUFFIXES
        .iter()
        .sorted_by_key(|s| std::cmp::Reverse(s.len()))
        .map(|s| regex::escape(s))
        .join("|");
    Regex::new(&format!(r"(?i)\s*[-|·–—:]\s*(?:{names})\s*$")).unwrap()
});

static STOP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Trim the title and drop trailing " - YouTube" / " | GitHub" style noise.
pub fn clean_title(raw: &str) -> String {
    let mut title = raw.trim().to_string();
    while let Some(m) = SUFFIX_RE.find(&title) {
        title.truncate(m.start());
        title.truncate(title.trim_end().len());
    }
    title
}

fn tokenize(title: &str) -> impl Iterator<Item = String> + '_ {
    title
        .split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN && !STOP_SET.contains(t.as_str()))
}

/// Title keywords followed by the URL host, unique, first-seen order.
pub fn extract_concepts(clean_title: &str, url: &str) -> Vec<String> {
    let domain = extract_domain(url).filter(|d| !is_noise_domain(d));
    tokenize(clean_title)
        .chain(domain)
        .unique()
        .take(MAX_CONCEPTS)
        .collect()
}

/// Generic sites whose host says nothing about the project itself.
const NOISE_DOMAINS: &[&str] = &[
    "github.com",
    "gitlab.com",
    "bitbucket.org",
    "codeberg.org",
    "sr.ht",
    "sourceforge.net",
    "youtube.com",
    "youtu.be",
    "medium.com",
    "reddit.com",
    "twitter.com",
    "x.com",
    "news.ycombinator.com",
    "stackoverflow.com",
    "google.com",
    "dev.to",
    "producthunt.com",
    "npmjs.com",
    "crates.io",
    "pypi.org",
    "wikipedia.org",
];

/// Code hosts that earn the hosting bonus, with the name used in reasoning.
const SOURCE_HOSTS: &[(&str, &str)] = &[
    ("github.com", "GitHub"),
    ("gitlab.com", "GitLab"),
    ("bitbucket.org", "Bitbucket"),
    ("codeberg.org", "Codeberg"),
    ("sr.ht", "SourceHut"),
    ("sourceforge.net", "SourceForge"),
];

/// Host of `url`, lowercased, without a leading `www.`, port or userinfo.
/// Anything that doesn't look like `scheme://host` yields `None`.
pub fn extract_domain(url: &str) -> Option<String> {
    let (_, rest) = url.trim().split_once("://")?;
    let authority = rest
        .split(|c: char| c == '/' || c == '?' || c == '#')
        .next()
        .unwrap_or("");
    let host = authority.rsplit('@').next().unwrap_or("");
    let host = host.split(':').next().unwrap_or("").to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(host.as_str());

    let valid = !host.is_empty()
        && !host.starts_with('.')
        && !host.ends_with('.')
        && host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '.');
    valid.then(|| host.to_string())
}

fn matches_host(domain: &str, host: &str) -> bool {
    domain == host
        || domain
            .strip_suffix(host)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

pub fn is_noise_domain(domain: &str) -> bool {
    NOISE_DOMAINS.iter().any(|d| matches_host(domain, d))
}

/// Display name of the code host serving `domain`, if any.
pub fn source_host(domain: &str) -> Option<&'static str> {
    SOURCE_HOSTS
        .iter()
        .find(|(host, _)| matches_host(domain, host))
        .map(|(_, name)| *name)
}

/// Host labels usable as topical terms: everything but the TLD.
/// `docs.arduino.cc` -> `["docs", "arduino"]`.
pub fn domain_terms(domain: &str) -> Vec<String> {
    if is_noise_domain(domain) {
        return Vec::new();
    }
    let labels: Vec<&str> = domain.split('.').collect();
    let keep = labels.len().saturating_sub(1).max(1);
    labels[..keep]
        .iter()
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect()
}

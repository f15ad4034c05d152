use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Chrome roots that hold user bookmarks, in the order they are read.
const CHROME_ROOTS: &[&str] = &["bookmark_bar", "other", "synced"];

/// A single leaf bookmark, folders already flattened away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkRecord {
    pub title: String,
    pub url: String,
}

impl BookmarkRecord {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        BookmarkRecord {
            title: title.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read bookmarks file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed bookmarks JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct ChromeExport {
    #[serde(default)]
    roots: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct ChromeNode {
    #[serde(rename = "type", default)]
    kind: String,
    name: Option<String>,
    url: Option<String>,
    #[serde(default)]
    children: Vec<ChromeNode>,
}

/// Flatten a Chrome `Bookmarks` JSON document into leaf bookmarks,
/// depth-first, in document order.
pub fn parse_chrome_bookmarks(json: &str) -> Result<Vec<BookmarkRecord>, LoadError> {
    let export: ChromeExport = serde_json::from_str(json)?;
    let mut records = Vec::new();

    for root in CHROME_ROOTS {
        if let Some(value) = export.roots.get(*root) {
            let node = ChromeNode::deserialize(value)?;
            traverse(node, &mut records);
        }
    }
    Ok(records)
}

fn traverse(node: ChromeNode, out: &mut Vec<BookmarkRecord>) {
    match node.kind.as_str() {
        "url" => out.push(BookmarkRecord {
            title: node.name.unwrap_or_else(|| "Untitled".to_string()),
            url: node.url.unwrap_or_default(),
        }),
        "folder" => {
            for child in node.children {
                traverse(child, out);
            }
        }
        _ => {}
    }
}

pub fn load_chrome_bookmarks(path: &Path) -> Result<Vec<BookmarkRecord>, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_chrome_bookmarks(&json)?;
    info!("Loaded {} bookmarks from {}", records.len(), path.display());
    Ok(records)
}

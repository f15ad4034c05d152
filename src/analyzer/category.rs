use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{domain_terms, extract_domain};

/// Topical bucket for an idea. Declaration order is the tie-break priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Tools,
    Web,
    Saas,
    AiMl,
    Data,
    Creative,
    Mobile,
    Games,
    Hardware,
    DevOps,
    Other,
}

impl Category {
    pub const PRIORITY: [Category; 11] = [
        Category::Tools,
        Category::Web,
        Category::Saas,
        Category::AiMl,
        Category::Data,
        Category::Creative,
        Category::Mobile,
        Category::Games,
        Category::Hardware,
        Category::DevOps,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tools => "tools",
            Category::Web => "web",
            Category::Saas => "saas",
            Category::AiMl => "ai_ml",
            Category::Data => "data",
            Category::Creative => "creative",
            Category::Mobile => "mobile",
            Category::Games => "games",
            Category::Hardware => "hardware",
            Category::DevOps => "dev_ops",
            Category::Other => "other",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Tools => &[
                "tool", "tools", "cli", "terminal", "shell", "editor", "ide", "utility",
                "utilities", "converter", "formatter", "linter", "plugin", "extension", "command",
                "vim", "neovim", "emacs", "vscode", "devtools",
            ],
            Category::Web => &[
                "web", "html", "css", "javascript", "typescript", "react", "vue", "svelte",
                "angular", "frontend", "backend", "website", "webapp", "browser", "nextjs",
                "tailwind", "http",
            ],
            Category::Saas => &[
                "saas", "dashboard", "service", "api", "cloud", "automation", "subscription",
                "billing", "crm", "startup",
            ],
            Category::AiMl => &[
                "gpt", "llm", "llms", "neural", "model", "models", "tensorflow", "pytorch",
                "machine", "learning", "openai", "transformer", "embeddings", "chatbot", "agent",
                "agents", "diffusion",
            ],
            Category::Data => &[
                "data", "database", "sql", "sqlite", "postgres", "nosql", "analytics",
                "visualization", "pandas", "dataset", "etl", "csv",
            ],
            Category::Creative => &[
                "design", "art", "music", "audio", "video", "generator", "creator", "drawing",
                "animation", "photo", "pixel",
            ],
            Category::Mobile => &[
                "ios", "android", "mobile", "flutter", "swift", "kotlin", "swiftui",
            ],
            Category::Games => &[
                "game", "games", "gamedev", "unity", "unreal", "godot", "phaser", "pygame",
                "engine", "puzzle", "roguelike", "sprite", "bevy",
            ],
            Category::Hardware => &[
                "arduino", "raspberry", "iot", "sensor", "sensors", "esp32", "microcontroller",
                "pcb", "firmware", "robot", "robotics", "drone",
            ],
            Category::DevOps => &[
                "docker", "kubernetes", "k8s", "deploy", "deployment", "infrastructure",
                "monitoring", "terraform", "ansible", "cicd", "devops", "observability",
            ],
            Category::Other => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the category whose keyword set shares the most distinct terms with
/// the concepts and the URL host. Earlier categories in
/// [`Category::PRIORITY`] win ties; no overlap at all means `Other`.
pub fn categorize(concepts: &[String], url: &str) -> Category {
    let host_terms = extract_domain(url)
        .map(|d| domain_terms(&d))
        .unwrap_or_default();
    let terms: HashSet<&str> = concepts
        .iter()
        .chain(host_terms.iter())
        .map(String::as_str)
        .collect();

    let mut best = (Category::Other, 0usize);
    for category in Category::PRIORITY {
        let hits = category
            .keywords()
            .iter()
            .filter(|kw| terms.contains(*kw))
            .count();
        if hits > best.1 {
            best = (category, hits);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concepts(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn best_overlap_wins() {
        let c = concepts(&["markdown", "html", "converter", "cli"]);
        assert_eq!(categorize(&c, "https://github.com/example/md-converter"), Category::Tools);
    }

    #[test]
    fn tie_prefers_priority_order() {
        // one web hit, one games hit
        let c = concepts(&["browser", "puzzle"]);
        assert_eq!(categorize(&c, ""), Category::Web);
        // one games hit, one hardware hit
        let c = concepts(&["sprite", "arduino"]);
        assert_eq!(categorize(&c, ""), Category::Games);
    }

    #[test]
    fn no_overlap_is_other() {
        assert_eq!(categorize(&concepts(&["recipes", "sourdough"]), "https://example.com"), Category::Other);
        assert_eq!(categorize(&[], "garbage"), Category::Other);
    }

    #[test]
    fn host_labels_count_once() {
        let c = concepts(&["arduino", "weather"]);
        assert_eq!(categorize(&c, "https://arduino.cc/projects"), Category::Hardware);
        // host alone carries the signal
        assert_eq!(categorize(&concepts(&["weather"]), "https://www.arduino.cc/"), Category::Hardware);
    }

    #[test]
    fn noise_hosts_carry_no_signal() {
        // "unity" never comes from a github URL, only from concepts
        assert_eq!(categorize(&[], "https://github.com/unity/unity"), Category::Other);
    }

    #[test]
    fn deterministic() {
        let c = concepts(&["react", "game", "engine", "docker"]);
        let first = categorize(&c, "https://example.com");
        for _ in 0..10 {
            assert_eq!(categorize(&c, "https://example.com"), first);
        }
        assert_eq!(first, Category::Games);
    }

    #[test]
    fn priority_matches_declaration_order() {
        let mut sorted = Category::PRIORITY;
        sorted.sort();
        assert_eq!(sorted, Category::PRIORITY);
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Category::AiMl).unwrap(), "\"ai_ml\"");
        assert_eq!(serde_json::to_string(&Category::DevOps).unwrap(), "\"dev_ops\"");
        assert_eq!(Category::DevOps.to_string(), "dev_ops");
    }
}

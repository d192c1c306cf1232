//! # Items
//!
//! The inventory is an ordered list of MCP server entries. The core only ever
//! flips `active`; everything under `launch` is carried through untouched so it
//! survives a save.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How an MCP server is reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "CMD")]
    Command,
    #[serde(rename = "SSE")]
    ServerSentEvents,
    #[serde(rename = "JSON")]
    JsonConfig,
    #[serde(rename = "HTTP")]
    Http,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Command => "CMD",
            Category::ServerSentEvents => "SSE",
            Category::JsonConfig => "JSON",
            Category::Http => "HTTP",
        }
    }
}

/// Launch metadata. Opaque to the state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Launch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_config: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl Launch {
    /// One-line summary for the details panel.
    pub fn summary(&self) -> String {
        if let Some(command) = &self.command {
            if self.args.is_empty() {
                return command.clone();
            }
            return format!("{} {}", command, self.args.join(" "));
        }
        if let Some(url) = &self.url {
            return url.clone();
        }
        if self.json_config.is_some() {
            return "inline JSON config".to_string();
        }
        "-".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(rename = "type", default)]
    pub category: Category,
    #[serde(default)]
    pub active: bool,
    #[serde(flatten)]
    pub launch: Launch,
}

impl Item {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            active: false,
            launch: Launch::default(),
        }
    }

    pub fn command(mut self, command: &str, args: &[&str]) -> Self {
        self.launch.command = Some(command.to_string());
        self.launch.args = args.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.launch.url = Some(url.to_string());
        self
    }

    /// Status glyph used by every renderer.
    pub fn marker(&self) -> &'static str {
        if self.active { "●" } else { "○" }
    }
}

/// Built-in inventory written on first run.
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new("github-mcp", Category::Command)
            .command("npx", &["-y", "@modelcontextprotocol/server-github"]),
        Item::new("filesystem-mcp", Category::Command)
            .command("npx", &["-y", "@modelcontextprotocol/server-filesystem", "."]),
        Item::new("docker-mcp", Category::Command).command("docker", &["mcp", "gateway", "run"]),
        Item::new("context7", Category::Http).url("https://mcp.context7.com/mcp"),
        Item::new("sequential-thinking", Category::Command)
            .command("npx", &["-y", "@modelcontextprotocol/server-sequential-thinking"]),
    ]
}

/// Number of active items in the whole store.
pub fn active_count(items: &[Item]) -> usize {
    items.iter().filter(|item| item.active).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_json_uses_short_type_tags() {
        let item = Item::new("context7", Category::ServerSentEvents).url("http://localhost:3000/sse");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""type":"SSE""#));
        assert!(json.contains(r#""url":"http://localhost:3000/sse""#));
        assert!(!json.contains("command"));
    }

    #[test]
    fn test_item_parses_sparse_json() {
        let item: Item = serde_json::from_str(r#"{"name":"bare"}"#).unwrap();
        assert_eq!(item.name, "bare");
        assert_eq!(item.category, Category::Command);
        assert!(!item.active);
        assert_eq!(item.launch, Launch::default());
    }

    #[test]
    fn test_item_keeps_env_and_args() {
        let json = r#"{"name":"gh","type":"CMD","active":true,"command":"npx","args":["-y","gh"],"env":{"TOKEN":"x"}}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(item.active);
        assert_eq!(item.launch.args, vec!["-y", "gh"]);
        assert_eq!(item.launch.env.get("TOKEN").map(String::as_str), Some("x"));
    }

    #[test]
    fn test_launch_summary() {
        let item = Item::new("gh", Category::Command).command("npx", &["-y", "gh"]);
        assert_eq!(item.launch.summary(), "npx -y gh");
        let item = Item::new("web", Category::Http).url("https://example.com/mcp");
        assert_eq!(item.launch.summary(), "https://example.com/mcp");
        assert_eq!(Launch::default().summary(), "-");
    }

    #[test]
    fn test_active_count() {
        let mut items = vec![
            Item::new("a", Category::Command),
            Item::new("b", Category::Command),
            Item::new("c", Category::Http),
        ];
        items[0].active = true;
        items[2].active = true;
        assert_eq!(active_count(&items), 2);
    }

    #[test]
    fn test_default_items_have_unique_names() {
        let items = default_items();
        let mut names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), items.len());
    }
}

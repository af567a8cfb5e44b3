//! Registry catalog model
//!
//! The in-memory catalog of installable registry items (UI components,
//! blocks, hooks and library utilities) and the browsing logic run over it:
//! lookup by name, per-type filtering, and case-insensitive title search.

pub mod catalog;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

pub use catalog::builtin;

/// Error loading or validating a registry document.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate item name: {0}")]
    DuplicateItem(String),
}

/// Kind of registry item, matching the `registry:*` wire names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RegistryItemType {
    #[serde(rename = "registry:ui")]
    Ui,
    #[serde(rename = "registry:block")]
    Block,
    #[serde(rename = "registry:hook")]
    Hook,
    #[serde(rename = "registry:lib")]
    Lib,
}

/// One installable file within a registry item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistryItemFile {
    #[serde(rename = "type")]
    pub file_type: RegistryItemType,
    /// Source path within the registry tree.
    pub path: String,
    /// Destination path in the consuming project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// A catalog entry: metadata plus its installable files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: RegistryItemType,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub registry_dependencies: Vec<String>,
    #[serde(default)]
    pub files: Vec<RegistryItemFile>,
}

impl RegistryItem {
    /// URL of this item's installable JSON artifact under the given registry
    /// base URL.
    pub fn artifact_url(&self, base_url: &str) -> String {
        format!("{}/r/{}.json", base_url.trim_end_matches('/'), self.name)
    }

    /// Shell command a consumer runs to install this item.
    pub fn install_command(&self, base_url: &str) -> String {
        format!("pnpm dlx shadcn@latest add {}", self.artifact_url(base_url))
    }
}

/// A named catalog of registry items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Registry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default)]
    pub items: Vec<RegistryItem>,
}

impl Registry {
    /// Parses and validates a registry JSON document.
    pub fn from_json(input: &str) -> Result<Self, RegistryError> {
        let registry: Registry = serde_json::from_str(input)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Serializes the catalog to pretty-printed registry JSON.
    pub fn to_json(&self) -> Result<String, RegistryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Item names must be unique; the catalog is keyed by name.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.name.as_str()) {
                warn!("duplicate registry item name: {}", item.name);
                return Err(RegistryError::DuplicateItem(item.name.clone()));
            }
        }
        Ok(())
    }

    /// Looks up an item by its unique name.
    pub fn item(&self, name: &str) -> Option<&RegistryItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// All items of one type, in catalog order.
    pub fn items_of_type(
        &self,
        item_type: RegistryItemType,
    ) -> impl Iterator<Item = &RegistryItem> {
        self.items.iter().filter(move |item| item.item_type == item_type)
    }

    /// Case-insensitive title search within one item type, sorted by title.
    /// An empty query matches every item of that type.
    pub fn search(&self, item_type: RegistryItemType, query: &str) -> Vec<&RegistryItem> {
        let needle = query.to_lowercase();
        let mut matches: Vec<&RegistryItem> = self
            .items_of_type(item_type)
            .filter(|item| item.title.to_lowercase().contains(&needle))
            .collect();
        matches.sort_by(|a, b| a.title.cmp(&b.title));
        matches
    }
}

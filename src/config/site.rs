//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,

    // URL
    pub url: String,
    pub root: String,
    /// Post URL pattern; supports :slug, :year, :month and :day
    pub permalink: String,

    // Directory
    pub source_dir: String,
    pub posts_dir: String,
    pub public_dir: String,
    pub tag_dir: String,

    // Writing
    pub new_post_name: String,
    pub render_drafts: bool,

    // Tags
    /// Drop repeated tags on a single post before bucketing
    pub dedupe_tags: bool,
    #[serde(default)]
    pub tag_map: HashMap<String, String>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),
            permalink: "posts/:slug/".to_string(),

            source_dir: "source".to_string(),
            posts_dir: "posts".to_string(),
            public_dir: "public".to_string(),
            tag_dir: "tags".to_string(),

            new_post_name: ":slug.md".to_string(),
            render_drafts: false,

            dedupe_tags: true,
            tag_map: HashMap::new(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        config.tag_dir_path()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// `tag_dir` as a relative path inside `public_dir`.
    ///
    /// The tag output is cleared on every build, so anything that could
    /// reach outside its own subdirectory (empty, `.`, `..`) is rejected.
    pub fn tag_dir_path(&self) -> Result<PathBuf> {
        let path = Path::new(self.tag_dir.trim_matches('/'));
        let is_plain = path
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if path.as_os_str().is_empty() || !is_plain {
            anyhow::bail!(
                "tag_dir must be a subdirectory of public_dir, got {:?}",
                self.tag_dir
            );
        }
        Ok(path.to_path_buf())
    }

    /// Resolve a tag through `tag_map`
    pub fn map_tag<'a>(&'a self, tag: &'a str) -> &'a str {
        self.tag_map.get(tag).map(String::as_str).unwrap_or(tag)
    }
}

//! Content loader - loads posts from the posts directory

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, Post};
use crate::helpers;
use crate::Site;

/// Loads posts from the source directory
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load every post under the posts directory.
    ///
    /// Files that cannot be read or parsed are logged and skipped. The
    /// result is in path order; callers needing date order sort it.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let posts_dir = &self.site.posts_dir;
        if !posts_dir.exists() {
            tracing::warn!("Posts directory {:?} does not exist", posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(posts_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            match self.load_post(path) {
                Ok(Some(post)) => posts.push(post),
                Ok(None) => tracing::debug!("Skipping unpublished post {:?}", path),
                Err(e) => tracing::warn!("Skipping post: {}", e),
            }
        }

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), posts_dir);

        Ok(posts)
    }

    /// Load a single post; `None` for unpublished posts
    pub fn load_post(&self, path: &Path) -> Result<Option<Post>, ContentError> {
        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let (fm, _body) = FrontMatter::parse(&content).map_err(|e| ContentError::FrontMatter {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if !fm.published && !self.site.config.render_drafts {
            return Ok(None);
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");

        let title = fm.title.clone().unwrap_or_else(|| stem.to_string());
        let slug = fm
            .slug
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| slug::slugify(stem));

        let added = fm.added().unwrap_or_default().to_string();
        let added_at = helpers::parse_added(&added);
        if added_at.is_none() {
            tracing::warn!(
                "Post {:?} has no usable `added` ({:?}); it will sort last",
                path,
                added
            );
        }

        let url = match fm.url.as_deref() {
            Some(url) if !url.trim().is_empty() => helpers::url_for(&self.site.config, url),
            _ => helpers::permalink_for(&self.site.config, &slug, added_at.as_ref()),
        };

        let source = path
            .strip_prefix(&self.site.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        Ok(Some(Post {
            url,
            title,
            description: fm.description.unwrap_or_default(),
            slug,
            tags: fm.tags,
            added,
            added_at,
            source,
        }))
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

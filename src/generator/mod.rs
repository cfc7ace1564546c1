//! Generator module - writes tag routes for the page renderer

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::taxonomy::{TagRoute, TagSummary};
use crate::Site;

/// File name each route is written to inside its directory
pub const ROUTE_FILE: &str = "index.json";

/// Writes tag routes under `<public_dir>/<tag_dir>/`
pub struct Generator<'a> {
    site: &'a Site,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Directory holding all tag routes; errors on an unsafe `tag_dir`
    pub fn tag_root(&self) -> Result<PathBuf> {
        Ok(self.site.public_dir.join(self.site.config.tag_dir_path()?))
    }

    /// Replace the tag output with `routes` and a listing of them.
    ///
    /// Returns the number of route files written.
    pub fn generate(&self, routes: &[TagRoute]) -> Result<usize> {
        let tag_root = self.tag_root()?;

        // Stale tags from a previous build must not survive
        if tag_root.exists() {
            fs::remove_dir_all(&tag_root)
                .with_context(|| format!("Failed to clear {:?}", tag_root))?;
        }
        fs::create_dir_all(&tag_root)?;

        for route in routes {
            let path = tag_root.join(&route.slug).join(ROUTE_FILE);
            write_json(&path, route)?;
            tracing::debug!(
                "Wrote tag {:?} ({} posts) to {:?}",
                route.name,
                route.posts.len(),
                path
            );
        }

        let listing: Vec<TagSummary> = routes.iter().map(TagRoute::summary).collect();
        write_json(&tag_root.join(ROUTE_FILE), &listing)?;

        tracing::info!("Generated {} tag pages", routes.len());

        Ok(routes.len())
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::Post;
    use crate::taxonomy::TagIndex;

    #[test]
    fn test_generate_routes() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::with_config(dir.path().to_path_buf(), SiteConfig::default());
        let posts = vec![
            Post::new("/posts/one/", "One", "2020-01-01").with_tags(["x"]),
            Post::new("/posts/two/", "Two", "2021-01-01").with_tags(["x", "y"]),
        ];
        let routes = TagIndex::build(&posts).routes(&site.config);

        // A leftover tag from an earlier build
        let stale = site.public_dir.join("tags/old");
        fs::create_dir_all(&stale).unwrap();

        let generator = Generator::new(&site);
        assert_eq!(generator.generate(&routes).unwrap(), 2);
        assert!(!stale.exists());

        let x: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(site.public_dir.join("tags/x/index.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(x["name"], "x");
        assert_eq!(x["path"], "/tags/x/");
        assert_eq!(x["posts"][0]["title"], "Two");
        assert_eq!(x["posts"][1]["title"], "One");

        let listing: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(site.public_dir.join("tags/index.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(listing.as_array().unwrap().len(), 2);
        assert_eq!(listing[1]["name"], "y");
        assert_eq!(listing[1]["count"], 1);
    }

    #[test]
    fn test_every_route_gets_its_own_file() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::with_config(dir.path().to_path_buf(), SiteConfig::default());
        let posts = vec![Post::new("/posts/one/", "One", "2020-01-01").with_tags([
            "Rust Lang",
            "rust-lang",
            "rust-lang-2",
        ])];
        let routes = TagIndex::build(&posts).routes(&site.config);

        assert_eq!(Generator::new(&site).generate(&routes).unwrap(), 3);
        for route in &routes {
            let file = site.public_dir.join("tags").join(&route.slug).join(ROUTE_FILE);
            let written: serde_json::Value =
                serde_json::from_str(&fs::read_to_string(file).unwrap()).unwrap();
            assert_eq!(written["name"], route.name.as_str());
        }
    }

    #[test]
    fn test_unsafe_tag_dir_deletes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let post = dir.path().join("source/posts/keep.md");
        fs::create_dir_all(post.parent().unwrap()).unwrap();
        fs::write(&post, "---\ntitle: Keep\n---\n").unwrap();
        let rendered = dir.path().join("public/index.html");
        fs::create_dir_all(rendered.parent().unwrap()).unwrap();
        fs::write(&rendered, "<html></html>").unwrap();

        for tag_dir in ["../", "", "/"] {
            let mut config = SiteConfig::default();
            config.tag_dir = tag_dir.to_string();
            let site = Site::with_config(dir.path().to_path_buf(), config);

            assert!(Generator::new(&site).generate(&[]).is_err());
            assert!(post.exists());
            assert!(rendered.exists());
        }
    }
}

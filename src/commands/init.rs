//! Initialize a new site

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# Site
title: My Blog
description: ''
author: John Doe

# URL
url: http://example.com
root: /
permalink: posts/:slug/

# Directory
source_dir: source
posts_dir: posts
public_dir: public
tag_dir: tags

# Writing
new_post_name: :slug.md
render_drafts: false

# Tags
dedupe_tags: true
tag_map: {}
"#;

/// Initialize a new site in the given directory.
///
/// Existing files are left untouched so `init` is safe to rerun.
pub fn init_site(target_dir: &Path) -> Result<()> {
    let posts_dir = target_dir.join("source/posts");
    fs::create_dir_all(&posts_dir)?;

    write_if_missing(&target_dir.join("_config.yml"), DEFAULT_CONFIG)?;

    let added = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let sample_post = format!(
        r#"---
title: Hello World
description: The first post
added: {}
tags: [meta]
---

Run `tagshelf new "My New Post"` to add a post and `tagshelf build` to
write the tag pages.
"#,
        added
    );
    write_if_missing(&posts_dir.join("hello-world.md"), &sample_post)?;

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::info!("Keeping existing {:?}", path);
        return Ok(());
    }
    fs::write(path, content)?;
    tracing::debug!("Wrote {:?}", path);
    Ok(())
}

//! Create a new post

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use std::fs;
use std::path::PathBuf;

use crate::Site;

const DEFAULT_SCAFFOLD: &str = r#"---
title: {{ title }}
description: ''
added: {{ added }}
tags: {{ tags }}
---
"#;

/// Write a new post into the posts directory and return its path
pub fn create_post(site: &Site, title: &str, tags: &[String]) -> Result<PathBuf> {
    let now = Utc::now();
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Title {:?} does not produce a usable file name", title);
    }

    fs::create_dir_all(&site.posts_dir)?;

    let filename = site
        .config
        .new_post_name
        .replace(":slug", &slug)
        .replace(":title", &slug)
        .replace(":year", &now.format("%Y").to_string())
        .replace(":month", &now.format("%m").to_string())
        .replace(":day", &now.format("%d").to_string());
    let file_path = site.posts_dir.join(filename);

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let scaffold_path = site.base_dir.join("scaffolds").join("post.md");
    let scaffold = if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)?
    } else {
        DEFAULT_SCAFFOLD.to_string()
    };

    let content = scaffold
        .replace("{{ title }}", &yaml_string(title))
        .replace("{{ added }}", &now.to_rfc3339_opts(SecondsFormat::Secs, true))
        .replace("{{ tags }}", &yaml_list(tags));

    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;

    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Quote a value for a YAML flow context
fn yaml_string(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn yaml_list(items: &[String]) -> String {
    let items: Vec<String> = items
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(yaml_string)
        .collect();
    format!("[{}]", items.join(", "))
}

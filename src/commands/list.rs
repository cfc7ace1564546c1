//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::helpers::display_added;
use crate::taxonomy::{TagIndex, TagIndexOptions};
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let mut posts = ContentLoader::new(site).load_posts()?;

    match content_type {
        "post" | "posts" => {
            posts.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
            println!("Posts ({}):", posts.len());
            for post in &posts {
                println!(
                    "  {} - {} [{}]",
                    display_added(post.added_at.as_ref()),
                    post.title,
                    post.source
                );
            }
        }
        "tag" | "tags" => {
            let index = TagIndex::build_with(&posts, &TagIndexOptions::from_config(&site.config));
            println!("Tags ({}):", index.len());
            for (tag, tagged) in index.iter() {
                println!("  {} ({})", tag, tagged.len());
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}

/// Print the posts filed under one tag, newest first
pub fn show_tag(site: &Site, tag: &str) -> Result<()> {
    let posts = ContentLoader::new(site).load_posts()?;
    let index = TagIndex::build_with(&posts, &TagIndexOptions::from_config(&site.config));
    let tag = site.config.map_tag(tag);

    let Some(tagged) = index.get(tag) else {
        anyhow::bail!("No posts tagged {:?}", tag);
    };

    println!("{} ({}):", tag, tagged.len());
    for post in tagged {
        println!(
            "  {} - {} {}",
            display_added(post.added_at.as_ref()),
            post.title,
            post.url
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_unknown_type() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::with_config(dir.path().to_path_buf(), SiteConfig::default());
        assert!(run(&site, "post").is_ok());
        assert!(run(&site, "category").is_err());
        assert!(show_tag(&site, "missing").is_err());
    }
}

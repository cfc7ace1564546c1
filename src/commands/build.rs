//! Build the tag index and write its routes

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::taxonomy::{TagIndex, TagIndexOptions};
use crate::Site;

/// What a build produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    pub posts: usize,
    pub tags: usize,
    pub routes: usize,
}

/// Load posts, index them by tag and write one route per tag
pub fn run(site: &Site) -> Result<BuildStats> {
    let start = std::time::Instant::now();

    let posts = ContentLoader::new(site).load_posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    let index = TagIndex::build_with(&posts, &TagIndexOptions::from_config(&site.config));
    let routes = index.routes(&site.config);
    let written = Generator::new(site).generate(&routes)?;

    tracing::info!("Completed in {:.2}s", start.elapsed().as_secs_f64());

    Ok(BuildStats {
        posts: posts.len(),
        tags: index.len(),
        routes: written,
    })
}

//! Tag index: every post bucketed under each tag it declares, newest first

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers;

/// Knobs for [`TagIndex::build_with`]
#[derive(Debug, Clone, Default)]
pub struct TagIndexOptions {
    /// Count a tag once per post even if the post repeats it
    pub dedupe: bool,
    /// Tag aliases applied before bucketing
    pub tag_map: HashMap<String, String>,
}

impl TagIndexOptions {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            dedupe: config.dedupe_tags,
            tag_map: config.tag_map.clone(),
        }
    }
}

/// Mapping from tag name to the posts carrying it.
///
/// Buckets are sorted by `added` descending with a stable sort, so posts
/// sharing a timestamp keep the order they were given in. Keys iterate in
/// ascending name order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TagIndex<'a> {
    buckets: IndexMap<String, Vec<&'a Post>>,
}

impl<'a> TagIndex<'a> {
    /// Build with default options: repeated tags on one post are deduped
    pub fn build(posts: &'a [Post]) -> Self {
        Self::build_with(
            posts,
            &TagIndexOptions {
                dedupe: true,
                ..Default::default()
            },
        )
    }

    /// Build the index in one pass over `posts`, then sort every bucket
    pub fn build_with(posts: &'a [Post], options: &TagIndexOptions) -> Self {
        let mut buckets: IndexMap<String, Vec<&'a Post>> = IndexMap::new();

        for post in posts {
            let mut seen: HashSet<&str> = HashSet::new();
            for tag in &post.tags {
                let tag = tag.trim();
                if tag.is_empty() {
                    continue;
                }
                let tag = options
                    .tag_map
                    .get(tag)
                    .map(String::as_str)
                    .unwrap_or(tag);
                if options.dedupe && !seen.insert(tag) {
                    continue;
                }
                buckets.entry(tag.to_string()).or_default().push(post);
            }
        }

        for bucket in buckets.values_mut() {
            // sort_by is stable: equal timestamps keep encountered order
            bucket.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
        }
        buckets.sort_keys();

        tracing::debug!(
            "Indexed {} posts under {} tags",
            posts.len(),
            buckets.len()
        );

        Self { buckets }
    }

    /// Posts carrying `tag`, newest first
    pub fn get(&self, tag: &str) -> Option<&[&'a Post]> {
        self.buckets.get(tag).map(Vec::as_slice)
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Tag names in ascending order
    pub fn tags(&self) -> Vec<&str> {
        self.buckets.keys().map(String::as_str).collect()
    }

    /// `(tag, posts)` pairs in ascending tag order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a Post])> {
        self.buckets
            .iter()
            .map(|(tag, posts)| (tag.as_str(), posts.as_slice()))
    }

    /// One route per tag, ready for the page renderer.
    ///
    /// Tags that slugify to nothing are dropped. A tag whose slug is already
    /// taken gets the first free `-N` suffix, so every route has its own slug.
    pub fn routes(&self, config: &SiteConfig) -> Vec<TagRoute> {
        let mut used: HashSet<String> = HashSet::new();
        let mut routes = Vec::with_capacity(self.buckets.len());

        for (name, posts) in &self.buckets {
            let base = slug::slugify(name);
            if base.is_empty() {
                tracing::warn!("Tag {:?} has no usable slug, skipping its page", name);
                continue;
            }

            let slug = if used.contains(&base) {
                let suffixed = (2..)
                    .map(|n| format!("{}-{}", base, n))
                    .find(|candidate| !used.contains(candidate))
                    .unwrap_or_default();
                tracing::warn!(
                    "Tag {:?} collides with another tag's slug, using {:?}",
                    name,
                    suffixed
                );
                suffixed
            } else {
                base
            };
            used.insert(slug.clone());

            let path = format!("{}/{}/", config.tag_dir.trim_matches('/'), slug);
            routes.push(TagRoute {
                name: name.clone(),
                permalink: helpers::full_url_for(config, &path),
                path: helpers::url_for(config, &path),
                slug,
                posts: posts.iter().map(|p| TagRoutePost::from(*p)).collect(),
            });
        }

        routes
    }
}

/// A tag page handed to the renderer
#[derive(Debug, Clone, Serialize)]
pub struct TagRoute {
    pub name: String,
    pub slug: String,
    /// Site-relative path, rooted at `root`
    pub path: String,
    pub permalink: String,
    pub posts: Vec<TagRoutePost>,
}

impl TagRoute {
    pub fn summary(&self) -> TagSummary {
        TagSummary {
            name: self.name.clone(),
            slug: self.slug.clone(),
            path: self.path.clone(),
            count: self.posts.len(),
        }
    }
}

/// Entry of the tag listing
#[derive(Debug, Clone, Serialize)]
pub struct TagSummary {
    pub name: String,
    pub slug: String,
    pub path: String,
    pub count: usize,
}

/// Post fields a tag page needs
#[derive(Debug, Clone, Serialize)]
pub struct TagRoutePost {
    pub url: String,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub tags: Vec<String>,
    pub added: String,
}

impl From<&Post> for TagRoutePost {
    fn from(post: &Post) -> Self {
        Self {
            url: post.url.clone(),
            title: post.title.clone(),
            description: post.description.clone(),
            slug: post.slug.clone(),
            tags: post.tags.clone(),
            added: post.added.clone(),
        }
    }
}

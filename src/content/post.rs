//! Post model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::helpers::{self, UNDATED};

/// A blog post as seen by the tag index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Site-relative URL, also the post's identity
    pub url: String,

    /// Post title
    pub title: String,

    /// Short summary shown in listings
    pub description: String,

    /// URL-friendly name
    pub slug: String,

    /// Tags in declaration order; empty when the post declares none
    pub tags: Vec<String>,

    /// `added` exactly as written in the front-matter
    pub added: String,

    /// Parsed `added`; `None` when missing or unparsable
    pub added_at: Option<DateTime<Utc>>,

    /// Source file path relative to the source directory
    pub source: String,
}

impl Post {
    /// Create a post; the `added` string is parsed immediately
    pub fn new(url: &str, title: &str, added: &str) -> Self {
        let slug = url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| slug::slugify(title));

        Self {
            url: url.to_string(),
            title: title.to_string(),
            description: String::new(),
            slug,
            tags: Vec::new(),
            added: added.to_string(),
            added_at: helpers::parse_added(added),
            source: String::new(),
        }
    }

    /// Builder-style tag setter
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Key used for newest-first ordering; undated posts get the minimum
    pub fn sort_key(&self) -> DateTime<Utc> {
        self.added_at.unwrap_or(UNDATED)
    }
}

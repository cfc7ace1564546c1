//! Content module - posts, their frontmatter and the loader

mod frontmatter;
pub mod loader;
mod post;

pub use frontmatter::FrontMatter;
pub use post::Post;

use std::path::PathBuf;
use thiserror::Error;

/// Why a single post file could not be loaded
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid front-matter in {path:?}: {message}")]
    FrontMatter { path: PathBuf, message: String },
}

//! Taxonomy module - groups posts by tag

mod tags;

pub use tags::{TagIndex, TagIndexOptions, TagRoute, TagRoutePost, TagSummary};

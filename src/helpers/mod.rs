//! Helper functions shared by the loader, the index and the route writer

mod date;
mod url;

pub use date::*;
pub use url::*;

//! URL helper functions

use chrono::{DateTime, Utc};

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/tags/rust/") // -> "/blog/tags/rust/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/tags/rust/") // -> "https://example.com/blog/tags/rust/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Expand the `permalink` pattern for a post
///
/// Date placeholders are left empty for posts without a usable `added`.
pub fn permalink_for(config: &SiteConfig, slug: &str, added: Option<&DateTime<Utc>>) -> String {
    let fmt = |f: &str| added.map(|d| d.format(f).to_string()).unwrap_or_default();

    let path = config
        .permalink
        .replace(":year", &fmt("%Y"))
        .replace(":month", &fmt("%m"))
        .replace(":day", &fmt("%d"))
        .replace(":slug", slug)
        .replace(":title", slug);

    url_for(config, &path.replace("//", "/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.url = "https://example.com".to_string();
        config.root = "/blog/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/tags/rust/"), "/blog/tags/rust/");
        assert_eq!(url_for(&config, ""), "/blog/");
    }

    #[test]
    fn test_full_url_for() {
        let mut config = test_config();
        config.url = "https://example.com/".to_string();
        assert_eq!(
            full_url_for(&config, "tags/rust/"),
            "https://example.com/blog/tags/rust/"
        );
    }

    #[test]
    fn test_permalink_for() {
        let mut config = test_config();
        assert_eq!(
            permalink_for(&config, "hello-world", None),
            "/blog/posts/hello-world/"
        );

        config.permalink = ":year/:month/:slug/".to_string();
        let added = Utc.with_ymd_and_hms(2021, 3, 9, 0, 0, 0).unwrap();
        assert_eq!(
            permalink_for(&config, "hello-world", Some(&added)),
            "/blog/2021/03/hello-world/"
        );
    }
}

//! Request URL building.

use ::url::Url;

use crate::config::Config;
use crate::query::{self, Query};

/// Remove characters present in `chars` from the start of `s`.
///
/// Strips only from the leading end; interior occurrences stay.
pub fn trim_start<'a>(s: &'a str, chars: &str) -> &'a str {
    s.trim_start_matches(|c| chars.contains(c))
}

/// Remove characters present in `chars` from the end of `s`.
pub fn trim_end<'a>(s: &'a str, chars: &str) -> &'a str {
    s.trim_end_matches(|c| chars.contains(c))
}

/// Build an absolute request URL from the configured base address.
///
/// Returns `None` (absence, not an error) when no base address is
/// configured, when `path` is empty, or when the joined string does not
/// parse as an absolute URL. The join point is normalized so the result
/// never contains a double slash between base and path. A non-empty query
/// mapping is appended in [`query::stringify`] form.
pub fn api_url(config: &Config, path: &str, query: &Query) -> Option<String> {
    let base = config.base_url()?;
    if path.is_empty() {
        return None;
    }

    let base = trim_end(base, "/");
    let path = trim_start(path, "/");

    let mut url = Url::parse(&format!("{base}/{path}")).ok()?;
    let encoded = query::stringify(query);
    if !encoded.is_empty() {
        url.set_query(Some(&encoded));
    }

    Some(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(base: &str) -> Config {
        Config::with_base_url(base)
    }

    fn query(value: serde_json::Value) -> Query {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_trim_only_touches_the_ends() {
        assert_eq!(trim_start("//a/b", "/"), "a/b");
        assert_eq!(trim_end("a//b//", "/"), "a//b");
        assert_eq!(trim_end("abc", "/"), "abc");
        assert_eq!(trim_start("", "/"), "");
    }

    #[test]
    fn test_join_strips_redundant_separators() {
        let url = api_url(&config("http://localhost:8000///"), "///projects", &Query::new());
        assert_eq!(url.as_deref(), Some("http://localhost:8000/projects"));
    }

    #[test]
    fn test_join_inserts_missing_separator() {
        let url = api_url(&config("http://localhost:8000"), "projects", &Query::new());
        assert_eq!(url.as_deref(), Some("http://localhost:8000/projects"));
    }

    #[test]
    fn test_empty_path_is_absent() {
        assert!(api_url(&config("http://localhost:8000"), "", &Query::new()).is_none());
    }

    #[test]
    fn test_missing_base_is_absent() {
        assert!(api_url(&Config::default(), "/projects", &Query::new()).is_none());
    }

    #[test]
    fn test_unparseable_base_is_absent() {
        assert!(api_url(&config("not a url"), "/projects", &Query::new()).is_none());
    }

    #[test]
    fn test_query_is_appended() {
        let url = api_url(
            &config("http://localhost:8000"),
            "/projects",
            &query(json!({"a": 1, "b": [2, 3]})),
        );
        assert_eq!(
            url.as_deref(),
            Some("http://localhost:8000/projects?a=1&b%5B0%5D=2&b%5B1%5D=3")
        );
    }

    #[test]
    fn test_empty_query_leaves_url_bare() {
        let url = api_url(&config("http://localhost:8000"), "/me", &Query::new());
        assert_eq!(url.as_deref(), Some("http://localhost:8000/me"));
    }

    #[test]
    fn test_query_survives_the_url_round_trip() {
        let original = query(json!({"a": 1, "b": [2, 3]}));
        let url = api_url(&config("http://localhost:8000"), "/projects", &original)
            .and_then(|u| u.split_once('?').map(|(_, q)| q.to_string()));
        let encoded = url.unwrap_or_default();
        assert_eq!(crate::query::parse(&encoded), original);
    }
}

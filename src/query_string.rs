use std::string::ToString;

/// Decoded query string. Keys may repeat, e.g. `?category=a&category=b`.
#[derive(PartialEq, Debug)]
pub struct QueryString {
    items: Vec<(String, String)>,
}

impl QueryString {
    pub fn from(buf: &str) -> Self {
        let items: Vec<(String, String)> = serde_urlencoded::from_str(buf).unwrap_or_else(|_| vec![]);

        QueryString {
            items,
        }
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.items.iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Value of `key` as sent, unless it is blank.
    pub fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key)
            .filter(|v| !v.trim().is_empty())
            .map(ToString::to_string)
    }

    pub fn get_limit(&self, default: usize) -> usize {
        self.get("limit")
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_str() {
        let qs = QueryString::from("category=Design&tag=UI%2FUX&q=color+theory&category=Tech");
        assert_eq!(qs.get("tag"), Some("UI/UX"));
        assert_eq!(qs.get("q"), Some("color theory"));
        assert_eq!(qs.get("category"), Some("Design"));
        assert_eq!(qs.get_all("category"), ["Design", "Tech"]);
        assert!(qs.get("page").is_none());
    }

    #[test]
    fn test_parse_invalid_query_str() {
        assert_eq!(QueryString::from(""), QueryString { items: vec![] });
    }

    #[test]
    fn test_get_non_empty() {
        let qs = QueryString::from("q=++&tag=rust&empty=");
        assert!(qs.get_non_empty("q").is_none());
        assert!(qs.get_non_empty("empty").is_none());
        assert_eq!(qs.get_non_empty("tag"), Some("rust".to_string()));

        let qs = QueryString::from("q=%20design");
        assert_eq!(qs.get_non_empty("q"), Some(" design".to_string()));
    }

    #[test]
    fn test_get_limit() {
        assert_eq!(QueryString::from("limit=3").get_limit(5), 3);
        assert_eq!(QueryString::from("limit=-1").get_limit(5), 5);
        assert_eq!(QueryString::from("limit=abc").get_limit(5), 5);
        assert_eq!(QueryString::from("").get_limit(5), 5);
    }
}

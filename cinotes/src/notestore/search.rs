pub struct SearchRequest {
    pub(super) full_text: String,
}

impl SearchRequest {
    /// The lowercased query, or `None` if every note matches.
    pub(super) fn needle(&self) -> Option<String> {
        if self.full_text.is_empty() {
            None
        } else {
            Some(self.full_text.to_lowercase())
        }
    }
}

impl From<String> for SearchRequest {
    fn from(query: String) -> SearchRequest {
        SearchRequest { full_text: query }
    }
}

impl From<&str> for SearchRequest {
    fn from(query: &str) -> SearchRequest {
        SearchRequest {
            full_text: query.to_owned(),
        }
    }
}

impl From<Option<String>> for SearchRequest {
    fn from(query: Option<String>) -> SearchRequest {
        SearchRequest {
            full_text: query.unwrap_or_default(),
        }
    }
}

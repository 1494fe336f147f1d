//! Search request representation and trigger validation.

use serde::{Deserialize, Serialize};

/// Result category selected by the user.
///
/// Determines both the response field mapping and the card layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Standard web results.
    #[default]
    Web,
    /// Image results.
    Images,
    /// News articles.
    News,
}

impl Category {
    /// Wire value used in the `type` request parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Images => "images",
            Self::News => "news",
        }
    }
}

/// How a search gets triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerMode {
    /// Fire automatically after input pauses (debounced).
    #[default]
    Live,
    /// Fire only on explicit submit (Enter key / button).
    Submit,
}

/// Minimum trimmed query length before a live-mode trigger fires.
pub const LIVE_MIN_QUERY_LEN: usize = 3;

/// A single search request, created per trigger and discarded after the
/// response is rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The search terms.
    pub query: String,
    /// Selected result category.
    pub category: Category,
    /// Number of results to ask for.
    pub result_count: u32,
}

impl SearchRequest {
    /// Creates a new request with the given terms, web category and the
    /// default result count of 10.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: Category::Web,
            result_count: 10,
        }
    }

    /// Sets the category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the result count.
    pub fn with_result_count(mut self, count: u32) -> Self {
        self.result_count = count;
        self
    }

    /// Returns the query with surrounding whitespace removed.
    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    /// Whether the input is long enough for a live-mode trigger.
    pub fn allows_live_trigger(&self) -> bool {
        self.trimmed_query().len() >= LIVE_MIN_QUERY_LEN
    }

    /// Whether the input is acceptable for an explicit submit.
    pub fn allows_submit_trigger(&self) -> bool {
        !self.trimmed_query().is_empty()
    }
}

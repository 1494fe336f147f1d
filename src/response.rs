//! Search response types and wire decoding.
//!
//! Two backend contracts exist and are both supported, selected by the
//! transport: a flat JSON array of items, and a wrapped object carrying a
//! status flag plus a message and an item list. Items arrive untagged; the
//! category of the request that produced them decides how they are read.

use serde::{Deserialize, Serialize};

use crate::{Category, ClientError, Result};

/// A standard web result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebItem {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub source: String,
    /// Human-friendly domain shown instead of the full link.
    #[serde(alias = "displayLink")]
    pub display_link: Option<String>,
    pub thumbnail: Option<String>,
    pub date: Option<String>,
    /// Backend-supplied category label.
    pub category: Option<String>,
}

/// An image result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageItem {
    pub title: String,
    /// Primary image URL.
    #[serde(alias = "imageUrl")]
    pub image_url: Option<String>,
    /// Thumbnail, used as fallback when no primary URL exists.
    #[serde(alias = "thumbnailLink")]
    pub thumbnail: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub source: Option<String>,
    /// Pre-formatted dimensions string, e.g. "800x600".
    pub dimensions: Option<String>,
}

impl ImageItem {
    /// The URL to display: primary image URL, falling back to the thumbnail.
    pub fn best_image_url(&self) -> Option<&str> {
        self.image_url.as_deref().or(self.thumbnail.as_deref())
    }

    /// Dimensions label, synthesized from width/height when no pre-formatted
    /// string was supplied.
    pub fn dimensions_label(&self) -> Option<String> {
        if let Some(dims) = &self.dimensions {
            return Some(dims.clone());
        }
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(format!("{}x{}", w, h)),
            _ => None,
        }
    }
}

/// A news article result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub source: String,
    pub thumbnail: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
}

/// A single search result, typed by the category that requested it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResultItem {
    Web(WebItem),
    Image(ImageItem),
    News(NewsItem),
}

impl ResultItem {
    /// Reads an untagged wire item according to the request category.
    ///
    /// Malformed items degrade to empty fields rather than failing the whole
    /// response; the renderer substitutes placeholder text.
    pub fn from_value(category: Category, value: serde_json::Value) -> Self {
        match category {
            Category::Web => Self::Web(serde_json::from_value(value).unwrap_or_default()),
            Category::Images => Self::Image(serde_json::from_value(value).unwrap_or_default()),
            Category::News => Self::News(serde_json::from_value(value).unwrap_or_default()),
        }
    }

    /// The item title, empty if the backend sent none.
    pub fn title(&self) -> &str {
        match self {
            Self::Web(item) => &item.title,
            Self::Image(item) => &item.title,
            Self::News(item) => &item.title,
        }
    }
}

/// Decoded search response, normalized across both wire contracts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Items in backend order.
    items: Vec<ResultItem>,
}

/// Wire shape of the wrapped (POST) contract.
#[derive(Deserialize)]
struct WrappedPayload {
    status: String,
    message: Option<String>,
    #[serde(default)]
    results: Vec<serde_json::Value>,
}

impl SearchResponse {
    /// Creates a response from already-typed items.
    pub fn from_items(items: Vec<ResultItem>) -> Self {
        Self { items }
    }

    /// Decodes the flat-array contract: `[item, item, ...]`.
    pub fn decode_flat(category: Category, body: &str) -> Result<Self> {
        let values: Vec<serde_json::Value> =
            serde_json::from_str(body).map_err(|e| ClientError::Parse(e.to_string()))?;
        Ok(Self {
            items: values
                .into_iter()
                .map(|v| ResultItem::from_value(category, v))
                .collect(),
        })
    }

    /// Decodes the wrapped contract: `{status, message?, results}`.
    ///
    /// A non-`success` status becomes `ClientError::ServerReported` carrying
    /// the server's message, if any.
    pub fn decode_wrapped(category: Category, body: &str) -> Result<Self> {
        let payload: WrappedPayload =
            serde_json::from_str(body).map_err(|e| ClientError::Parse(e.to_string()))?;

        if payload.status != "success" {
            return Err(ClientError::ServerReported(payload.message));
        }

        Ok(Self {
            items: payload
                .results
                .into_iter()
                .map(|v| ResultItem::from_value(category, v))
                .collect(),
        })
    }

    /// Returns the items.
    pub fn items(&self) -> &[ResultItem] {
        &self.items
    }

    /// Whether the response carried zero items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

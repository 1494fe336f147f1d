//! Mapping of responses and errors into renderable card descriptors.
//!
//! Data mapping is kept separate from presentation: `render_cards` turns a
//! search outcome into typed `Card` values, and a `RenderTarget` turns cards
//! into whatever the host UI draws. Every failure path produces exactly one
//! notice card; nothing here panics on malformed backend data.

use serde::{Deserialize, Serialize};

use crate::{Category, ClientError, ImageItem, NewsItem, Result, ResultItem, SearchResponse, WebItem};

/// Placeholder copy for absent optional fields.
const FALLBACK_TITLE: &str = "Untitled result";
const FALLBACK_IMAGE_TITLE: &str = "Untitled image";
const FALLBACK_SNIPPET: &str = "No description available";
const FALLBACK_DATE: &str = "No date available";
const FALLBACK_CATEGORY: &str = "General";
const FALLBACK_SOURCE: &str = "Unknown source";
const FALLBACK_DIMENSIONS: &str = "Unknown dimensions";

/// Why a notice card is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// The backend answered with zero items.
    NoResults,
    /// The query was rejected locally before any request.
    Validation,
    /// The backend reported an explicit failure status.
    ServerFailure,
    /// Transport or decode failure.
    NetworkError,
}

/// A single informational or error card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeCard {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

/// A rendered web result card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebCard {
    pub title: String,
    pub link: String,
    /// Domain shown under the title.
    pub display_link: String,
    pub snippet: String,
    pub source: String,
    pub thumbnail: Option<String>,
    pub date: String,
    pub category_label: String,
}

/// A rendered image result card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageCard {
    pub title: String,
    pub image_url: String,
    pub dimensions: String,
    pub source: String,
}

/// A rendered news result card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsCard {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub source: String,
    pub thumbnail: Option<String>,
    pub date: String,
    pub category_label: String,
}

/// A renderable card descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Card {
    Web(WebCard),
    Image(ImageCard),
    News(NewsCard),
    Notice(NoticeCard),
}

impl Card {
    fn notice(kind: NoticeKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Notice(NoticeCard {
            kind,
            title: title.into(),
            body: body.into(),
        })
    }
}

/// The surface cards are drawn onto.
///
/// The host UI (terminal, native view, DOM) implements this; the client only
/// ever clears, appends, and toggles the loading indicator.
pub trait RenderTarget {
    /// Removes all currently displayed cards.
    fn clear(&mut self);
    /// Appends one card after the currently displayed ones.
    fn append_card(&mut self, card: Card);
    /// Shows or hides the loading indicator.
    fn set_loading(&mut self, visible: bool);
}

/// Maps a search outcome into the cards to display.
///
/// A successful response maps item-per-card; an empty response or any error
/// maps to exactly one notice card.
pub fn render_cards(category: Category, outcome: &Result<SearchResponse>) -> Vec<Card> {
    match outcome {
        Ok(response) if response.is_empty() => vec![no_results_card(category)],
        Ok(response) => response.items().iter().map(item_card).collect(),
        Err(error) => vec![error_card(error)],
    }
}

/// Clears the target, then draws the given cards.
pub fn draw(target: &mut dyn RenderTarget, cards: Vec<Card>) {
    target.clear();
    for card in cards {
        target.append_card(card);
    }
}

fn no_results_card(category: Category) -> Card {
    let title = match category {
        Category::Web => "No results found",
        Category::Images => "No images found",
        Category::News => "No news articles found",
    };
    Card::notice(
        NoticeKind::NoResults,
        title,
        "Try different search terms.",
    )
}

fn error_card(error: &ClientError) -> Card {
    match error {
        ClientError::InvalidQuery(message) => {
            Card::notice(NoticeKind::Validation, "Please enter a search query", message.clone())
        }
        ClientError::ServerReported(message) => Card::notice(
            NoticeKind::ServerFailure,
            message.as_deref().unwrap_or("Search failed"),
            "Try adjusting your search terms.",
        ),
        other => Card::notice(NoticeKind::NetworkError, "Network error", other.to_string()),
    }
}

fn item_card(item: &ResultItem) -> Card {
    match item {
        ResultItem::Web(item) => Card::Web(web_card(item)),
        ResultItem::Image(item) => Card::Image(image_card(item)),
        ResultItem::News(item) => Card::News(news_card(item)),
    }
}

fn web_card(item: &WebItem) -> WebCard {
    WebCard {
        title: non_empty(&item.title, FALLBACK_TITLE),
        link: item.link.clone(),
        display_link: item
            .display_link
            .clone()
            .unwrap_or_else(|| extract_domain(&item.link)),
        snippet: non_empty(&item.snippet, FALLBACK_SNIPPET),
        source: non_empty(&item.source, FALLBACK_SOURCE),
        thumbnail: item.thumbnail.clone(),
        date: item.date.clone().unwrap_or_else(|| FALLBACK_DATE.to_string()),
        category_label: item
            .category
            .clone()
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
    }
}

fn image_card(item: &ImageItem) -> ImageCard {
    ImageCard {
        title: non_empty(&item.title, FALLBACK_IMAGE_TITLE),
        image_url: item.best_image_url().unwrap_or_default().to_string(),
        dimensions: item
            .dimensions_label()
            .unwrap_or_else(|| FALLBACK_DIMENSIONS.to_string()),
        source: item
            .source
            .clone()
            .unwrap_or_else(|| FALLBACK_SOURCE.to_string()),
    }
}

fn news_card(item: &NewsItem) -> NewsCard {
    NewsCard {
        title: non_empty(&item.title, FALLBACK_TITLE),
        link: item.link.clone(),
        snippet: non_empty(&item.snippet, FALLBACK_SNIPPET),
        source: non_empty(&item.source, FALLBACK_SOURCE),
        thumbnail: item.thumbnail.clone(),
        date: item.date.clone().unwrap_or_else(|| FALLBACK_DATE.to_string()),
        category_label: item
            .category
            .clone()
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
    }
}

fn non_empty(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Extracts the host from a link for display, without a leading "www.".
///
/// Unparseable links come back verbatim; a broken link is displayed, never a
/// rendering failure.
pub fn extract_domain(link: &str) -> String {
    match url::Url::parse(link) {
        Ok(url) => url
            .host_str()
            .map(|host| host.trim_start_matches("www.").to_string())
            .unwrap_or_else(|| link.to_string()),
        Err(_) => link.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn web_fixture() -> ResultItem {
        ResultItem::Web(WebItem {
            title: "Cat Facts".to_string(),
            link: "https://cats.example/facts".to_string(),
            snippet: "All about cats".to_string(),
            source: "cats.example".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_render_web_fixture() {
        let response = SearchResponse::from_items(vec![web_fixture()]);
        let cards = render_cards(Category::Web, &Ok(response));
        assert_eq!(cards.len(), 1);
        match &cards[0] {
            Card::Web(card) => {
                assert_eq!(card.title, "Cat Facts");
                assert_eq!(card.link, "https://cats.example/facts");
                assert_eq!(card.snippet, "All about cats");
                assert_eq!(card.source, "cats.example");
                assert_eq!(card.display_link, "cats.example");
            }
            other => panic!("Expected web card, got {:?}", other),
        }
    }

    #[test]
    fn test_render_empty_is_single_notice() {
        let cards = render_cards(Category::Images, &Ok(SearchResponse::default()));
        assert_eq!(cards.len(), 1);
        match &cards[0] {
            Card::Notice(notice) => {
                assert_eq!(notice.kind, NoticeKind::NoResults);
                assert_eq!(notice.title, "No images found");
            }
            other => panic!("Expected notice card, got {:?}", other),
        }
    }

    #[test]
    fn test_no_results_copy_per_category() {
        for (category, title) in [
            (Category::Web, "No results found"),
            (Category::Images, "No images found"),
            (Category::News, "No news articles found"),
        ] {
            match &render_cards(category, &Ok(SearchResponse::default()))[0] {
                Card::Notice(notice) => assert_eq!(notice.title, title),
                other => panic!("Expected notice card, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_render_network_error() {
        let cards = render_cards(Category::Web, &Err(ClientError::Parse("bad json".into())));
        assert_eq!(cards.len(), 1);
        match &cards[0] {
            Card::Notice(notice) => {
                assert_eq!(notice.kind, NoticeKind::NetworkError);
                assert_eq!(notice.title, "Network error");
                assert!(notice.body.contains("bad json"));
            }
            other => panic!("Expected notice card, got {:?}", other),
        }
    }

    #[test]
    fn test_render_server_failure_with_message() {
        let outcome = Err(ClientError::ServerReported(Some("quota exceeded".into())));
        match &render_cards(Category::Web, &outcome)[0] {
            Card::Notice(notice) => {
                assert_eq!(notice.kind, NoticeKind::ServerFailure);
                assert_eq!(notice.title, "quota exceeded");
            }
            other => panic!("Expected notice card, got {:?}", other),
        }
    }

    #[test]
    fn test_render_server_failure_default_message() {
        let outcome = Err(ClientError::ServerReported(None));
        match &render_cards(Category::Web, &outcome)[0] {
            Card::Notice(notice) => assert_eq!(notice.title, "Search failed"),
            other => panic!("Expected notice card, got {:?}", other),
        }
    }

    #[test]
    fn test_render_validation() {
        let outcome = Err(ClientError::InvalidQuery("Query cannot be empty".into()));
        match &render_cards(Category::Web, &outcome)[0] {
            Card::Notice(notice) => {
                assert_eq!(notice.kind, NoticeKind::Validation);
                assert_eq!(notice.title, "Please enter a search query");
            }
            other => panic!("Expected notice card, got {:?}", other),
        }
    }

    #[test]
    fn test_web_card_fallbacks() {
        let response = SearchResponse::from_items(vec![ResultItem::Web(WebItem::default())]);
        match &render_cards(Category::Web, &Ok(response))[0] {
            Card::Web(card) => {
                assert_eq!(card.title, FALLBACK_TITLE);
                assert_eq!(card.snippet, FALLBACK_SNIPPET);
                assert_eq!(card.source, FALLBACK_SOURCE);
                assert_eq!(card.date, FALLBACK_DATE);
                assert_eq!(card.category_label, FALLBACK_CATEGORY);
                // Empty link degrades to an empty display link, not a panic.
                assert_eq!(card.display_link, "");
            }
            other => panic!("Expected web card, got {:?}", other),
        }
    }

    #[test]
    fn test_image_card_fallbacks() {
        let response = SearchResponse::from_items(vec![ResultItem::Image(ImageItem::default())]);
        match &render_cards(Category::Images, &Ok(response))[0] {
            Card::Image(card) => {
                assert_eq!(card.title, FALLBACK_IMAGE_TITLE);
                assert_eq!(card.image_url, "");
                assert_eq!(card.dimensions, FALLBACK_DIMENSIONS);
                assert_eq!(card.source, FALLBACK_SOURCE);
            }
            other => panic!("Expected image card, got {:?}", other),
        }
    }

    #[test]
    fn test_news_card_mapping() {
        let response = SearchResponse::from_items(vec![ResultItem::News(NewsItem {
            title: "Launch".to_string(),
            link: "https://news.example/1".to_string(),
            snippet: "Big launch".to_string(),
            source: "news.example".to_string(),
            date: Some("2024-05-01".to_string()),
            ..Default::default()
        })]);
        match &render_cards(Category::News, &Ok(response))[0] {
            Card::News(card) => {
                assert_eq!(card.title, "Launch");
                assert_eq!(card.date, "2024-05-01");
                assert_eq!(card.category_label, FALLBACK_CATEGORY);
                assert!(card.thumbnail.is_none());
            }
            other => panic!("Expected news card, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_domain_strips_www() {
        assert_eq!(extract_domain("https://www.example.com/page"), "example.com");
    }

    #[test]
    fn test_extract_domain_plain_host() {
        assert_eq!(extract_domain("https://cats.example/facts"), "cats.example");
    }

    #[test]
    fn test_extract_domain_malformed_returns_raw() {
        assert_eq!(extract_domain("not a url"), "not a url");
        assert_eq!(extract_domain(""), "");
    }

    #[test]
    fn test_display_link_preferred_over_extraction() {
        let response = SearchResponse::from_items(vec![ResultItem::Web(WebItem {
            link: "https://www.example.com/x".to_string(),
            display_link: Some("example.org".to_string()),
            ..Default::default()
        })]);
        match &render_cards(Category::Web, &Ok(response))[0] {
            Card::Web(card) => assert_eq!(card.display_link, "example.org"),
            other => panic!("Expected web card, got {:?}", other),
        }
    }

    #[test]
    fn test_draw_clears_before_appending() {
        struct Recorder {
            ops: Vec<String>,
        }
        impl RenderTarget for Recorder {
            fn clear(&mut self) {
                self.ops.push("clear".to_string());
            }
            fn append_card(&mut self, _card: Card) {
                self.ops.push("append".to_string());
            }
            fn set_loading(&mut self, _visible: bool) {}
        }

        let mut target = Recorder { ops: Vec::new() };
        let cards = render_cards(
            Category::Web,
            &Ok(SearchResponse::from_items(vec![web_fixture(), web_fixture()])),
        );
        draw(&mut target, cards);
        assert_eq!(target.ops, vec!["clear", "append", "append"]);
    }
}

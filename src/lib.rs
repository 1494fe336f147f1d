//! # querydeck
//!
//! A client for a search results page: it collects a query, issues a request
//! to a backend search endpoint, and maps the returned items into typed cards
//! for three result categories (web, images, news).
//!
//! The crate provides:
//!
//! - A single parameterized [`QueryController`] covering both trigger modes
//!   (debounced live input and explicit submit)
//! - An HTTP [`Transport`] supporting the flat-array GET contract and the
//!   status-wrapped POST contract
//! - A renderer that turns responses and errors into [`Card`] descriptors,
//!   decoupled from any particular UI through the [`RenderTarget`] trait
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use querydeck::{
//!     ControllerConfig, HttpTransport, InputEvent, QueryController, TextTarget, TriggerMode,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let transport = Arc::new(HttpTransport::new("http://localhost:5000/search")?);
//!     let config = ControllerConfig {
//!         trigger_mode: TriggerMode::Submit,
//!         ..Default::default()
//!     };
//!     let controller = QueryController::new(config, transport, TextTarget::stdout());
//!
//!     let (events, rx) = tokio::sync::mpsc::channel(32);
//!     events.send(InputEvent::Submit("rust programming".into())).await?;
//!     drop(events);
//!     controller.run(rx).await;
//!     Ok(())
//! }
//! ```

mod client;
mod controller;
mod error;
mod query;
mod response;
mod terminal;

pub mod render;

pub use client::{Contract, HttpTransport, Transport, DEFAULT_TIMEOUT};
pub use controller::{ControllerConfig, InputEvent, QueryController, DEBOUNCE_INTERVAL};
pub use error::{ClientError, Result};
pub use query::{Category, SearchRequest, TriggerMode, LIVE_MIN_QUERY_LEN};
pub use render::{Card, NoticeKind, RenderTarget};
pub use response::{ImageItem, NewsItem, ResultItem, SearchResponse, WebItem};
pub use terminal::TextTarget;

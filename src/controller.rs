//! Query controller: turns input events into search triggers and rendered
//! cards.
//!
//! One parameterized controller covers both trigger modes. It owns the
//! current category and the request sequence counter; responses whose
//! sequence number is no longer the latest issued are discarded, so a slow
//! early response can never overwrite a newer render.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::render::{draw, render_cards, RenderTarget};
use crate::{
    Category, ClientError, Result, SearchRequest, SearchResponse, Transport, TriggerMode,
    LIVE_MIN_QUERY_LEN,
};

/// Debounce interval applied to live-mode input.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(500);

/// UI events the controller reacts to.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// The input field changed (live mode debounces these).
    InputChanged(String),
    /// Explicit submit with the field's current value.
    Submit(String),
    /// The category toggle changed.
    CategorySelected(Category),
}

/// Controller configuration.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// How searches get triggered.
    pub trigger_mode: TriggerMode,
    /// Live-mode inactivity interval before a trigger fires.
    pub debounce: Duration,
    /// Result count requested per search.
    pub result_count: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            trigger_mode: TriggerMode::Live,
            debounce: DEBOUNCE_INTERVAL,
            result_count: 10,
        }
    }
}

/// Drives the input → request → render cycle over an event stream.
pub struct QueryController<T: RenderTarget> {
    config: ControllerConfig,
    transport: Arc<dyn Transport>,
    target: T,
    category: Category,
    input: String,
    /// Sequence number of the only response allowed to render.
    latest_seq: u64,
    next_seq: u64,
    in_flight: usize,
    results_tx: mpsc::UnboundedSender<(u64, Result<SearchResponse>)>,
    results_rx: Option<mpsc::UnboundedReceiver<(u64, Result<SearchResponse>)>>,
}

impl<T: RenderTarget> QueryController<T> {
    /// Creates a controller drawing onto the given target.
    pub fn new(config: ControllerConfig, transport: Arc<dyn Transport>, target: T) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            config,
            transport,
            target,
            category: Category::Web,
            input: String::new(),
            latest_seq: 0,
            next_seq: 0,
            in_flight: 0,
            results_tx,
            results_rx: Some(results_rx),
        }
    }

    /// Currently selected category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Consumes events until the stream closes, then drains in-flight
    /// requests and returns the render target.
    pub async fn run(mut self, mut events: mpsc::Receiver<InputEvent>) -> T {
        let Some(mut results_rx) = self.results_rx.take() else {
            return self.target;
        };
        let mut deadline: Option<Instant> = None;
        let mut events_closed = false;

        loop {
            let armed = deadline;
            let debounce = async move {
                match armed {
                    Some(at) => tokio::time::sleep_until(at).await,
                    None => std::future::pending().await,
                }
            };

            tokio::select! {
                event = events.recv(), if !events_closed => {
                    match event {
                        Some(event) => self.handle_event(event, &mut deadline),
                        None => events_closed = true,
                    }
                }
                _ = debounce, if deadline.is_some() => {
                    deadline = None;
                    self.fire_live();
                }
                Some((seq, outcome)) = results_rx.recv(), if self.in_flight > 0 => {
                    self.handle_response(seq, outcome);
                }
            }

            if events_closed && self.in_flight == 0 && deadline.is_none() {
                break;
            }
        }

        self.target
    }

    fn handle_event(&mut self, event: InputEvent, deadline: &mut Option<Instant>) {
        match event {
            InputEvent::InputChanged(value) => {
                self.input = value;
                if self.config.trigger_mode != TriggerMode::Live {
                    return;
                }
                if self.input.trim().len() >= LIVE_MIN_QUERY_LEN {
                    *deadline = Some(Instant::now() + self.config.debounce);
                } else {
                    // Too short to search: clear and drop any pending trigger.
                    *deadline = None;
                    self.invalidate();
                    self.target.set_loading(false);
                    self.target.clear();
                }
            }
            InputEvent::Submit(value) => {
                self.input = value.clone();
                *deadline = None;
                let request = self.build_request(value);
                if !request.allows_submit_trigger() {
                    self.invalidate();
                    self.target.set_loading(false);
                    draw(
                        &mut self.target,
                        render_cards(
                            self.category,
                            &Err(ClientError::InvalidQuery("Query cannot be empty".into())),
                        ),
                    );
                    return;
                }
                self.dispatch(request);
            }
            InputEvent::CategorySelected(category) => {
                debug!("category switched to {:?}", category);
                self.category = category;
                *deadline = None;
                self.invalidate();
                self.target.set_loading(false);
                self.target.clear();
            }
        }
    }

    fn fire_live(&mut self) {
        let request = self.build_request(self.input.clone());
        // Input may have shrunk since the timer was armed.
        if request.allows_live_trigger() {
            self.dispatch(request);
        }
    }

    fn build_request(&self, query: String) -> SearchRequest {
        SearchRequest::new(query)
            .with_category(self.category)
            .with_result_count(self.config.result_count)
    }

    /// Issues the request on a background task; the response comes back
    /// through the results channel tagged with its sequence number.
    fn dispatch(&mut self, request: SearchRequest) {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.latest_seq = seq;
        self.in_flight += 1;

        self.target.clear();
        self.target.set_loading(true);

        debug!(seq, query = %request.trimmed_query(), "dispatching search");
        let transport = Arc::clone(&self.transport);
        let results_tx = self.results_tx.clone();
        tokio::spawn(async move {
            let outcome = transport.send(&request).await;
            let _ = results_tx.send((seq, outcome));
        });
    }

    fn handle_response(&mut self, seq: u64, outcome: Result<SearchResponse>) {
        self.in_flight -= 1;
        if seq != self.latest_seq {
            debug!(seq, latest = self.latest_seq, "discarding stale response");
            return;
        }
        if let Err(error) = &outcome {
            warn!(seq, %error, "search failed");
        }
        self.target.set_loading(false);
        draw(&mut self.target, render_cards(self.category, &outcome));
    }

    /// Consumes a sequence number without issuing a request, so any
    /// in-flight response no longer matches and gets discarded.
    fn invalidate(&mut self) {
        if self.in_flight > 0 {
            self.next_seq += 1;
            self.latest_seq = self.next_seq;
        }
    }
}

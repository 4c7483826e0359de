//! Search controller
//!
//! Turns raw header-input events into a bounded result list with keyboard
//! and pointer selection. Each keystroke arms a 300 ms debounce timer; a
//! newer keystroke aborts the pending pass, so only the most recent query
//! is ever evaluated. Passes that lose the race anyway (resolve after a
//! newer input) are discarded by a generation check before they touch
//! state.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::Product;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use super::SearchIndex;
use crate::ClientError;

/// Input-inactivity window before a filter pass executes
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Keyboard input the search box reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// Navigation the surrounding shell must perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Open one product's detail view
    OpenProduct(String),
    /// Open the full search-results view for a query
    OpenResults(String),
}

/// Observable search-box state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    /// Current result set, original collection order, at most 6 entries
    pub results: Vec<Product>,
    /// Keyboard selection cursor into `results`
    pub cursor: Option<usize>,
    /// Whether the dropdown is shown (true even for zero results, so the
    /// "no results" message can render)
    pub visible: bool,
    /// Bumped on every input; pending passes from older inputs discard
    generation: u64,
}

/// Debounced search over an in-memory product index
pub struct SearchController {
    index: Arc<RwLock<SearchIndex>>,
    state: Arc<RwLock<SearchState>>,
    actions: mpsc::UnboundedSender<SearchAction>,
    pending: Option<JoinHandle<()>>,
}

impl SearchController {
    /// Create a controller and the receiver for its navigation actions
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SearchAction>) {
        let (actions, rx) = mpsc::unbounded_channel();
        (
            Self {
                index: Arc::new(RwLock::new(SearchIndex::default())),
                state: Arc::new(RwLock::new(SearchState::default())),
                actions,
                pending: None,
            },
            rx,
        )
    }

    /// Install the collection fetched on page mount
    ///
    /// A load failure degrades search to "no results" for any query; the
    /// failure is logged here, once, and search stays silent until a later
    /// successful load replaces the index.
    pub fn install_collection(&self, fetched: Result<Vec<Product>, ClientError>) {
        match fetched {
            Ok(products) => {
                *self.index.write() = SearchIndex::new(products);
            }
            Err(error) => {
                tracing::warn!(%error, "Product collection failed to load, search degraded");
                *self.index.write() = SearchIndex::failed();
            }
        }
    }

    /// Handle a query-text change
    ///
    /// Empty or whitespace-only input clears results immediately, with no
    /// debounce delay. Anything else arms the debounce timer.
    pub fn set_query(&mut self, raw: &str) {
        self.cancel_pending();

        let generation = {
            let mut state = self.state.write();
            state.query = raw.to_string();
            state.generation += 1;
            if raw.trim().is_empty() {
                state.results.clear();
                state.cursor = None;
                state.visible = false;
                return;
            }
            state.generation
        };

        let index = Arc::clone(&self.index);
        let state = Arc::clone(&self.state);
        let query = raw.to_string();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(DEBOUNCE).await;
            let results = index.read().filter(&query);
            let mut state = state.write();
            if state.generation != generation {
                // A newer input superseded this pass while it slept
                return;
            }
            state.results = results;
            state.cursor = None;
            state.visible = true;
        }));
    }

    /// Handle a keyboard event
    pub fn on_key(&mut self, key: Key) {
        match key {
            Key::ArrowDown => self.move_cursor(1),
            Key::ArrowUp => self.move_cursor(-1),
            Key::Escape => self.dismiss(),
            Key::Enter => self.on_enter(),
        }
    }

    /// Pointer click on result `index`
    pub fn select(&mut self, index: usize) {
        let product_id = {
            let state = self.state.read();
            match state.results.get(index) {
                Some(product) => product.id.clone(),
                None => return,
            }
        };
        self.complete_selection(product_id);
    }

    /// Pointer event outside the search container
    pub fn outside_click(&mut self) {
        self.dismiss();
    }

    /// Clone of the observable state
    pub fn snapshot(&self) -> SearchState {
        self.state.read().clone()
    }

    fn on_enter(&mut self) {
        enum Outcome {
            Product(String),
            Results(String),
            Nothing,
        }

        let outcome = {
            let state = self.state.read();
            match state.cursor.and_then(|i| state.results.get(i)) {
                Some(product) => Outcome::Product(product.id.clone()),
                None if !state.query.trim().is_empty() => Outcome::Results(state.query.clone()),
                None => Outcome::Nothing,
            }
        };

        match outcome {
            Outcome::Product(id) => self.complete_selection(id),
            Outcome::Results(query) => {
                self.cancel_pending();
                self.state.write().visible = false;
                let _ = self.actions.send(SearchAction::OpenResults(query));
            }
            Outcome::Nothing => {}
        }
    }

    /// Cursor cycles circularly through the current result list; no effect
    /// when the list is empty or hidden
    fn move_cursor(&self, direction: i32) {
        let mut state = self.state.write();
        if !state.visible || state.results.is_empty() {
            return;
        }
        let len = state.results.len();
        // "none" participates as index 0, so n ArrowDowns from an empty
        // cursor walk the whole list and land back on 0
        let base = state.cursor.unwrap_or(0);
        state.cursor = Some(if direction > 0 {
            (base + 1) % len
        } else {
            (base + len - 1) % len
        });
    }

    fn dismiss(&mut self) {
        self.cancel_pending();
        let mut state = self.state.write();
        state.visible = false;
        state.cursor = None;
    }

    /// Selecting a result clears query text and visibility, then navigates
    fn complete_selection(&mut self, product_id: String) {
        self.cancel_pending();
        {
            let mut state = self.state.write();
            state.query.clear();
            state.results.clear();
            state.cursor = None;
            state.visible = false;
            state.generation += 1;
        }
        let _ = self.actions.send(SearchAction::OpenProduct(product_id));
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for SearchController {
    /// Teardown clears the debounce timer so no stray pass runs after the
    /// owning page unmounts
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

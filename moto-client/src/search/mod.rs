//! Product search
//!
//! [`SearchIndex`] holds the last-fetched product collection and answers
//! synchronous substring queries; [`SearchController`] layers the 300 ms
//! debounce, result visibility, and keyboard navigation on top of it.

mod controller;
mod index;

pub use controller::{Key, SearchAction, SearchController, SearchState, DEBOUNCE};
pub use index::{SearchIndex, MAX_RESULTS};

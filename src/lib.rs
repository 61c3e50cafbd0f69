//! Typeahead - search-as-you-type input widget
//!
//! Narrows a list of options as the user types, using a lookup supplied by
//! the caller, and highlights the typed text inside each option label.
//!
//! # Features
//!
//! - **Debounced lookups**: keystrokes within 250 ms collapse into one request
//! - **Stale result protection**: only the newest request may update the list
//! - **Highlighting**: case-insensitive, literal, every occurrence
//! - **Terminal widget**: ratatui rendering with mouse-driven open/close/select
//!
//! # Example
//!
//! ```no_run
//! use std::time::Instant;
//! use typeahead::{lookup, AutocompleteConfig, SearchController};
//!
//! let names = vec!["Fake 1".to_string(), "Fake 2".to_string()];
//! let config = AutocompleteConfig::new(
//!     lookup::immediate(move |term: &str| {
//!         Ok(names.iter().filter(|n| n.contains(term)).cloned().collect())
//!     }),
//!     |name: &String| name.clone(),
//! )
//! .on_select(|name: &String| println!("picked {name}"));
//!
//! let mut search = SearchController::new(config);
//! search.focus();
//! search.input_changed("Fake", Instant::now());
//! // ... later, from the event loop
//! search.tick(Instant::now());
//! for row in search.view().rows {
//!     println!("{:?}", row);
//! }
//! ```

pub mod config;
pub mod controller;
pub mod demo;
pub mod error;
pub mod highlight;
pub mod logging;
pub mod lookup;
pub mod state;
pub mod tui;
pub mod view;

// Re-export main types
pub use config::{AfterSelect, AutocompleteConfig, WidgetSettings, DEBOUNCE_DELAY};
pub use controller::{ClickTarget, SearchController};
pub use error::{LookupError, Result, TypeaheadError};
pub use highlight::Segment;
pub use lookup::{LookupResult, Pending};
pub use state::{Phase, SearchState};
pub use view::{ListRow, ListView};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

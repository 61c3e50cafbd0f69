//! Search state owned by a controller

use std::fmt;

/// Interaction phase of the widget
///
/// Every phase but `Closed` means the widget is in use. After a failed lookup
/// the list is hidden, and later phases still track typing until the input is
/// refocused or dismissed; check [`SearchState::is_open`] for visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    /// Open with nothing typed
    OpenEmpty,
    /// Open while a lookup is in flight
    OpenLoading,
    OpenWithResults,
    OpenNoResults,
    /// Last lookup failed; the list is hidden and the error shown
    OpenError,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Closed => "closed",
            Phase::OpenEmpty => "open_empty",
            Phase::OpenLoading => "open_loading",
            Phase::OpenWithResults => "open_with_results",
            Phase::OpenNoResults => "open_no_results",
            Phase::OpenError => "open_error",
        })
    }
}

/// Observable state of one widget instance
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState<T> {
    /// Whether the option list is shown
    pub is_open: bool,
    /// Term of the most recently started lookup
    pub query: String,
    pub options: Vec<T>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl<T> Default for SearchState<T> {
    fn default() -> Self {
        Self {
            is_open: false,
            query: String::new(),
            options: Vec::new(),
            is_loading: false,
            error_message: None,
        }
    }
}

impl<T> SearchState<T> {
    /// Phase to settle in while open and not waiting on anything new
    pub(crate) fn resting_phase(&self) -> Phase {
        if self.is_loading {
            Phase::OpenLoading
        } else if !self.options.is_empty() {
            Phase::OpenWithResults
        } else if !self.query.is_empty() && self.error_message.is_none() {
            Phase::OpenNoResults
        } else {
            Phase::OpenEmpty
        }
    }
}

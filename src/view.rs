//! Render model derived from controller state
//!
//! Decides which rows the option list shows. Highlighting follows the live
//! input text rather than the term of the last lookup.

use crate::controller::SearchController;
use crate::highlight::{self, Segment};

/// One row of the option list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow<'a> {
    Option { index: usize, label: String },
    Loading(&'a str),
    NoOptions(&'a str),
}

impl ListRow<'_> {
    /// Segments to draw for this row
    pub fn segments<'s>(&'s self, highlight: &str) -> Vec<Segment<'s>> {
        match self {
            ListRow::Option { label, .. } => highlight::render(label, Some(highlight)),
            ListRow::Loading(text) | ListRow::NoOptions(text) => highlight::render(text, None),
        }
    }
}

/// What the widget should draw right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<'a> {
    /// Whether the list is drawn at all
    pub visible: bool,
    pub rows: Vec<ListRow<'a>>,
    /// Drawn below the list, even while the list is hidden
    pub error: Option<&'a str>,
    /// Text to highlight in option labels
    pub highlight: &'a str,
}

impl<T> SearchController<T> {
    pub fn view(&self) -> ListView<'_> {
        let state = self.state();
        let settings = self.settings();

        let rows = if !state.is_open {
            Vec::new()
        } else if !state.options.is_empty() {
            state
                .options
                .iter()
                .enumerate()
                .map(|(index, option)| ListRow::Option {
                    index,
                    label: self.label_of(option),
                })
                .collect()
        } else if state.is_loading {
            vec![ListRow::Loading(&settings.loading_text)]
        } else {
            vec![ListRow::NoOptions(&settings.no_options_text)]
        };

        ListView {
            visible: state.is_open,
            rows,
            error: state.error_message.as_deref(),
            highlight: self.input(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AutocompleteConfig, DEBOUNCE_DELAY};
    use crate::controller::ClickTarget;
    use crate::lookup::{self, Pending};
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Instant;

    #[derive(Debug, Clone, PartialEq)]
    struct User {
        name: String,
    }

    fn user(name: &str) -> User {
        User { name: name.to_string() }
    }

    fn held() -> (SearchController<User>, Arc<Mutex<Vec<Pending<User>>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let config = AutocompleteConfig::new(
            lookup::deferred(move |_term: &str, pending: Pending<User>| sink.lock().push(pending)),
            |u: &User| u.name.clone(),
        );
        (SearchController::new(config), calls)
    }

    #[test]
    fn hidden_when_closed() {
        let (c, _) = held();
        let view = c.view();
        assert!(!view.visible);
        assert!(view.rows.is_empty());
    }

    #[test]
    fn opening_shows_no_options_placeholder() {
        let (mut c, _) = held();
        c.focus();
        assert_eq!(c.view().rows, vec![ListRow::NoOptions("No options found")]);
    }

    #[test]
    fn cold_loading_shows_loading_row() {
        let (mut c, _) = held();
        let t0 = Instant::now();
        c.focus();
        c.input_changed("1", t0);
        c.tick(t0 + DEBOUNCE_DELAY);
        assert_eq!(c.view().rows, vec![ListRow::Loading("Loading...")]);
    }

    #[test]
    fn warm_loading_keeps_options_without_loading_row() {
        let (mut c, calls) = held();
        let t0 = Instant::now();
        c.focus();
        c.input_changed("Fa", t0);
        c.tick(t0 + DEBOUNCE_DELAY);
        calls.lock().pop().unwrap().resolve(vec![user("Fake 1")]);
        c.tick(t0 + DEBOUNCE_DELAY);

        c.input_changed("Fak", t0 + DEBOUNCE_DELAY * 2);
        c.tick(t0 + DEBOUNCE_DELAY * 3);
        assert!(c.state().is_loading);
        assert_eq!(
            c.view().rows,
            vec![ListRow::Option { index: 0, label: "Fake 1".into() }]
        );
    }

    #[test]
    fn empty_result_shows_same_placeholder() {
        let (mut c, calls) = held();
        let t0 = Instant::now();
        c.focus();
        c.input_changed("zz", t0);
        c.tick(t0 + DEBOUNCE_DELAY);
        calls.lock().pop().unwrap().resolve(Vec::new());
        c.tick(t0 + DEBOUNCE_DELAY);
        assert_eq!(c.view().rows, vec![ListRow::NoOptions("No options found")]);
    }

    #[test]
    fn highlights_follow_live_input() {
        let (mut c, calls) = held();
        let t0 = Instant::now();
        c.focus();
        c.input_changed("Fake", t0);
        c.tick(t0 + DEBOUNCE_DELAY);
        calls
            .lock()
            .pop()
            .unwrap()
            .resolve(vec![user("Fake 1"), user("Fake 2"), user("Another Random")]);
        c.tick(t0 + DEBOUNCE_DELAY);

        // typed more, lookup not yet fired
        c.input_changed("Fake 1", t0 + DEBOUNCE_DELAY * 2);
        let view = c.view();
        assert_eq!(view.highlight, "Fake 1");

        let first = view.rows[0].segments(view.highlight);
        assert_eq!(first, vec![Segment { value: "Fake 1", matched: true }]);

        let second = view.rows[1].segments(view.highlight);
        assert!(second.iter().all(|s| !s.matched));

        let third = view.rows[2].segments("Fake");
        assert!(third.iter().all(|s| !s.matched));
    }

    #[test]
    fn error_shown_while_list_hidden() {
        let (mut c, calls) = held();
        let t0 = Instant::now();
        c.focus();
        c.input_changed("Fake", t0);
        c.tick(t0 + DEBOUNCE_DELAY);
        calls.lock().pop().unwrap().reject("503");
        c.tick(t0 + DEBOUNCE_DELAY);

        let view = c.view();
        assert!(!view.visible);
        assert!(view.rows.is_empty());
        assert_eq!(view.error, Some(c.settings().error_text.as_str()));

        c.click(ClickTarget::Input);
        let view = c.view();
        assert!(view.visible);
        assert_eq!(view.rows, vec![ListRow::NoOptions("No options found")]);
        assert!(view.error.is_some());
    }
}

//! End-to-end behaviour of the search widget through the public API

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use typeahead::demo::{User, UserDirectory};
use typeahead::highlight::{self, Segment};
use typeahead::{
    lookup, AutocompleteConfig, ClickTarget, ListRow, Pending, Phase, SearchController,
    DEBOUNCE_DELAY,
};

#[derive(Debug, Clone, PartialEq)]
struct Named {
    name: String,
}

fn named(names: &[&str]) -> Vec<Named> {
    names.iter().map(|n| Named { name: n.to_string() }).collect()
}

struct Harness {
    search: SearchController<Named>,
    calls: Arc<Mutex<Vec<Pending<Named>>>>,
    selected: Arc<Mutex<Vec<Named>>>,
    t0: Instant,
}

impl Harness {
    fn new() -> Self {
        let calls: Arc<Mutex<Vec<Pending<Named>>>> = Arc::default();
        let selected: Arc<Mutex<Vec<Named>>> = Arc::default();
        let sink = calls.clone();
        let picks = selected.clone();
        let config = AutocompleteConfig::new(
            lookup::deferred(move |_term: &str, pending: Pending<Named>| sink.lock().push(pending)),
            |n: &Named| n.name.clone(),
        )
        .on_select(move |n: &Named| picks.lock().push(n.clone()));

        Self {
            search: SearchController::new(config),
            calls,
            selected,
            t0: Instant::now(),
        }
    }

    fn at(&self, ms: u64) -> Instant {
        self.t0 + Duration::from_millis(ms)
    }

    fn type_at(&mut self, text: &str, ms: u64) {
        let now = self.at(ms);
        self.search.input_changed(text, now);
        self.search.tick(now);
    }

    fn tick_at(&mut self, ms: u64) -> bool {
        let now = self.at(ms);
        self.search.tick(now)
    }

    fn terms(&self) -> Vec<String> {
        self.calls.lock().iter().map(|p| p.term().to_string()).collect()
    }

    fn take_call(&self, term: &str) -> Pending<Named> {
        let mut calls = self.calls.lock();
        let pos = calls
            .iter()
            .position(|p| p.term() == term)
            .unwrap_or_else(|| panic!("no lookup for {term:?}"));
        calls.remove(pos)
    }
}

#[test]
fn typing_fast_makes_one_lookup_with_final_text() {
    let mut h = Harness::new();
    h.search.focus();
    h.type_at("F", 0);
    h.type_at("Fa", 120);
    h.type_at("Fak", 240);
    h.type_at("Fake", 360);
    h.tick_at(500);
    assert!(h.terms().is_empty());

    h.tick_at(610);
    assert_eq!(h.terms(), vec!["Fake"]);
}

#[test]
fn out_of_order_responses_keep_newest_results() {
    let mut h = Harness::new();
    h.search.focus();
    h.type_at("Fa", 0);
    h.tick_at(250);
    h.type_at("Fake", 400);
    h.tick_at(650);
    assert_eq!(h.terms(), vec!["Fa", "Fake"]);

    h.take_call("Fake").resolve(named(&["Fake 1", "Fake 2"]));
    h.tick_at(700);
    h.take_call("Fa").resolve(named(&["Fa 1", "Fa 2", "Fa 3"]));
    assert!(!h.tick_at(800));

    assert_eq!(h.search.state().options, named(&["Fake 1", "Fake 2"]));
    assert_eq!(h.search.phase(), Phase::OpenWithResults);
}

#[test]
fn open_on_focus_and_close_only_from_outside() {
    let mut h = Harness::new();
    h.search.click(ClickTarget::Input);
    assert!(h.search.state().is_open);

    h.search.click(ClickTarget::List);
    h.search.click(ClickTarget::Input);
    assert!(h.search.state().is_open);

    h.search.click(ClickTarget::Outside);
    assert!(!h.search.state().is_open);
    assert!(!h.search.view().visible);
}

#[test]
fn empty_results_show_placeholder() {
    let mut h = Harness::new();
    h.search.focus();
    h.type_at("nobody", 0);
    h.tick_at(250);
    h.take_call("nobody").resolve(Vec::new());
    h.tick_at(260);

    assert!(!h.search.state().is_loading);
    assert_eq!(h.search.view().rows, vec![ListRow::NoOptions("No options found")]);
}

#[test]
fn picking_an_option_fills_input_and_notifies_once() {
    let mut h = Harness::new();
    h.search.focus();
    h.type_at("Fake", 0);
    h.tick_at(250);
    h.take_call("Fake").resolve(named(&["Fake 1", "Fake 2"]));
    h.tick_at(260);

    assert!(h.search.click(ClickTarget::Option(0)));
    assert_eq!(h.search.input(), "Fake 1");
    assert_eq!(*h.selected.lock(), named(&["Fake 1"]));
    assert!(!h.search.state().is_open);

    h.search.click(ClickTarget::Outside);
    assert_eq!(h.selected.lock().len(), 1);
}

#[test]
fn failed_lookup_closes_with_message_and_no_selection() {
    let mut h = Harness::new();
    h.search.focus();
    h.type_at("Fake", 0);
    h.tick_at(250);
    h.take_call("Fake").reject("HTTP 500");
    h.tick_at(260);

    let state = h.search.state();
    assert!(!state.is_open);
    assert!(state.options.is_empty());
    let message = state.error_message.clone();
    assert!(message.is_some());
    assert_eq!(h.search.phase(), Phase::OpenError);

    assert!(!h.search.click(ClickTarget::Option(0)));
    assert!(h.selected.lock().is_empty());
    assert_eq!(h.search.view().error, message.as_deref());
}

#[test]
fn unmount_drops_later_results() {
    let mut h = Harness::new();
    h.search.focus();
    h.type_at("Fa", 0);
    h.tick_at(250);
    h.search.dispose();

    h.take_call("Fa").resolve(named(&["Fa 1"]));
    assert!(!h.tick_at(300));
    assert!(h.search.state().options.is_empty());
}

#[test]
fn highlight_examples() {
    assert_eq!(
        highlight::render("Fake 1", Some("fake")),
        vec![
            Segment { value: "Fake", matched: true },
            Segment { value: " 1", matched: false },
        ]
    );
    assert_eq!(
        highlight::render("Another Random", Some("fake")),
        vec![Segment { value: "Another Random", matched: false }]
    );
}

#[test]
fn blocking_lookup_over_demo_directory() {
    let directory = Arc::new(UserDirectory::default());
    let config = AutocompleteConfig::new(
        lookup::blocking(move |term: &str| directory.search(term)),
        |u: &User| u.name.clone(),
    );
    let mut search = SearchController::new(config);
    let t0 = Instant::now();
    search.focus();
    search.input_changed("grace", t0);
    search.tick(t0 + DEBOUNCE_DELAY);

    let deadline = Instant::now() + Duration::from_secs(5);
    while search.state().is_loading && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
        search.tick(Instant::now());
    }

    assert_eq!(search.phase(), Phase::OpenWithResults);
    let rows = search.view().rows;
    assert_eq!(
        rows,
        vec![ListRow::Option { index: 0, label: "Grace Hopper".into() }]
    );
    let segments = rows[0].segments("grace");
    assert_eq!(segments[0], Segment { value: "Grace", matched: true });
}

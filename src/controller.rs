//! Search-as-you-type controller
//!
//! Owns one widget's [`SearchState`] and drives it from input events:
//! focus, text changes, clicks, and the passage of time. Keystrokes are
//! coalesced by a single debounce timer; when it fires, the caller's lookup
//! is started with a fresh generation number. Completions are applied only if
//! their generation is still the current one, so a slow early response can
//! never overwrite a newer one.
//!
//! Time is passed in by the host loop, which keeps the controller free of
//! threads and timers of its own.

use crate::config::{AfterSelect, AutocompleteConfig, WidgetSettings, DEBOUNCE_DELAY};
use crate::lookup::{Completion, Pending};
use crate::state::{Phase, SearchState};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::time::Instant;

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The text input
    Input,
    /// The list itself, outside any option row
    List,
    /// An option row, by index into the current options
    Option(usize),
    /// Anywhere else
    Outside,
}

/// Scheduled lookup; replaced on every keystroke
#[derive(Debug, Clone, Copy)]
struct DebounceTimer {
    deadline: Instant,
}

pub struct SearchController<T> {
    config: AutocompleteConfig<T>,
    state: SearchState<T>,
    phase: Phase,
    /// Live text of the input box
    input: String,
    timer: Option<DebounceTimer>,
    /// Generation of the only lookup whose result may still be applied
    generation: u64,
    completion_tx: Sender<Completion<T>>,
    completion_rx: Receiver<Completion<T>>,
    disposed: bool,
}

impl<T> SearchController<T> {
    pub fn new(config: AutocompleteConfig<T>) -> Self {
        let (completion_tx, completion_rx) = unbounded();
        Self {
            config,
            state: SearchState::default(),
            phase: Phase::Closed,
            input: String::new(),
            timer: None,
            generation: 0,
            completion_tx,
            completion_rx,
            disposed: false,
        }
    }

    pub fn state(&self) -> &SearchState<T> {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current text of the input box
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn settings(&self) -> &WidgetSettings {
        &self.config.settings
    }

    pub fn label_of(&self, option: &T) -> String {
        (self.config.get_option_label)(option)
    }

    /// True while a debounce timer is waiting to fire
    pub fn is_pending(&self) -> bool {
        self.timer.is_some()
    }

    /// When the pending debounce timer fires, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.map(|t| t.deadline)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The input gained focus.
    pub fn focus(&mut self) {
        if self.disposed || self.state.is_open {
            return;
        }
        self.state.is_open = true;
        self.set_phase(self.state.resting_phase());
    }

    /// The input text changed to `value`.
    pub fn input_changed(&mut self, value: impl Into<String>, now: Instant) {
        if self.disposed {
            return;
        }
        self.input = value.into();

        if self.input.is_empty() {
            self.timer = None;
            self.invalidate_in_flight();
            self.state.options.clear();
            self.state.query.clear();
            if self.is_engaged() {
                self.set_phase(Phase::OpenEmpty);
            }
            return;
        }

        let replaced = self.timer.replace(DebounceTimer {
            deadline: now + DEBOUNCE_DELAY,
        });
        tracing::trace!(input = %self.input, restarted = replaced.is_some(), "debounce scheduled");
    }

    /// Advance to `now`: fire a due debounce timer, then apply finished lookups.
    ///
    /// Returns true if anything observable changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.disposed {
            return false;
        }

        let mut changed = false;
        if self.timer.is_some_and(|t| now >= t.deadline) {
            self.timer = None;
            self.start_lookup();
            changed = true;
        }

        while let Ok(completion) = self.completion_rx.try_recv() {
            changed |= self.apply(completion);
        }
        changed
    }

    /// Route a click. Returns true if state changed.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        if self.disposed {
            return false;
        }
        match target {
            ClickTarget::Input if !self.state.is_open => {
                self.focus();
                true
            }
            ClickTarget::Input | ClickTarget::List => false,
            ClickTarget::Option(index) => self.select(index),
            ClickTarget::Outside => self.close(),
        }
    }

    /// Hide the list, keeping everything else for the next focus.
    pub fn close(&mut self) -> bool {
        if self.disposed || self.phase == Phase::Closed {
            return false;
        }
        self.state.is_open = false;
        self.set_phase(Phase::Closed);
        true
    }

    /// Pick the option at `index`.
    ///
    /// Puts its label in the input, notifies `on_select`, and closes the list.
    /// Any pending or in-flight lookup is dropped so the choice sticks.
    pub fn select(&mut self, index: usize) -> bool {
        if self.disposed || !self.state.is_open || index >= self.state.options.len() {
            return false;
        }

        self.timer = None;
        self.invalidate_in_flight();

        let chosen = self.state.options.swap_remove(index);
        self.state.options.clear();

        let label = (self.config.get_option_label)(&chosen);
        tracing::debug!(label = %label, "option selected");
        self.input = label.clone();
        self.state.query = label;

        if let Some(on_select) = self.config.on_select.as_mut() {
            on_select(&chosen);
        }

        if self.config.settings.after_select == AfterSelect::KeepSelected {
            self.state.options.push(chosen);
        }

        self.state.is_open = false;
        self.set_phase(Phase::Closed);
        true
    }

    /// Tear down: release the timer and ignore anything that arrives later.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.timer = None;
        self.invalidate_in_flight();
        while self.completion_rx.try_recv().is_ok() {}
        self.disposed = true;
        tracing::debug!("controller disposed");
    }

    fn start_lookup(&mut self) {
        self.generation += 1;
        self.state.query = self.input.clone();
        self.state.is_loading = true;
        self.state.error_message = None;
        if self.is_engaged() {
            self.set_phase(Phase::OpenLoading);
        }

        tracing::debug!(term = %self.state.query, generation = self.generation, "lookup started");
        let pending = Pending::new(
            self.state.query.clone(),
            self.generation,
            self.completion_tx.clone(),
        );
        (self.config.filter_options)(&self.state.query, pending);
    }

    fn apply(&mut self, completion: Completion<T>) -> bool {
        if completion.generation != self.generation {
            tracing::debug!(
                generation = completion.generation,
                current = self.generation,
                "stale lookup result ignored"
            );
            return false;
        }
        self.state.is_loading = false;
        match completion.result {
            Ok(options) => {
                tracing::debug!(count = options.len(), generation = completion.generation, "lookup resolved");
                self.state.options = options;
                if self.is_engaged() {
                    self.set_phase(self.state.resting_phase());
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, term = %self.state.query, "lookup failed");
                self.state.options.clear();
                self.state.error_message = Some(self.config.settings.error_text.clone());
                if self.is_engaged() {
                    self.state.is_open = false;
                    self.set_phase(Phase::OpenError);
                }
            }
        }
        true
    }

    /// Focused and not dismissed. After a failed lookup the list stays hidden
    /// (`is_open == false`) but the phase keeps following the input until the
    /// user clicks outside or refocuses.
    fn is_engaged(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// Make every lookup started so far stale.
    fn invalidate_in_flight(&mut self) {
        self.generation += 1;
        self.state.is_loading = false;
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            tracing::debug!(from = %self.phase, to = %phase, "phase change");
            self.phase = phase;
        }
    }
}

impl<T> Drop for SearchController<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<T> std::fmt::Debug for SearchController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("phase", &self.phase)
            .field("input", &self.input)
            .field("is_open", &self.state.is_open)
            .field("options", &self.state.options.len())
            .field("is_loading", &self.state.is_loading)
            .field("generation", &self.generation)
            .field("pending", &self.timer.is_some())
            .finish()
    }
}

use crate::controller::{ClickTarget, SearchController};
use crate::tui::input::InputState;
use crate::tui::ui::{self, HitMap};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};

/// Longest the loop sleeps waiting for input
const TICK_RATE: Duration = Duration::from_millis(50);

/// Host loop around one search controller
pub struct App<T> {
    pub controller: SearchController<T>,
    pub input: InputState,
    /// Click regions from the last draw
    pub hits: HitMap,
    pub last_selected: Option<String>,
    pub should_quit: bool,
}

impl<T> App<T> {
    pub fn new(controller: SearchController<T>) -> Self {
        Self {
            controller,
            input: InputState::default(),
            hits: HitMap::default(),
            last_selected: None,
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> crate::Result<()> {
        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = self.poll_timeout(Instant::now());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key, Instant::now());
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            self.controller.tick(Instant::now());

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Sleep no longer than the tick rate, and wake for a due debounce timer.
    fn poll_timeout(&self, now: Instant) -> Duration {
        match self.controller.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(TICK_RATE),
            None => TICK_RATE,
        }
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.focus_input();
                return;
            }
            _ => {}
        }

        if !self.input.focused {
            return;
        }

        if let Some(text) = self.input.handle_key(self.controller.input(), key) {
            self.controller.input_changed(text, now);
        }
    }

    // --- Mouse handling ---

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        self.click(self.hits.target_at(mouse.column, mouse.row));
    }

    pub fn click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Input => self.focus_input(),
            ClickTarget::List => {}
            ClickTarget::Option(_) => {
                if self.controller.click(target) {
                    let label = self.controller.input().to_string();
                    tracing::info!(label = %label, "selection made");
                    self.input.move_to_end(&label);
                    self.input.focused = false;
                    self.last_selected = Some(label);
                }
            }
            ClickTarget::Outside => {
                self.input.focused = false;
                self.controller.click(target);
            }
        }
    }

    fn focus_input(&mut self) {
        self.input.focused = true;
        self.input.move_to_end(self.controller.input());
        self.controller.focus();
    }
}

pub mod app;
pub mod colors;
pub mod input;
pub mod ui;

use crate::controller::SearchController;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

/// Entry point: run the widget full-screen until the user quits.
///
/// Selections reach the caller through the controller's `on_select`.
pub fn run<T>(controller: SearchController<T>) -> crate::Result<()> {
    let mut terminal = ratatui::init();
    if let Err(e) = execute!(std::io::stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(crate::TypeaheadError::Terminal(format!(
            "mouse capture unavailable: {}",
            e
        )));
    }

    let mut app = app::App::new(controller);
    let result = app.run(&mut terminal);

    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

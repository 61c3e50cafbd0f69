use ratatui::style::{Color, Modifier, Style};

pub fn input_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn input_text() -> Style {
    Style::default().fg(Color::White)
}

pub fn placeholder() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

pub fn list_border() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Option row background, alternating for readability
pub fn row_background(visual_idx: usize) -> Color {
    if visual_idx % 2 == 1 {
        Color::Rgb(25, 25, 35)
    } else {
        Color::Reset
    }
}

pub fn option_text() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn matched_text() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn error_text() -> Style {
    Style::default()
        .fg(Color::LightRed)
        .add_modifier(Modifier::BOLD)
}

pub fn status_bar() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Rgb(40, 40, 50))
}

use crate::controller::ClickTarget;
use crate::highlight::Segment;
use crate::tui::app::App;
use crate::tui::colors;
use crate::view::{ListRow, ListView};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Widest the input box grows
const MAX_INPUT_WIDTH: u16 = 60;

/// Screen regions from the last frame, used to route mouse clicks
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    pub input: Rect,
    pub list: Option<Rect>,
    /// Visible option rows and the option index each one shows
    pub rows: Vec<(Rect, usize)>,
}

impl HitMap {
    pub fn target_at(&self, column: u16, row: u16) -> ClickTarget {
        let pos = Position::new(column, row);
        if let Some(&(_, index)) = self.rows.iter().find(|(rect, _)| rect.contains(pos)) {
            return ClickTarget::Option(index);
        }
        if self.list.is_some_and(|list| list.contains(pos)) {
            return ClickTarget::List;
        }
        if self.input.contains(pos) {
            return ClickTarget::Input;
        }
        ClickTarget::Outside
    }
}

pub fn draw<T>(frame: &mut Frame, app: &mut App<T>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Input
            Constraint::Min(0),    // List + error
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let input_area = Rect {
        width: chunks[1].width.min(MAX_INPUT_WIDTH),
        ..chunks[1]
    };

    draw_title(frame, chunks[0]);
    draw_input(frame, app, input_area);

    let view = app.controller.view();
    let mut hits = HitMap {
        input: input_area,
        ..HitMap::default()
    };

    let body = Rect {
        width: input_area.width,
        ..chunks[2]
    };
    let error_y = if view.visible {
        let list_area = draw_list(frame, &view, body, &mut hits);
        list_area.bottom()
    } else {
        body.y
    };

    if let Some(message) = view.error {
        if error_y < body.bottom() {
            let error_area = Rect::new(body.x, error_y, body.width, 1);
            frame.render_widget(
                Paragraph::new(format!(" {}", message)).style(colors::error_text()),
                error_area,
            );
        }
    }

    draw_status_bar(frame, app, chunks[3]);
    app.hits = hits;
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" Typeahead ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("v{}", crate::VERSION),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn draw_input<T>(frame: &mut Frame, app: &App<T>, area: Rect) {
    let settings = app.controller.settings();
    let text = app.controller.input();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::input_border(app.input.focused))
        .title(format!(" {} ", settings.label));

    let paragraph = if text.is_empty() {
        Paragraph::new(format!(" {}", settings.placeholder)).style(colors::placeholder())
    } else {
        Paragraph::new(format!(" {}", text)).style(colors::input_text())
    };
    frame.render_widget(paragraph.block(block), area);

    if app.input.focused {
        // border (1) + leading space (1)
        let max_x = area.right().saturating_sub(2);
        let cursor_x = (area.x + 2 + app.input.cursor_column(text)).min(max_x);
        frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

/// Draw the open list directly under the input. Returns the area it took.
fn draw_list(frame: &mut Frame, view: &ListView<'_>, body: Rect, hits: &mut HitMap) -> Rect {
    let height = list_height(view.rows.len(), body.height);
    let list_area = Rect::new(body.x, body.y, body.width, height);
    if height == 0 {
        return list_area;
    }

    frame.render_widget(Clear, list_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::list_border());
    let inner = block.inner(list_area);
    frame.render_widget(block, list_area);
    hits.list = Some(list_area);

    for (visual_idx, row) in view.rows.iter().enumerate() {
        if visual_idx as u16 >= inner.height {
            break;
        }
        let row_area = Rect::new(inner.x, inner.y + visual_idx as u16, inner.width, 1);

        let line = match row {
            ListRow::Option { index, .. } => {
                hits.rows.push((row_area, *index));
                let bg = colors::row_background(visual_idx);
                highlighted_line(&row.segments(view.highlight)).style(Style::default().bg(bg))
            }
            ListRow::Loading(text) | ListRow::NoOptions(text) => {
                Line::from(Span::styled(format!(" {}", text), colors::placeholder()))
            }
        };
        frame.render_widget(Paragraph::new(line), row_area);
    }

    list_area
}

/// Rows plus borders, leaving one line of `available` for an error message
fn list_height(rows: usize, available: u16) -> u16 {
    let wanted = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2);
    wanted.min(available.saturating_sub(1))
}

/// Turn segments into a line with matches emphasized
pub fn highlighted_line(segments: &[Segment<'_>]) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    spans.extend(segments.iter().map(|segment| {
        let style = if segment.matched {
            colors::matched_text()
        } else {
            colors::option_text()
        };
        Span::styled(segment.value.to_string(), style)
    }));
    Line::from(spans)
}

fn draw_status_bar<T>(frame: &mut Frame, app: &App<T>, area: Rect) {
    let state = app.controller.state();
    let mut left_text = format!(
        " {} | {} options",
        app.controller.phase(),
        state.options.len()
    );
    if app.controller.is_pending() {
        left_text.push_str(" | typing...");
    }
    if let Some(ref selected) = app.last_selected {
        left_text.push_str(&format!(" | selected: {}", selected));
    }

    let right_text = " Click/Tab:Focus  Esc:Quit ";

    let available_width = area.width as usize;
    let left_len = left_text.chars().count();
    let right_len = right_text.len();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        format!("{:width$}", left_text, width = available_width)
    };

    frame.render_widget(Paragraph::new(status_str).style(colors::status_bar()), area);
}

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Stylize},
    text::{Line, Text},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::app::{App, AppMode};
use crate::classify::FileKind;

pub fn render_dashboard(app: &mut App, area: Rect, buf: &mut Buffer) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(1),    // Document list
            Constraint::Length(3), // Status/Help
        ])
        .split(area);

    // Title
    let title = Paragraph::new("Docbooth Document Manager")
        .block(
            Block::bordered()
                .title("Docbooth")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Rounded),
        )
        .fg(Color::Cyan)
        .alignment(Alignment::Center);
    title.render(main_layout[0], buf);

    render_document_list(app, main_layout[1], buf);

    // Bottom row: path entry, transient status, or key help
    let bottom = match app.mode {
        AppMode::PathInput => Paragraph::new(format!("> {}", app.path_input))
            .block(
                Block::bordered()
                    .title("Add files (space-separated paths)")
                    .border_type(BorderType::Rounded),
            )
            .fg(Color::Yellow),
        AppMode::Browse => {
            let text = match &app.status {
                Some(status) => status.clone(),
                None if app.dashboard.is_empty() => "'a': Add files • 'q': Quit".to_string(),
                None => {
                    "↑/↓: Select • Enter: View • 'a': Add • 'd': Remove • 'q': Quit".to_string()
                }
            };
            Paragraph::new(text)
                .block(
                    Block::bordered()
                        .title("Controls")
                        .border_type(BorderType::Rounded),
                )
                .fg(Color::Yellow)
                .alignment(Alignment::Center)
        }
    };
    bottom.render(main_layout[2], buf);
}

fn render_document_list(app: &App, area: Rect, buf: &mut Buffer) {
    if app.dashboard.is_empty() {
        let empty = Paragraph::new("No documents yet. Press 'a' to add files.")
            .block(
                Block::bordered()
                    .title("Documents")
                    .border_type(BorderType::Rounded),
            )
            .fg(Color::Gray)
            .alignment(Alignment::Center);
        empty.render(area, buf);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (index, entry) in app.dashboard.entries().iter().enumerate() {
        let kind = FileKind::from_name(&entry.display_name);
        let selected = index == app.dashboard.selected();
        let marker = if selected { "▶ " } else { "  " };
        let line = Line::from(format!(
            "{marker}[{kind:<10}] {}  ({} bytes)",
            entry.display_name,
            entry.binary.len()
        ));
        lines.push(if selected {
            line.fg(Color::Green).bold()
        } else {
            line
        });
    }

    Paragraph::new(Text::from(lines))
        .block(
            Block::bordered()
                .title(format!("Documents ({})", app.dashboard.len()))
                .border_type(BorderType::Rounded),
        )
        .render(area, buf);
}

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::session::ViewerState;
use crate::ui::{centered_rect, style::dim_unless_enabled};
use crate::viewer::ViewerApp;

pub fn render_viewer(app: &mut ViewerApp, area: Rect, buf: &mut Buffer) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header with navigation
            Constraint::Min(1),    // Document body
            Constraint::Length(3), // Help
        ])
        .split(area);

    render_header(app, main_layout[0], buf);
    render_body(app, main_layout[1], buf);

    let help = Paragraph::new("←/→: Navigate • 'q': Quit")
        .block(
            Block::bordered()
                .title("Controls")
                .border_type(BorderType::Rounded),
        )
        .fg(Color::Yellow)
        .alignment(Alignment::Center);
    help.render(main_layout[2], buf);
}

fn render_header(app: &ViewerApp, area: Rect, buf: &mut Buffer) {
    let title = match app.session.state() {
        ViewerState::Ready { record } => format!("Viewing: {}", record.display_name),
        _ => "Document Viewer".to_string(),
    };

    // Position stays readable even when the active id resolves to nothing:
    // the order was read once at session start and does not change.
    let position = app
        .session
        .position()
        .map(|p| (p + 1).to_string())
        .unwrap_or_else(|| "-".to_string());
    let total = app.session.len();

    let nav = Line::from(vec![
        Span::styled(
            "← Previous",
            dim_unless_enabled(app.session.can_previous(), Style::new().fg(Color::Yellow)),
        ),
        Span::raw("   "),
        Span::styled(format!("{position} / {total}"), Style::new().bold()),
        Span::raw("   "),
        Span::styled(
            "Next →",
            dim_unless_enabled(app.session.can_next(), Style::new().fg(Color::Yellow)),
        ),
    ]);

    Paragraph::new(Text::from(vec![
        Line::from(title).fg(Color::Cyan).bold(),
        nav,
    ]))
    .block(
        Block::bordered()
            .title("Docbooth")
            .title_alignment(Alignment::Center)
            .border_type(BorderType::Rounded),
    )
    .alignment(Alignment::Center)
    .render(area, buf);
}

fn render_body(app: &ViewerApp, area: Rect, buf: &mut Buffer) {
    match app.session.state() {
        ViewerState::Uninitialized | ViewerState::Resolving { .. } => {
            Paragraph::new("Loading document...")
                .alignment(Alignment::Center)
                .render(centered_rect(50, 20, area), buf);
        }
        ViewerState::Ready { record } => {
            let preview = app.previews.preview(record);
            let lines: Vec<Line> = preview.lines.iter().map(|l| Line::from(l.clone())).collect();
            Paragraph::new(Text::from(lines))
                .block(
                    Block::bordered()
                        .title(preview.heading)
                        .border_type(BorderType::Rounded),
                )
                .render(area, buf);
        }
        ViewerState::NotFound { id } => {
            render_notice(
                &format!("Document not found in store.\n\nid: {id}"),
                area,
                buf,
            );
        }
        ViewerState::Failed { id, reason } => {
            render_notice(
                &format!("Failed to load document.\n\nid: {id}\n{reason}"),
                area,
                buf,
            );
        }
    }
}

fn render_notice(text: &str, area: Rect, buf: &mut Buffer) {
    Paragraph::new(text.to_string())
        .fg(Color::Red)
        .bold()
        .alignment(Alignment::Center)
        .render(centered_rect(60, 40, area), buf);
}

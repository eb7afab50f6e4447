pub mod dashboard;
pub mod style;
pub mod viewer;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};

use crate::app::App;
use crate::viewer::ViewerApp;

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dashboard::render_dashboard(self, area, buf);
    }
}

impl Widget for &mut ViewerApp {
    fn render(self, area: Rect, buf: &mut Buffer) {
        viewer::render_viewer(self, area, buf);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

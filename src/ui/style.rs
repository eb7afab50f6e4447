use ratatui::style::{Style, Stylize};

pub fn dim_unless_enabled(enabled: bool, style: Style) -> Style {
    if enabled {
        style.bold()
    } else {
        style.dim()
    }
}

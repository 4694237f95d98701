use crate::app::AppState;
use crate::domain::Focus;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hint text for the current mode
pub fn hints(app: &AppState) -> &'static str {
    if app.is_editing() {
        " type to edit   Enter save   Esc cancel"
    } else {
        match app.focus {
            Focus::List => {
                " ↑/↓ select   Space complete   Enter/e edit   d delete   a add   q quit"
            }
            Focus::Input => " type a todo   Enter add   Esc/Tab list   Ctrl+C quit",
        }
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hints(app))).style(hint_style());
    f.render_widget(paragraph, area);
}

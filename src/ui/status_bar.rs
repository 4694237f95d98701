use crate::app::AppState;
use crate::ui::styles::message_style;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};

/// Render the transient status message, if any
pub fn render_status_bar(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(message) = app.controller.message() {
        let span = Span::styled(format!(" {}", message.text), message_style(message.kind));
        f.render_widget(Paragraph::new(span), area);
    }
}

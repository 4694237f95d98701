use crate::app::AppState;
use crate::domain::Focus;
use crate::ui::styles::{border_style, editing_style, focused_border_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the new-todo input bar
pub fn render_input_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.focus == Focus::Input && !app.is_editing();

    let mut spans = vec![
        Span::raw("> "),
        Span::styled(app.input.clone(), editing_style()),
    ];
    if focused {
        spans.push(Span::styled("█", editing_style())); // Cursor
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if focused {
                focused_border_style()
            } else {
                border_style()
            })
            .title(Span::styled(" New todo ", title_style())),
    );

    f.render_widget(paragraph, area);
}

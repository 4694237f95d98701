use crate::app::AppState;
use crate::domain::Focus;
use crate::ui::styles::{
    border_style, default_style, done_style, editing_style, focused_border_style, hint_style,
    placeholder_style, selected_style, title_style,
};
use crate::view::{RowMode, RowPlan};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the todo list from the current render plan
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let plan = app.plan();
    let list_focused = app.focus == Focus::List || app.is_editing();

    let title = format!(" Todos ({}/{} done) ", plan.completed, plan.total());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if list_focused {
            focused_border_style()
        } else {
            border_style()
        })
        .title(Span::styled(title, title_style()));

    if let Some(placeholder) = plan.placeholder {
        let paragraph = Paragraph::new(Line::styled(placeholder, placeholder_style())).block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = plan
        .rows
        .iter()
        .map(|row| {
            let selected = list_focused && row.index == app.selected_index;
            ListItem::new(create_row_line(row, &app.draft, selected))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(default_style())
        .highlight_style(selected_style());

    let mut state = ListState::default();
    if list_focused {
        state.select(Some(app.selected_index));
    }

    f.render_stateful_widget(list, area, &mut state);
}

/// Create a single row.
/// Display: `[x] Buy milk    space Undo · e Edit · d Delete`
/// Editing: `✎ Buy mil█    enter Save · esc Cancel`
fn create_row_line(row: &RowPlan, draft: &str, selected: bool) -> Line<'static> {
    let mut spans = Vec::new();

    match row.mode {
        RowMode::Display { completed } => {
            let marker = if completed { "[x] " } else { "[ ] " };
            spans.push(Span::raw(marker));
            if completed {
                spans.push(Span::styled(row.text.clone(), done_style()));
            } else {
                spans.push(Span::raw(row.text.clone()));
            }
        }
        RowMode::Editing => {
            spans.push(Span::raw("✎ "));
            spans.push(Span::styled(draft.to_string(), editing_style()));
            spans.push(Span::styled("█", editing_style()));
        }
    }

    // Affordance hints only on the active row
    if selected || row.is_editing() {
        let hints = row
            .affordances
            .iter()
            .map(|a| format!("{} {}", a.key_hint(), a.label()))
            .collect::<Vec<_>>()
            .join(" · ");
        spans.push(Span::styled(format!("    {}", hints), hint_style()));
    }

    Line::from(spans)
}

pub mod input_bar;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod status_bar;
pub mod styles;

use crate::app::AppState;
use input_bar::render_input_bar;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;
use status_bar::render_status_bar;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let layout = create_layout(f.size());

    render_keybindings(f, app, layout.keybindings_area);
    render_list_pane(f, app, layout.list_area);
    render_input_bar(f, app, layout.input_area);
    render_status_bar(f, app, layout.status_area);
}

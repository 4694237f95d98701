use crate::app::AppState;
use crate::domain::Focus;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    if app.is_editing() {
        return handle_edit_mode(app, key);
    }

    match app.focus {
        Focus::List => handle_list_mode(app, key),
        Focus::Input => handle_input_mode(app, key),
    }
}

/// Handle keys while the list has focus
fn handle_list_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Toggle completed
        KeyCode::Char(' ') => {
            app.toggle_selected();
            Ok(false)
        }

        // Enter on a row is the "double activation" that opens it for editing
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') => {
            app.edit_selected();
            Ok(false)
        }

        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }

        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => {
            app.focus_input();
            Ok(false)
        }

        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the new-todo input bar has focus
fn handle_input_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_input();
            Ok(false)
        }
        KeyCode::Esc | KeyCode::Tab => {
            app.focus_list();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.input_backspace();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.input_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys while a row is open for editing
fn handle_edit_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.save_edit();
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_edit();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.draft_backspace();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.draft_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::create_test_app;
    use crate::domain::EditState;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_handle_navigation() {
        let mut app = create_test_app(&["A", "B"]);

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_index, 1);

        handle_key(&mut app, key(KeyCode::Char('k'))).unwrap();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app(&["A"]);
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))).unwrap());

        // 'q' is plain text inside the input bar
        let mut app = create_test_app(&[]);
        assert!(!handle_key(&mut app, key(KeyCode::Char('q'))).unwrap());
        assert_eq!(app.input, "q");

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut app, ctrl_c).unwrap());
    }

    #[test]
    fn test_handle_add_todo() {
        let mut app = create_test_app(&["A"]);

        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.focus, Focus::Input);

        type_text(&mut app, "New");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.controller.store().len(), 2);
        assert_eq!(app.controller.store().records()[1].text, "New");
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_handle_toggle_and_delete() {
        let mut app = create_test_app(&["A", "B"]);

        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(app.controller.store().records()[0].completed);

        handle_key(&mut app, key(KeyCode::Delete)).unwrap();
        assert_eq!(app.controller.store().len(), 1);
        assert_eq!(app.controller.store().records()[0].text, "B");
    }

    #[test]
    fn test_handle_edit_flow() {
        let mut app = create_test_app(&["A"]);

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.controller.state(), EditState::Editing(0));

        // 'd' and 'q' are text while editing
        type_text(&mut app, "dq");
        assert_eq!(app.draft, "Adq");
        handle_key(&mut app, key(KeyCode::Backspace)).unwrap();

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.controller.state(), EditState::Idle);
        assert_eq!(app.controller.store().records()[0].text, "Ad");
    }

    #[test]
    fn test_handle_edit_escape_cancels() {
        let mut app = create_test_app(&["A"]);
        handle_key(&mut app, key(KeyCode::Char('e'))).unwrap();
        type_text(&mut app, "xyz");

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.controller.state(), EditState::Idle);
        assert_eq!(app.controller.store().records()[0].text, "A");
    }

    #[test]
    fn test_handle_empty_save_keeps_editing() {
        let mut app = create_test_app(&["A"]);
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        handle_key(&mut app, key(KeyCode::Backspace)).unwrap();

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.controller.state(), EditState::Editing(0));
        assert_eq!(
            app.controller.message().map(|m| m.text.as_str()),
            Some("Please enter a valid todo item.")
        );
    }
}

use crate::controller::TodoController;
use crate::domain::{EditState, Focus};
use crate::view::{Intent, RenderPlan};
use anyhow::Result;
use std::time::Instant;

/// Terminal-side state around the controller: selection, focus and the two
/// text buffers (new-todo input and edit draft)
pub struct AppState {
    pub controller: TodoController,
    pub selected_index: usize,
    pub focus: Focus,
    pub input: String,
    pub draft: String,
}

impl AppState {
    pub fn new(controller: TodoController) -> Self {
        let mut app = Self {
            controller,
            selected_index: 0,
            focus: Focus::Input,
            input: String::new(),
            draft: String::new(),
        };

        // A record restored in edit mode gets its draft back
        if let EditState::Editing(index) = app.controller.state() {
            app.selected_index = index;
            app.focus = Focus::List;
            app.load_draft(index);
        } else if !app.controller.store().is_empty() {
            app.focus = Focus::List;
        }

        app
    }

    pub fn plan(&self) -> RenderPlan {
        self.controller.plan()
    }

    pub fn is_editing(&self) -> bool {
        self.controller.state().editing_index().is_some()
    }

    fn load_draft(&mut self, index: usize) {
        self.draft = self
            .controller
            .store()
            .get(index)
            .map(|r| r.text.clone())
            .unwrap_or_default();
    }

    fn clamp_selection(&mut self) {
        let len = self.controller.store().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.controller.store().len() {
            self.selected_index += 1;
        }
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    /// Back to the list; stays on the input bar while there is nothing to select
    pub fn focus_list(&mut self) {
        if !self.controller.store().is_empty() {
            self.focus = Focus::List;
        }
    }

    pub fn input_add_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Add the input bar content as a new todo; the input is cleared on success
    pub fn submit_input(&mut self) {
        let text = self.input.clone();
        if self.controller.dispatch(Intent::Add(text)) {
            self.input.clear();
            self.selected_index = self.controller.store().len() - 1;
        }
    }

    pub fn toggle_selected(&mut self) {
        if !self.controller.store().is_empty() {
            self.controller.dispatch(Intent::Toggle(self.selected_index));
        }
    }

    pub fn delete_selected(&mut self) {
        if self.controller.store().is_empty() {
            return;
        }
        self.controller.dispatch(Intent::Delete(self.selected_index));
        self.clamp_selection();
        if self.controller.store().is_empty() {
            self.focus = Focus::Input;
        }
    }

    /// Open the selected row for editing, draft pre-filled with its text
    pub fn edit_selected(&mut self) {
        if self.controller.store().is_empty() {
            return;
        }
        let index = self.selected_index;
        if self.controller.dispatch(Intent::Edit(index)) {
            self.load_draft(index);
        }
    }

    pub fn draft_add_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn draft_backspace(&mut self) {
        self.draft.pop();
    }

    pub fn save_edit(&mut self) {
        if let EditState::Editing(index) = self.controller.state() {
            let text = self.draft.clone();
            if self.controller.dispatch(Intent::Save(index, text)) {
                self.draft.clear();
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        if let EditState::Editing(index) = self.controller.state() {
            self.controller.dispatch(Intent::Cancel(index));
            self.draft.clear();
        }
    }

    /// Expire status messages
    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(now);
    }

    pub fn needs_save(&self) -> bool {
        self.controller.needs_save()
    }

    pub fn save(&mut self) -> Result<()> {
        self.controller.save()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;
    use crate::store::TodoStore;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    pub(crate) fn create_test_app(texts: &[&str]) -> AppState {
        let mut store = TodoStore::load(Box::new(MemoryStorage::new()));
        for text in texts {
            store.add(text).unwrap();
        }
        AppState::new(TodoController::new(store, Duration::from_secs(3)))
    }

    fn texts(app: &AppState) -> Vec<String> {
        app.controller
            .store()
            .records()
            .iter()
            .map(|r| r.text.clone())
            .collect()
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app(&[]);
        assert_eq!(app.focus, Focus::Input);
        assert_eq!(app.selected_index, 0);

        let app = create_test_app(&["A"]);
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_move_selection() {
        let mut app = create_test_app(&["A", "B"]);

        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        // Can't go past the last row
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        app.move_selection_up();
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_submit_input_clears_on_success() {
        let mut app = create_test_app(&["A"]);
        app.input = "B".to_string();

        app.submit_input();
        assert_eq!(texts(&app), vec!["A", "B"]);
        assert!(app.input.is_empty());
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_submit_duplicate_keeps_input() {
        let mut app = create_test_app(&["A"]);
        app.input = "a".to_string();

        app.submit_input();
        assert_eq!(texts(&app), vec!["A"]);
        assert_eq!(app.input, "a");
    }

    #[test]
    fn test_delete_last_row_clamps_selection() {
        let mut app = create_test_app(&["A", "B"]);
        app.move_selection_down();

        app.delete_selected();
        assert_eq!(app.selected_index, 0);

        app.delete_selected();
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.focus, Focus::Input);

        // No-op on an empty list
        app.delete_selected();
        assert!(app.controller.store().is_empty());
    }

    #[test]
    fn test_edit_selected_prefills_draft() {
        let mut app = create_test_app(&["A", "B"]);
        app.move_selection_down();

        app.edit_selected();
        assert!(app.is_editing());
        assert_eq!(app.draft, "B");

        app.draft_backspace();
        app.draft_add_char('Z');
        app.save_edit();

        assert!(!app.is_editing());
        assert_eq!(texts(&app), vec!["A", "Z"]);
    }

    #[test]
    fn test_cancel_edit_keeps_text() {
        let mut app = create_test_app(&["A"]);
        app.edit_selected();
        app.draft = "changed".to_string();

        app.cancel_edit();
        assert!(!app.is_editing());
        assert!(app.draft.is_empty());
        assert_eq!(texts(&app), vec!["A"]);
    }
}

use crate::domain::{EditState, MessageKind, TodoError};
use crate::store::TodoStore;
use crate::view::{render_plan, Intent, RenderPlan};
use anyhow::Result;
use std::time::{Duration, Instant};

pub const ADD_SUCCESS: &str = "Todo added successfully!";
pub const DELETE_SUCCESS: &str = "Todo deleted successfully!";
pub const EDIT_SUCCESS: &str = "Todo edited successfully!";
pub const TOGGLE_SUCCESS: &str = "Todo status toggled successfully!";
pub const COMPLETED_SUCCESS: &str = "Todo completed!";
pub const EDIT_CANCELLED: &str = "Editing cancelled";

/// Transient notification, dropped once its timeout has passed
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
    pub shown_at: Instant,
}

impl StatusMessage {
    pub fn is_expired(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= timeout
    }
}

/// Interprets intents against the store and tracks which row is being edited.
/// Store failures end here as status messages.
pub struct TodoController {
    store: TodoStore,
    state: EditState,
    message: Option<StatusMessage>,
    message_timeout: Duration,
}

impl TodoController {
    pub fn new(store: TodoStore, message_timeout: Duration) -> Self {
        let state = EditState::from_index(store.editing_index());
        Self {
            store,
            state,
            message: None,
            message_timeout,
        }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn plan(&self) -> RenderPlan {
        render_plan(self.store.records())
    }

    /// Handle one intent. Returns true if the store accepted it.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        tracing::debug!(?intent, state = ?self.state, "dispatch");

        let accepted = match self.apply(&intent) {
            Ok(Some((text, kind))) => {
                self.show(text, kind);
                true
            }
            Ok(None) => true,
            Err(e) => {
                tracing::warn!(?intent, error = %e, "intent rejected");
                self.show(e.user_message(), MessageKind::Error);
                false
            }
        };

        // Deleting rows shifts indices, so follow the store's edit flag
        self.state = EditState::from_index(self.store.editing_index());
        accepted
    }

    fn apply(&mut self, intent: &Intent) -> Result<Option<(&'static str, MessageKind)>, TodoError> {
        let feedback = match intent {
            Intent::Add(text) => {
                self.store.add(text)?;
                Some((ADD_SUCCESS, MessageKind::Success))
            }
            Intent::Delete(index) => {
                self.store.delete(*index)?;
                Some((DELETE_SUCCESS, MessageKind::Success))
            }
            Intent::Toggle(index) => {
                if self.store.toggle_completed(*index)? {
                    Some((COMPLETED_SUCCESS, MessageKind::Completed))
                } else {
                    Some((TOGGLE_SUCCESS, MessageKind::Info))
                }
            }
            Intent::Edit(index) => {
                self.store.begin_edit(*index)?;
                None
            }
            Intent::Save(index, text) => {
                self.store.commit_edit(*index, text)?;
                Some((EDIT_SUCCESS, MessageKind::Success))
            }
            Intent::Cancel(index) => {
                self.store.cancel_edit(*index)?;
                Some((EDIT_CANCELLED, MessageKind::Info))
            }
        };
        Ok(feedback)
    }

    /// Replace the current message; the old one is simply discarded
    pub fn show(&mut self, text: &str, kind: MessageKind) {
        self.message = Some(StatusMessage {
            text: text.to_string(),
            kind,
            shown_at: Instant::now(),
        });
    }

    /// Drop the status message once it has been visible long enough
    pub fn tick(&mut self, now: Instant) {
        let timeout = self.message_timeout;
        if self
            .message
            .as_ref()
            .is_some_and(|m| m.is_expired(now, timeout))
        {
            self.message = None;
        }
    }

    pub fn needs_save(&self) -> bool {
        self.store.needs_save()
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save()
    }
}

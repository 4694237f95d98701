use crate::domain::{TodoError, TodoRecord};
use crate::persistence::Storage;
use anyhow::{Context, Result};

/// Storage key holding the serialized record list
pub const STORAGE_KEY: &str = "todos";

/// Ordered list of to-do records, persisted after every mutation.
///
/// Invariants:
/// - no two records have the same text ignoring case
/// - at most one record is being edited
pub struct TodoStore {
    records: Vec<TodoRecord>,
    storage: Box<dyn Storage>,
    needs_save: bool,
}

impl TodoStore {
    /// Restore the list from storage. Missing or unreadable data gives an
    /// empty list; the error is logged, never returned. Anything that exists
    /// but can't be used is backed up before the next save replaces it.
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let records = match storage.get(STORAGE_KEY) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<TodoRecord>>(&payload) {
                Ok(records) => normalize(records),
                Err(e) => {
                    tracing::warn!(error = %e, "stored todos are malformed, starting empty");
                    if let Err(e) = storage.backup(STORAGE_KEY) {
                        tracing::warn!(error = %e, "could not back up malformed todos");
                    }
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored todos, starting empty");
                if let Err(e) = storage.backup(STORAGE_KEY) {
                    tracing::warn!(error = %e, "could not back up unreadable todos");
                }
                Vec::new()
            }
        };

        tracing::debug!(count = records.len(), "todos loaded");

        Self {
            records,
            storage,
            needs_save: false,
        }
    }

    /// Serialize the whole list and overwrite the stored value
    pub fn save(&mut self) -> Result<()> {
        let payload = serde_json::to_string_pretty(&self.records)
            .context("Failed to serialize todos")?;
        self.storage.set(STORAGE_KEY, &payload)?;
        self.needs_save = false;
        Ok(())
    }

    /// Save after a mutation; a failure is logged and retried later
    fn persist(&mut self) {
        self.needs_save = true;
        if let Err(e) = self.save() {
            tracing::error!(error = %e, "failed to save todos");
        }
    }

    pub fn records(&self) -> &[TodoRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&TodoRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn needs_save(&self) -> bool {
        self.needs_save
    }

    /// Index of the record currently in edit mode
    pub fn editing_index(&self) -> Option<usize> {
        self.records.iter().position(|r| r.is_editing)
    }

    pub fn completed_count(&self) -> usize {
        self.records.iter().filter(|r| r.completed).count()
    }

    fn check_index(&self, index: usize) -> Result<(), TodoError> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(TodoError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }

    fn is_duplicate(&self, text: &str, except: Option<usize>) -> bool {
        self.records
            .iter()
            .enumerate()
            .any(|(i, r)| Some(i) != except && r.matches(text))
    }

    /// Append a new record, returning its index
    pub fn add(&mut self, text: &str) -> Result<usize, TodoError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyInput);
        }
        if self.is_duplicate(text, None) {
            return Err(TodoError::DuplicateTodo);
        }

        self.records.push(TodoRecord::new(text));
        tracing::info!(text, "todo added");
        self.persist();
        Ok(self.records.len() - 1)
    }

    pub fn delete(&mut self, index: usize) -> Result<TodoRecord, TodoError> {
        self.check_index(index)?;
        let removed = self.records.remove(index);
        tracing::info!(index, text = %removed.text, "todo deleted");
        self.persist();
        Ok(removed)
    }

    /// Flip the completed flag, returning the new value
    pub fn toggle_completed(&mut self, index: usize) -> Result<bool, TodoError> {
        self.check_index(index)?;
        let record = &mut self.records[index];
        record.completed = !record.completed;
        let completed = record.completed;
        tracing::debug!(index, completed, "todo toggled");
        self.persist();
        Ok(completed)
    }

    pub fn begin_edit(&mut self, index: usize) -> Result<(), TodoError> {
        self.check_index(index)?;
        for (i, record) in self.records.iter_mut().enumerate() {
            record.is_editing = i == index;
        }
        tracing::debug!(index, "edit started");
        self.persist();
        Ok(())
    }

    /// Replace the text of a record and close its edit mode.
    /// On failure the record stays in edit mode.
    pub fn commit_edit(&mut self, index: usize, new_text: &str) -> Result<(), TodoError> {
        self.check_index(index)?;
        let text = new_text.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyInput);
        }
        if self.is_duplicate(text, Some(index)) {
            return Err(TodoError::DuplicateTodo);
        }

        let record = &mut self.records[index];
        record.text = text.to_string();
        record.is_editing = false;
        tracing::info!(index, text, "todo edited");
        self.persist();
        Ok(())
    }

    pub fn cancel_edit(&mut self, index: usize) -> Result<(), TodoError> {
        self.check_index(index)?;
        self.records[index].is_editing = false;
        tracing::debug!(index, "edit cancelled");
        self.persist();
        Ok(())
    }
}

/// Keep edit mode on the first editing record only
fn normalize(mut records: Vec<TodoRecord>) -> Vec<TodoRecord> {
    let mut seen_editing = false;
    for record in &mut records {
        if record.is_editing {
            if seen_editing {
                record.is_editing = false;
            }
            seen_editing = true;
        }
    }
    records
}

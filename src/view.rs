//! Pure mapping from store state to what the screen shows.
//!
//! Nothing here mutates the store: the plan lists, per row, the affordances
//! the user can trigger, and each affordance maps to an [`Intent`] that the
//! controller interprets.

use crate::domain::TodoRecord;

/// Placeholder shown instead of rows when there are no records
pub const EMPTY_PLACEHOLDER: &str = "No todos available. Add some!";

/// A user request, produced by the front-end, consumed by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(String),
    Delete(usize),
    Toggle(usize),
    Edit(usize),
    Save(usize, String),
    Cancel(usize),
}

/// An action control attached to a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Toggle { completed: bool },
    Edit,
    Delete,
    Save,
    Cancel,
}

impl Affordance {
    pub fn label(&self) -> &'static str {
        match self {
            Affordance::Toggle { completed: true } => "Undo",
            Affordance::Toggle { completed: false } => "Complete",
            Affordance::Edit => "Edit",
            Affordance::Delete => "Delete",
            Affordance::Save => "Save",
            Affordance::Cancel => "Cancel",
        }
    }

    /// Key that triggers this affordance in the terminal front-end
    pub fn key_hint(&self) -> &'static str {
        match self {
            Affordance::Toggle { .. } => "space",
            Affordance::Edit => "e",
            Affordance::Delete => "d",
            Affordance::Save => "enter",
            Affordance::Cancel => "esc",
        }
    }

    /// Intent raised when this affordance is activated on `index`.
    /// `draft` is the edit-field content, only used by Save.
    pub fn intent(&self, index: usize, draft: &str) -> Intent {
        match self {
            Affordance::Toggle { .. } => Intent::Toggle(index),
            Affordance::Edit => Intent::Edit(index),
            Affordance::Delete => Intent::Delete(index),
            Affordance::Save => Intent::Save(index, draft.to_string()),
            Affordance::Cancel => Intent::Cancel(index),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    /// Text label, struck through when completed
    Display { completed: bool },
    /// Text input pre-filled with the current text
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPlan {
    pub index: usize,
    pub text: String,
    pub mode: RowMode,
    pub affordances: Vec<Affordance>,
}

impl RowPlan {
    pub fn is_editing(&self) -> bool {
        self.mode == RowMode::Editing
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub rows: Vec<RowPlan>,
    pub placeholder: Option<&'static str>,
    pub completed: usize,
}

impl RenderPlan {
    pub fn total(&self) -> usize {
        self.rows.len()
    }
}

/// Build the render plan for the current records
pub fn render_plan(records: &[TodoRecord]) -> RenderPlan {
    let rows = records
        .iter()
        .enumerate()
        .map(|(index, record)| row_plan(index, record))
        .collect();

    RenderPlan {
        rows,
        placeholder: records.is_empty().then_some(EMPTY_PLACEHOLDER),
        completed: records.iter().filter(|r| r.completed).count(),
    }
}

fn row_plan(index: usize, record: &TodoRecord) -> RowPlan {
    let (mode, affordances) = if record.is_editing {
        (RowMode::Editing, vec![Affordance::Save, Affordance::Cancel])
    } else {
        (
            RowMode::Display {
                completed: record.completed,
            },
            vec![
                Affordance::Toggle {
                    completed: record.completed,
                },
                Affordance::Edit,
                Affordance::Delete,
            ],
        )
    };

    RowPlan {
        index,
        text: record.text.clone(),
        mode,
        affordances,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_plan_has_placeholder() {
        let plan = render_plan(&[]);
        assert!(plan.rows.is_empty());
        assert_eq!(plan.placeholder, Some(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn test_display_and_edit_rows() {
        let mut done = TodoRecord::new("Done");
        done.completed = true;
        let mut editing = TodoRecord::new("Editing");
        editing.is_editing = true;

        let plan = render_plan(&[TodoRecord::new("Open"), done, editing]);

        assert_eq!(plan.placeholder, None);
        assert_eq!(plan.completed, 1);
        assert_eq!(plan.total(), 3);

        let labels: Vec<Vec<&str>> = plan
            .rows
            .iter()
            .map(|row| row.affordances.iter().map(|a| a.label()).collect())
            .collect();
        assert_eq!(
            labels,
            vec![
                vec!["Complete", "Edit", "Delete"],
                vec!["Undo", "Edit", "Delete"],
                vec!["Save", "Cancel"],
            ]
        );
        assert_eq!(plan.rows[1].mode, RowMode::Display { completed: true });
        assert!(plan.rows[2].is_editing());
    }

    #[test]
    fn test_affordance_intents() {
        assert_eq!(Affordance::Edit.intent(3, ""), Intent::Edit(3));
        assert_eq!(
            Affordance::Save.intent(1, "new text"),
            Intent::Save(1, "new text".to_string())
        );
        assert_eq!(
            Affordance::Toggle { completed: false }.intent(0, "ignored"),
            Intent::Toggle(0)
        );
    }
}

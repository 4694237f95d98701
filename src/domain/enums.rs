/// Controller state: at most one row is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Idle,
    Editing(usize),
}

impl EditState {
    pub fn from_index(index: Option<usize>) -> Self {
        match index {
            Some(i) => EditState::Editing(i),
            None => EditState::Idle,
        }
    }

    pub fn editing_index(&self) -> Option<usize> {
        match self {
            EditState::Editing(i) => Some(*i),
            EditState::Idle => None,
        }
    }
}

/// Which part of the screen receives plain key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Input,
}

/// Kind of a transient status message (drives its colour)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Info,
    Completed,
}

//! Selection and edit-mode state of the canvas.
//!
//! One enum holds both facts, so "editing implies selected" and "at most one
//! element of each" cannot be violated.
//!
//! # State Transitions
//!
//! ```text
//!            click / drag release            double click (text)
//! ┌──────┐ ──────────────────────► ┌──────────┐ ──────────────► ┌─────────┐
//! │ Idle │                         │ Selected │                 │ Editing │
//! └──────┘ ◄────────────────────── └──────────┘ ◄────────────── └─────────┘
//!    ▲      Delete / press outside               blur / Enter        │
//!    │                                                               │
//!    └───────────────────────── press outside ───────────────────────┘
//! ```
//!
//! Delete is only honoured from `Selected`; an element being edited is
//! neither deletable nor draggable.

use crate::element::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    /// Nothing selected
    #[default]
    Idle,
    /// One element selected, not being edited
    Selected(ElementId),
    /// A text element selected with its text open for editing
    Editing(ElementId),
}

impl EditorState {
    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: &EditorState) -> bool {
        match (self, new_state) {
            // Anything can be cleared or selected
            (_, EditorState::Idle) => true,
            (_, EditorState::Selected(_)) => true,

            // Editing starts from nothing (a freshly created element) or a
            // selection. Moving an edit to another element commits the first
            // edit, passing through Selected.
            (EditorState::Idle, EditorState::Editing(_)) => true,
            (EditorState::Selected(_), EditorState::Editing(_)) => true,
            (EditorState::Editing(a), EditorState::Editing(b)) => a == b,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditorState::Editing(_))
    }

    /// The selected element, whether or not it is being edited
    pub fn selected_id(&self) -> Option<ElementId> {
        match self {
            EditorState::Idle => None,
            EditorState::Selected(id) | EditorState::Editing(id) => Some(*id),
        }
    }

    /// The element in edit mode, if any
    pub fn editing_id(&self) -> Option<ElementId> {
        match self {
            EditorState::Editing(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected_id() == Some(id)
    }

    pub fn is_editing_element(&self, id: ElementId) -> bool {
        self.editing_id() == Some(id)
    }

    /// The element that Delete would remove right now
    pub fn deletable_id(&self) -> Option<ElementId> {
        match self {
            EditorState::Selected(id) => Some(*id),
            _ => None,
        }
    }

    /// Whether the element may be picked up by a drag gesture
    pub fn is_draggable(&self, id: ElementId) -> bool {
        !self.is_editing_element(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_implies_selected() {
        let state = EditorState::Editing(7);
        assert_eq!(state.selected_id(), Some(7));
        assert_eq!(state.editing_id(), Some(7));
        assert!(state.is_selected(7));
        assert!(!state.is_draggable(7));
        assert!(state.is_draggable(8));
        assert_eq!(state.deletable_id(), None);
    }

    #[test]
    fn test_cannot_jump_between_edits() {
        assert!(!EditorState::Editing(1).can_transition_to(&EditorState::Editing(2)));
        assert!(EditorState::Editing(1).can_transition_to(&EditorState::Selected(1)));
        assert!(EditorState::Selected(3).can_transition_to(&EditorState::Editing(3)));
    }
}

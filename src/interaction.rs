use egui::{Pos2, Vec2};

use crate::element::ElementId;

/// An element being dragged. Its stored position is untouched until release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub element_id: ElementId,
    /// Accumulated movement in canvas units
    pub offset: Vec2,
}

/// Per-frame pointer bookkeeping for the canvas that does not belong in the
/// workspace: the live drag offset and which text box has been given focus.
#[derive(Debug, Clone, Default)]
pub struct CanvasInteraction {
    drag: Option<DragState>,
    focused_edit: Option<ElementId>,
}

impl CanvasInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_drag(&mut self, element_id: ElementId) {
        self.drag = Some(DragState {
            element_id,
            offset: Vec2::ZERO,
        });
    }

    pub fn drag_by(&mut self, element_id: ElementId, delta: Vec2) {
        if let Some(drag) = self.drag.as_mut().filter(|d| d.element_id == element_id) {
            drag.offset += delta;
        }
    }

    /// Visual offset to apply to an element this frame
    pub fn drag_offset(&self, element_id: ElementId) -> Vec2 {
        match self.drag {
            Some(drag) if drag.element_id == element_id => drag.offset,
            _ => Vec2::ZERO,
        }
    }

    /// Finish the drag of `element_id`, returning the drop position
    pub fn end_drag(&mut self, element_id: ElementId, start: Pos2) -> Option<Pos2> {
        let drag = self.drag.filter(|d| d.element_id == element_id)?;
        self.drag = None;
        Some(start + drag.offset)
    }

    pub fn dragging_id(&self) -> Option<ElementId> {
        self.drag.map(|d| d.element_id)
    }

    /// Forget a drag whose element no longer exists or may no longer move
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// True the first time it is asked about a newly edited element,
    /// so the text box grabs keyboard focus exactly once.
    pub fn take_focus_request(&mut self, element_id: ElementId) -> bool {
        if self.focused_edit == Some(element_id) {
            return false;
        }
        self.focused_edit = Some(element_id);
        true
    }

    pub fn clear_focus(&mut self) {
        self.focused_edit = None;
    }
}

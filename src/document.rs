use crate::element::{Element, ElementId, ElementType};
use egui::Pos2;

/// Ordered collection of canvas elements.
///
/// Insertion order is paint order: later elements are drawn on top.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<ElementType>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_element(&mut self, element: ElementType) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[ElementType] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.iter().any(|element| element.id() == id)
    }

    pub fn find_element_by_id(&self, id: ElementId) -> Option<&ElementType> {
        self.elements.iter().find(|element| element.id() == id)
    }

    pub fn find_element_by_id_mut(&mut self, id: ElementId) -> Option<&mut ElementType> {
        self.elements.iter_mut().find(|element| element.id() == id)
    }

    /// Remove an element, returning it if it was present
    pub fn remove_element(&mut self, id: ElementId) -> Option<ElementType> {
        let index = self.elements.iter().position(|element| element.id() == id)?;
        Some(self.elements.remove(index))
    }

    /// Topmost element under a canvas position
    pub fn element_at(&self, pos: Pos2) -> Option<&ElementType> {
        self.elements.iter().rev().find(|element| element.hit_test(pos))
    }
}

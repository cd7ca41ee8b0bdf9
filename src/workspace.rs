use egui::Pos2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::WorkspaceConfig;
use crate::document::Document;
use crate::element::{factory, Element, ElementId, ElementType, ImageSource, TextStyle};
use crate::error::{WorkspaceError, WorkspaceResult};
use crate::id_generator::generate_id;
use crate::menu::SidebarMenu;
use crate::preset::TextPreset;
use crate::state::EditorState;
use crate::util::time;
use crate::zoom::Zoom;

/// Everything the poster editor knows: the elements, who is selected or being
/// edited, the zoom level and which sidebar category is open.
#[derive(Debug)]
pub struct Workspace {
    document: Document,
    state: EditorState,
    zoom: Zoom,
    menu: SidebarMenu,
    config: WorkspaceConfig,
    rng: SmallRng,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(WorkspaceConfig::default())
    }
}

impl Workspace {
    pub fn new(config: WorkspaceConfig) -> Self {
        Self::with_seed(config, time::clock_seed())
    }

    /// Create a workspace whose image scatter is reproducible
    pub fn with_seed(config: WorkspaceConfig, seed: u64) -> Self {
        Self {
            document: Document::new(),
            state: EditorState::Idle,
            zoom: Zoom::default(),
            menu: SidebarMenu::new(),
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn menu(&self) -> &SidebarMenu {
        &self.menu
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn toggle_menu(&mut self, index: usize) {
        self.menu.toggle(index);
    }

    pub fn zoom_in(&mut self) {
        self.zoom.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.zoom.zoom_out();
    }

    fn set_state(&mut self, new_state: EditorState) {
        if self.state == new_state {
            return;
        }
        debug_assert!(
            self.state.can_transition_to(&new_state),
            "invalid transition {:?} -> {:?}",
            self.state,
            new_state
        );
        log::debug!("Editor state {:?} -> {:?}", self.state, new_state);
        self.state = new_state;
    }

    /// Add a text element from the preset behind a menu label.
    ///
    /// The new element is selected and opened for editing straight away.
    pub fn add_text(&mut self, preset_label: &str) -> WorkspaceResult<ElementId> {
        let preset = TextPreset::lookup(preset_label)
            .ok_or_else(|| WorkspaceError::UnknownPreset(preset_label.to_owned()))?;
        Ok(self.add_text_preset(preset))
    }

    /// Add a text element of the given style
    pub fn add_text_style(&mut self, style: TextStyle) -> ElementId {
        self.add_text_preset(TextPreset::for_style(style))
    }

    fn add_text_preset(&mut self, preset: &TextPreset) -> ElementId {
        let id = generate_id();
        let element = factory::create_text(id, preset.text, preset.style, self.config.text_position());
        self.document.add_element(element);
        log::info!("Added {} text element {}", preset.style.class_name(), id);

        self.enter_edit(id);
        id
    }

    /// Add one image element per source, in order, scattered over the
    /// configured region. Selection is left alone.
    pub fn add_images(&mut self, sources: Vec<ImageSource>) -> Vec<ElementId> {
        let size = self.config.image_size();
        let scatter = self.config.image_scatter;

        sources
            .into_iter()
            .map(|source| {
                let id = generate_id();
                let position = Pos2::new(
                    self.rng.random::<f32>() * scatter,
                    self.rng.random::<f32>() * scatter,
                );
                log::info!("Added image element {} from {} at {:?}", id, source.name(), position);
                self.document
                    .add_element(factory::create_image(id, source, size, position));
                id
            })
            .collect()
    }

    /// Replace the text of a text element
    pub fn update_text(&mut self, id: ElementId, text: impl Into<String>) -> WorkspaceResult<()> {
        let element = self
            .document
            .find_element_by_id_mut(id)
            .ok_or(WorkspaceError::ElementNotFound(id))?;
        let text_element = element.as_text_mut().ok_or(WorkspaceError::NotText(id))?;
        text_element.set_content(text);
        Ok(())
    }

    /// Select an element (click, or the end of a drag).
    ///
    /// Clicking the element that is being edited keeps it in edit mode.
    pub fn select(&mut self, id: ElementId) -> WorkspaceResult<()> {
        if !self.document.contains(id) {
            return Err(WorkspaceError::ElementNotFound(id));
        }
        if !self.state.is_editing_element(id) {
            self.set_state(EditorState::Selected(id));
        }
        Ok(())
    }

    /// Open a text element for editing (double click)
    pub fn begin_edit(&mut self, id: ElementId) -> WorkspaceResult<()> {
        let element = self
            .document
            .find_element_by_id(id)
            .ok_or(WorkspaceError::ElementNotFound(id))?;
        if !element.is_text() {
            return Err(WorkspaceError::NotText(id));
        }
        self.enter_edit(id);
        Ok(())
    }

    /// Put a text element in edit mode, committing any other edit first
    fn enter_edit(&mut self, id: ElementId) {
        if let Some(other) = self.state.editing_id().filter(|other| *other != id) {
            self.set_state(EditorState::Selected(other));
        }
        self.set_state(EditorState::Editing(id));
    }

    /// Leave edit mode, keeping the element selected (blur or Enter)
    pub fn commit_edit(&mut self) {
        if let EditorState::Editing(id) = self.state {
            self.set_state(EditorState::Selected(id));
        }
    }

    /// A pointer press that landed on no element clears selection and edit mode
    pub fn pointer_down_outside(&mut self) {
        self.set_state(EditorState::Idle);
    }

    /// Finish a drag: put the element at its drop position and select it
    pub fn move_element(&mut self, id: ElementId, position: Pos2) -> WorkspaceResult<()> {
        if !self.state.is_draggable(id) {
            return Err(WorkspaceError::ElementLocked(id));
        }
        let element = self
            .document
            .find_element_by_id_mut(id)
            .ok_or(WorkspaceError::ElementNotFound(id))?;
        element.set_position(position);
        self.set_state(EditorState::Selected(id));
        Ok(())
    }

    /// Delete the selected element.
    ///
    /// Does nothing while an element is being edited or nothing is selected.
    pub fn delete_selected(&mut self) -> Option<ElementType> {
        let id = self.state.deletable_id()?;
        let removed = self.document.remove_element(id);
        self.set_state(EditorState::Idle);
        if removed.is_some() {
            log::info!("Deleted element {}", id);
        }
        removed
    }

    /// Topmost element under a canvas position
    pub fn element_at(&self, pos: Pos2) -> Option<ElementId> {
        self.document.element_at(pos).map(|element| element.id())
    }
}

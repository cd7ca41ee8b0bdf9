use egui::{Pos2, Rect, Sense, TextEdit, Ui, Vec2};

use crate::command::Command;
use crate::element::{Element, TextElement};
use crate::input::{self, InputEvent};
use crate::interaction::CanvasInteraction;
use crate::renderer::Renderer;
use crate::zoom::{CanvasView, Zoom};
use crate::PosterApp;

/// Gap between the top-left of the canvas area and the poster page
const PAGE_MARGIN: Vec2 = Vec2::new(24.0, 24.0);

pub fn central_panel(app: &mut PosterApp, ctx: &egui::Context) {
    let mut commands = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        zoom_controls(ui, app.workspace.zoom(), &mut commands);
        ui.separator();

        let canvas_rect = ui.available_rect_before_wrap();
        let view = CanvasView::new(canvas_rect.min + PAGE_MARGIN, app.workspace.zoom());
        let painter = ui.painter_at(canvas_rect);
        app.input_handler.set_canvas_rect(canvas_rect);

        app.renderer.measure_text(&painter, app.workspace.document_mut());

        // Window-wide input, judged against the state as it is right now
        for event in app.input_handler.process_input(ctx) {
            match event {
                InputEvent::PointerDown { location } => {
                    // Presses on the header, sidebar or zoom bar can never hit an element
                    let on_element = location.is_in_canvas
                        && app
                            .workspace
                            .element_at(view.to_canvas(location.position))
                            .is_some();
                    if !on_element {
                        commands.push(Command::PointerDownOutside);
                    }
                }
                InputEvent::DeletePressed => commands.push(Command::DeleteSelected),
            }
        }

        let page = Rect::from_min_size(Pos2::ZERO, app.workspace.config().page_size());
        app.renderer.draw_page(&painter, view, page);

        let workspace = &app.workspace;
        let state = workspace.state();
        for element in workspace.document().elements() {
            let id = element.id();
            let offset = app.canvas.drag_offset(id);
            let screen_rect = view.rect_to_screen(element.rect().translate(offset));

            if state.is_editing_element(id) {
                if let Some(text) = element.as_text() {
                    text_editor(ui, &mut app.canvas, text, screen_rect, view.scale, &mut commands);
                }
                continue;
            }

            app.renderer
                .draw_element(&painter, element, screen_rect, view.scale, state.is_selected(id));

            let sense = if state.is_draggable(id) {
                Sense::click_and_drag()
            } else {
                Sense::click()
            };
            let response = ui.interact(screen_rect, ui.id().with(("element", id)), sense);

            if response.drag_started() {
                app.canvas.begin_drag(id);
            }
            if response.dragged() {
                app.canvas.drag_by(id, view.delta_to_canvas(response.drag_delta()));
            }
            if response.drag_stopped() {
                if let Some(position) = app.canvas.end_drag(id, element.position()) {
                    commands.push(Command::MoveElement {
                        element_id: id,
                        position,
                    });
                }
            }

            if response.double_clicked() && element.is_text() {
                commands.push(Command::BeginEdit(id));
            } else if response.clicked() {
                commands.push(Command::SelectElement(id));
            }
        }

        if state.editing_id().is_none() {
            app.canvas.clear_focus();
        }
        if let Some(id) = app.canvas.dragging_id() {
            if !workspace.document().contains(id) || !state.is_draggable(id) {
                log::debug!("Dropping drag of element {}", id);
                app.canvas.cancel_drag();
            }
        }
    });

    app.execute_commands(commands);
}

fn zoom_controls(ui: &mut Ui, zoom: Zoom, commands: &mut Vec<Command>) {
    ui.horizontal(|ui| {
        if ui.add_enabled(zoom.can_zoom_out(), egui::Button::new("-")).clicked() {
            commands.push(Command::ZoomOut);
        }
        ui.label(zoom.label());
        if ui.add_enabled(zoom.can_zoom_in(), egui::Button::new("+")).clicked() {
            commands.push(Command::ZoomIn);
        }
    });
}

/// Multi-line text box laid over a text element in edit mode.
///
/// Enter commits, Shift+Enter adds a line, and losing focus commits too.
fn text_editor(
    ui: &mut Ui,
    canvas: &mut CanvasInteraction,
    text: &TextElement,
    screen_rect: Rect,
    scale: f32,
    commands: &mut Vec<Command>,
) {
    let committed = input::take_commit_key(ui);

    let mut buffer = text.content().to_owned();
    let editor = TextEdit::multiline(&mut buffer)
        .id(ui.id().with(("text_editor", text.id())))
        .font(text.style().font_id(scale))
        .frame(false)
        .desired_rows(1)
        .desired_width(screen_rect.width());
    let response = ui.put(screen_rect, editor);

    if canvas.take_focus_request(text.id()) {
        response.request_focus();
    }
    if response.changed() {
        commands.push(Command::UpdateText {
            element_id: text.id(),
            text: buffer,
        });
    }
    if committed || response.lost_focus() {
        response.surrender_focus();
        commands.push(Command::CommitEdit);
    }

    Renderer::draw_selection(ui.painter(), screen_rect);
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::config::WorkspaceConfig;
    use crate::element::{ElementId, ImageSource, TextStyle};
    use crate::state::EditorState;
    use egui::{Color32, ColorImage, Event, Key, Modifiers, PointerButton, RawInput};

    const SCREEN_SIZE: Vec2 = Vec2::new(1280.0, 960.0);

    /// Drives whole frames of the app headlessly
    struct Harness {
        ctx: egui::Context,
        app: PosterApp,
    }

    impl Harness {
        fn new(app: PosterApp) -> Self {
            let ctx = egui::Context::default();
            ctx.options_mut(|options| options.max_passes = NonZeroUsize::MIN);
            let mut harness = Self { ctx, app };
            harness.frame(Vec::new());
            harness
        }

        fn frame(&mut self, events: Vec<Event>) {
            let input = RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SCREEN_SIZE)),
                events,
                ..RawInput::default()
            };
            let app = &mut self.app;
            let _ = self.ctx.run(input, |ctx| app.ui(ctx));
        }

        fn key(&mut self, key: Key, modifiers: Modifiers) {
            self.frame(vec![Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers,
            }]);
        }

        fn pointer(&mut self, pos: Pos2, pressed: bool) {
            self.frame(vec![
                Event::PointerMoved(pos),
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    modifiers: Modifiers::NONE,
                },
            ]);
        }

        /// Screen position of a point on the page
        fn to_screen(&self, pos: Pos2) -> Pos2 {
            let origin = self.app.input_handler.canvas_rect.min + PAGE_MARGIN;
            CanvasView::new(origin, self.app.workspace.zoom()).to_screen(pos)
        }

        fn state(&self) -> EditorState {
            self.app.workspace.state()
        }

        fn text_of(&self, id: ElementId) -> String {
            let element = self.app.workspace.document().find_element_by_id(id).unwrap();
            element.as_text().unwrap().content().to_owned()
        }

        fn add_image(&mut self) -> ElementId {
            let source = ImageSource::new("tile.png", ColorImage::new([4, 4], Color32::RED));
            self.app.execute_command(Command::AddImages(vec![source]));
            let id = self.app.workspace.document().elements().last().unwrap().id();
            self.frame(Vec::new());
            id
        }
    }

    fn app_without_scatter() -> PosterApp {
        PosterApp::with_config(WorkspaceConfig {
            image_scatter: 0.0,
            ..WorkspaceConfig::default()
        })
    }

    #[test]
    fn test_keyboard_editing_of_new_title() {
        let mut harness = Harness::new(PosterApp::default());
        harness.app.execute_command(Command::AddText(TextStyle::Title));
        let id = harness.state().editing_id().unwrap();

        // The text box grabs focus on its first frame
        harness.frame(Vec::new());
        harness.frame(vec![Event::Text("X".to_owned())]);
        assert_eq!(harness.text_of(id), "TitleX");
        assert_eq!(harness.state(), EditorState::Editing(id));

        harness.key(Key::Enter, Modifiers::SHIFT);
        assert_eq!(harness.text_of(id), "TitleX\n");
        assert_eq!(harness.state(), EditorState::Editing(id));

        harness.key(Key::Enter, Modifiers::NONE);
        assert_eq!(harness.text_of(id), "TitleX\n");
        assert_eq!(harness.state(), EditorState::Selected(id));

        harness.key(Key::Delete, Modifiers::NONE);
        assert_eq!(harness.state(), EditorState::Idle);
        assert!(harness.app.workspace.document().is_empty());
    }

    #[test]
    fn test_delete_key_ignored_while_editing() {
        let mut harness = Harness::new(PosterApp::default());
        harness.app.execute_command(Command::AddText(TextStyle::Paragraph));
        let id = harness.state().editing_id().unwrap();
        harness.frame(Vec::new());

        harness.key(Key::Delete, Modifiers::NONE);
        assert!(harness.app.workspace.document().contains(id));
        assert_eq!(harness.state(), EditorState::Editing(id));
    }

    #[test]
    fn test_press_on_empty_canvas_clears_selection() {
        let mut harness = Harness::new(app_without_scatter());
        let id = harness.add_image();
        harness.app.execute_command(Command::SelectElement(id));
        assert_eq!(harness.state(), EditorState::Selected(id));

        let empty = harness.app.input_handler.canvas_rect.max - Vec2::splat(8.0);
        harness.pointer(empty, true);
        assert_eq!(harness.state(), EditorState::Idle);
        assert!(harness.app.workspace.document().contains(id));
    }

    #[test]
    fn test_press_outside_canvas_ends_edit() {
        let mut harness = Harness::new(PosterApp::default());
        harness.app.execute_command(Command::AddText(TextStyle::Subtitle));
        harness.frame(Vec::new());
        assert!(harness.state().is_editing());

        // Bottom of the sidebar, below its buttons
        harness.pointer(Pos2::new(4.0, SCREEN_SIZE.y - 4.0), true);
        assert_eq!(harness.state(), EditorState::Idle);
    }

    #[test]
    fn test_click_selects_element() {
        let mut harness = Harness::new(app_without_scatter());
        let id = harness.add_image();
        assert_eq!(harness.state(), EditorState::Idle);

        let center = harness.to_screen(Pos2::new(100.0, 100.0));
        harness.pointer(center, true);
        harness.pointer(center, false);
        assert_eq!(harness.state(), EditorState::Selected(id));
    }

    #[test]
    fn test_drag_release_moves_and_selects() {
        let mut harness = Harness::new(app_without_scatter());
        let id = harness.add_image();

        let start = harness.to_screen(Pos2::new(100.0, 100.0));
        let end = start + Vec2::new(40.0, 30.0);
        harness.pointer(start, true);
        harness.frame(vec![Event::PointerMoved(end)]);

        // Nothing moves until the button is released
        let element = harness.app.workspace.document().find_element_by_id(id).unwrap();
        assert_eq!(element.position(), Pos2::ZERO);

        harness.pointer(end, false);
        let element = harness.app.workspace.document().find_element_by_id(id).unwrap();
        let moved = element.position();
        assert!((moved.x - 40.0).abs() < 0.5, "moved to {:?}", moved);
        assert!((moved.y - 30.0).abs() < 0.5, "moved to {:?}", moved);
        assert_eq!(harness.state(), EditorState::Selected(id));
        assert_eq!(harness.app.canvas.dragging_id(), None);
    }
}

use egui::{Color32, ColorImage, Pos2, Vec2};
use poster_io::element::{Element, ImageSource, TextStyle};
use poster_io::{EditorState, Workspace, WorkspaceConfig, WorkspaceError};

fn source(name: &str) -> ImageSource {
    ImageSource::new(name, ColorImage::new([4, 4], Color32::GREEN))
}

fn workspace() -> Workspace {
    Workspace::with_seed(WorkspaceConfig::default(), 7)
}

#[test]
fn test_add_text_preset_selects_and_edits() {
    let mut workspace = workspace();
    let id = workspace.add_text("Add Subtitle").unwrap();

    assert_eq!(workspace.document().len(), 1);
    let element = workspace.document().find_element_by_id(id).unwrap();
    let text = element.as_text().unwrap();
    assert_eq!(text.content(), "Subtitle");
    assert_eq!(text.style(), TextStyle::Subtitle);
    assert_eq!(element.position(), Pos2::new(50.0, 50.0));
    assert_eq!(workspace.state(), EditorState::Editing(id));
}

#[test]
fn test_unknown_preset_changes_nothing() {
    let mut workspace = workspace();
    let result = workspace.add_text("Template 1");
    assert!(matches!(result, Err(WorkspaceError::UnknownPreset(label)) if label == "Template 1"));
    assert!(workspace.document().is_empty());
    assert!(workspace.state().is_idle());
}

#[test]
fn test_upload_adds_one_element_per_file_in_order() {
    let mut workspace = workspace();
    let ids = workspace.add_images(vec![source("a.png"), source("b.png"), source("c.png")]);

    assert_eq!(ids.len(), 3);
    let elements = workspace.document().elements();
    let names: Vec<&str> = elements
        .iter()
        .map(|e| e.as_image().unwrap().source().name())
        .collect();
    assert_eq!(names, vec!["a.png", "b.png", "c.png"]);

    for element in elements {
        assert_eq!(element.size(), Vec2::new(200.0, 200.0));
        let pos = element.position();
        assert!((0.0..300.0).contains(&pos.x));
        assert!((0.0..300.0).contains(&pos.y));
    }
    assert!(workspace.state().is_idle());
}

#[test]
fn test_empty_upload_is_ignored() {
    let mut workspace = workspace();
    assert!(workspace.add_images(Vec::new()).is_empty());
    assert!(workspace.document().is_empty());
}

#[test]
fn test_update_text_has_no_limits() {
    let mut workspace = workspace();
    let id = workspace.add_text("Add Paragraph").unwrap();
    let long = "x".repeat(10_000);
    workspace.update_text(id, long.clone()).unwrap();
    workspace.update_text(id, "").unwrap();
    let text = workspace.document().find_element_by_id(id).unwrap().as_text().unwrap();
    assert_eq!(text.content(), "");
}

#[test]
fn test_update_text_errors() {
    let mut workspace = workspace();
    let ids = workspace.add_images(vec![source("a.png")]);
    assert!(matches!(workspace.update_text(ids[0], "hi"), Err(WorkspaceError::NotText(_))));
    assert!(matches!(workspace.update_text(9_999_999, "hi"), Err(WorkspaceError::ElementNotFound(_))));
}

#[test]
fn test_delete_while_editing_is_a_no_op() {
    let mut workspace = workspace();
    let id = workspace.add_text("Add Title").unwrap();
    assert!(workspace.delete_selected().is_none());
    assert!(workspace.document().contains(id));
    assert_eq!(workspace.state(), EditorState::Editing(id));
}

#[test]
fn test_delete_with_nothing_selected_is_a_no_op() {
    let mut workspace = workspace();
    workspace.add_images(vec![source("a.png")]);
    assert!(workspace.delete_selected().is_none());
    assert_eq!(workspace.document().len(), 1);
}

#[test]
fn test_delete_removes_selected_and_goes_idle() {
    let mut workspace = workspace();
    let ids = workspace.add_images(vec![source("a.png"), source("b.png")]);
    workspace.select(ids[0]).unwrap();

    let removed = workspace.delete_selected().unwrap();
    assert_eq!(removed.id(), ids[0]);
    assert!(!workspace.document().contains(ids[0]));
    assert!(workspace.document().contains(ids[1]));
    assert!(workspace.state().is_idle());
}

#[test]
fn test_drag_release_moves_and_selects() {
    let mut workspace = workspace();
    let ids = workspace.add_images(vec![source("a.png")]);
    workspace.move_element(ids[0], Pos2::new(321.0, 123.0)).unwrap();

    let element = workspace.document().find_element_by_id(ids[0]).unwrap();
    assert_eq!(element.position(), Pos2::new(321.0, 123.0));
    assert_eq!(workspace.state(), EditorState::Selected(ids[0]));
}

#[test]
fn test_element_in_edit_mode_cannot_move() {
    let mut workspace = workspace();
    let id = workspace.add_text("Add Title").unwrap();
    let result = workspace.move_element(id, Pos2::new(400.0, 400.0));
    assert!(matches!(result, Err(WorkspaceError::ElementLocked(_))));
    let element = workspace.document().find_element_by_id(id).unwrap();
    assert_eq!(element.position(), Pos2::new(50.0, 50.0));
}

#[test]
fn test_edit_mode_transitions() {
    let mut workspace = workspace();
    let id = workspace.add_text("Add Title").unwrap();

    // Clicking the element being edited keeps edit mode
    workspace.select(id).unwrap();
    assert_eq!(workspace.state(), EditorState::Editing(id));

    workspace.commit_edit();
    assert_eq!(workspace.state(), EditorState::Selected(id));

    workspace.begin_edit(id).unwrap();
    assert_eq!(workspace.state(), EditorState::Editing(id));

    workspace.pointer_down_outside();
    assert!(workspace.state().is_idle());

    // Committing with nothing in edit mode does nothing
    workspace.commit_edit();
    assert!(workspace.state().is_idle());
}

#[test]
fn test_images_cannot_enter_edit_mode() {
    let mut workspace = workspace();
    let ids = workspace.add_images(vec![source("a.png")]);
    workspace.select(ids[0]).unwrap();
    assert!(matches!(workspace.begin_edit(ids[0]), Err(WorkspaceError::NotText(_))));
    assert_eq!(workspace.state(), EditorState::Selected(ids[0]));
}

#[test]
fn test_ids_unique_across_bulk_creation() {
    let mut workspace = workspace();
    let mut ids = workspace.add_images((0..50).map(|i| source(&format!("{i}.png"))).collect());
    ids.push(workspace.add_text("Add Title").unwrap());
    ids.push(workspace.add_text("Add Title").unwrap());
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
}

#[test]
fn test_element_at_prefers_topmost() {
    let config = WorkspaceConfig {
        image_scatter: 0.0,
        ..WorkspaceConfig::default()
    };
    let mut workspace = Workspace::with_seed(config, 1);
    let ids = workspace.add_images(vec![source("under.png"), source("over.png")]);
    assert_eq!(workspace.element_at(Pos2::new(10.0, 10.0)), Some(ids[1]));
    assert_eq!(workspace.element_at(Pos2::new(500.0, 500.0)), None);
}

#[test]
fn test_title_scenario() {
    let mut workspace = workspace();

    let id = workspace.add_text("Add Title").unwrap();
    let text = workspace.document().elements()[0].as_text().unwrap();
    assert_eq!(text.content(), "Title");
    assert_eq!(text.style().class_name(), "title");
    assert_eq!(workspace.state(), EditorState::Editing(id));

    workspace.update_text(id, "Hello").unwrap();
    let text = workspace.document().elements()[0].as_text().unwrap();
    assert_eq!(text.content(), "Hello");

    workspace.commit_edit();
    assert_eq!(workspace.state(), EditorState::Selected(id));

    workspace.delete_selected();
    assert!(workspace.document().is_empty());
    assert!(workspace.state().is_idle());
}

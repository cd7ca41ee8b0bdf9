use poster_io::element::{factory, Element, ImageSource, TextStyle, DEFAULT_IMAGE_SIZE};
use egui::{Color32, ColorImage, Pos2, Vec2};

fn create_test_text() -> poster_io::ElementType {
    factory::create_text(1, "Title", TextStyle::Title, Pos2::new(50.0, 50.0))
}

fn create_test_image() -> poster_io::ElementType {
    let source = ImageSource::new("photo.png", ColorImage::new([8, 4], Color32::BLUE));
    factory::create_image(2, source, DEFAULT_IMAGE_SIZE, Pos2::new(10.0, 20.0))
}

#[test]
fn test_element_creation() {
    let text = create_test_text();
    assert_eq!(text.id(), 1);
    assert_eq!(text.element_type(), "text");
    assert_eq!(text.as_text().unwrap().content(), "Title");
    assert_eq!(text.as_text().unwrap().style().class_name(), "title");

    let image = create_test_image();
    assert_eq!(image.id(), 2);
    assert_eq!(image.element_type(), "image");
    assert_eq!(image.as_image().unwrap().source().dimensions(), [8, 4]);
}

#[test]
fn test_image_rect_uses_display_size() {
    let image = create_test_image();
    let rect = image.rect();
    assert_eq!(rect.min, Pos2::new(10.0, 20.0));
    assert_eq!(rect.size(), Vec2::new(200.0, 200.0));
}

#[test]
fn test_set_position_moves_rect() {
    let mut image = create_test_image();
    image.set_position(Pos2::new(120.0, 80.0));
    assert_eq!(image.rect().min, Pos2::new(120.0, 80.0));
    assert_eq!(image.rect().size(), DEFAULT_IMAGE_SIZE);
}

#[test]
fn test_hit_testing() {
    let image = create_test_image();
    assert!(image.hit_test(Pos2::new(50.0, 40.0)));
    assert!(!image.hit_test(Pos2::new(250.0, 250.0)));

    let text = create_test_text();
    assert!(text.hit_test(Pos2::new(55.0, 55.0)));
    assert!(!text.hit_test(Pos2::new(10.0, 10.0)));
}

#[test]
fn test_text_size_follows_content() {
    let mut text = create_test_text();
    let before = text.size();
    text.as_text_mut()
        .unwrap()
        .set_content("A much longer line of title text\nand a second line");
    let after = text.size();
    assert!(after.x > before.x);
    assert!(after.y > before.y);
}

#[test]
fn test_image_keys_are_distinct() {
    let a = ImageSource::new("a.png", ColorImage::new([1, 1], Color32::RED));
    let b = ImageSource::new("a.png", ColorImage::new([1, 1], Color32::RED));
    assert_ne!(a.key(), b.key());
}

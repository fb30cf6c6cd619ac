use super::*;

fn red() -> Rgba8 {
    Rgba8::opaque(255, 0, 0)
}

#[test]
fn canvas_rejects_empty_and_oversized_surfaces() {
    assert!(matches!(
        Canvas::new(Size::new(0, 5)),
        Err(PipelineError::Geometry(_))
    ));
    assert!(matches!(
        Canvas::new(Size::new(70_000, 5)),
        Err(PipelineError::Geometry(_))
    ));
}

#[test]
fn untouched_canvas_is_transparent() {
    let img = Canvas::new(Size::new(4, 3)).unwrap().finish().unwrap();
    assert_eq!(img.dimensions(), (4, 3));
    assert!(img.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn fill_covers_every_pixel() {
    let mut c = Canvas::new(Size::new(8, 8)).unwrap();
    c.fill(red());
    let img = c.finish().unwrap();
    assert!(img.pixels().all(|p| p.0 == [255, 0, 0, 255]));
}

#[test]
fn clip_keeps_draws_inside_the_mask() {
    let size = Size::new(40, 40);
    let mask = crate::geometry::build_mask(size, crate::actions::Shape::Circle, 0).unwrap();
    let mut c = Canvas::new(size).unwrap();
    c.clip_to(&mask).unwrap();
    c.fill(red());
    let img = c.finish().unwrap();

    assert_eq!(img.get_pixel(0, 0).0[3], 0);
    assert_eq!(img.get_pixel(39, 39).0[3], 0);
    assert_eq!(img.get_pixel(20, 20).0, [255, 0, 0, 255]);
}

#[test]
fn only_one_clip_layer_is_allowed() {
    let size = Size::new(10, 10);
    let mask = crate::geometry::build_mask(size, crate::actions::Shape::Ellipse, 0).unwrap();
    let mut c = Canvas::new(size).unwrap();
    c.clip_to(&mask).unwrap();
    assert!(c.clip_to(&mask).is_err());
}

#[test]
fn image_paint_checks_buffer_length() {
    let err = image_paint_from_premul(&[0u8; 7], Size::new(1, 2)).unwrap_err();
    assert!(matches!(err, PipelineError::Geometry(_)));
    assert!(image_paint_from_premul(&[0u8; 8], Size::new(1, 2)).is_ok());
}

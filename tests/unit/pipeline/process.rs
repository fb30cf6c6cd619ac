use super::*;
use crate::actions::{FitMode, Shape};

fn fontless_pipeline() -> ImagePipeline {
    ImagePipeline {
        config: PipelineConfig::default(),
        font: None,
        documents: None,
        pool: build_thread_pool(Some(1)).unwrap(),
    }
}

fn encoded(width: u32, height: u32, format: image::ImageFormat) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 40, 40]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, format).unwrap();
    out.into_inner()
}

fn decode(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory(bytes).unwrap().to_rgba8()
}

#[test]
fn detect_classifies_by_signature() {
    assert!(matches!(Source::detect(b"%PDF-1.4 ...".to_vec()), Source::Document(_)));
    assert!(matches!(
        Source::detect(encoded(2, 2, image::ImageFormat::Png)),
        Source::Image(_)
    ));
    assert!(matches!(Source::detect(Vec::new()), Source::Image(_)));
    assert_eq!(Source::Virtual.kind(), "virtual");
}

#[test]
fn resolved_actions_carry_size_and_inherited_format() {
    let pipeline = fontless_pipeline();
    let source = Source::Image(encoded(40, 20, image::ImageFormat::Bmp));
    let out = pipeline
        .process(&source, &ActionSet::builder().width(20).build().unwrap())
        .unwrap();

    assert_eq!(out.resolved.width, Some(20));
    assert_eq!(out.resolved.height, Some(10));
    assert_eq!(out.resolved.format, Some(OutputFormat::Bmp));
    assert_eq!(out.content_type(), "image/bmp");
    assert_eq!(decode(&out.bytes).dimensions(), (20, 10));
}

#[test]
fn explicit_format_beats_source_format() {
    let pipeline = fontless_pipeline();
    let source = Source::Image(encoded(8, 8, image::ImageFormat::Bmp));
    let actions = ActionSet::builder().format(OutputFormat::Png).build().unwrap();
    let out = pipeline.process(&source, &actions).unwrap();
    assert_eq!(out.format(), OutputFormat::Png);
    assert_eq!(
        image::guess_format(&out.bytes).unwrap(),
        image::ImageFormat::Png
    );
}

#[test]
fn virtual_output_defaults_to_png_at_virtual_size() {
    let pipeline = fontless_pipeline();
    let out = pipeline
        .process(&Source::Virtual, &ActionSet::default())
        .unwrap();
    assert_eq!(out.format(), OutputFormat::Png);
    let img = decode(&out.bytes);
    assert_eq!(img.dimensions(), (100, 100));
    assert_eq!(img.get_pixel(50, 50).0, [0, 0, 0, 255]);
}

#[test]
fn image_color_forces_a_virtual_source_even_with_bytes() {
    let pipeline = fontless_pipeline();
    let source = Source::Image(b"not an image".to_vec());
    let actions = ActionSet::builder()
        .image_color("red")
        .width(10)
        .height(10)
        .build()
        .unwrap();
    let img = decode(&pipeline.process(&source, &actions).unwrap().bytes);
    assert_eq!(img.get_pixel(5, 5).0, [255, 0, 0, 255]);
}

#[test]
fn circle_clip_leaves_corners_transparent() {
    let pipeline = fontless_pipeline();
    let actions = ActionSet::builder()
        .image_color("blue")
        .shape(Shape::Circle)
        .fit_mode(FitMode::Stretch)
        .build()
        .unwrap();
    let img = decode(&pipeline.process(&Source::Virtual, &actions).unwrap().bytes);
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
    assert_eq!(img.get_pixel(50, 50).0, [0, 0, 255, 255]);
}

#[test]
fn garbage_bytes_are_unsupported() {
    let pipeline = fontless_pipeline();
    let err = pipeline
        .process(&Source::Image(b"garbage".to_vec()), &ActionSet::default())
        .unwrap_err();
    assert!(matches!(err, PipelineError::UnsupportedSource(_)));
}

#[test]
fn documents_without_a_renderer_are_unsupported() {
    let pipeline = fontless_pipeline();
    let err = pipeline
        .process(&Source::Document(b"%PDF-1.7".to_vec()), &ActionSet::default())
        .unwrap_err();
    assert!(matches!(err, PipelineError::UnsupportedSource(_)));
}

#[test]
fn text_without_a_font_is_invalid_input() {
    let pipeline = fontless_pipeline();
    let actions = ActionSet::builder()
        .image_color("teal")
        .text("Jane Doe")
        .build()
        .unwrap();
    let err = pipeline.process(&Source::Virtual, &actions).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidInput(_)));
}

#[test]
fn zero_dimensions_are_rejected_before_decoding() {
    let pipeline = fontless_pipeline();
    let actions = ActionSet {
        width: Some(0),
        ..ActionSet::default()
    };
    let err = pipeline
        .process(&Source::Image(b"garbage".to_vec()), &actions)
        .unwrap_err();
    assert!(matches!(err, PipelineError::InvalidInput(_)));
}

#[test]
fn zero_threads_fail_pool_construction() {
    assert!(matches!(
        build_thread_pool(Some(0)),
        Err(PipelineError::InvalidInput(_))
    ));
}

use super::*;
use crate::{
    actions::FitMode,
    assets::SourceImage,
    foundation::core::Size,
    geometry::{Placement, Rotation},
};

fn solid(width: u32, height: u32, rotation: Rotation) -> SourceImage {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 255]));
    SourceImage::from_rgba(img, None, rotation).unwrap()
}

fn is_red(px: &image::Rgba<u8>) -> bool {
    px.0[0] > 250 && px.0[1] < 5 && px.0[2] < 5 && px.0[3] > 250
}

#[test]
fn fit_leaves_transparent_bars() {
    let mut canvas = Canvas::new(Size::new(100, 100)).unwrap();
    let source = solid(200, 100, Rotation::None);
    let placement = composite(&mut canvas, &source, FitMode::Fit).unwrap();
    assert_eq!(
        placement,
        Placement {
            x: 0,
            y: 25,
            width: 100,
            height: 50
        }
    );

    let img = canvas.finish().unwrap();
    assert_eq!(img.get_pixel(50, 10).0[3], 0);
    assert_eq!(img.get_pixel(50, 90).0[3], 0);
    assert!(is_red(img.get_pixel(50, 50)));
}

#[test]
fn zoom_covers_every_pixel() {
    let mut canvas = Canvas::new(Size::new(60, 40)).unwrap();
    composite(&mut canvas, &solid(10, 50, Rotation::None), FitMode::Zoom).unwrap();
    let img = canvas.finish().unwrap();
    assert!(img.pixels().all(is_red));
}

#[test]
fn odd_rotation_stretch_still_covers_a_non_square_canvas() {
    for rotation in [Rotation::Deg90, Rotation::Deg270] {
        let mut canvas = Canvas::new(Size::new(100, 60)).unwrap();
        composite(&mut canvas, &solid(30, 50, rotation), FitMode::Stretch).unwrap();
        let img = canvas.finish().unwrap();
        for (x, y) in [(2, 2), (97, 2), (2, 57), (97, 57), (50, 30)] {
            assert!(is_red(img.get_pixel(x, y)), "{rotation:?} at ({x},{y})");
        }
    }
}

#[test]
fn half_turn_keeps_fit_centred() {
    let mut canvas = Canvas::new(Size::new(100, 100)).unwrap();
    composite(&mut canvas, &solid(100, 50, Rotation::Deg180), FitMode::Fit).unwrap();
    let img = canvas.finish().unwrap();
    assert_eq!(img.get_pixel(50, 5).0[3], 0);
    assert!(is_red(img.get_pixel(50, 50)));
    assert_eq!(img.get_pixel(50, 95).0[3], 0);
}

#[test]
fn virtual_fill_color_round_trips_through_the_canvas() {
    let actions = crate::actions::ActionSet {
        image_color: Some("4682b4".into()),
        ..Default::default()
    };
    let src = crate::assets::virtual_source(&actions, Size::new(10, 10)).unwrap();
    let mut canvas = Canvas::new(Size::new(10, 10)).unwrap();
    composite(&mut canvas, &src, FitMode::Stretch).unwrap();
    let img = canvas.finish().unwrap();
    let px = img.get_pixel(5, 5).0;
    assert!((i16::from(px[0]) - 0x46).abs() <= 1, "{px:?}");
    assert!((i16::from(px[2]) - 0xB4).abs() <= 1, "{px:?}");
}

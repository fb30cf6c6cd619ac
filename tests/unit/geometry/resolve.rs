use super::*;

fn actions(width: Option<u32>, height: Option<u32>, mode: Option<FitMode>) -> ActionSet {
    ActionSet {
        width,
        height,
        fit_mode: mode,
        ..ActionSet::default()
    }
}

#[test]
fn one_dimension_derives_the_other_from_source_ratio() {
    let src = Size::new(400, 300);
    assert_eq!(
        resolve_dimensions(src, &actions(Some(200), None, None)).unwrap(),
        Size::new(200, 150)
    );
    assert_eq!(
        resolve_dimensions(src, &actions(None, Some(60), None)).unwrap(),
        Size::new(80, 60)
    );
}

#[test]
fn no_request_keeps_source_size() {
    let src = Size::new(123, 45);
    assert_eq!(resolve_dimensions(src, &ActionSet::default()).unwrap(), src);
}

#[test]
fn both_requested_is_taken_verbatim_outside_max() {
    let src = Size::new(400, 300);
    for mode in [None, Some(FitMode::Stretch), Some(FitMode::Fit), Some(FitMode::Zoom)] {
        assert_eq!(
            resolve_dimensions(src, &actions(Some(50), Some(90), mode)).unwrap(),
            Size::new(50, 90)
        );
    }
}

#[test]
fn derived_side_preserves_aspect_within_one_pixel() {
    for (sw, sh) in [(400u32, 300u32), (1920, 1080), (333, 777), (1, 1000)] {
        let src = Size::new(sw, sh);
        for w in 1..600u32 {
            let out = resolve_dimensions(src, &actions(Some(w), None, None)).unwrap();
            assert_eq!(out.width, w);
            let exact = f64::from(w) * f64::from(sh) / f64::from(sw);
            assert!(
                (f64::from(out.height) - exact).abs() <= 1.0,
                "{sw}x{sh} @ w={w}: got {} expected ~{exact}",
                out.height
            );
        }
    }
}

#[test]
fn max_shrinks_the_overflowing_side() {
    let wide = Size::new(400, 300);
    assert_eq!(
        resolve_dimensions(wide, &actions(Some(100), Some(100), Some(FitMode::Max))).unwrap(),
        Size::new(100, 75)
    );

    let tall = Size::new(300, 400);
    assert_eq!(
        resolve_dimensions(tall, &actions(Some(100), Some(100), Some(FitMode::Max))).unwrap(),
        Size::new(75, 100)
    );
}

#[test]
fn max_never_exceeds_the_box_and_keeps_ratio() {
    let sources = [Size::new(400, 300), Size::new(300, 400), Size::new(17, 1000)];
    let boxes = [(100u32, 100u32), (640, 480), (50, 900), (900, 50)];
    for src in sources {
        for (bw, bh) in boxes {
            let out =
                resolve_dimensions(src, &actions(Some(bw), Some(bh), Some(FitMode::Max))).unwrap();
            assert!(out.width <= bw && out.height <= bh, "{src:?} in {bw}x{bh}: {out:?}");
            let want = src.aspect_ratio();
            let got_h = f64::from(out.width) / want;
            let got_w = f64::from(out.height) * want;
            assert!(
                (got_h - f64::from(out.height)).abs() <= 1.0
                    || (got_w - f64::from(out.width)).abs() <= 1.0,
                "{src:?} in {bw}x{bh}: {out:?}"
            );
        }
    }
}

#[test]
fn tiny_derived_sides_clamp_to_one_pixel() {
    let src = Size::new(1000, 1);
    assert_eq!(
        resolve_dimensions(src, &actions(Some(10), None, None)).unwrap(),
        Size::new(10, 1)
    );
}

#[test]
fn zero_request_is_invalid_input_and_empty_source_is_geometry() {
    let err = resolve_dimensions(Size::new(10, 10), &actions(Some(0), None, None)).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidInput(_)));

    let err = resolve_dimensions(Size::new(0, 10), &ActionSet::default()).unwrap_err();
    assert!(matches!(err, PipelineError::Geometry(_)));
}

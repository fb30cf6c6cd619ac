use super::*;
use crate::encode::OutputFormat;

#[test]
fn empty_set_has_no_actions() {
    let a = ActionSet::default();
    assert!(!a.has_any_actions());

    let blank_text = ActionSet {
        text: Some(String::new()),
        image_color: Some(String::new()),
        text_color: Some("red".into()),
        document_password: Some("pw".into()),
        ..ActionSet::default()
    };
    assert!(!blank_text.has_any_actions());
}

#[test]
fn each_tracked_field_counts_as_an_action() {
    let sets = [
        ActionSet::builder().width(10).build().unwrap(),
        ActionSet::builder().height(10).build().unwrap(),
        ActionSet::builder().page(2).build().unwrap(),
        ActionSet::builder().format(OutputFormat::Png).build().unwrap(),
        ActionSet::builder().shape(Shape::None).build().unwrap(),
        ActionSet::builder().fit_mode(FitMode::Fit).build().unwrap(),
        ActionSet::builder().corner_radius(0).build().unwrap(),
        ActionSet::builder().color_from_text_hash(false).build().unwrap(),
        ActionSet::builder().image_color("red").build().unwrap(),
        ActionSet::builder().text("hi").build().unwrap(),
    ];
    for s in sets {
        assert!(s.has_any_actions(), "{s:?}");
    }
}

#[test]
fn corner_radius_implies_rounded_rectangle_only_when_shape_unset() {
    let a = ActionSet::builder().corner_radius(4).build().unwrap();
    assert_eq!(a.effective_shape(), Shape::RoundedRectangle);

    let b = ActionSet::builder()
        .corner_radius(4)
        .shape(Shape::Circle)
        .build()
        .unwrap();
    assert_eq!(b.effective_shape(), Shape::Circle);

    assert_eq!(ActionSet::default().effective_shape(), Shape::None);
    assert_eq!(ActionSet::default().effective_fit_mode(), FitMode::Stretch);
}

#[test]
fn with_defaults_keeps_explicit_fields_and_fills_the_rest() {
    let defaults = ActionSet::builder()
        .width(200)
        .height(100)
        .format(OutputFormat::Jpeg)
        .text_color("black")
        .build()
        .unwrap();
    let request = ActionSet::builder().width(50).text("Jane").build().unwrap();

    let merged = request.with_defaults(&defaults);
    assert_eq!(merged.width, Some(50));
    assert_eq!(merged.height, Some(100));
    assert_eq!(merged.format, Some(OutputFormat::Jpeg));
    assert_eq!(merged.text.as_deref(), Some("Jane"));
    assert_eq!(merged.text_color.as_deref(), Some("black"));

    // Inputs are untouched.
    assert_eq!(request.height, None);
    assert_eq!(defaults.width, Some(200));
}

#[test]
fn builders_do_not_alias() {
    let base = ActionSet::builder().width(10);
    let a = base.clone().height(20).build().unwrap();
    let b = base.height(30).build().unwrap();
    assert_eq!(a.height, Some(20));
    assert_eq!(b.height, Some(30));
    assert_eq!(a.width, b.width);
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(ActionSet::builder().width(0).build().is_err());
    assert!(ActionSet::builder().height(0).build().is_err());
    assert!(ActionSet::builder().page(0).build().is_ok());
}

#[test]
fn virtual_image_triggers() {
    assert!(!ActionSet::default().wants_virtual_image());
    assert!(ActionSet::builder().image_color("red").build().unwrap().wants_virtual_image());
    assert!(
        ActionSet::builder()
            .color_from_text_hash(true)
            .build()
            .unwrap()
            .wants_virtual_image()
    );
    assert!(
        !ActionSet::builder()
            .color_from_text_hash(false)
            .build()
            .unwrap()
            .wants_virtual_image()
    );
}

#[test]
fn enums_parse_case_insensitively() {
    assert_eq!("MAX".parse::<FitMode>().unwrap(), FitMode::Max);
    assert_eq!("zoom".parse::<FitMode>().unwrap(), FitMode::Zoom);
    assert!("cover".parse::<FitMode>().is_err());

    assert_eq!("RoundedRectangle".parse::<Shape>().unwrap(), Shape::RoundedRectangle);
    assert_eq!("rounded_rectangle".parse::<Shape>().unwrap(), Shape::RoundedRectangle);
    assert_eq!("Circle".parse::<Shape>().unwrap(), Shape::Circle);
    assert!("triangle".parse::<Shape>().is_err());
}

#[test]
fn json_uses_defaults_for_missing_fields() {
    let a: ActionSet =
        serde_json::from_str(r#"{"width": 64, "fit_mode": "zoom", "shape": "roundedrectangle"}"#)
            .unwrap();
    assert_eq!(a.width, Some(64));
    assert_eq!(a.height, None);
    assert_eq!(a.fit_mode, Some(FitMode::Zoom));
    assert_eq!(a.shape, Some(Shape::RoundedRectangle));

    let out = serde_json::to_string(&ActionSet::builder().width(5).build().unwrap()).unwrap();
    assert_eq!(out, r#"{"width":5}"#);
}

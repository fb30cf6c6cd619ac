use super::*;

#[test]
fn parse_is_case_insensitive_and_accepts_aliases() {
    assert_eq!("PNG".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
    assert_eq!("jpg".parse::<OutputFormat>().unwrap(), OutputFormat::Jpeg);
    assert_eq!(" Jpeg ".parse::<OutputFormat>().unwrap(), OutputFormat::Jpeg);
    assert_eq!("WebP".parse::<OutputFormat>().unwrap(), OutputFormat::WebP);
    assert_eq!("tif".parse::<OutputFormat>().unwrap(), OutputFormat::Tiff);
    assert!("heic".parse::<OutputFormat>().is_err());
    assert!("".parse::<OutputFormat>().is_err());
}

#[test]
fn names_round_trip_through_parse() {
    for f in OutputFormat::ALL {
        assert_eq!(f.as_str().parse::<OutputFormat>().unwrap(), f);
        assert_eq!(f.extension().parse::<OutputFormat>().unwrap(), f);
        assert_eq!(OutputFormat::from_image_format(f.to_image_format()), Some(f));
    }
}

#[test]
fn mime_types_and_lossiness() {
    assert_eq!(OutputFormat::Jpeg.mime_type(), "image/jpeg");
    assert_eq!(OutputFormat::Png.mime_type(), "image/png");
    assert!(OutputFormat::Jpeg.is_lossy());
    assert!(OutputFormat::Gif.is_lossy());
    assert!(!OutputFormat::Png.is_lossy());
    assert!(!OutputFormat::WebP.is_lossy());
}

#[test]
fn serde_uses_lowercase_names() {
    let json = serde_json::to_string(&OutputFormat::WebP).unwrap();
    assert_eq!(json, "\"webp\"");
    let back: OutputFormat = serde_json::from_str("\"jpeg\"").unwrap();
    assert_eq!(back, OutputFormat::Jpeg);
}

#[test]
fn undecodable_for_encoding_formats_map_to_none() {
    assert_eq!(OutputFormat::from_image_format(image::ImageFormat::Avif), None);
    assert_eq!(OutputFormat::from_image_format(image::ImageFormat::Hdr), None);
}

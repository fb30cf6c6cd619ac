use super::*;

fn temp_font_file(name: &str, bytes: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("imgactions-font-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn explicit_path_wins_and_must_exist() {
    let missing = Path::new("/definitely/not/here/font.ttf");
    let err = discover_font_from(Some(missing), None, &[]).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidInput(_)));

    let path = temp_font_file("explicit.ttf", b"not really a font");
    let env = Some(OsString::from("/also/missing.ttf"));
    let font = discover_font_from(Some(&path), env, &[]).unwrap().unwrap();
    assert_eq!(font.path(), path.as_path());
}

#[test]
fn env_path_is_used_before_candidates() {
    let env_font = temp_font_file("env.ttf", b"env");
    let candidate = temp_font_file("candidate.ttf", b"candidate");
    let candidate_str = candidate.to_str().unwrap();

    let font = discover_font_from(
        None,
        Some(env_font.clone().into_os_string()),
        &[candidate_str],
    )
    .unwrap()
    .unwrap();
    assert_eq!(font.path(), env_font.as_path());

    let err = discover_font_from(None, Some(OsString::from("/missing/env.ttf")), &[]).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidInput(_)));
}

#[test]
fn candidates_are_probed_in_order_and_missing_ones_skipped() {
    let second = temp_font_file("second.ttf", b"second");
    let second_str = second.to_str().unwrap();

    let font = discover_font_from(
        None,
        Some(OsString::new()),
        &["/missing/first.ttf", second_str],
    )
    .unwrap()
    .unwrap();
    assert_eq!(font.path(), second.as_path());

    assert!(
        discover_font_from(None, None, &["/missing/a.ttf"])
            .unwrap()
            .is_none()
    );
}

#[test]
fn empty_font_bytes_are_rejected() {
    assert!(FontAsset::from_bytes("empty.ttf", Vec::new()).is_err());
}

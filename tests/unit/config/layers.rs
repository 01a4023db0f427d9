use super::*;

#[test]
fn comment_lines_are_dropped() {
    let src = "// header\n[\n   // indented comment\n  1 // trailing text stays\n]";
    assert_eq!(strip_comment_lines(src), "[\n  1 // trailing text stays\n]");
}

#[test]
fn parses_entries_in_order_with_all_mode_spellings() {
    let src = r#"
// render layers
[
    {"I": "a.png", "Z": "a_z.png", "M": 0},
    // {"I": "skip.png", "Z": "skip_z.png", "M": 0},
    {"I": "b.png", "Z": "b_z.png", "M": "1"},
    {"I": "/abs/c.png", "Z": "c_z.png", "M": "Screen"}
]
"#;
    let entries = parse_layer_list(src, Path::new("shots")).unwrap();
    assert_eq!(
        entries,
        vec![
            LayerEntry {
                color: PathBuf::from("shots/a.png"),
                depth: PathBuf::from("shots/a_z.png"),
                mode: BlendMode::Normal,
            },
            LayerEntry {
                color: PathBuf::from("shots/b.png"),
                depth: PathBuf::from("shots/b_z.png"),
                mode: BlendMode::Multiply,
            },
            LayerEntry {
                color: PathBuf::from("/abs/c.png"),
                depth: PathBuf::from("shots/c_z.png"),
                mode: BlendMode::Screen,
            },
        ]
    );
}

#[test]
fn empty_list_is_no_input_layers() {
    let err = parse_layer_list("// nothing\n[]", Path::new(".")).unwrap_err();
    assert!(matches!(err, ZmergeError::Config(ref m) if m.contains("no input layers")));
}

#[test]
fn malformed_json_is_config_error() {
    let err = parse_layer_list("[{\"I\": \"a.png\"", Path::new(".")).unwrap_err();
    assert!(matches!(err, ZmergeError::Config(_)));

    let err = parse_layer_list(r#"[{"I": "a.png", "Z": "b.png"}]"#, Path::new(".")).unwrap_err();
    assert!(matches!(err, ZmergeError::Config(ref m) if m.contains("M")));
}

#[test]
fn unknown_mode_is_reported() {
    let err = parse_layer_list(r#"[{"I": "a", "Z": "b", "M": 7}]"#, Path::new(".")).unwrap_err();
    assert!(matches!(err, ZmergeError::UnknownBlendMode(_)));

    let err =
        parse_layer_list(r#"[{"I": "a", "Z": "b", "M": "overlay"}]"#, Path::new(".")).unwrap_err();
    assert!(matches!(err, ZmergeError::UnknownBlendMode(_)));
}

#[test]
fn read_layer_list_reports_missing_file() {
    let err = read_layer_list(Path::new("target/definitely/missing/layers.json")).unwrap_err();
    assert!(matches!(err, ZmergeError::Other(_)));
    assert!(err.to_string().contains("read layer list"));
}

#[test]
fn integral_float_codes_are_accepted() {
    let entries = parse_layer_list(
        r#"[{"I": "a", "Z": "a_z", "M": 2.0}, {"I": "b", "Z": "b_z", "M": 0.0}]"#,
        Path::new("."),
    )
    .unwrap();
    assert_eq!(entries[0].mode, BlendMode::Screen);
    assert_eq!(entries[1].mode, BlendMode::Normal);

    let err = parse_layer_list(r#"[{"I": "a", "Z": "b", "M": 1.5}]"#, Path::new(".")).unwrap_err();
    assert!(matches!(err, ZmergeError::UnknownBlendMode(ref m) if m.contains("1.5")));
}

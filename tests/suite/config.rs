//! Configuration loading tests through the public API

use hexcast_config::HexcastConfig;
use std::io::Write;

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    (dir, path)
}

#[test]
fn absent_config_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = HexcastConfig::load_from(&dir.path().join("config.toml")).unwrap();
    assert!(loaded.is_none());

    let defaults = HexcastConfig::default();
    let options = defaults.ui_options();
    assert!(!options.ascii_only);
    assert!(!options.high_contrast);
    assert!(!options.reduced_motion);
}

#[test]
fn app_section_maps_to_ui_options() {
    let (_dir, path) = write_config(
        r"
        [app]
        ascii_only = true
        high_contrast = true
        ",
    );
    let config = HexcastConfig::load_from(&path).unwrap().unwrap();
    let options = config.ui_options();
    assert!(options.ascii_only);
    assert!(options.high_contrast);
    assert!(!options.reduced_motion);
}

#[test]
fn unknown_garbage_is_a_parse_error_with_the_offending_path() {
    let (_dir, path) = write_config("this is not toml at all [");
    let err = HexcastConfig::load_from(&path).unwrap_err();
    assert_eq!(err.path(), &path);
    assert!(err.to_string().contains("parse"));
}

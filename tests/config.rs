//! Config file loading tests

use std::io::Write;

use side_reveal::color::Color;
use side_reveal::config::RevealConfig;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r##"
reveal_width: 280
reveal_duration: 0.5
reveal_damping: 1.0
overlay_color: "#101820"
overlay_alpha: 0.45
swipe_enabled: false
swipe_start_zone_fraction: 0.2
"##,
    );

    let config = RevealConfig::load_from(file.path()).unwrap();
    assert_eq!(
        config,
        RevealConfig {
            reveal_width: 280.0,
            reveal_duration: 0.5,
            reveal_damping: 1.0,
            overlay_color: Color::rgb(0x10, 0x18, 0x20),
            overlay_alpha: 0.45,
            swipe_enabled: false,
            swipe_start_zone_fraction: 0.2,
        }
    );
}

#[test]
fn test_missing_fields_take_defaults() {
    let file = write_config("overlay_alpha: 0.5\n");
    let config = RevealConfig::load_from(file.path()).unwrap();

    assert_eq!(config.overlay_alpha, 0.5);
    assert_eq!(config.reveal_width, 250.0);
    assert_eq!(config.reveal_duration, 0.7);
    assert_eq!(config.reveal_damping, 0.8);
    assert_eq!(config.overlay_color, Color::BLACK);
    assert!(config.swipe_enabled);
    assert_eq!(config.swipe_start_zone_fraction, 0.1);
}

#[test]
fn test_empty_file_is_all_defaults() {
    let file = write_config("{}\n");
    assert_eq!(
        RevealConfig::load_from(file.path()).unwrap(),
        RevealConfig::default()
    );
}

#[test]
fn test_out_of_range_value_is_an_error() {
    let file = write_config("reveal_damping: 0\n");
    let err = RevealConfig::load_from(file.path()).unwrap_err();
    assert!(err.contains("reveal_damping"), "unexpected error: {}", err);
}

#[test]
fn test_bad_colour_is_an_error() {
    let file = write_config("overlay_color: \"#12\"\n");
    assert!(RevealConfig::load_from(file.path()).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RevealConfig::load_from(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(err.contains("Failed to read config"));
}

#[test]
fn test_config_round_trips_through_yaml() {
    let config = RevealConfig {
        overlay_color: Color::rgba(0x20, 0x30, 0x40, 0x80),
        ..RevealConfig::default()
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    assert_eq!(RevealConfig::from_yaml(&yaml).unwrap(), config);
}

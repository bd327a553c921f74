//! Configuration layering tests.

use atelier::StudioConfig;
use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

fn write_toml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

fn no_env() -> Option<HashMap<String, String>> {
    Some(HashMap::new())
}

#[test]
fn test_defaults() {
    let config = StudioConfig::load_sources(None, None, no_env()).unwrap();

    assert_eq!(config, StudioConfig::default());
    assert_eq!(config.api_base_url(), "https://generativelanguage.googleapis.com");
    assert_eq!(config.models().recommendation(), "gemini-3-pro-preview");
    assert_eq!(config.models().image(), "gemini-3-pro-image-preview");
    assert_eq!(config.models().video(), "veo-3.1-fast-generate-preview");
    assert_eq!(config.polling().interval(), Duration::from_secs(10));
    assert_eq!(*config.polling().max_attempts(), Some(60));
    assert_eq!(*config.thinking_budget(), Some(32768));
    assert_eq!(config.image_aspect_ratio(), "1:1");
    assert_eq!(config.video_resolution(), "720p");
}

#[test]
fn test_explicit_file_overrides_defaults() {
    let file = write_toml(
        r#"
        api_base_url = "http://localhost:9000"

        [models]
        video = "veo-3.1-generate-preview"

        [polling]
        interval_secs = 5
        "#,
    );

    let config = StudioConfig::load_sources(None, Some(file.path()), no_env()).unwrap();

    assert_eq!(config.api_base_url(), "http://localhost:9000");
    assert_eq!(config.models().video(), "veo-3.1-generate-preview");
    assert_eq!(config.models().image(), "gemini-3-pro-image-preview");
    assert_eq!(config.polling().interval(), Duration::from_secs(5));
    assert_eq!(*config.polling().max_attempts(), Some(60));
}

#[test]
fn test_explicit_file_wins_over_user_file() {
    let user = write_toml("[polling]\ninterval_secs = 20\nmax_attempts = 5\n");
    let explicit = write_toml("[polling]\ninterval_secs = 2\n");

    let config = StudioConfig::load_sources(
        Some(user.path().to_path_buf()),
        Some(explicit.path()),
        no_env(),
    )
    .unwrap();

    assert_eq!(config.polling().interval(), Duration::from_secs(2));
    assert_eq!(*config.polling().max_attempts(), Some(5));
}

#[test]
fn test_missing_user_file_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let config = StudioConfig::load_sources(
        Some(dir.path().join("absent.toml")),
        None,
        no_env(),
    )
    .unwrap();

    assert_eq!(config, StudioConfig::default());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    assert!(StudioConfig::load_sources(None, Some(&missing), no_env()).is_err());
}

#[test]
fn test_environment_overrides_files() {
    let file = write_toml("[polling]\ninterval_secs = 30\n");
    let env = HashMap::from([
        ("ATELIER_POLLING__INTERVAL_SECS".to_string(), "3".to_string()),
        ("ATELIER_VIDEO_RESOLUTION".to_string(), "1080p".to_string()),
        ("OTHER_SETTING".to_string(), "ignored".to_string()),
    ]);

    let config = StudioConfig::load_sources(None, Some(file.path()), Some(env)).unwrap();

    assert_eq!(config.polling().interval(), Duration::from_secs(3));
    assert_eq!(config.video_resolution(), "1080p");
}

#[test]
fn test_invalid_values_are_rejected() {
    let zero_interval = write_toml("[polling]\ninterval_secs = 0\n");
    assert!(StudioConfig::load_sources(None, Some(zero_interval.path()), no_env()).is_err());

    let not_toml = write_toml("polling = [");
    assert!(StudioConfig::load_sources(None, Some(not_toml.path()), no_env()).is_err());
}

#[test]
fn test_poll_limit_defaults_to_sixty() {
    let file = write_toml("[polling]\ninterval_secs = 10\n");
    let config = StudioConfig::load_sources(None, Some(file.path()), no_env()).unwrap();

    assert_eq!(config.polling().attempt_limit(), Some(60));
}

#[test]
fn test_zero_poll_limit_from_file_is_unbounded() {
    let file = write_toml("[polling]\nmax_attempts = 0\n");
    let config = StudioConfig::load_sources(None, Some(file.path()), no_env()).unwrap();

    assert_eq!(config.polling().attempt_limit(), None);
}

#[test]
fn test_zero_poll_limit_from_environment_is_unbounded() {
    let env = HashMap::from([(
        "ATELIER_POLLING__MAX_ATTEMPTS".to_string(),
        "0".to_string(),
    )]);
    let config = StudioConfig::load_sources(None, None, Some(env)).unwrap();

    assert_eq!(config.polling().attempt_limit(), None);
}

#[test]
fn test_rendered_toml_loads_back() {
    let config = StudioConfig::default().with_video_resolution("1080p".to_string());
    let rendered = config.to_toml().unwrap();
    assert!(rendered.contains("video_resolution = \"1080p\""));

    let file = write_toml(&rendered);
    let loaded = StudioConfig::load_sources(None, Some(file.path()), no_env()).unwrap();
    assert_eq!(loaded, config);
}

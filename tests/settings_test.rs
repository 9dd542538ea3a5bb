//! Settings loading and environment-override tests

mod helpers;

use std::io::Write;

use serial_test::serial;

use mentorprobe::config::Settings;

const CONFIG_TOML: &str = r#"
[api]
base_url = "https://preview.onlymentors.ai"
timeout_seconds = 30
user_agent = "MentorProbe/1.0"

[admin]
email = "admin@onlymentors.ai"
password = "file-password"

[probe]
suites = ["auth", "content"]
stop_on_failure = false

[logging]
level = "info"

[features]
business_portal = true
oauth_providers = true
destructive_checks = false
"#;

fn write_config(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).expect("create config file");
    file.write_all(CONFIG_TOML.as_bytes()).expect("write config");
    path
}

#[test]
#[serial]
fn loads_settings_from_file() {
    helpers::init_test_env();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir);

    let settings = Settings::from_file(&path).expect("settings should load");

    assert_eq!(settings.api.base_url, "https://preview.onlymentors.ai");
    assert_eq!(settings.api.timeout_seconds, 30);
    assert_eq!(settings.admin.password, "file-password");
    assert_eq!(settings.probe.suites, vec!["auth", "content"]);
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn environment_overrides_file_values() {
    helpers::init_test_env();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir);

    std::env::set_var("MENTORPROBE_API__BASE_URL", "http://localhost:9999");
    std::env::set_var("MENTORPROBE_ADMIN__PASSWORD", "env-password");

    let settings = Settings::from_file(&path).expect("settings should load");

    std::env::remove_var("MENTORPROBE_API__BASE_URL");
    std::env::remove_var("MENTORPROBE_ADMIN__PASSWORD");

    assert_eq!(settings.api.base_url, "http://localhost:9999");
    assert_eq!(settings.admin.password, "env-password");
    // File values without overrides are untouched.
    assert_eq!(settings.api.timeout_seconds, 30);
}

#[test]
#[serial]
fn validation_rejects_bad_file_values() {
    helpers::init_test_env();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let bad = CONFIG_TOML.replace("https://preview.onlymentors.ai", "not a url");
    std::fs::write(&path, bad).expect("write config");

    let settings = Settings::from_file(&path).expect("settings should parse");
    assert!(settings.validate().is_err());
}

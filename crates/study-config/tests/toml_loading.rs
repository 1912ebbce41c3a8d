//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use study_config::StudyConfig;

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://study.example.com/api"
timeout_secs = 30
user_agent = "sbd-test"
"#,
        )?;

        let config: StudyConfig = Figment::from(Serialized::defaults(StudyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://study.example.com/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.user_agent, "sbd-test");
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
timeout_secs = 5
"#,
        )?;

        let config: StudyConfig = Figment::from(Serialized::defaults(StudyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.general.default_format, "table");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".studybuddy")?;
        jail.create_file(
            ".studybuddy/config.toml",
            r#"
[session]
path = "/tmp/sbd-session"

[general]
default_format = "json"
"#,
        )?;

        let config = StudyConfig::load().expect("config loads");
        assert_eq!(config.session.path, "/tmp/sbd-session");
        assert_eq!(config.general.default_format, "json");
        Ok(())
    });
}

#[test]
fn invalid_project_value_fails_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".studybuddy")?;
        jail.create_file(
            ".studybuddy/config.toml",
            r#"
[api]
base_url = "localhost:5000"
"#,
        )?;

        let err = StudyConfig::load().expect_err("invalid url should fail");
        assert!(err.to_string().contains("api.base_url"));
        Ok(())
    });
}

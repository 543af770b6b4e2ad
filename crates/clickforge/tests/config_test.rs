// Configuration layering tests.

use std::time::Duration;

use clickforge::{ClickforgeConfig, ClickforgeErrorKind, build_studio};

#[test]
fn test_bundled_defaults() -> anyhow::Result<()> {
    let config = ClickforgeConfig::from_toml_str("")?;

    assert_eq!(config.studio.analysis_model(), "gemini-2.5-flash");
    assert_eq!(config.studio.ideas_model(), "gemini-2.5-flash");
    assert_eq!(config.studio.image_model(), "gemini-2.5-flash-image");
    assert_eq!(config.studio.script_model(), "gemini-2.5-pro");
    assert_eq!(config.studio.call_timeout(), Duration::from_secs(60));
    assert_eq!(
        config.gemini.base_url(),
        "https://generativelanguage.googleapis.com/v1beta"
    );
    Ok(())
}

#[test]
fn test_partial_override_keeps_other_defaults() -> anyhow::Result<()> {
    let config = ClickforgeConfig::from_toml_str(
        r#"
        [studio]
        script_model = "gemini-2.5-flash"
        call_timeout_ms = 1500
        "#,
    )?;

    assert_eq!(config.studio.script_model(), "gemini-2.5-flash");
    assert_eq!(config.studio.call_timeout(), Duration::from_millis(1500));
    assert_eq!(config.studio.image_model(), "gemini-2.5-flash-image");
    Ok(())
}

#[test]
fn test_configured_key_is_used() -> anyhow::Result<()> {
    let config = ClickforgeConfig::from_toml_str(
        r#"
        [gemini]
        api_key = "from-config"
        "#,
    )?;

    assert!(config.gemini.has_api_key());
    assert!(!format!("{:?}", config).contains("from-config"));
    Ok(())
}

#[test]
fn test_malformed_toml_is_configuration_error() {
    let err = ClickforgeConfig::from_toml_str("[studio\ncall_timeout_ms = ").unwrap_err();
    assert!(matches!(err.kind(), ClickforgeErrorKind::Config(_)));
    assert!(err.is_configuration());
}

#[test]
fn test_wrong_value_type_is_configuration_error() {
    let err = ClickforgeConfig::from_toml_str(
        r#"
        [studio]
        call_timeout_ms = "soon"
        "#,
    )
    .unwrap_err();
    assert!(err.user_message().contains("Failed to parse configuration"));
}

#[test]
fn test_missing_file_is_configuration_error() {
    let err = ClickforgeConfig::from_file("does/not/exist/clickforge.toml").unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_studio_builds_without_key() -> anyhow::Result<()> {
    let config = ClickforgeConfig::from_toml_str("")?;
    let studio = build_studio(&config)?;
    assert_eq!(studio.settings(), &config.studio);
    Ok(())
}

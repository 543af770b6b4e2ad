#![cfg(feature = "gemini")]

// GeminiClient behavior that needs no network access.

use clickforge_core::GenerateRequest;
use clickforge_error::{ClickforgeErrorKind, GeminiErrorKind};
use clickforge_interface::ModelDriver;
use clickforge_models::{GeminiClient, GeminiSettings};

// Nothing listens here; a request that escaped the key check would fail differently.
const UNREACHABLE: &str = "http://127.0.0.1:9/v1beta";

fn request() -> anyhow::Result<GenerateRequest> {
    Ok(GenerateRequest::image(
        "gemini-2.5-flash-image",
        "A neon donut".to_string(),
    )?)
}

#[tokio::test]
async fn missing_key_fails_before_any_request() -> anyhow::Result<()> {
    let settings = GeminiSettings::default().with_base_url(UNREACHABLE);
    let client = GeminiClient::new(settings)?;

    let err = client.generate(&request()?).await.unwrap_err();

    assert!(err.is_configuration());
    match err.kind() {
        ClickforgeErrorKind::Gemini(e) => assert_eq!(e.kind, GeminiErrorKind::MissingApiKey),
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn blank_key_counts_as_missing() -> anyhow::Result<()> {
    let settings = GeminiSettings::default()
        .with_api_key("   ")
        .with_base_url(UNREACHABLE);
    assert!(!settings.has_api_key());

    let client = GeminiClient::new(settings)?;
    let err = client.generate(&request()?).await.unwrap_err();
    assert!(err.is_configuration());
    Ok(())
}

#[tokio::test]
async fn transport_failure_is_not_configuration_error() -> anyhow::Result<()> {
    let settings = GeminiSettings::default()
        .with_api_key("test-key")
        .with_base_url(UNREACHABLE);
    let client = GeminiClient::new(settings)?;

    let err = client.generate(&request()?).await.unwrap_err();
    assert!(!err.is_configuration());
    Ok(())
}

#[test]
fn driver_identity() -> anyhow::Result<()> {
    let client = GeminiClient::new(GeminiSettings::default().with_api_key("k"))?;
    assert_eq!(client.provider_name(), "gemini");
    assert_eq!(client.model_name(), "gemini-2.5-flash");
    assert!(!format!("{:?}", client).contains("\"k\""));
    Ok(())
}

//! Trait definitions for model backends.

use async_trait::async_trait;
use clickforge_core::{GenerateRequest, GenerateResponse};
use clickforge_error::ClickforgeResult;
use std::sync::Arc;

/// Core trait that all model backends must implement.
///
/// One call is one request/response round trip; implementations must not
/// retry on their own.
#[async_trait]
pub trait ModelDriver: Send + Sync {
    /// Generate model output given a multimodal request.
    async fn generate(&self, req: &GenerateRequest) -> ClickforgeResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model used when a request names none.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: ModelDriver + ?Sized> ModelDriver for Arc<T> {
    async fn generate(&self, req: &GenerateRequest) -> ClickforgeResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

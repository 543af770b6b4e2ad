//! Scripted model driver for testing.

use async_trait::async_trait;
use clickforge_core::{GenerateRequest, GenerateResponse, Output};
use clickforge_error::{ClickforgeResult, GeminiError, GeminiErrorKind};
use clickforge_interface::ModelDriver;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One scripted answer.
pub struct MockReply {
    result: ClickforgeResult<GenerateResponse>,
    delay: Duration,
}

impl MockReply {
    /// Succeed with a single text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::ok(vec![Output::Text(text.into())])
    }

    /// Succeed with a single inline image part.
    pub fn image(mime: &str, data: &[u8]) -> Self {
        Self::ok(vec![Output::Image {
            mime: mime.to_string(),
            data: data.to_vec(),
        }])
    }

    /// Succeed with the given parts.
    pub fn ok(outputs: Vec<Output>) -> Self {
        Self {
            result: Ok(GenerateResponse { outputs }),
            delay: Duration::ZERO,
        }
    }

    /// Fail with a Gemini error.
    pub fn error(kind: GeminiErrorKind) -> Self {
        Self {
            result: Err(GeminiError::new(kind).into()),
            delay: Duration::ZERO,
        }
    }

    /// Settle only after `delay`.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Responder = dyn Fn(&GenerateRequest) -> MockReply + Send + Sync;

/// Mock driver that answers each call through a responder closure.
///
/// Records every request so tests can inspect what was sent.
#[derive(Clone)]
pub struct MockDriver {
    responder: Arc<Responder>,
    calls: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockDriver {
    /// Create a mock answering through `responder`.
    pub fn new(responder: impl Fn(&GenerateRequest) -> MockReply + Send + Sync + 'static) -> Self {
        Self {
            responder: Arc::new(responder),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Requests in the order they arrived.
    pub fn calls(&self) -> Vec<GenerateRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> ClickforgeResult<GenerateResponse> {
        self.calls.lock().unwrap().push(req.clone());
        let reply = (self.responder)(req);
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.result
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

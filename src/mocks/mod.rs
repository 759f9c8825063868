//! Mock implementations for testing.
//!
//! Hand-written mocks for the async seams (transport, messages, text model)
//! plus a recording pipeline observer. The synchronous PDF seam uses a
//! `mockall`-generated mock next to its trait.

use crate::auth::AuthManager;
use crate::errors::{GatewayError, GatewayResult};
use crate::observability::{EventLevel, PipelineEvent, PipelineObserver};
use crate::services::messages::{CreateMessageRequest, Message, MessagesService};
use crate::services::quiz::{ModelPrompt, TextModel};
use crate::transport::{HttpResponse, HttpTransport};
use async_trait::async_trait;
use http::{HeaderMap, HeaderValue, Method};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

/// A request captured by [`MockHttpTransport`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: Method,
    /// Target URL
    pub url: Url,
    /// Headers as sent
    pub headers: HeaderMap,
    /// Body, if any
    pub body: Option<Vec<u8>>,
}

/// Mock HTTP transport returning queued responses in order
#[derive(Default)]
pub struct MockHttpTransport {
    responses: Mutex<VecDeque<GatewayResult<HttpResponse>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    pub fn with_response(self, response: GatewayResult<HttpResponse>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Queue a JSON response with the given status
    pub fn with_json(self, status: u16, body: serde_json::Value) -> Self {
        self.with_response(Ok(HttpResponse {
            status,
            headers: HeaderMap::new(),
            body: serde_json::to_vec(&body).unwrap(),
        }))
    }

    /// Queue a raw byte response with the given status
    pub fn with_bytes(self, status: u16, body: &[u8]) -> Self {
        self.with_response(Ok(HttpResponse {
            status,
            headers: HeaderMap::new(),
            body: body.to_vec(),
        }))
    }

    /// Requests seen so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn execute(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Vec<u8>>,
    ) -> GatewayResult<HttpResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url,
            headers,
            body,
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(GatewayError::Internal {
                    message: "No mock response configured".to_string(),
                })
            })
    }
}

/// Mock auth manager adding a fixed header
pub struct MockAuthManager;

impl AuthManager for MockAuthManager {
    fn add_auth_headers(&self, headers: &mut HeaderMap) -> GatewayResult<()> {
        headers.insert("x-api-key", HeaderValue::from_static("test-key"));
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        Ok(())
    }
}

/// Mock messages service returning queued results
#[derive(Default)]
pub struct MockMessagesService {
    results: Mutex<VecDeque<GatewayResult<Message>>>,
    requests: Mutex<Vec<CreateMessageRequest>>,
    delay: Option<Duration>,
}

impl MockMessagesService {
    /// Create a new mock messages service
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a result
    pub fn with_result(self, result: GatewayResult<Message>) -> Self {
        self.results.lock().unwrap().push_back(result);
        self
    }

    /// Sleep before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Requests seen so far
    pub fn requests(&self) -> Vec<CreateMessageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagesService for MockMessagesService {
    async fn create(&self, request: CreateMessageRequest) -> GatewayResult<Message> {
        self.requests.lock().unwrap().push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(GatewayError::Internal {
                    message: "No mock message configured".to_string(),
                })
            })
    }
}

/// Mock text model returning a fixed result and counting calls
pub struct MockTextModel {
    result: GatewayResult<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<ModelPrompt>>,
}

impl MockTextModel {
    /// Model that answers with `text`
    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(text.into()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Model that fails with `error`
    pub fn failing(error: GatewayError) -> Arc<Self> {
        Arc::new(Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Number of invocations
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received so far
    pub fn prompts(&self) -> Vec<ModelPrompt> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for MockTextModel {
    async fn invoke(&self, prompt: &ModelPrompt) -> GatewayResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.clone());
        self.result.clone()
    }
}

/// Observer that keeps every event in memory
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<PipelineEvent>>,
}

impl RecordingObserver {
    /// Create a new recording observer
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far
    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Messages of events at `level`
    pub fn messages_at(&self, level: EventLevel) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level)
            .map(|e| e.message)
            .collect()
    }
}

impl PipelineObserver for RecordingObserver {
    fn record(&self, event: PipelineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

//! Shared doubles and request helpers for handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::llm_client::{Completion, CompletionClient, CompletionRequest, LlmError};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::memory::MemoryStore;

type ErrorFactory = Box<dyn Fn() -> LlmError + Send + Sync>;

/// Completion client that records every request and answers from a script.
pub struct ScriptedCompletionClient {
    reply: Result<Completion, ErrorFactory>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedCompletionClient {
    pub fn replying(content: &str, tokens_used: u32) -> Self {
        Self {
            reply: Ok(Completion {
                content: content.to_string(),
                tokens_used,
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(make_error: impl Fn() -> LlmError + Send + Sync + 'static) -> Self {
        Self {
            reply: Err(Box::new(make_error)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(completion) => Ok(completion.clone()),
            Err(make_error) => Err(make_error()),
        }
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub llm: Arc<ScriptedCompletionClient>,
}

impl TestApp {
    pub fn new(llm: ScriptedCompletionClient) -> Self {
        Self::with_store(llm, MemoryStore::default())
    }

    pub fn with_store(llm: ScriptedCompletionClient, store: MemoryStore) -> Self {
        let store = Arc::new(store);
        let llm = Arc::new(llm);
        let state = AppState {
            brands: store.clone(),
            waitlist: store.clone(),
            llm: llm.clone(),
        };
        Self {
            router: build_router(state),
            store,
            llm,
        }
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    /// POST with an arbitrary body and optional content type.
    pub async fn post_raw(
        &self,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(Method::POST).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();
        self.dispatch(request).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{PromptExecutor, PromptRequest};

/// A scripted executor for tests. Returns pre-defined outputs in order
/// and records every request it sees.
pub struct MockExecutor {
    responses: Vec<Result<Value, String>>,
    index: AtomicUsize,
    requests: Mutex<Vec<PromptRequest>>,
}

impl MockExecutor {
    /// `Err` entries are raised as execution failures.
    pub fn new(responses: Vec<Result<Value, String>>) -> Self {
        Self {
            responses,
            index: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// How many times `execute` was called.
    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<PromptRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl PromptExecutor for MockExecutor {
    async fn execute(&self, request: &PromptRequest) -> Result<Value> {
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        match self.responses.get(i) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(msg)) => Err(anyhow::anyhow!("{}", msg)),
            None => anyhow::bail!("MockExecutor: no more responses (called {} times)", i + 1),
        }
    }
}

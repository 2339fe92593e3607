//! Scripted device for deterministic view tests.
//!
//! Replies are queued per path with a delay measured on tokio's clock, so
//! tests running with a paused clock control exactly when each fetch
//! resolves.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chute_core::config::ChuteConfig;
use chute_core::{FetchError, HttpGet, Scheduler, ViewContext};
use tokio::time::Instant;

struct Reply {
    delay: Duration,
    body: Result<serde_json::Value, u16>,
}

pub struct ScriptedDevice {
    started: Instant,
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<(String, Duration)>>,
}

impl ScriptedDevice {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            started: Instant::now(),
            replies: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn reply(&self, path: &str, delay_ms: u64, body: serde_json::Value) {
        self.push(path, delay_ms, Ok(body));
    }

    pub fn fail(&self, path: &str, delay_ms: u64, status: u16) {
        self.push(path, delay_ms, Err(status));
    }

    fn push(&self, path: &str, delay_ms: u64, body: Result<serde_json::Value, u16>) {
        self.replies
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(Reply {
                delay: Duration::from_millis(delay_ms),
                body,
            });
    }

    pub fn calls(&self, path: &str) -> usize {
        self.call_times(path).len()
    }

    /// When each request for `path` was issued, relative to device creation.
    pub fn call_times(&self, path: &str) -> Vec<Duration> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, at)| *at)
            .collect()
    }
}

#[async_trait]
impl HttpGet for ScriptedDevice {
    async fn get_json(&self, path: &str) -> Result<serde_json::Value, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_string(), self.started.elapsed()));

        let reply = self
            .replies
            .lock()
            .unwrap()
            .get_mut(path)
            .and_then(VecDeque::pop_front);

        let Some(reply) = reply else {
            return Err(FetchError::Transport {
                url: path.to_string(),
                message: "no scripted reply".to_string(),
            });
        };

        tokio::time::sleep(reply.delay).await;
        reply.body.map_err(|status| FetchError::Status {
            url: path.to_string(),
            status,
        })
    }
}

pub fn context(device: Arc<ScriptedDevice>) -> (ViewContext, Scheduler) {
    let scheduler = Scheduler::new();
    let ctx = ViewContext::new(device, scheduler.clone(), ChuteConfig::default());
    (ctx, scheduler)
}

/// Advance the paused clock to `ms` after `origin`.
pub async fn advance_to(origin: Instant, ms: u64) {
    tokio::time::sleep_until(origin + Duration::from_millis(ms)).await;
}

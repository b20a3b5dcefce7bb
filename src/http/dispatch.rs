//! Signed request dispatcher.
//!
//! All requests — public and authenticated alike — are serialized through a
//! single bounded-wait mutex: at most one network call is in flight per
//! adapter instance, and nonces are handed out strictly monotonically inside
//! that critical section. Callers that cannot take the lock within the wait
//! window fail with `LockTimeout` and perform no I/O.

use crate::auth::ApiCredentials;
use crate::error::{AdapterError, ProtocolError};
use crate::transport::Transport;

use async_lock::Mutex;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// The success/result wrapper every exchange response arrives in.
///
/// `message` and `result` are plain `Option` fields: serde yields `None`
/// when they are missing, without demanding `T: Default`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: Option<String>,
    pub result: Option<T>,
}

pub struct Dispatcher {
    base_url: String,
    transport: Arc<dyn Transport>,
    credentials: Option<ApiCredentials>,
    lock_wait: Duration,
    /// Last nonce handed out. Only touched while the request lock is held.
    state: Mutex<u64>,
}

impl Dispatcher {
    pub fn new(
        base_url: &str,
        transport: Arc<dyn Transport>,
        credentials: Option<ApiCredentials>,
        lock_wait: Duration,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            credentials,
            lock_wait,
            state: Mutex::new(0),
        }
    }

    /// Issue a request and decode the `result` payload of the envelope.
    pub async fn query<T: DeserializeOwned>(
        &self,
        authenticate: bool,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, AdapterError> {
        let body = self.dispatch(authenticate, path, params).await?;
        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(ProtocolError::from)?;
        if !envelope.success {
            return Err(ProtocolError::Failure {
                message: envelope
                    .message
                    .unwrap_or_else(|| "unspecified exchange failure".to_string()),
            }
            .into());
        }
        envelope
            .result
            .ok_or_else(|| ProtocolError::MissingResult.into())
    }

    /// Issue a request where only the envelope's success flag matters
    /// (e.g. order cancellation).
    pub async fn execute(
        &self,
        authenticate: bool,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<(), AdapterError> {
        let body = self.dispatch(authenticate, path, params).await?;
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(&body).map_err(ProtocolError::from)?;
        if !envelope.success {
            return Err(ProtocolError::Failure {
                message: envelope
                    .message
                    .unwrap_or_else(|| "unspecified exchange failure".to_string()),
            }
            .into());
        }
        Ok(())
    }

    async fn dispatch(
        &self,
        authenticate: bool,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<String, AdapterError> {
        let credentials = if authenticate {
            Some(
                self.credentials
                    .as_ref()
                    .ok_or(ProtocolError::MissingCredentials)?,
            )
        } else {
            None
        };

        let mut guard = match tokio::time::timeout(self.lock_wait, self.state.lock()).await {
            Ok(guard) => guard,
            Err(_) => {
                return Err(AdapterError::LockTimeout {
                    waited_ms: self.lock_wait.as_millis() as u64,
                })
            }
        };

        let mut pairs: Vec<(&str, String)> = Vec::with_capacity(params.len() + 2);
        if let Some(creds) = credentials {
            pairs.push(("apikey", creds.public_key().to_string()));
        }
        pairs.extend(params.iter().map(|(k, v)| (*k, v.clone())));
        if credentials.is_some() {
            pairs.push(("nonce", next_nonce(&mut guard).to_string()));
        }

        let url = build_url(&self.base_url, path, &pairs);

        let mut headers: Vec<(&'static str, String)> = Vec::new();
        if let Some(creds) = credentials {
            headers.push(("apisign", creds.sign(&url)));
        }

        // The URL embeds the apikey; log the path only.
        tracing::debug!(path, authenticated = authenticate, "dispatching exchange request");

        let response = self.transport.get(&url, &headers).await;
        drop(guard);
        Ok(response?)
    }
}

/// `max(clock_now, last + 1)` in microseconds since the epoch — strictly
/// increasing even for back-to-back calls within one clock tick.
fn next_nonce(last: &mut u64) -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0);
    let nonce = now.max(*last + 1);
    *last = nonce;
    nonce
}

fn build_url(base: &str, path: &str, pairs: &[(&str, String)]) -> String {
    let query = build_query(pairs);
    if query.is_empty() {
        format!("{base}{path}")
    } else {
        format!("{base}{path}?{query}")
    }
}

/// `key=urlEncode(value)` pairs joined by `&`, insertion order preserved.
fn build_query(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

//! Client for the Pi-hole administrative API.
//!
//! Owns the session handshake: authenticate against `/api/auth`, cache the
//! returned sid, probe it before reuse and refresh it once it ages out. The
//! disable call itself is a single POST to `/api/dns/blocking`.

use crate::config::Config;
use crate::errors::PiholeError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// A cached Pi-hole session token.
#[derive(Clone)]
struct PiholeSession {
    sid: String,
    created_at: Instant,
}

impl PiholeSession {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

#[derive(Deserialize)]
struct AuthResponse {
    session: AuthSession,
}

#[derive(Deserialize)]
struct AuthSession {
    // Null when the password was rejected.
    sid: Option<String>,
}

#[derive(Serialize)]
struct BlockingRequest<'a> {
    blocking: bool,
    timer: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    sid: Option<&'a str>,
}

/// Blocking state reported by `/api/dns/blocking`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockingStatus {
    pub blocking: String,
    #[serde(default)]
    pub timer: Option<i64>,
}

/// Shared client for the Pi-hole appliance, holding the session cache.
#[derive(Clone)]
pub struct PiholeService {
    http: reqwest::Client,
    base_url: String,
    password: String,
    disable_seconds: u64,
    session_ttl: Duration,
    session: Arc<RwLock<Option<PiholeSession>>>,
}

impl PiholeService {
    /// Pi-hole invalidates sessions server-side after half an hour.
    const SESSION_TTL: Duration = Duration::from_secs(1800);

    pub fn new(config: &Config) -> Result<Self> {
        // Appliances on the LAN ship self-signed certificates.
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self {
            http,
            base_url: config.pihole_address.clone(),
            password: config.pihole_password.clone(),
            disable_seconds: config.pihole_disable_seconds,
            session_ttl: Self::SESSION_TTL,
            session: Arc::new(RwLock::new(None)),
        })
    }

    /// Suspends DNS blocking for the configured duration.
    ///
    /// Runs without a sid when authentication failed; the appliance then
    /// rejects the request and the error is surfaced to the caller rather
    /// than reported as success.
    pub async fn disable_blocking(&self) -> Result<BlockingStatus, PiholeError> {
        let sid = self.session_id().await;
        if sid.is_none() {
            tracing::warn!("No valid Pi-hole session, sending disable request unauthenticated");
        }

        let body = BlockingRequest {
            blocking: false,
            timer: self.disable_seconds,
            sid: sid.as_deref(),
        };
        let response = self
            .http
            .post(format!("{}/api/dns/blocking", self.base_url))
            .timeout(UPSTREAM_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| PiholeError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PiholeError::UnexpectedResponse(format!(
                "disable request returned status {}",
                response.status()
            )));
        }

        let status: BlockingStatus = response
            .json()
            .await
            .map_err(|e| PiholeError::UnexpectedResponse(e.to_string()))?;

        tracing::info!(
            "Pi-hole blocking set to '{}' for {}s",
            status.blocking,
            self.disable_seconds
        );
        Ok(status)
    }

    /// Returns a valid sid, authenticating or refreshing as needed.
    ///
    /// Authentication failures are logged and yield `None`; callers proceed
    /// unauthenticated and fail downstream.
    async fn session_id(&self) -> Option<String> {
        let cached = { self.session.read().await.clone() };

        if let Some(session) = cached {
            if !session.is_expired(self.session_ttl) {
                match self.probe_session(&session.sid).await {
                    Ok(true) => return Some(session.sid),
                    Ok(false) => {
                        tracing::warn!("Cached Pi-hole session no longer authorized, re-authenticating");
                    }
                    Err(e) => {
                        // A probe hiccup does not invalidate a fresh session.
                        tracing::error!("Pi-hole session probe failed: {}", e);
                        return Some(session.sid);
                    }
                }
            }
        }

        match self.authenticate().await {
            Ok(sid) => Some(sid),
            Err(e) => {
                tracing::error!("Pi-hole authentication failed: {}", e);
                None
            }
        }
    }

    /// Authenticates with the configured password and caches the new sid.
    async fn authenticate(&self) -> Result<String, PiholeError> {
        let response = self
            .http
            .post(format!("{}/api/auth", self.base_url))
            .timeout(UPSTREAM_TIMEOUT)
            .json(&serde_json::json!({ "password": self.password }))
            .send()
            .await
            .map_err(|e| PiholeError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PiholeError::AuthFailed(format!(
                "auth request returned status {}",
                response.status()
            )));
        }

        let auth: AuthResponse = response
            .json()
            .await
            .map_err(|e| PiholeError::UnexpectedResponse(e.to_string()))?;

        let sid = auth
            .session
            .sid
            .ok_or_else(|| PiholeError::AuthFailed("no session id returned".to_string()))?;

        let mut cache = self.session.write().await;
        *cache = Some(PiholeSession {
            sid: sid.clone(),
            created_at: Instant::now(),
        });

        Ok(sid)
    }

    /// Lightweight authenticated call to check whether a cached sid is still
    /// accepted. Returns `Ok(false)` only when the appliance explicitly
    /// reports the session as unauthorized.
    async fn probe_session(&self, sid: &str) -> Result<bool, PiholeError> {
        let response = self
            .http
            .post(format!("{}/api/history", self.base_url))
            .timeout(UPSTREAM_TIMEOUT)
            .json(&serde_json::json!({ "sid": sid }))
            .send()
            .await
            .map_err(|e| PiholeError::Network(e.to_string()))?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| PiholeError::UnexpectedResponse(e.to_string()))?;

        let unauthorized = body
            .get("error")
            .and_then(|e| e.get("key"))
            .and_then(|k| k.as_str())
            == Some("unauthorized");

        Ok(!unauthorized)
    }
}

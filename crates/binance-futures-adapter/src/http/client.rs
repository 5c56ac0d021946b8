/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials, recvWindow)
[OUTPUT]: Configured client issuing public and signed exchange requests
[POS]:    HTTP layer - core client implementation and error mapping
[UPDATE]: When adding connection options or changing signing behavior
*/

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::http::error::{BinanceError, Result};
use crate::http::signature::RequestSigner;

/// Base URL for the USDⓈ-M futures testnet
pub const TESTNET_BASE_URL: &str = "https://testnet.binancefuture.com";

/// Header carrying the API key on every signed request
const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Default tolerance the exchange grants a signed timestamp
const DEFAULT_RECV_WINDOW_MS: u64 = 5000;

/// Environment variables read by [`Credentials::from_env`]
pub const API_KEY_ENV: &str = "BINANCE_API_KEY";
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub recv_window: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: TESTNET_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            recv_window: DEFAULT_RECV_WINDOW_MS,
        }
    }
}

/// API key pair for signed requests
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Read the key pair from `BINANCE_API_KEY` / `BINANCE_API_SECRET`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| BinanceError::Config(format!("{API_KEY_ENV} is not set")))?;
        let secret_key = std::env::var(API_SECRET_ENV)
            .map_err(|_| BinanceError::Config(format!("{API_SECRET_ENV} is not set")))?;
        if api_key.trim().is_empty() || secret_key.trim().is_empty() {
            return Err(BinanceError::Config(
                "API credentials must not be empty".to_string(),
            ));
        }
        Ok(Self::new(api_key, secret_key))
    }
}

// Key material must never reach logs through Debug formatting.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Shape shared by exchange failure bodies and the cancel-all success
/// acknowledgement; `code` 200 means the latter.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: i64,
    msg: String,
}

/// Main HTTP client for the futures testnet.
///
/// Owns the only state that outlives a single request: the cached clock
/// offset against the exchange, refreshed lazily before the first signed
/// call and again when the exchange rejects a timestamp.
#[derive(Debug)]
pub struct BinanceFuturesClient {
    http_client: Client,
    base_url: Url,
    credentials: Credentials,
    signer: RequestSigner,
    recv_window: u64,
    time_offset: AtomicI64,
    time_synced: AtomicBool,
}

impl BinanceFuturesClient {
    /// Create a new client against the testnet with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        let signer = RequestSigner::new(credentials.secret_key.clone());

        Ok(Self {
            http_client,
            base_url: Url::parse(&config.base_url)?,
            credentials,
            signer,
            recv_window: config.recv_window,
            time_offset: AtomicI64::new(0),
            time_synced: AtomicBool::new(false),
        })
    }

    /// Cached server-minus-local clock offset in milliseconds
    pub fn time_offset_ms(&self) -> i64 {
        self.time_offset.load(Ordering::Relaxed)
    }

    /// Fetch the exchange clock and cache the offset against it.
    ///
    /// Called lazily before the first signed request and again when the
    /// exchange rejects a timestamp; also available to callers that want
    /// an eager sync at startup.
    pub async fn sync_time(&self) -> Result<i64> {
        let server_time = self.server_time().await?;
        let local = Utc::now().timestamp_millis();
        let offset = server_time - local;
        self.time_offset.store(offset, Ordering::Relaxed);
        self.time_synced.store(true, Ordering::Relaxed);
        debug!(offset_ms = offset, "clock offset against exchange updated");
        Ok(offset)
    }

    async fn ensure_time_sync(&self) {
        if self.time_synced.load(Ordering::Relaxed) {
            return;
        }
        if let Err(err) = self.sync_time().await {
            warn!(error = %err, "initial clock sync failed, signing with the local clock");
        }
    }

    /// Local time shifted by the cached offset, in epoch milliseconds
    fn timestamp(&self) -> i64 {
        Utc::now().timestamp_millis() + self.time_offset.load(Ordering::Relaxed)
    }

    /// Build request builder for an endpoint path (query included)
    fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Canonical query for `params`: pairs joined by `&` in insertion
    /// order, then `recvWindow` and `timestamp`, with the signature over
    /// that exact string appended last.
    fn signed_query_at(&self, params: &[(&str, String)], timestamp: i64) -> String {
        let mut parts: Vec<String> = params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        parts.push(format!("recvWindow={}", self.recv_window));
        parts.push(format!("timestamp={timestamp}"));

        let query = parts.join("&");
        let signature = self.signer.sign(&query);
        format!("{query}&signature={signature}")
    }

    /// Issue an unsigned GET request
    pub(crate) async fn send_public<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let builder = self.request(Method::GET, endpoint)?;
        self.send_json(builder).await
    }

    /// Sign and issue a request, re-syncing the clock and retrying once
    /// if the exchange rejects the timestamp. A second consecutive
    /// rejection is surfaced to the caller.
    pub(crate) async fn send_signed<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        self.ensure_time_sync().await;

        let mut resynced = false;
        loop {
            let query = self.signed_query_at(params, self.timestamp());
            let builder = self
                .request(method.clone(), &format!("{endpoint}?{query}"))?
                .header(API_KEY_HEADER, &self.credentials.api_key);

            match self.send_json(builder).await {
                Err(err) if err.is_timestamp_error() && !resynced => {
                    resynced = true;
                    warn!("request timestamp rejected, re-syncing clock and retrying once");
                    if let Err(sync_err) = self.sync_time().await {
                        warn!(error = %sync_err, "clock re-sync failed");
                    }
                }
                result => return result,
            }
        }
    }

    /// Send a request and map the response body to a typed outcome.
    ///
    /// Any JSON body with `code != 200` and a `msg` is an exchange
    /// failure regardless of HTTP status; cancel-all success reuses that
    /// shape with `code` 200 and falls through to the typed parse.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "exchange response");

        if let Ok(failure) = serde_json::from_str::<ApiErrorBody>(&body) {
            if failure.code != 200 {
                return Err(BinanceError::Api {
                    code: failure.code,
                    message: failure.msg,
                });
            }
        }

        if !status.is_success() {
            return Err(BinanceError::InvalidResponse(format!(
                "HTTP {}: {}",
                status,
                snippet(&body)
            )));
        }

        serde_json::from_str(&body).map_err(BinanceError::from)
    }
}

/// First part of a response body, for error context without dumping pages
fn snippet(body: &str) -> &str {
    let cut = body
        .char_indices()
        .nth(200)
        .map(|(idx, _)| idx)
        .unwrap_or(body.len());
    &body[..cut]
}

//! Request executor: one authenticated GET, classified.

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::TornApiError;
use crate::params::Params;
use crate::transport::{HttpTransport, RequestOptions, Transport};

/// Scheme prefix of the `Authorization` header value.
pub const AUTH_SCHEME: &str = "ApiKey";

static DEPRECATION_WARNING_SHOWN: AtomicBool = AtomicBool::new(false);

/// Build the `Authorization` header carrying the API key.
pub fn auth_header(api_key: &str) -> (String, String) {
    (
        "Authorization".to_string(),
        format!("{} {}", AUTH_SCHEME, api_key),
    )
}

/// Client for the Torn API.
///
/// Holds nothing but its transport. Every call is independent, so one
/// client can serve many API keys and many concurrent callers.
///
/// ```rust,no_run
/// # async fn run() -> anyhow::Result<()> {
/// use torn_fetch::{Endpoint, Params, TornClient};
///
/// let client = TornClient::new()?;
/// let chain = client
///     .fetch("your-api-key", Endpoint::FactionIdChain, Some(Params::new().path("id", 33458)))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TornClient<T: Transport> {
    transport: T,
}

impl TornClient<HttpTransport> {
    /// Client talking to the public API with default transport settings.
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::builder().build()?))
    }
}

impl<T: Transport> TornClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform one GET against `endpoint` and return the payload.
    ///
    /// Errors, in order of precedence:
    /// - the transport's own error, returned untouched;
    /// - [`TornApiError`] when the payload is Torn's error envelope.
    ///
    /// Anything else, including an absent payload, `null` or a primitive,
    /// is returned as received.
    #[tracing::instrument(skip(self, api_key, params))]
    pub async fn fetch(
        &self,
        api_key: &str,
        endpoint: Endpoint,
        params: Option<Params>,
    ) -> Result<Option<Value>> {
        let request = RequestOptions {
            params,
            headers: vec![auth_header(api_key)],
        };

        let data = self.transport.get(endpoint, request).await?;

        if let Some(err) = data.as_ref().and_then(TornApiError::from_payload) {
            debug!(
                "{} returned error envelope (code {:?}): {}",
                endpoint,
                err.code(),
                err
            );
            return Err(err.into());
        }

        Ok(data)
    }

    /// Like [`fetch`](Self::fetch), then deserialize the payload into `R`.
    ///
    /// An absent payload is read as `null`, so `R = Option<_>` accepts it.
    pub async fn fetch_as<R: DeserializeOwned>(
        &self,
        api_key: &str,
        endpoint: Endpoint,
        params: Option<Params>,
    ) -> Result<R> {
        let data = self.fetch(api_key, endpoint, params).await?;
        serde_json::from_value(data.unwrap_or(Value::Null))
            .with_context(|| format!("Failed to decode response from {}", endpoint))
    }

    /// Old name of [`fetch`](Self::fetch). Logs a deprecation warning the
    /// first time it is used in the process.
    #[deprecated(note = "use `fetch` instead; `use_torn_fetch` will be removed in 2.0.0")]
    pub async fn use_torn_fetch(
        &self,
        api_key: &str,
        endpoint: Endpoint,
        params: Option<Params>,
    ) -> Result<Option<Value>> {
        warn_once(&DEPRECATION_WARNING_SHOWN);
        self.fetch(api_key, endpoint, params).await
    }
}

/// Log the deprecation warning unless `shown` is already set.
///
/// Returns whether this call logged it. The flag is never reset.
fn warn_once(shown: &AtomicBool) -> bool {
    if shown.swap(true, Ordering::Relaxed) {
        return false;
    }
    warn!("use_torn_fetch is deprecated and will be removed in 2.0.0. Please use fetch instead.");
    true
}

#[cfg(test)]
pub(crate) fn deprecation_warning_shown() -> bool {
    DEPRECATION_WARNING_SHOWN.load(Ordering::Relaxed)
}

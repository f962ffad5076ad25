//! reqwest-backed transport for the Torn API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use log::debug;
use reqwest::{
    Client, Url,
    header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue},
};
use serde_json::{Map, Value};

use super::{RequestOptions, Transport};
use crate::endpoint::Endpoint;
use crate::params::Params;

/// Base URL of the Torn API v2.
pub const DEFAULT_API_URL: &str = "https://api.torn.com/v2";

/// User agent sent with every request unless the builder overrides it.
pub const USER_AGENT: &str = concat!("torn-fetch/", env!("TORN_FETCH_VERSION"));

/// A non-2xx answer from the server.
#[derive(Debug)]
pub struct HttpStatusError {
    pub status: u16,
    pub body: String,
}

impl HttpStatusError {
    /// The body decoded as JSON, when it is JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

impl std::fmt::Display for HttpStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.body.is_empty() {
            write!(f, "HTTP {}", self.status)
        } else {
            write!(f, "HTTP {}: {}", self.status, self.body)
        }
    }
}

impl std::error::Error for HttpStatusError {}

/// Builder for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl HttpTransportBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Total time allowed for one request. No timeout unless set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<HttpTransport> {
        let mut builder = Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(HttpTransport::new(client, &self.base_url))
    }
}

/// Transport that performs real GET requests with reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Wrap an existing reqwest client. A trailing `/` on `base_url` is ignored.
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve the endpoint's path template against the base URL.
    ///
    /// Placeholders with a value are replaced by that value as a single
    /// percent-encoded segment. Arrays become `a,b` and objects `k,v,k,v`.
    /// Placeholders without a value are left in place.
    pub fn url_for(&self, endpoint: Endpoint, params: Option<&Params>) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid API base URL: {}", self.base_url))?;

        let segments: Vec<String> = endpoint
            .path()
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|segment| substitute(segment, params))
            .collect();

        url.path_segments_mut()
            .map_err(|_| anyhow!("API base URL cannot carry a path: {}", self.base_url))?
            .pop_if_empty()
            .extend(&segments);

        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[tracing::instrument(skip(self, request))]
    async fn get(&self, endpoint: Endpoint, request: RequestOptions) -> Result<Option<Value>> {
        let params = request.params.as_ref();
        let url = self.url_for(endpoint, params)?;
        let query = params
            .and_then(|p| p.query.as_ref())
            .map(query_pairs)
            .unwrap_or_default();

        debug!("GET {} with query {:?}...", url, query);

        let response = self
            .client
            .get(url)
            .query(&query)
            .headers(header_map(&request.headers)?)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            debug!("{} answered with status {}", endpoint, status);
            return Err(HttpStatusError {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        decode_body(&body)
    }
}

fn substitute(segment: &str, params: Option<&Params>) -> String {
    let name = segment
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'));

    match name.and_then(|n| params?.path_value(n)) {
        Some(value) => path_text(value),
        None => segment.to_string(),
    }
}

/// Render a path value in simple style: arrays and objects comma-joined.
fn path_text(value: &Value) -> String {
    match value {
        Value::Array(items) => items.iter().map(scalar_text).collect::<Vec<_>>().join(","),
        Value::Object(fields) => fields
            .iter()
            .flat_map(|(key, item)| [key.clone(), scalar_text(item)])
            .collect::<Vec<_>>()
            .join(","),
        other => scalar_text(other),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Flatten query values into `key=value` pairs.
///
/// Arrays repeat the key, objects use `key[field]`, and nulls are dropped.
fn query_pairs(query: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in query {
        push_query_value(&mut pairs, key, value);
    }
    pairs
}

fn push_query_value(pairs: &mut Vec<(String, String)>, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for item in items {
                push_query_value(pairs, key, item);
            }
        }
        Value::Object(fields) => {
            for (field, item) in fields {
                push_query_value(pairs, &format!("{}[{}]", key, field), item);
            }
        }
        other => pairs.push((key.to_string(), scalar_text(other))),
    }
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let header_name = HeaderName::try_from(name.as_str())
            .with_context(|| format!("Invalid header name '{}'", name))?;
        // Never echo the value: it may carry the API key
        let mut header_value = HeaderValue::from_str(value)
            .with_context(|| format!("Invalid value for header '{}'", name))?;
        if header_name == AUTHORIZATION {
            header_value.set_sensitive(true);
        }
        map.insert(header_name, header_value);
    }
    Ok(map)
}

fn decode_body(body: &str) -> Result<Option<Value>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let value = serde_json::from_str(body).context("Failed to parse JSON response")?;
    Ok(Some(value))
}

//! Transport abstraction the request executor delegates to.
//!
//! The executor never touches the network itself: it hands the endpoint and
//! a [`RequestOptions`] to a [`Transport`] and classifies what comes back.
//! [`HttpTransport`] is the reqwest-backed implementation.

mod http;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::params::Params;

pub use http::{DEFAULT_API_URL, HttpStatusError, HttpTransport, HttpTransportBuilder, USER_AGENT};

/// Everything the transport needs to shape one GET request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub params: Option<Params>,
    pub headers: Vec<(String, String)>,
}

/// Performs a GET against an endpoint.
///
/// `Ok(None)` means the call succeeded without a body. Any failure to reach
/// the API or to read its answer is an `Err`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, endpoint: Endpoint, request: RequestOptions) -> Result<Option<Value>>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, endpoint: Endpoint, request: RequestOptions) -> Result<Option<Value>> {
        (**self).get(endpoint, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::TornClient;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_shared_transport_delegates() {
        let mut mock = MockTransport::new();
        mock.expect_get()
            .withf(|endpoint, _| *endpoint == Endpoint::TornTimestamp)
            .times(2)
            .returning(|_, _| Ok(Some(json!({"timestamp": 1753037683}))));

        let shared = Arc::new(mock);
        let first = TornClient::with_transport(Arc::clone(&shared));
        let second = TornClient::with_transport(shared);

        for client in [&first, &second] {
            let result = client.fetch("k1", Endpoint::TornTimestamp, None).await.unwrap();
            assert_eq!(result, Some(json!({"timestamp": 1753037683})));
        }
    }
}

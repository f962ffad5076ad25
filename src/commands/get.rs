use std::io::Write;

use anyhow::{Context, Result};
use log::debug;

use crate::{client::TornClient, endpoint::Endpoint, params::Params, transport::Transport};

/// Fetch one endpoint and print the payload as pretty JSON.
/// An absent payload prints nothing.
#[tracing::instrument(skip(client, api_key, params, out))]
pub async fn get<T: Transport, W: Write>(
    client: &TornClient<T>,
    api_key: &str,
    endpoint: Endpoint,
    params: Option<Params>,
    out: &mut W,
) -> Result<()> {
    let payload = client.fetch(api_key, endpoint, params).await?;

    match payload {
        Some(value) => {
            let text = serde_json::to_string_pretty(&value)?;
            writeln!(out, "{}", text).context("Failed to write output")?;
        }
        None => debug!("{} returned no payload", endpoint),
    }

    Ok(())
}

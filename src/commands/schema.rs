use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use reqwest::Client;

use crate::schema::{collect_endpoints, fetch_openapi, render_table};

/// Regenerate the endpoint table from the OpenAPI document at `url`.
///
/// Writes to `output` when given, otherwise to `out`.
#[tracing::instrument(skip(client, out))]
pub async fn schema<W: Write>(
    client: &Client,
    url: &str,
    output: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let start = std::time::Instant::now();

    let doc = fetch_openapi(client, url).await?;
    let specs = collect_endpoints(&doc)?;
    let source = render_table(&specs, url);

    match output {
        Some(path) => {
            std::fs::write(path, &source)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Wrote {} endpoints to {} in {}ms",
                specs.len(),
                path.display(),
                start.elapsed().as_millis()
            );
        }
        None => out
            .write_all(source.as_bytes())
            .context("Failed to write output")?,
    }

    Ok(())
}

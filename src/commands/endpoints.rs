use std::io::Write;

use anyhow::{Context, Result};

use crate::endpoint::Endpoint;

/// Print every known endpoint with its response schema, tab separated.
pub fn endpoints<W: Write>(out: &mut W) -> Result<()> {
    for endpoint in Endpoint::ALL {
        writeln!(
            out,
            "{}\t{}",
            endpoint.path(),
            endpoint.response_schema().unwrap_or("-")
        )
        .context("Failed to write output")?;
    }
    Ok(())
}

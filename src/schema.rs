//! Endpoint table generation from Torn's OpenAPI document.
//!
//! `torn-fetch schema` downloads the document, lists every path with a GET
//! operation and renders the table found in `src/endpoint/generated.rs`.

use std::collections::HashSet;

use anyhow::{Context, Result, anyhow, bail};
use log::debug;
use reqwest::Client;
use serde_json::Value;

/// Where Torn publishes its OpenAPI document.
pub const OPENAPI_URL: &str = "https://www.torn.com/swagger/openapi.json";

/// One row of the endpoint table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSpec {
    pub path: String,
    pub variant: String,
    pub response_schema: Option<String>,
}

/// Download the OpenAPI document.
#[tracing::instrument(skip(client))]
pub async fn fetch_openapi(client: &Client, url: &str) -> Result<Value> {
    debug!("Fetching OpenAPI document from {}...", url);

    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to send request")?;

    let response = response
        .error_for_status()
        .context("Failed fetching OpenAPI schema from Torn")?;

    response
        .json::<Value>()
        .await
        .context("Failed to parse OpenAPI schema")
}

/// List every GET endpoint of the document, sorted by path.
pub fn collect_endpoints(doc: &Value) -> Result<Vec<EndpointSpec>> {
    let paths = doc
        .get("paths")
        .and_then(Value::as_object)
        .ok_or_else(|| anyhow!("OpenAPI document has no 'paths' object"))?;

    let mut specs: Vec<EndpointSpec> = paths
        .iter()
        .filter_map(|(path, item)| {
            let get = item.get("get")?;
            Some(EndpointSpec {
                path: path.clone(),
                variant: variant_name(path),
                response_schema: response_schema(get),
            })
        })
        .collect();

    specs.sort_by(|a, b| a.path.cmp(&b.path));

    let mut seen = HashSet::new();
    for spec in &specs {
        if spec.variant.is_empty() {
            bail!("Cannot derive an endpoint name from path '{}'", spec.path);
        }
        if !seen.insert(spec.variant.as_str()) {
            bail!(
                "Paths collide on endpoint name {} (second path: '{}')",
                spec.variant,
                spec.path
            );
        }
    }

    debug!("Collected {} GET endpoints", specs.len());
    Ok(specs)
}

/// Name of the component referenced by the 200 JSON response.
fn response_schema(operation: &Value) -> Option<String> {
    operation
        .pointer("/responses/200/content/application~1json/schema/$ref")?
        .as_str()?
        .rsplit('/')
        .next()
        .map(str::to_string)
}

/// Derive an enum variant name from a path template.
///
/// `/faction/{chainId}/chainreport` becomes `FactionChainIdChainreport`.
pub fn variant_name(path: &str) -> String {
    path.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Render the endpoint table as Rust source.
pub fn render_table(specs: &[EndpointSpec], source: &str) -> String {
    let mut out = format!(
        "// @generated by `torn-fetch schema` from {}\n// Do not edit by hand.\n\nendpoints! {{\n",
        source
    );

    for spec in specs {
        let schema = match &spec.response_schema {
            Some(name) => format!("Some({:?})", name),
            None => "None".to_string(),
        };
        out.push_str(&format!(
            "    {} => {:?}, {};\n",
            spec.variant, spec.path, schema
        ));
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Endpoint;
    use serde_json::json;

    fn fixture() -> Value {
        json!({
            "openapi": "3.1.0",
            "paths": {
                "/user/basic": {
                    "get": {
                        "responses": {
                            "200": {
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/UserBasicResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/faction/{id}/chain": {
                    "get": {
                        "responses": {
                            "200": {
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/FactionOngoingChainResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/faction/basic": {
                    "get": { "responses": { "200": { "description": "no content" } } }
                },
                "/user/settings": {
                    "post": { "responses": {} }
                }
            }
        })
    }

    #[test]
    fn test_variant_name() {
        assert_eq!(variant_name("/user/basic"), "UserBasic");
        assert_eq!(variant_name("/faction/{id}/chain"), "FactionIdChain");
        assert_eq!(
            variant_name("/faction/{chainId}/chainreport"),
            "FactionChainIdChainreport"
        );
        assert_eq!(variant_name("/torn/{ids}/items"), "TornIdsItems");
        assert_eq!(variant_name("/racing/track-records"), "RacingTrackRecords");
        assert_eq!(variant_name("/"), "");
    }

    #[test]
    fn test_collect_endpoints() {
        let specs = collect_endpoints(&fixture()).unwrap();
        assert_eq!(
            specs,
            vec![
                EndpointSpec {
                    path: "/faction/basic".into(),
                    variant: "FactionBasic".into(),
                    response_schema: None,
                },
                EndpointSpec {
                    path: "/faction/{id}/chain".into(),
                    variant: "FactionIdChain".into(),
                    response_schema: Some("FactionOngoingChainResponse".into()),
                },
                EndpointSpec {
                    path: "/user/basic".into(),
                    variant: "UserBasic".into(),
                    response_schema: Some("UserBasicResponse".into()),
                },
            ]
        );
    }

    #[test]
    fn test_collect_endpoints_requires_paths() {
        let err = collect_endpoints(&json!({ "openapi": "3.1.0" })).unwrap_err();
        assert!(err.to_string().contains("paths"));
    }

    #[test]
    fn test_collect_endpoints_rejects_colliding_names() {
        let doc = json!({
            "paths": {
                "/user/log": { "get": {} },
                "/user-log": { "get": {} }
            }
        });
        let err = collect_endpoints(&doc).unwrap_err();
        assert!(err.to_string().contains("UserLog"));
    }

    #[test]
    fn test_render_table() {
        let specs = collect_endpoints(&fixture()).unwrap();
        let source = render_table(&specs, OPENAPI_URL);

        assert_eq!(
            source,
            "// @generated by `torn-fetch schema` from https://www.torn.com/swagger/openapi.json\n\
             // Do not edit by hand.\n\
             \n\
             endpoints! {\n\
             \x20   FactionBasic => \"/faction/basic\", None;\n\
             \x20   FactionIdChain => \"/faction/{id}/chain\", Some(\"FactionOngoingChainResponse\");\n\
             \x20   UserBasic => \"/user/basic\", Some(\"UserBasicResponse\");\n\
             }\n"
        );
    }

    #[test]
    fn test_checked_in_table_matches_renderer() {
        let specs: Vec<EndpointSpec> = Endpoint::ALL
            .iter()
            .map(|endpoint| EndpointSpec {
                path: endpoint.path().to_string(),
                variant: variant_name(endpoint.path()),
                response_schema: endpoint.response_schema().map(str::to_string),
            })
            .collect();

        let rendered = render_table(&specs, OPENAPI_URL);
        let table = &rendered[rendered.find("endpoints! {").unwrap()..];
        assert!(include_str!("endpoint/generated.rs").ends_with(table));
    }

    #[tokio::test]
    async fn test_fetch_openapi() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/swagger/openapi.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(fixture().to_string())
            .create_async()
            .await;

        let doc = fetch_openapi(
            &Client::new(),
            &format!("{}/swagger/openapi.json", server.url()),
        )
        .await
        .unwrap();

        mock.assert_async().await;
        assert_eq!(doc, fixture());
    }

    #[tokio::test]
    async fn test_fetch_openapi_failure_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/swagger/openapi.json")
            .with_status(503)
            .create_async()
            .await;

        let err = fetch_openapi(
            &Client::new(),
            &format!("{}/swagger/openapi.json", server.url()),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("Failed fetching OpenAPI schema"));
    }
}

//! Registry of the Torn API endpoints callable with GET.
//!
//! The table lives in `generated.rs`, a checked-in snapshot that
//! `torn-fetch schema` regenerates from the provider's OpenAPI document.
//! Each row names the enum variant, the path template and the component
//! schema of the 200 response. Selection routes such as `/user` answer with
//! a shape that depends on `selections`, so they carry no schema.

use anyhow::anyhow;
use std::fmt;
use std::str::FromStr;

macro_rules! endpoints {
    ($($variant:ident => $path:literal, $schema:expr;)*) => {
        /// A GET endpoint of the Torn API, identified by its path template.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Endpoint {
            $($variant,)*
        }

        impl Endpoint {
            /// Every known endpoint, sorted by path.
            pub const ALL: &'static [Endpoint] = &[$(Endpoint::$variant,)*];

            /// Path template relative to the API base URL, e.g. `/faction/{id}/chain`.
            pub fn path(&self) -> &'static str {
                match self {
                    $(Endpoint::$variant => $path,)*
                }
            }

            /// Name of the OpenAPI component describing a successful response.
            pub fn response_schema(&self) -> Option<&'static str> {
                match self {
                    $(Endpoint::$variant => $schema,)*
                }
            }
        }
    };
}

mod generated;

pub use generated::Endpoint;

impl Endpoint {
    /// Names of the `{placeholders}` in the path template, in order.
    pub fn path_params(&self) -> Vec<&'static str> {
        placeholders(self.path())
    }
}

/// Extract `{name}` placeholders from a path template.
pub(crate) fn placeholders(template: &str) -> Vec<&str> {
    template
        .split('/')
        .filter_map(|segment| {
            segment
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'))
        })
        .filter(|name| !name.is_empty())
        .collect()
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Endpoint {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = if s.starts_with('/') {
            s.to_string()
        } else {
            format!("/{}", s)
        };

        Endpoint::ALL
            .iter()
            .copied()
            .find(|e| e.path() == wanted)
            .ok_or_else(|| {
                anyhow!(
                    "Unknown endpoint: {}. Run `torn-fetch endpoints` to list the known paths.",
                    s
                )
            })
    }
}

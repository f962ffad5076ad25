use anyhow::Result;
use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;
use torn_fetch::{
    commands,
    config::{self, Config},
    endpoint::Endpoint,
    params::{Params, parse_assignment},
};

/// torn-fetch - Torn API client
///
/// Call any GET endpoint of the Torn API v2 with your API key and print the
/// JSON response. Torn error responses exit with a non-zero status.
///
/// Examples:
///   torn-fetch get /user/basic --key YOUR_KEY
///   torn-fetch get /faction/{id}/chain --path id=33458
///   torn-fetch get /user/attacks --query limit=25 --query from=1753037683
#[derive(Parser, Debug)]
#[command(author, version = env!("TORN_FETCH_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Torn API base URL (defaults to https://api.torn.com/v2)
    #[arg(
        long = "api-url",
        env = config::API_URL_ENV,
        value_name = "URL",
        global = true
    )]
    pub api_url: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch an endpoint and print its JSON payload
    Get(GetArgs),

    /// List the known endpoints and their response schemas
    Endpoints,

    /// Regenerate the endpoint table from Torn's OpenAPI document
    Schema(SchemaArgs),
}

#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Endpoint path, e.g. /user/basic or /faction/{id}/chain
    #[arg(value_name = "ENDPOINT")]
    pub endpoint: Endpoint,

    /// Torn API key
    #[arg(
        long,
        short = 'k',
        env = config::API_KEY_ENV,
        hide_env_values = true,
        value_name = "KEY"
    )]
    pub key: String,

    /// Path parameter substituted into the endpoint (repeatable)
    #[arg(long = "path", short = 'p', value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub path: Vec<(String, Value)>,

    /// Query-string parameter (repeatable)
    #[arg(long = "query", short = 'q', value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub query: Vec<(String, Value)>,
}

#[derive(clap::Args, Debug)]
pub struct SchemaArgs {
    /// OpenAPI document URL (defaults to https://www.torn.com/swagger/openapi.json)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Write the table to this file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = Config::new(cli.api_url, cli.timeout);
    let mut stdout = std::io::stdout();

    match cli.command {
        Commands::Get(args) => {
            let client = config::build_client(&config)?;
            let params = Params::from_assignments(args.path, args.query);
            commands::get(&client, &args.key, args.endpoint, params, &mut stdout).await?
        }
        Commands::Endpoints => commands::endpoints(&mut stdout)?,
        Commands::Schema(args) => {
            let client = config::build_schema_client(&config)?;
            let url = args.url.unwrap_or(config.openapi_url);
            commands::schema(&client, &url, args.output.as_deref(), &mut stdout).await?
        }
    }
    Ok(())
}

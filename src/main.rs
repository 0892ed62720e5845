mod error;
mod fetcher;
mod parser;
mod query;
mod response;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use crate::error::LookupError;
use crate::parser::PersonRecord;
use crate::query::Query;
use crate::response::Envelope;

#[derive(Parser)]
#[command(name = "cedulave", about = "CNE electoral registry lookup by cedula")]
struct Cli {
    /// Nationality flag: V (Venezuelan) or E (foreign resident)
    nationality: String,
    /// Cedula number, digits only
    cedula: String,
    /// Emit the response as JSON
    #[arg(long)]
    json: bool,
    /// Pretty-print the JSON response (implies --json)
    #[arg(long)]
    pretty: bool,
    /// HTTP timeout for the registry request, in seconds
    #[arg(long, default_value = "15")]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let envelope = match lookup(&cli).await {
        Ok(record) => Envelope::success(record),
        Err(err) => Envelope::error(&err),
    };

    let rendered = if cli.json || cli.pretty {
        envelope.to_json(cli.pretty)?
    } else {
        envelope.render_plain()
    };
    println!("{}", rendered);

    Ok(if envelope.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn lookup(cli: &Cli) -> Result<PersonRecord, LookupError> {
    let query = Query::new(&cli.nationality, &cli.cedula)?;
    let body = fetcher::fetch_document(&query, Duration::from_secs(cli.timeout_secs)).await?;
    parser::parse_document(&query, &body)
}

//! Write the OpenAPI document as JSON to stdout or a file.
//!
//! # Examples
//! ```sh
//! cargo run --bin openapi-dump -- --output docs/openapi.json
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use matjip::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Export the REST API OpenAPI document")]
struct Cli {
    /// Destination file; stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(std::io::Error::other)?;
    match cli.output {
        Some(path) => std::fs::write(path, json),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")
        }
    }
}

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deadline-cli")]
#[command(about = "Client for a running deadline-relay", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the relay is up
    Health,
    /// Submit a deadline reminder request and print the reply
    Compute {
        /// Request body as inline JSON
        #[arg(long, conflicts_with = "file")]
        json: Option<String>,

        /// Read the request body from a file ("-" or nothing reads stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            let status = res.status();
            println!("{} {}", status, res.text().await?);
            if !status.is_success() {
                return Err(format!("relay is unhealthy ({})", status).into());
            }
        }
        Commands::Compute { json, file } => {
            let raw = match (json, file) {
                (Some(inline), _) => inline,
                (None, Some(path)) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
                _ => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let body: Value = serde_json::from_str(&raw)
                .map_err(|e| format!("request body is not valid JSON: {}", e))?;

            let res = client
                .post(format!("{}/compute-deadline", cli.url))
                .json(&body)
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    let pretty = serde_json::from_str::<Value>(&text)
        .ok()
        .and_then(|json| serde_json::to_string_pretty(&json).ok())
        .unwrap_or(text);

    if !status.is_success() {
        eprintln!("Error: relay returned status {}", status);
        eprintln!("{}", pretty);
        return Err(format!("request failed with status {}", status).into());
    }

    println!("{}", pretty);
    Ok(())
}

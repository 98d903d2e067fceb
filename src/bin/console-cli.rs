use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "console-cli")]
#[command(about = "Management CLI for the RAN Config Console", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3001")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service status
    Status,
    /// Show the current PLMN configuration
    Plmn,
    /// Show the current SIB8 warning message
    Sib8,
    /// List subscribers
    Subscribers,
    /// Add a subscriber (omitted credentials take the service defaults)
    Add {
        ueid: String,
        #[arg(long)]
        key: Option<String>,
        #[arg(long)]
        opc: Option<String>,
    },
    /// Remove a subscriber
    Rm { ueid: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Status => {
            let res = client
                .get(format!("{}/api/status", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Plmn => {
            let res = client.get(format!("{}/api/plmn", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Sib8 => {
            let res = client.get(format!("{}/api/sib8", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Subscribers => {
            let res = client
                .get(format!("{}/api/subscribers", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Add { ueid, key, opc } => {
            let mut body = serde_json::json!({ "ueid": ueid });
            if let Some(key) = key {
                body["encPermanentKey"] = Value::String(key);
            }
            if let Some(opc) = opc {
                body["encOpcKey"] = Value::String(opc);
            }

            let res = client
                .post(format!("{}/api/subscribers", cli.url))
                .json(&body)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Rm { ueid } => {
            let res = client
                .delete(format!("{}/api/subscribers/{}", cli.url, ueid))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

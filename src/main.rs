use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use up_banking_mcp::{client::UpClient, config::Config, mcp};

#[derive(Parser)]
#[command(name = "up-mcp")]
#[command(about = "MCP server for the Up Banking API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the MCP server via stdio (default)
    Mcp,
    /// Check that the Up API accepts the configured token
    Ping,
}

/// Initialize tracing on stderr; stdout carries the protocol.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "up_banking_mcp=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn client_from_env() -> anyhow::Result<UpClient> {
    let config = Config::from_env().inspect_err(|e| tracing::error!("{}", e))?;
    Ok(UpClient::new(config.personal_access_token())?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command.unwrap_or(Commands::Mcp) {
        Commands::Mcp => {
            let client = client_from_env()?;
            mcp::run_stdio_server(client).await?;
        }
        Commands::Ping => {
            let client = client_from_env()?;
            if client.ping().await {
                println!("Connection successful");
            } else {
                println!("Connection failed");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

//! Command-line client for the mediateca server.
//!
//! Each subcommand maps onto one client façade operation; server messages
//! are printed verbatim.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use mediateca::client::{DownloadOutcome, MediaClient};
use mediateca::Config;

#[derive(Parser)]
#[command(name = "mediateca-client", about = "Client for the mediateca media server", version)]
struct Cli {
    /// Server base URL (overrides config.toml).
    #[arg(long)]
    server: Option<String>,

    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the files available on the server.
    List,
    /// Upload a local file.
    Upload {
        /// Path of the file to upload.
        path: PathBuf,
    },
    /// Download a file by its listing id into the downloads directory.
    Download {
        /// Id from a current listing.
        id: u64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = Config::load(&cli.config).unwrap_or_default();
    mediateca::logging::init_console_only(&config.logging.level);

    let server_url = cli.server.unwrap_or(config.client.server_url);
    let client = match MediaClient::new(&server_url, &config.client.downloads_dir) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli.command, &client).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: &Command, client: &MediaClient) -> mediateca::Result<()> {
    match command {
        Command::List => {
            let entries = client.refresh_listing().await?;
            if entries.is_empty() {
                println!("No hay archivos en el servidor.");
                return Ok(());
            }
            println!("{:>4}  {:<10}  {}", "ID", "TIPO", "NOMBRE");
            for entry in entries {
                println!("{:>4}  {:<10}  {}", entry.id, entry.tipo.as_str(), entry.nombre);
            }
        }
        Command::Upload { path } => {
            let outcome = client.upload_local_file(path).await?;
            if !outcome.success {
                return Err(mediateca::MediatecaError::Server(outcome.message));
            }
            println!("{}", outcome.message);
        }
        Command::Download { id } => match client.download_by_id(*id).await? {
            DownloadOutcome::Saved { path, message } => {
                println!("{message}: {}", path.display());
            }
            DownloadOutcome::NotFound { message } => {
                return Err(mediateca::MediatecaError::Server(message));
            }
        },
    }
    Ok(())
}

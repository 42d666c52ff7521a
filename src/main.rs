use anyhow::Result;
use clap::{Parser, Subcommand};

// Use the library modules
use hatch::commands;

#[derive(Parser)]
#[clap(name = "hatch")]
#[clap(about = "Interactive setup wizard for Skiff game servers")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Target directory for the new server (skips the directory prompt)
    #[clap(long)]
    dir: Option<String>,
    /// Release tag to install (skips the version prompt)
    #[clap(long)]
    tag: Option<String>,
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available server versions from the release index
    Versions,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Versions) => commands::versions::list_available_versions()
            .await
            .map_err(|e| anyhow::anyhow!(e)),
        None => commands::setup::run(cli.dir.as_deref(), cli.tag.as_deref())
            .await
            .map_err(|e| anyhow::anyhow!(e)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

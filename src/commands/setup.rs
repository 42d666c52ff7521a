use crate::core::{
    config, download,
    releases::{self, Release, ReleaseClient},
};
use crate::error::{HatchError, Result};
use crate::utils::{fs, launcher};
use dialoguer::{Confirm, Input, Select};
use std::path::Path;

/// Runs the interactive setup wizard. `dir` and `version` pre-answer the
/// corresponding prompts when given on the command line.
pub async fn run(dir: Option<&str>, version: Option<&str>) -> Result<()> {
    println!("Welcome to hatch, the Skiff server setup wizard.");
    println!();

    let dir_name = match dir {
        Some(d) => d.to_string(),
        None => Input::<String>::new()
            .with_prompt("Server directory")
            .default("skiff-server".to_string())
            .interact_text()?,
    };

    // The workspace root is threaded through every call below; the process
    // working directory is never changed.
    let root = std::env::current_dir()?.join(&dir_name);
    fs::ensure_dir_exists(&root)?;

    println!("Fetching available releases...");
    let client = ReleaseClient::from_env();
    let available = client.get_releases().await?;
    if available.is_empty() {
        return Err(HatchError::NoReleases);
    }

    let release = select_release(&available, version)?;
    println!("Selected version: {}", release.tag_name);

    install_server_binary(&client, release, &root).await?;
    install_companion_cli(&client, release, &root).await?;

    let config_contents = collect_config(&dir_name)?;
    config::write(&root, &config_contents)?;
    println!("  Created {dir_name}/{}", config::CONFIG_FILE_NAME);

    let with_scripts = Confirm::new()
        .with_prompt("Write start.sh / start.cmd launcher scripts?")
        .default(true)
        .interact()?;
    if with_scripts {
        launcher::write_launchers(&root)?;
        println!("  Created {dir_name}/start.sh");
        println!("  Created {dir_name}/start.cmd");
    }

    println!();
    println!("✅ Server workspace ready: {}", root.display());
    println!();
    println!("Next steps:");
    println!("   cd {dir_name}");
    if with_scripts {
        println!("   ./start.sh");
    } else {
        println!(
            "   ./{} --config {}",
            releases::server_binary_name(),
            config::CONFIG_FILE_NAME
        );
    }

    Ok(())
}

fn select_release<'a>(available: &'a [Release], version: Option<&str>) -> Result<&'a Release> {
    match version {
        Some(tag) => available
            .iter()
            .find(|r| r.tag_name == tag)
            .ok_or_else(|| HatchError::VersionNotFound {
                version: tag.to_string(),
            }),
        None => {
            let labels: Vec<String> = available
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    let latest = if i == 0 { " (latest)" } else { "" };
                    let prerelease = if r.prerelease { " [prerelease]" } else { "" };
                    format!("{}{latest}{prerelease}", r.tag_name)
                })
                .collect();

            let choice = Select::new()
                .with_prompt("Server version")
                .items(&labels)
                .default(0)
                .interact()?;

            Ok(&available[choice])
        }
    }
}

async fn install_server_binary(
    client: &ReleaseClient,
    release: &Release,
    root: &Path,
) -> Result<()> {
    let asset = releases::find_server_asset(release).ok_or_else(|| HatchError::AssetNotFound {
        name: format!("server binary for {}", releases::platform_suffix()),
    })?;

    let binary_path = root.join(releases::server_binary_name());
    download::fetch_to_file(
        client.http(),
        &asset.browser_download_url,
        &binary_path,
        &format!("Downloading {}", asset.name),
    )
    .await?;
    fs::make_executable(&binary_path)?;

    Ok(())
}

/// Some releases ship the `skiffctl` admin CLI alongside the server; offer
/// it when present.
async fn install_companion_cli(
    client: &ReleaseClient,
    release: &Release,
    root: &Path,
) -> Result<()> {
    let asset = match releases::find_companion_asset(release) {
        Some(asset) => asset,
        None => return Ok(()),
    };

    let wanted = Confirm::new()
        .with_prompt("Also download the skiffctl admin CLI?")
        .default(true)
        .interact()?;
    if !wanted {
        return Ok(());
    }

    let binary_path = root.join(releases::companion_binary_name());
    download::fetch_to_file(
        client.http(),
        &asset.browser_download_url,
        &binary_path,
        &format!("Downloading {}", asset.name),
    )
    .await?;
    fs::make_executable(&binary_path)?;

    Ok(())
}

fn collect_config(dir_name: &str) -> Result<String> {
    let customize = Confirm::new()
        .with_prompt("Customize the server configuration?")
        .default(true)
        .interact()?;
    if !customize {
        return Ok(config::render_default().to_string());
    }

    let server_name = Input::<String>::new()
        .with_prompt("Server name")
        .default(dir_name.to_string())
        .interact_text()?;
    let motd = Input::<String>::new()
        .with_prompt("Message of the day")
        .default("A Skiff server".to_string())
        .interact_text()?;
    let port = Input::<u16>::new()
        .with_prompt("Port")
        .default(7777)
        .interact_text()?;
    let max_players = Input::<u32>::new()
        .with_prompt("Max players")
        .default(20)
        .interact_text()?;

    config::render(&config::SetupAnswers {
        server_name,
        motd,
        port,
        max_players,
    })
}

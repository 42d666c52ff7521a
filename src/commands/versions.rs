use crate::core::releases::{ReleaseClient, REPO_NAME, REPO_OWNER};
use crate::error::Result;

pub async fn list_available_versions() -> Result<()> {
    let client = ReleaseClient::from_env();

    match client.get_releases().await {
        Ok(releases) => {
            if releases.is_empty() {
                println!("No releases available yet.");
                println!("Check: https://github.com/{REPO_OWNER}/{REPO_NAME}/releases");
            } else {
                println!("Available versions:");

                for (i, release) in releases.iter().enumerate() {
                    let status = if i == 0 { " (latest)" } else { "" };
                    let prerelease = if release.prerelease {
                        " [prerelease]"
                    } else {
                        ""
                    };

                    print!("  {}{}{}", release.tag_name, status, prerelease);
                    if !release.name.is_empty() && release.name != release.tag_name {
                        println!(" - {}", release.name);
                    } else {
                        println!();
                    }
                }

                println!();
                println!("Set up a server: hatch --tag <tag>");
            }
        }
        Err(e) => {
            println!("Unable to fetch releases: {e}");
            println!("Check: https://github.com/{REPO_OWNER}/{REPO_NAME}/releases");
        }
    }

    Ok(())
}

use crate::core::config::CONFIG_FILE_NAME;
use crate::error::Result;
use crate::utils::fs::make_executable;
use std::fs;
use std::path::Path;

/// Write `start.sh` and `start.cmd` into the workspace root. The POSIX
/// script is marked executable.
pub fn write_launchers(root: &Path) -> Result<()> {
    let sh_path = root.join("start.sh");
    fs::write(&sh_path, generate_start_sh())?;
    make_executable(&sh_path)?;

    fs::write(root.join("start.cmd"), generate_start_cmd())?;
    Ok(())
}

fn generate_start_sh() -> String {
    format!(
        r#"#!/bin/sh
# Start the Skiff server from the workspace directory.
cd "$(dirname "$0")"
exec ./skiffd --config {CONFIG_FILE_NAME} "$@"
"#
    )
}

fn generate_start_cmd() -> String {
    format!(
        "@echo off\r\n\
         rem Start the Skiff server from the workspace directory.\r\n\
         cd /d \"%~dp0\"\r\n\
         skiffd.exe --config {CONFIG_FILE_NAME} %*\r\n"
    )
}

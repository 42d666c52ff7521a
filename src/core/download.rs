use crate::core::progress::ProgressRenderer;
use crate::error::{HatchError, Result};
use futures::StreamExt;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Fetches `url` and writes the response body to `destination`, byte for
/// byte, rendering a live progress line labelled with `label`.
///
/// Fails with [`HatchError::FetchFailed`] before the destination file is
/// created if the request cannot be issued or the server answers with a
/// non-success status. Mid-stream read or write errors surface as
/// [`HatchError::TransferFailed`]; a partially written file is left in
/// place. The parent directory must already exist.
///
/// Returns the number of bytes written once everything is flushed to disk.
pub async fn fetch_to_file(
    client: &reqwest::Client,
    url: &str,
    destination: &Path,
    label: &str,
) -> Result<u64> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| HatchError::fetch_failed(format!("{url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(HatchError::fetch_failed(format!("{url} returned {status}")));
    }

    // None when the server omits content-length (e.g. chunked encoding);
    // the renderer then shows "unknown" as the denominator.
    let total_bytes = response.content_length();

    // Start the spinner before the first chunk so the line is visible
    // while waiting on a slow connection.
    let renderer = ProgressRenderer::start(label, total_bytes);

    let mut file = File::create(destination).await?;
    let mut downloaded_bytes: u64 = 0;

    let mut stream = response.bytes_stream();
    while let Some(item) = stream.next().await {
        let mut chunk = item.map_err(|e| HatchError::transfer_failed(format!("{url}: {e}")))?;
        downloaded_bytes += chunk.len() as u64;
        file.write_all_buf(&mut chunk)
            .await
            .map_err(|e| HatchError::transfer_failed(format!("{}: {e}", destination.display())))?;
        renderer.update(downloaded_bytes);
    }

    file.flush()
        .await
        .map_err(|e| HatchError::transfer_failed(format!("{}: {e}", destination.display())))?;

    renderer.finish(downloaded_bytes);
    Ok(downloaded_bytes)
}

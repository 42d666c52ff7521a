use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// How often the spinner advances and the line is redrawn.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Spinner frames; the last entry is the frame shown once the transfer
/// finishes, so the conclusive line carries a check mark instead of a
/// mid-spin glyph.
const TICK_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✔"];

/// Renders a single continuously-overwritten progress line for one transfer.
///
/// The read loop publishes the latest byte counts via [`update`]; the actual
/// redraw happens on indicatif's steady-tick thread, so a spinner is visible
/// even before the first chunk arrives.
///
/// [`update`]: ProgressRenderer::update
pub struct ProgressRenderer {
    bar: ProgressBar,
    label: String,
    total_bytes: Option<u64>,
}

impl ProgressRenderer {
    pub fn start(label: &str, total_bytes: Option<u64>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap()
                .tick_strings(TICK_FRAMES),
        );
        bar.set_message(format_progress(label, 0, total_bytes));
        bar.enable_steady_tick(TICK_INTERVAL);

        Self {
            bar,
            label: label.to_string(),
            total_bytes,
        }
    }

    /// Publish a new downloaded-byte count. Cheap; called once per chunk.
    pub fn update(&self, downloaded_bytes: u64) {
        self.bar
            .set_message(format_progress(&self.label, downloaded_bytes, self.total_bytes));
    }

    /// Stop the timer and leave one final line with the success marker.
    pub fn finish(&self, downloaded_bytes: u64) {
        self.bar
            .finish_with_message(format_progress(&self.label, downloaded_bytes, self.total_bytes));
    }
}

/// Formats the text portion of the progress line, e.g.
/// `Downloading skiffd (2.51 MB / 5.00 MB)`. The denominator reads
/// `unknown` when the server did not declare a content length.
pub fn format_progress(label: &str, downloaded_bytes: u64, total_bytes: Option<u64>) -> String {
    let total = match total_bytes {
        Some(bytes) => format!("{:.2}", as_megabytes(bytes)),
        None => "unknown".to_string(),
    };
    format!(
        "{} ({:.2} MB / {} MB)",
        label,
        as_megabytes(downloaded_bytes),
        total
    )
}

fn as_megabytes(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_with_known_total() {
        let text = format_progress("Downloading test...", 5_242_880, Some(5_242_880));
        assert_eq!(text, "Downloading test... (5.00 MB / 5.00 MB)");
    }

    #[test]
    fn test_format_with_unknown_total() {
        let text = format_progress("Downloading test...", 1_048_576, None);
        assert_eq!(text, "Downloading test... (1.00 MB / unknown MB)");
    }

    #[test]
    fn test_format_partial_progress() {
        let text = format_progress("server", 2_621_440, Some(5_242_880));
        assert_eq!(text, "server (2.50 MB / 5.00 MB)");
    }

    #[test]
    fn test_format_zero_bytes() {
        let text = format_progress("server", 0, None);
        assert_eq!(text, "server (0.00 MB / unknown MB)");
    }

    #[test]
    fn test_renderer_finishes_cleanly() {
        let renderer = ProgressRenderer::start("server", Some(1024));
        renderer.update(512);
        renderer.finish(1024);
        assert!(renderer.bar.is_finished());
    }
}

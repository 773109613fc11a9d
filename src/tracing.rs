//! Tracing setup and reveal state diffing
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=reveal=debug,gesture=trace` - scoped filtering
//! - `RUST_LOG=side_reveal::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/side-reveal/logs/side-reveal.log` with daily
//! rotation. The file keeps `info` and above unless `SIDE_REVEAL_FILE_LOG` sets
//! its own filter (same syntax as `RUST_LOG`).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::RevealModel;

/// Environment variable overriding the log file filter
pub const FILE_LOG_ENV: &str = "SIDE_REVEAL_FILE_LOG";

const DEFAULT_FILE_FILTER: &str = "info";

/// Filter for the log file: the given directives, or `info` if absent or invalid
fn file_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILE_FILTER))
}

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so stdout stays clean for frame output.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - per-frame debug output stays off unless asked for
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(file_filter(std::env::var(FILE_LOG_ENV).ok().as_deref())),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of reveal state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct RevealSnapshot {
    pub offset: f32,
    pub revealed: bool,
    pub dragging: bool,
    pub overlay_alpha: f32,
    pub reveal_width: f32,
}

impl RevealSnapshot {
    pub fn from_model(model: &RevealModel) -> Self {
        Self {
            offset: model.state.current_offset(),
            revealed: model.state.is_revealed(),
            dragging: model.drag.is_active(),
            overlay_alpha: model.overlay.alpha,
            reveal_width: model.config.reveal_width,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &RevealSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.offset != other.offset {
            changes.push(format!("offset: {} → {}", self.offset, other.offset));
        }
        if self.revealed != other.revealed {
            let status = if other.revealed { "revealed" } else { "hidden" };
            changes.push(status.to_string());
        }
        if self.dragging != other.dragging {
            let status = if other.dragging {
                "drag started"
            } else {
                "drag ended"
            };
            changes.push(status.to_string());
        }
        if self.overlay_alpha != other.overlay_alpha {
            changes.push(format!(
                "overlay: {} → {}",
                self.overlay_alpha, other.overlay_alpha
            ));
        }
        if self.reveal_width != other.reveal_width {
            changes.push(format!(
                "width: {} → {}",
                self.reveal_width, other.reveal_width
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_filter_defaults_to_info() {
        assert_eq!(file_filter(None).to_string(), "info");
        assert_eq!(file_filter(Some("reveal=loud")).to_string(), "info");
        assert_eq!(file_filter(Some("debug")).to_string(), "debug");
    }

    #[test]
    fn test_identical_snapshots_have_no_diff() {
        let model = RevealModel::default();
        let a = RevealSnapshot::from_model(&model);
        assert_eq!(a.diff(&a.clone()), None);
    }

    #[test]
    fn test_diff_reports_reveal() {
        let mut model = RevealModel::default();
        let before = RevealSnapshot::from_model(&model);
        model.state.snap(true);
        model.sync_overlay();
        let after = RevealSnapshot::from_model(&model);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("offset: 0 → 250"));
        assert!(diff.contains("revealed"));
        assert!(diff.contains("overlay: 0 → 0.3"));
    }
}

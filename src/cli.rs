//! Command-line argument parsing for the playback tool

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Replay a side-reveal interaction script and print sampled frames
#[derive(Parser, Debug)]
#[command(name = "side-reveal", version, about = "Replay side-reveal interaction scripts")]
pub struct CliArgs {
    /// Interaction script (YAML)
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Config file to use instead of ~/.config/side-reveal/config.yaml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Frame sampling rate
    #[arg(long, value_name = "N", default_value_t = 60)]
    pub fps: u32,

    /// Emit one JSON object per line instead of text
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Time between sampled frames
    pub fn frame_interval(&self) -> Result<Duration, String> {
        if self.fps == 0 || self.fps > 1000 {
            return Err(format!("--fps must be between 1 and 1000, got {}", self.fps));
        }
        Ok(Duration::from_nanos(1_000_000_000 / self.fps as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = CliArgs::parse_from(["side-reveal", "swipe.yaml"]);
        assert_eq!(args.script, PathBuf::from("swipe.yaml"));
        assert_eq!(args.fps, 60);
        assert!(!args.json);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_frame_interval_bounds() {
        let mut args = CliArgs::parse_from(["side-reveal", "--fps", "50", "s.yaml"]);
        assert_eq!(args.frame_interval().unwrap(), Duration::from_millis(20));
        args.fps = 0;
        assert!(args.frame_interval().is_err());
    }
}

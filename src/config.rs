//! Reveal configuration
//!
//! Loaded from `~/.config/side-reveal/config.yaml` when present. Every field is
//! optional in the file; missing fields take their defaults.
//!
//! ```yaml
//! reveal_width: 280
//! reveal_duration: 0.5
//! overlay_color: "#101820"
//! overlay_alpha: 0.4
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Duration and damping used while the finger is dragging the front panel
pub const INTERACTIVE_DURATION: f32 = 0.4;
pub const INTERACTIVE_DAMPING: f32 = 0.4;

/// Tunables for the reveal controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// How far the front panel moves aside on reveal, which is also the side
    /// container's width (logical pixels)
    #[serde(default = "default_reveal_width")]
    pub reveal_width: f32,

    /// Seconds for a full reveal or hide animation
    #[serde(default = "default_reveal_duration")]
    pub reveal_duration: f32,

    /// Spring damping ratio in `(0, 1]`; lower is bouncier
    #[serde(default = "default_reveal_damping")]
    pub reveal_damping: f32,

    /// Colour of the overlay dimming the front panel while revealed
    #[serde(default)]
    pub overlay_color: Color,

    /// Overlay opacity while revealed, in `[0, 1]`
    #[serde(default = "default_overlay_alpha")]
    pub overlay_alpha: f32,

    /// Whether an edge swipe over the front panel can reveal the side panel
    #[serde(default = "default_swipe_enabled")]
    pub swipe_enabled: bool,

    /// Width of the activation strip as a fraction of the component width
    #[serde(default = "default_swipe_start_zone_fraction")]
    pub swipe_start_zone_fraction: f32,
}

fn default_reveal_width() -> f32 {
    250.0
}

fn default_reveal_duration() -> f32 {
    0.7
}

fn default_reveal_damping() -> f32 {
    0.8
}

fn default_overlay_alpha() -> f32 {
    0.3
}

fn default_swipe_enabled() -> bool {
    true
}

fn default_swipe_start_zone_fraction() -> f32 {
    0.1
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            reveal_width: default_reveal_width(),
            reveal_duration: default_reveal_duration(),
            reveal_damping: default_reveal_damping(),
            overlay_color: Color::default(),
            overlay_alpha: default_overlay_alpha(),
            swipe_enabled: default_swipe_enabled(),
            swipe_start_zone_fraction: default_swipe_start_zone_fraction(),
        }
    }
}

impl RevealConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Read and validate a config file
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    /// Parse and validate YAML config content
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let config: RevealConfig = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<(), String> {
        check_reveal_width(self.reveal_width)?;
        check_reveal_duration(self.reveal_duration)?;
        check_reveal_damping(self.reveal_damping)?;
        check_unit_interval("overlay_alpha", self.overlay_alpha)?;
        check_unit_interval("swipe_start_zone_fraction", self.swipe_start_zone_fraction)?;
        Ok(())
    }

    pub fn set_reveal_width(&mut self, width: f32) -> Result<(), String> {
        check_reveal_width(width)?;
        self.reveal_width = width;
        Ok(())
    }

    pub fn set_reveal_duration(&mut self, seconds: f32) -> Result<(), String> {
        check_reveal_duration(seconds)?;
        self.reveal_duration = seconds;
        Ok(())
    }

    pub fn set_reveal_damping(&mut self, damping: f32) -> Result<(), String> {
        check_reveal_damping(damping)?;
        self.reveal_damping = damping;
        Ok(())
    }

    pub fn set_overlay_alpha(&mut self, alpha: f32) -> Result<(), String> {
        check_unit_interval("overlay_alpha", alpha)?;
        self.overlay_alpha = alpha;
        Ok(())
    }

    pub fn set_swipe_start_zone_fraction(&mut self, fraction: f32) -> Result<(), String> {
        check_unit_interval("swipe_start_zone_fraction", fraction)?;
        self.swipe_start_zone_fraction = fraction;
        Ok(())
    }

    /// Right edge of the activation strip for a component of the given width
    #[inline]
    pub fn swipe_strip_edge(&self, component_width: f32) -> f32 {
        component_width * self.swipe_start_zone_fraction
    }
}

fn check_reveal_width(width: f32) -> Result<(), String> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(format!("reveal_width must be > 0, got {}", width))
    }
}

fn check_reveal_duration(seconds: f32) -> Result<(), String> {
    if seconds.is_finite() && seconds > 0.0 {
        Ok(())
    } else {
        Err(format!("reveal_duration must be > 0, got {}", seconds))
    }
}

fn check_reveal_damping(damping: f32) -> Result<(), String> {
    if damping > 0.0 && damping <= 1.0 {
        Ok(())
    } else {
        Err(format!("reveal_damping must be in (0, 1], got {}", damping))
    }
}

fn check_unit_interval(name: &str, value: f32) -> Result<(), String> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{} must be in [0, 1], got {}", name, value))
    }
}

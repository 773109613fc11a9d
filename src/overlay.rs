//! Front overlay state
//!
//! The overlay dims the front panel and swallows taps while the side panel is
//! revealed. It has no state of its own: every field is derived from the
//! reveal state and the config, and is recomputed after each update.

use serde::Serialize;

use crate::color::Color;
use crate::config::RevealConfig;
use crate::model::RevealState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayState {
    /// Base colour from config
    pub color: Color,
    /// Current target opacity: `overlay_alpha` while revealed, otherwise 0
    pub alpha: f32,
    /// Whether the overlay intercepts taps (only while revealed)
    pub interactive: bool,
}

impl OverlayState {
    /// A transparent, pass-through overlay
    pub fn hidden(color: Color) -> Self {
        Self {
            color,
            alpha: 0.0,
            interactive: false,
        }
    }

    pub fn derive(state: &RevealState, config: &RevealConfig) -> Self {
        let revealed = state.is_revealed();
        Self {
            color: config.overlay_color,
            alpha: if revealed { config.overlay_alpha } else { 0.0 },
            interactive: revealed,
        }
    }

    /// Overlay colour with the current opacity applied, as ARGB
    pub fn argb(&self) -> u32 {
        self.color.with_opacity(self.alpha).to_argb_u32()
    }
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::hidden(Color::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_overlay_is_transparent() {
        let config = RevealConfig::default();
        let state = RevealState::new(config.reveal_width);
        let overlay = OverlayState::derive(&state, &config);
        assert_eq!(overlay.alpha, 0.0);
        assert!(!overlay.interactive);
        assert_eq!(overlay.argb() >> 24, 0);
    }

    #[test]
    fn test_revealed_overlay_uses_configured_alpha() {
        let mut config = RevealConfig::default();
        config.overlay_alpha = 1.0;
        let mut state = RevealState::new(config.reveal_width);
        state.snap(true);
        let overlay = OverlayState::derive(&state, &config);
        assert_eq!(overlay.alpha, 1.0);
        assert!(overlay.interactive);
        assert_eq!(overlay.argb(), 0xFF000000);
    }

    #[test]
    fn test_mid_drag_overlay_is_not_interactive() {
        let config = RevealConfig::default();
        let mut state = RevealState::new(config.reveal_width);
        state.set_offset(200.0);
        let overlay = OverlayState::derive(&state, &config);
        assert_eq!(overlay.alpha, 0.0);
        assert!(!overlay.interactive);
    }
}

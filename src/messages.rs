//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::color::Color;
use crate::config::RevealConfig;
use crate::gesture::TouchSample;
use crate::model::ContentId;

/// Discrete reveal commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMsg {
    /// Flip between hidden and revealed (animated)
    Toggle,
    /// Move to an explicit state
    Reveal { reveal: bool, animated: bool },
    /// The overlay above the front panel was tapped
    OverlayTapped,
}

/// Configuration changes
///
/// Changes requested while a drag is in progress are held back until the drag
/// ends. Out-of-range values are rejected with a warning.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigMsg {
    SetRevealWidth(f32),
    SetRevealDuration(f32),
    SetRevealDamping(f32),
    SetOverlayColor(Color),
    SetOverlayAlpha(f32),
    SetRevealOnSwipe(bool),
    SetSwipeStartZoneFraction(f32),
    /// Replace the whole configuration
    Replace(RevealConfig),
}

/// Embedded content changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMsg {
    /// Replace front content; `None` removes it
    SetFront(Option<ContentId>),
    /// Replace side content; `None` removes it
    SetSide(Option<ContentId>),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Reveal(RevealMsg),
    /// Raw pointer sample over the front panel
    Touch(TouchSample),
    Config(ConfigMsg),
    Content(ContentMsg),
    /// The host laid the component out at a new size
    Resize { width: f32, height: f32 },
}

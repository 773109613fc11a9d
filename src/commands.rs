//! Command types for the Elm-style architecture
//!
//! Commands are requests for the host's rendering layer. The core never waits
//! on them: an `Animate` that arrives while another is running simply retargets
//! the same animatable properties.

use serde::Serialize;

use crate::config::{RevealConfig, INTERACTIVE_DAMPING, INTERACTIVE_DURATION};
use crate::model::{ContentId, ContentSlot};
use crate::overlay::OverlayState;

/// Visual target for the animatable properties: front offset and overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelFrame {
    pub offset: f32,
    pub overlay: OverlayState,
}

/// Spring timing for an animated change
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationCurve {
    /// Seconds until the motion comes to rest
    pub duration: f32,
    /// Damping ratio in `(0, 1]`
    pub damping: f32,
}

impl AnimationCurve {
    /// Snappy curve for following a finger during a drag
    pub const INTERACTIVE: AnimationCurve = AnimationCurve {
        duration: INTERACTIVE_DURATION,
        damping: INTERACTIVE_DAMPING,
    };

    /// Curve for discrete reveal/hide transitions
    pub fn reveal(config: &RevealConfig) -> Self {
        Self {
            duration: config.reveal_duration,
            damping: config.reveal_damping,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw without changing any animated property
    Redraw,
    /// Set the frame immediately, cancelling any running animation
    Apply(PanelFrame),
    /// Animate towards the frame
    Animate {
        frame: PanelFrame,
        curve: AnimationCurve,
    },
    /// Attach content to a container
    Embed {
        slot: ContentSlot,
        content: ContentId,
    },
    /// Detach content from a container
    Remove {
        slot: ContentSlot,
        content: ContentId,
    },
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine optional commands into one, dropping empties and nested batches
    ///
    /// Returns `None` if nothing is left, or the single command unwrapped.
    pub fn batch(cmds: impl IntoIterator<Item = Option<Cmd>>) -> Option<Cmd> {
        let mut flat = Vec::new();
        for cmd in cmds.into_iter().flatten() {
            cmd.flatten_into(&mut flat);
        }
        match flat.len() {
            0 => None,
            1 => flat.pop(),
            _ => Some(Cmd::Batch(flat)),
        }
    }

    fn flatten_into(self, out: &mut Vec<Cmd>) {
        match self {
            Cmd::None => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    cmd.flatten_into(out);
                }
            }
            other => out.push(other),
        }
    }

    /// All commands in execution order, with batches expanded
    pub fn into_vec(self) -> Vec<Cmd> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw | Cmd::Apply(_) | Cmd::Animate { .. } => true,
            Cmd::Embed { .. } | Cmd::Remove { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Target frame of the last `Apply`/`Animate` in this command, if any
    pub fn last_frame(&self) -> Option<PanelFrame> {
        match self {
            Cmd::Apply(frame) | Cmd::Animate { frame, .. } => Some(*frame),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(|c| c.last_frame()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(offset: f32) -> PanelFrame {
        PanelFrame {
            offset,
            overlay: OverlayState::default(),
        }
    }

    #[test]
    fn test_batch_of_nothing_is_none() {
        assert_eq!(Cmd::batch([None, Some(Cmd::None)]), None);
    }

    #[test]
    fn test_batch_unwraps_single() {
        assert_eq!(Cmd::batch([None, Some(Cmd::Redraw)]), Some(Cmd::Redraw));
    }

    #[test]
    fn test_batch_flattens_nested() {
        let nested = Cmd::Batch(vec![Cmd::Redraw, Cmd::Batch(vec![Cmd::Apply(frame(1.0))])]);
        let cmd = Cmd::batch([Some(nested), Some(Cmd::Apply(frame(2.0)))]).unwrap();
        assert_eq!(
            cmd.into_vec(),
            vec![Cmd::Redraw, Cmd::Apply(frame(1.0)), Cmd::Apply(frame(2.0))]
        );
    }

    #[test]
    fn test_last_frame_prefers_latest() {
        let cmd = Cmd::Batch(vec![
            Cmd::Apply(frame(1.0)),
            Cmd::Animate {
                frame: frame(5.0),
                curve: AnimationCurve::INTERACTIVE,
            },
            Cmd::Redraw,
        ]);
        assert_eq!(cmd.last_frame(), Some(frame(5.0)));
        assert!(cmd.needs_redraw());
    }
}

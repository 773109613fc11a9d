//! Headless command executor
//!
//! `Presenter` plays the part of the platform animation layer: it receives the
//! commands produced by `update`, runs spring motion for the front offset and
//! overlay opacity, and tracks which content is attached where.

use std::time::Duration;

use serde::Serialize;

use crate::animation::SpringMotion;
use crate::color::Color;
use crate::commands::{Cmd, PanelFrame};
use crate::model::{ContentId, ContentSlot};

/// What is on screen right now
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentedFrame {
    pub offset: f32,
    pub overlay_alpha: f32,
    pub overlay_color: Color,
    pub overlay_interactive: bool,
    pub animating: bool,
}

#[derive(Debug, Clone)]
pub struct Presenter {
    offset: SpringMotion,
    overlay_alpha: SpringMotion,
    overlay_color: Color,
    overlay_interactive: bool,
    front: Option<ContentId>,
    side: Option<ContentId>,
    needs_redraw: bool,
}

impl Default for Presenter {
    fn default() -> Self {
        Self {
            offset: SpringMotion::at_rest(0.0),
            overlay_alpha: SpringMotion::at_rest(0.0),
            overlay_color: Color::default(),
            overlay_interactive: false,
            front: None,
            side: None,
            needs_redraw: false,
        }
    }
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one command (batches are expanded in order)
    pub fn execute(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => self.needs_redraw = true,
            Cmd::Apply(frame) => {
                self.offset.snap_to(frame.offset);
                self.overlay_alpha.snap_to(frame.overlay.alpha);
                self.set_overlay_target(&frame);
            }
            Cmd::Animate { frame, curve } => {
                self.offset.retarget(frame.offset, curve);
                self.overlay_alpha.retarget(frame.overlay.alpha, curve);
                self.set_overlay_target(&frame);
            }
            Cmd::Embed { slot, content } => {
                tracing::debug!(target: "presenter", slot = slot.display_name(), %content, "attach");
                *self.slot_mut(slot) = Some(content);
                self.needs_redraw = true;
            }
            Cmd::Remove { slot, content } => {
                let current = self.slot_mut(slot);
                if current.as_ref() == Some(&content) {
                    *current = None;
                } else {
                    tracing::warn!(
                        target: "presenter",
                        slot = slot.display_name(),
                        %content,
                        "remove for content that is not attached"
                    );
                }
                self.needs_redraw = true;
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd);
                }
            }
        }
    }

    fn set_overlay_target(&mut self, frame: &PanelFrame) {
        self.overlay_color = frame.overlay.color;
        self.overlay_interactive = frame.overlay.interactive;
        self.needs_redraw = true;
    }

    fn slot_mut(&mut self, slot: ContentSlot) -> &mut Option<ContentId> {
        match slot {
            ContentSlot::Front => &mut self.front,
            ContentSlot::Side => &mut self.side,
        }
    }

    /// Step all running motion forward
    ///
    /// Returns `true` while anything is still animating.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let seconds = dt.as_secs_f32();
        let offset_running = self.offset.advance(seconds);
        let overlay_running = self.overlay_alpha.advance(seconds);
        if offset_running || overlay_running {
            self.needs_redraw = true;
        }
        offset_running || overlay_running
    }

    pub fn is_animating(&self) -> bool {
        !self.offset.is_settled() || !self.overlay_alpha.is_settled()
    }

    /// Take the pending redraw flag
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn content(&self, slot: ContentSlot) -> Option<&ContentId> {
        match slot {
            ContentSlot::Front => self.front.as_ref(),
            ContentSlot::Side => self.side.as_ref(),
        }
    }

    pub fn presented(&self) -> PresentedFrame {
        PresentedFrame {
            offset: self.offset.position(),
            // Springs may overshoot; opacity cannot
            overlay_alpha: self.overlay_alpha.position().clamp(0.0, 1.0),
            overlay_color: self.overlay_color,
            overlay_interactive: self.overlay_interactive,
            animating: self.is_animating(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AnimationCurve;
    use crate::overlay::OverlayState;

    fn revealed_frame() -> PanelFrame {
        PanelFrame {
            offset: 250.0,
            overlay: OverlayState {
                color: Color::BLACK,
                alpha: 0.3,
                interactive: true,
            },
        }
    }

    #[test]
    fn test_apply_is_immediate() {
        let mut presenter = Presenter::new();
        presenter.execute(Cmd::Apply(revealed_frame()));
        let frame = presenter.presented();
        assert_eq!(frame.offset, 250.0);
        assert_eq!(frame.overlay_alpha, 0.3);
        assert!(!frame.animating);
        assert!(presenter.take_redraw());
        assert!(!presenter.take_redraw());
    }

    #[test]
    fn test_animate_settles_on_target() {
        let mut presenter = Presenter::new();
        presenter.execute(Cmd::Animate {
            frame: revealed_frame(),
            curve: AnimationCurve {
                duration: 0.7,
                damping: 0.8,
            },
        });
        assert!(presenter.is_animating());
        while presenter.advance(Duration::from_millis(16)) {}
        let frame = presenter.presented();
        assert_eq!(frame.offset, 250.0);
        assert_eq!(frame.overlay_alpha, 0.3);
        assert!(frame.overlay_interactive);
    }

    #[test]
    fn test_embed_and_remove() {
        let mut presenter = Presenter::new();
        presenter.execute(Cmd::Batch(vec![
            Cmd::Embed {
                slot: ContentSlot::Side,
                content: "menu".into(),
            },
            Cmd::Remove {
                slot: ContentSlot::Side,
                content: "menu".into(),
            },
            Cmd::Embed {
                slot: ContentSlot::Side,
                content: "bookmarks".into(),
            },
        ]));
        assert_eq!(
            presenter.content(ContentSlot::Side),
            Some(&ContentId::new("bookmarks"))
        );
        assert_eq!(presenter.content(ContentSlot::Front), None);
    }
}

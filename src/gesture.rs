//! Edge-swipe drag interpretation
//!
//! Turns raw horizontal touch samples into reveal intents. A drag can only
//! begin while the panel is hidden and the finger is inside the activation
//! strip at the leading edge of the front panel. Once started, the session
//! persists for the rest of the gesture even if the finger leaves the strip.
//!
//! All boundary comparisons are strict:
//! - a sample exactly on the strip edge does not start a session
//! - a sample exactly at `reveal_width` keeps tracking (only beyond ends early)
//! - a release exactly at `reveal_width / 2` snaps to revealed

use serde::{Deserialize, Serialize};

/// Phase of a pointer sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchPhase {
    Moved,
    Ended,
    Cancelled,
}

/// One pointer sample, in the component's local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchSample {
    pub phase: TouchPhase,
    pub x: f32,
}

impl TouchSample {
    pub fn moved(x: f32) -> Self {
        Self {
            phase: TouchPhase::Moved,
            x,
        }
    }

    pub fn ended(x: f32) -> Self {
        Self {
            phase: TouchPhase::Ended,
            x,
        }
    }

    pub fn cancelled(x: f32) -> Self {
        Self {
            phase: TouchPhase::Cancelled,
            x,
        }
    }
}

/// Everything the interpreter needs to judge one sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragContext {
    pub swipe_enabled: bool,
    pub is_revealed: bool,
    /// Right edge of the activation strip
    pub strip_edge: f32,
    pub reveal_width: f32,
}

/// A drag in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_x: f32,
    /// Set once the finger has moved past the activation strip
    pub left_strip: bool,
}

/// What the controller should do with a sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Not part of a reveal drag
    Ignored,
    /// A session was armed; nothing moves yet
    Started,
    /// Follow the finger to this offset
    Track(f32),
    /// Session over; settle revealed (`true`) or hidden (`false`)
    Snap(bool),
}

#[derive(Debug, Clone, Default)]
pub struct DragInterpreter {
    session: Option<DragSession>,
}

impl DragInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Drop the current session without producing an outcome
    pub fn cancel(&mut self) -> Option<DragSession> {
        self.session.take()
    }

    pub fn interpret(&mut self, sample: TouchSample, ctx: DragContext) -> DragOutcome {
        let Some(session) = self.session.as_mut() else {
            return self.try_start(sample, ctx);
        };

        match sample.phase {
            TouchPhase::Moved => {
                if sample.x < ctx.strip_edge {
                    if !session.left_strip {
                        return DragOutcome::Ignored;
                    }
                    tracing::debug!(target: "gesture", x = sample.x, "fell back into strip, hiding");
                    self.session = None;
                    return DragOutcome::Snap(false);
                }
                session.left_strip = true;

                if sample.x > ctx.reveal_width {
                    tracing::debug!(target: "gesture", x = sample.x, "passed reveal width, revealing");
                    self.session = None;
                    return DragOutcome::Snap(true);
                }
                DragOutcome::Track(sample.x)
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.session = None;
                let reveal = !(sample.x < ctx.reveal_width / 2.0);
                tracing::debug!(
                    target: "gesture",
                    x = sample.x,
                    phase = ?sample.phase,
                    reveal,
                    "released"
                );
                DragOutcome::Snap(reveal)
            }
        }
    }

    fn try_start(&mut self, sample: TouchSample, ctx: DragContext) -> DragOutcome {
        if sample.phase != TouchPhase::Moved || !ctx.swipe_enabled || ctx.is_revealed {
            return DragOutcome::Ignored;
        }
        if !(sample.x >= 0.0 && sample.x < ctx.strip_edge) {
            return DragOutcome::Ignored;
        }
        tracing::debug!(target: "gesture", x = sample.x, strip_edge = ctx.strip_edge, "drag started");
        self.session = Some(DragSession {
            start_x: sample.x,
            left_strip: false,
        });
        DragOutcome::Started
    }
}

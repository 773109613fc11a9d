//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod config;
mod content;
mod gesture;
mod reveal;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::RevealModel;

#[cfg(debug_assertions)]
use crate::tracing::RevealSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use config::{apply_pending_config, update_config};
pub use content::update_content;
pub use gesture::update_gesture;
pub use reveal::{reveal_side, update_reveal};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut RevealModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut RevealModel, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Reveal(m) => update_reveal(model, m),
        Msg::Touch(sample) => update_gesture(model, sample),
        Msg::Config(m) => update_config(model, m),
        Msg::Content(m) => update_content(model, m),
        Msg::Resize { width, height } => {
            model.viewport.width = width.max(0.0);
            model.viewport.height = height.max(0.0);
            Some(Cmd::Redraw)
        }
    };

    model.sync_overlay();

    result
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut RevealModel, msg: Msg) -> Option<Cmd> {
    // Pointer moves arrive at frame rate
    let is_noisy = matches!(&msg, Msg::Touch(sample) if sample.phase == crate::gesture::TouchPhase::Moved);

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = RevealSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = RevealSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "reveal", %diff, "state changed");
    }

    model.state.assert_invariants(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Reveal::Toggle`
/// - `Touch::TouchSample { phase: Moved, x: 12.0 }`
/// - `Resize(375x667)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Reveal(m) => format!("Reveal::{:?}", m),
        Msg::Touch(s) => format!("Touch::{:?}", s),
        Msg::Config(m) => format!("Config::{:?}", m),
        Msg::Content(m) => format!("Content::{:?}", m),
        Msg::Resize { width, height } => format!("Resize({}x{})", width, height),
    }
}

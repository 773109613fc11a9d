//! Reveal state transitions (toggle, explicit reveal, overlay tap)

use crate::commands::{AnimationCurve, Cmd};
use crate::messages::RevealMsg;
use crate::model::RevealModel;

use super::config::apply_pending_config;

pub fn update_reveal(model: &mut RevealModel, msg: RevealMsg) -> Option<Cmd> {
    match msg {
        RevealMsg::Toggle => {
            // Mid-drag the offset is between bounds; use the nearer one as
            // the current discrete state and abandon the drag.
            let (revealed, flushed) = if model.drag.cancel().is_some() {
                let revealed = model.state.nearest_revealed();
                (revealed, apply_pending_config(model))
            } else {
                (model.state.is_revealed(), None)
            };
            Cmd::batch([flushed, reveal_side(model, !revealed, true)])
        }

        RevealMsg::Reveal { reveal, animated } => {
            let flushed = model
                .drag
                .cancel()
                .and_then(|_| apply_pending_config(model));
            Cmd::batch([flushed, reveal_side(model, reveal, animated)])
        }

        RevealMsg::OverlayTapped => {
            if model.overlay.interactive {
                // A drag resting on the bound also makes the overlay interactive
                let flushed = model
                    .drag
                    .cancel()
                    .and_then(|_| apply_pending_config(model));
                Cmd::batch([flushed, reveal_side(model, false, true)])
            } else {
                tracing::trace!(target: "reveal", "overlay tap ignored while hidden");
                None
            }
        }
    }
}

/// Move to the resting position for `reveal`
///
/// The delegate hears about it first, every time, including when the panel is
/// already in the requested state.
pub fn reveal_side(model: &mut RevealModel, reveal: bool, animated: bool) -> Option<Cmd> {
    model.delegate.notify(reveal, animated);

    tracing::debug!(
        target: "reveal",
        reveal,
        animated,
        from = model.state.current_offset(),
        "reveal side"
    );

    model.state.snap(reveal);
    model.sync_overlay();
    let frame = model.frame();

    if animated {
        Some(Cmd::Animate {
            frame,
            curve: AnimationCurve::reveal(&model.config),
        })
    } else {
        Some(Cmd::Apply(frame))
    }
}

//! Configuration changes
//!
//! A config is fixed for the duration of a drag. Changes arriving mid-drag are
//! staged in `pending_config` and applied when the drag ends.

use crate::commands::Cmd;
use crate::config::RevealConfig;
use crate::messages::ConfigMsg;
use crate::model::RevealModel;

pub fn update_config(model: &mut RevealModel, msg: ConfigMsg) -> Option<Cmd> {
    let mut next = model
        .pending_config
        .clone()
        .unwrap_or_else(|| model.config.clone());

    let result = match msg {
        ConfigMsg::SetRevealWidth(width) => next.set_reveal_width(width),
        ConfigMsg::SetRevealDuration(seconds) => next.set_reveal_duration(seconds),
        ConfigMsg::SetRevealDamping(damping) => next.set_reveal_damping(damping),
        ConfigMsg::SetOverlayColor(color) => {
            next.overlay_color = color;
            Ok(())
        }
        ConfigMsg::SetOverlayAlpha(alpha) => next.set_overlay_alpha(alpha),
        ConfigMsg::SetRevealOnSwipe(enabled) => {
            next.swipe_enabled = enabled;
            Ok(())
        }
        ConfigMsg::SetSwipeStartZoneFraction(fraction) => {
            next.set_swipe_start_zone_fraction(fraction)
        }
        ConfigMsg::Replace(config) => {
            let valid = config.validate();
            if valid.is_ok() {
                next = config;
            }
            valid
        }
    };

    if let Err(e) = result {
        tracing::warn!(target: "config", "Rejected config change: {}", e);
        return None;
    }

    if model.drag.is_active() {
        tracing::debug!(target: "config", "Drag in progress, deferring config change");
        model.pending_config = Some(next);
        return None;
    }

    apply_config(model, next)
}

/// Apply a config staged during a drag, if any
pub fn apply_pending_config(model: &mut RevealModel) -> Option<Cmd> {
    let config = model.pending_config.take()?;
    tracing::debug!(target: "config", "Applying deferred config change");
    apply_config(model, config)
}

fn apply_config(model: &mut RevealModel, config: RevealConfig) -> Option<Cmd> {
    let before = model.frame();

    if config.reveal_width != model.config.reveal_width {
        model.state.set_reveal_width(config.reveal_width);
    }
    model.config = config;
    model.sync_overlay();

    let after = model.frame();
    (after != before).then_some(Cmd::Apply(after))
}

//! Touch sample handling for swipe-to-reveal

use crate::commands::{AnimationCurve, Cmd};
use crate::gesture::{DragOutcome, TouchSample};
use crate::model::RevealModel;

use super::config::apply_pending_config;
use super::reveal::reveal_side;

pub fn update_gesture(model: &mut RevealModel, sample: TouchSample) -> Option<Cmd> {
    let ctx = model.drag_context();
    match model.drag.interpret(sample, ctx) {
        DragOutcome::Ignored | DragOutcome::Started => None,

        DragOutcome::Track(x) => {
            model.state.set_offset(x);
            model.sync_overlay();
            Some(Cmd::Animate {
                frame: model.frame(),
                curve: AnimationCurve::INTERACTIVE,
            })
        }

        DragOutcome::Snap(reveal) => {
            let flushed = apply_pending_config(model);
            Cmd::batch([flushed, reveal_side(model, reveal, true)])
        }
    }
}

//! Front/side content replacement

use crate::commands::Cmd;
use crate::messages::ContentMsg;
use crate::model::{ContentSlot, RevealModel};

pub fn update_content(model: &mut RevealModel, msg: ContentMsg) -> Option<Cmd> {
    let (slot, content) = match msg {
        ContentMsg::SetFront(content) => (ContentSlot::Front, content),
        ContentMsg::SetSide(content) => (ContentSlot::Side, content),
    };

    let cmds = model.container_mut(slot).replace(content);
    Cmd::batch(cmds.into_iter().map(Some))
}

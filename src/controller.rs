//! `SideReveal` - the public face of the component
//!
//! Wraps a `RevealModel` and routes every operation through `update`, handing
//! the resulting command back to the caller for execution.
//!
//! Only one `SideReveal` should exist per application. Nothing global enforces
//! this; the composition root that builds the UI owns the single instance and
//! passes it to whoever needs it.

use crate::color::Color;
use crate::commands::Cmd;
use crate::config::RevealConfig;
use crate::delegate::RevealDelegate;
use crate::gesture::TouchSample;
use crate::layout::{hit_test, HitTarget, PanelFrames};
use crate::messages::{ConfigMsg, ContentMsg, Msg, RevealMsg};
use crate::model::{ContentId, ContentSlot, RevealModel};
use crate::overlay::OverlayState;
use crate::update::update;

/// Named relationship used by declarative layouts to assign content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipLink {
    Front,
    Side,
}

impl RelationshipLink {
    pub const FRONT_IDENTIFIER: &'static str = "SideRevealKit-Front";
    pub const SIDE_IDENTIFIER: &'static str = "SideRevealKit-Side";

    pub fn identifier(&self) -> &'static str {
        match self {
            RelationshipLink::Front => Self::FRONT_IDENTIFIER,
            RelationshipLink::Side => Self::SIDE_IDENTIFIER,
        }
    }

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            Self::FRONT_IDENTIFIER => Some(RelationshipLink::Front),
            Self::SIDE_IDENTIFIER => Some(RelationshipLink::Side),
            _ => None,
        }
    }

    pub fn slot(&self) -> ContentSlot {
        match self {
            RelationshipLink::Front => ContentSlot::Front,
            RelationshipLink::Side => ContentSlot::Side,
        }
    }
}

#[derive(Debug, Default)]
pub struct SideReveal {
    model: RevealModel,
}

impl SideReveal {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            model: RevealModel::new(config),
        }
    }

    /// Feed any message through `update`
    pub fn dispatch(&mut self, msg: Msg) -> Option<Cmd> {
        update(&mut self.model, msg)
    }

    pub fn model(&self) -> &RevealModel {
        &self.model
    }

    // === Content ===

    pub fn set_front_content(&mut self, content: Option<ContentId>) -> Option<Cmd> {
        self.dispatch(Msg::Content(ContentMsg::SetFront(content)))
    }

    pub fn set_side_content(&mut self, content: Option<ContentId>) -> Option<Cmd> {
        self.dispatch(Msg::Content(ContentMsg::SetSide(content)))
    }

    pub fn content(&self, slot: ContentSlot) -> Option<&ContentId> {
        self.model.content(slot)
    }

    /// Assign content through a relationship identifier
    ///
    /// Unknown identifiers are ignored.
    pub fn perform_link(&mut self, identifier: &str, content: ContentId) -> Option<Cmd> {
        let Some(link) = RelationshipLink::from_identifier(identifier) else {
            tracing::warn!(target: "content", identifier, "unknown relationship identifier");
            return None;
        };
        match link {
            RelationshipLink::Front => self.set_front_content(Some(content)),
            RelationshipLink::Side => self.set_side_content(Some(content)),
        }
    }

    // === Reveal ===

    pub fn toggle_reveal(&mut self) -> Option<Cmd> {
        self.dispatch(Msg::Reveal(RevealMsg::Toggle))
    }

    pub fn reveal_side(&mut self, reveal: bool, animated: bool) -> Option<Cmd> {
        self.dispatch(Msg::Reveal(RevealMsg::Reveal { reveal, animated }))
    }

    pub fn is_revealed(&self) -> bool {
        self.model.is_revealed()
    }

    pub fn current_offset(&self) -> f32 {
        self.model.state.current_offset()
    }

    pub fn is_dragging(&self) -> bool {
        self.model.drag.is_active()
    }

    // === Input ===

    pub fn handle_touch(&mut self, sample: TouchSample) -> Option<Cmd> {
        self.dispatch(Msg::Touch(sample))
    }

    pub fn tap_overlay(&mut self) -> Option<Cmd> {
        self.dispatch(Msg::Reveal(RevealMsg::OverlayTapped))
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Option<Cmd> {
        self.dispatch(Msg::Resize { width, height })
    }

    /// What a pointer at `(x, y)` would hit
    pub fn hit_test(&self, x: f32, y: f32) -> HitTarget {
        hit_test(&self.model.frames(), &self.model.overlay, x, y)
    }

    pub fn frames(&self) -> PanelFrames {
        self.model.frames()
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.model.overlay
    }

    // === Delegate ===

    pub fn set_delegate(&mut self, delegate: impl RevealDelegate + 'static) {
        self.model.delegate.set(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.model.delegate.clear();
    }

    // === Configuration ===

    pub fn config(&self) -> &RevealConfig {
        &self.model.config
    }

    pub fn set_config(&mut self, config: RevealConfig) -> Option<Cmd> {
        self.dispatch(Msg::Config(ConfigMsg::Replace(config)))
    }

    pub fn set_reveal_width(&mut self, width: f32) -> Option<Cmd> {
        self.dispatch(Msg::Config(ConfigMsg::SetRevealWidth(width)))
    }

    pub fn set_reveal_duration(&mut self, seconds: f32) -> Option<Cmd> {
        self.dispatch(Msg::Config(ConfigMsg::SetRevealDuration(seconds)))
    }

    pub fn set_reveal_damping(&mut self, damping: f32) -> Option<Cmd> {
        self.dispatch(Msg::Config(ConfigMsg::SetRevealDamping(damping)))
    }

    pub fn set_overlay_color(&mut self, color: Color) -> Option<Cmd> {
        self.dispatch(Msg::Config(ConfigMsg::SetOverlayColor(color)))
    }

    pub fn set_overlay_alpha(&mut self, alpha: f32) -> Option<Cmd> {
        self.dispatch(Msg::Config(ConfigMsg::SetOverlayAlpha(alpha)))
    }

    pub fn set_reveal_on_swipe(&mut self, enabled: bool) -> Option<Cmd> {
        self.dispatch(Msg::Config(ConfigMsg::SetRevealOnSwipe(enabled)))
    }

    pub fn set_swipe_start_zone_fraction(&mut self, fraction: f32) -> Option<Cmd> {
        self.dispatch(Msg::Config(ConfigMsg::SetSwipeStartZoneFraction(fraction)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_identifiers() {
        assert_eq!(RelationshipLink::Front.identifier(), "SideRevealKit-Front");
        assert_eq!(RelationshipLink::Side.identifier(), "SideRevealKit-Side");
        assert_eq!(
            RelationshipLink::from_identifier("SideRevealKit-Side"),
            Some(RelationshipLink::Side)
        );
        assert_eq!(RelationshipLink::from_identifier("sidereveal-side"), None);
        assert_eq!(RelationshipLink::Front.slot(), ContentSlot::Front);
    }

    #[test]
    fn test_perform_link_routes_to_slot() {
        let mut reveal = SideReveal::default();
        reveal.perform_link("SideRevealKit-Front", "home".into());
        reveal.perform_link("SideRevealKit-Side", "menu".into());
        assert_eq!(reveal.content(ContentSlot::Front), Some(&ContentId::new("home")));
        assert_eq!(reveal.content(ContentSlot::Side), Some(&ContentId::new("menu")));
        assert_eq!(reveal.perform_link("bogus", "x".into()), None);
    }
}

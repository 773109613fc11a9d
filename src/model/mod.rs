//! Reveal model - the complete state of one side-reveal component
//!
//! This module contains all the state types following the Elm Architecture
//! pattern. Only `update` mutates a `RevealModel`.

pub mod container;
pub mod state;

pub use container::{ContentId, ContentSlot, PanelContainer};
pub use state::RevealState;

use crate::commands::PanelFrame;
use crate::config::RevealConfig;
use crate::delegate::DelegateSlot;
use crate::gesture::{DragContext, DragInterpreter};
use crate::layout::{PanelFrames, Viewport};
use crate::overlay::OverlayState;

/// The complete component model
#[derive(Debug)]
pub struct RevealModel {
    /// Active configuration
    pub config: RevealConfig,
    /// Configuration change requested mid-drag, applied when the drag ends
    pub pending_config: Option<RevealConfig>,
    /// Front panel offset
    pub state: RevealState,
    /// Overlay derived from `state` and `config`; refreshed after each update
    pub overlay: OverlayState,
    /// Edge-swipe session tracking
    pub drag: DragInterpreter,
    /// Component bounds as laid out by the host
    pub viewport: Viewport,
    /// Lazily created on first content assignment
    pub front: Option<PanelContainer>,
    /// Lazily created on first content assignment
    pub side: Option<PanelContainer>,
    /// Single `will_reveal` listener
    pub delegate: DelegateSlot,
}

impl RevealModel {
    /// Build a hidden model; an out-of-range config is replaced by the defaults
    pub fn new(config: RevealConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!(target: "config", "Rejected initial config: {}, using defaults", e);
                RevealConfig::default()
            }
        };
        let state = RevealState::new(config.reveal_width);
        let overlay = OverlayState::derive(&state, &config);
        Self {
            config,
            pending_config: None,
            state,
            overlay,
            drag: DragInterpreter::new(),
            viewport: Viewport::default(),
            front: None,
            side: None,
            delegate: DelegateSlot::default(),
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    /// Recompute the overlay from the current state
    pub fn sync_overlay(&mut self) {
        self.overlay = OverlayState::derive(&self.state, &self.config);
    }

    /// Target frame for the animatable properties
    pub fn frame(&self) -> PanelFrame {
        PanelFrame {
            offset: self.state.current_offset(),
            overlay: OverlayState::derive(&self.state, &self.config),
        }
    }

    /// Container frames at the current model offset
    pub fn frames(&self) -> PanelFrames {
        PanelFrames::compute(
            self.viewport,
            self.state.current_offset(),
            self.config.reveal_width,
        )
    }

    pub fn drag_context(&self) -> DragContext {
        DragContext {
            swipe_enabled: self.config.swipe_enabled,
            is_revealed: self.state.is_revealed(),
            strip_edge: self.config.swipe_strip_edge(self.viewport.width),
            reveal_width: self.config.reveal_width,
        }
    }

    /// Front container, created on first access
    pub fn front_container_mut(&mut self) -> &mut PanelContainer {
        self.front
            .get_or_insert_with(|| PanelContainer::new(ContentSlot::Front))
    }

    /// Side container, created on first access
    pub fn side_container_mut(&mut self) -> &mut PanelContainer {
        self.side
            .get_or_insert_with(|| PanelContainer::new(ContentSlot::Side))
    }

    pub fn container_mut(&mut self, slot: ContentSlot) -> &mut PanelContainer {
        match slot {
            ContentSlot::Front => self.front_container_mut(),
            ContentSlot::Side => self.side_container_mut(),
        }
    }

    pub fn content(&self, slot: ContentSlot) -> Option<&ContentId> {
        let container = match slot {
            ContentSlot::Front => self.front.as_ref(),
            ContentSlot::Side => self.side.as_ref(),
        };
        container.and_then(|c| c.content())
    }
}

impl Default for RevealModel {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}

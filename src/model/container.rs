//! Front and side content containers
//!
//! Each container embeds at most one piece of host content, identified by a
//! `ContentId`. The host maps ids to its real views and performs the
//! attach/detach described by the returned commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::commands::Cmd;

/// Which container a piece of content lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSlot {
    Front,
    Side,
}

impl ContentSlot {
    pub fn display_name(&self) -> &'static str {
        match self {
            ContentSlot::Front => "front",
            ContentSlot::Side => "side",
        }
    }
}

/// Host-assigned identifier for embedded content
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub String);

impl ContentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A container holding zero or one embedded content item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelContainer {
    slot: ContentSlot,
    content: Option<ContentId>,
}

impl PanelContainer {
    pub fn new(slot: ContentSlot) -> Self {
        Self {
            slot,
            content: None,
        }
    }

    pub fn slot(&self) -> ContentSlot {
        self.slot
    }

    pub fn content(&self) -> Option<&ContentId> {
        self.content.as_ref()
    }

    /// Swap the embedded content
    ///
    /// The previous item, if any, is removed before the new one is embedded.
    /// Passing `None` only removes.
    pub fn replace(&mut self, content: Option<ContentId>) -> Vec<Cmd> {
        let mut cmds = Vec::with_capacity(2);
        if let Some(old) = self.content.take() {
            tracing::debug!(target: "content", slot = self.slot.display_name(), %old, "removing");
            cmds.push(Cmd::Remove {
                slot: self.slot,
                content: old,
            });
        }
        if let Some(new) = content {
            tracing::debug!(target: "content", slot = self.slot.display_name(), %new, "embedding");
            cmds.push(Cmd::Embed {
                slot: self.slot,
                content: new.clone(),
            });
            self.content = Some(new);
        }
        cmds
    }
}

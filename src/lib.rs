//! Side Reveal - Elm-style slide-to-reveal side panel controller
//!
//! A front panel slides aside to reveal a side panel, either on command
//! (`toggle_reveal`, `reveal_side`) or by an edge swipe. The crate is headless:
//! the host feeds in touch samples and layout sizes, and executes the returned
//! `Cmd`s against its own views and animation system.

pub mod animation;
pub mod color;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod delegate;
pub mod gesture;
pub mod layout;
pub mod messages;
pub mod model;
pub mod overlay;
pub mod runtime;
pub mod script;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::RevealConfig;
pub use controller::{RelationshipLink, SideReveal};
pub use delegate::RevealDelegate;
pub use gesture::{TouchPhase, TouchSample};
pub use messages::Msg;
pub use model::RevealModel;
pub use runtime::Presenter;

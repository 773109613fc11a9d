//! Runtime module - command execution outside the pure update loop
//!
//! - `presenter` - headless animation layer that runs `Cmd`s and samples frames

pub mod presenter;

pub use presenter::{PresentedFrame, Presenter};

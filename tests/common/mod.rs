//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use side_reveal::config::RevealConfig;
use side_reveal::{Cmd, Presenter, SideReveal};

pub const VIEWPORT_WIDTH: f32 = 375.0;
pub const VIEWPORT_HEIGHT: f32 = 667.0;

/// Every `will_reveal` call, in order
pub type Calls = Rc<RefCell<Vec<(bool, bool)>>>;

/// Create a laid-out component with the given reveal width and a recording delegate
pub fn test_reveal(reveal_width: f32) -> (SideReveal, Calls) {
    let config = RevealConfig {
        reveal_width,
        ..RevealConfig::default()
    };
    test_reveal_with(config)
}

/// Same as `test_reveal` but with a full config
pub fn test_reveal_with(config: RevealConfig) -> (SideReveal, Calls) {
    let mut reveal = SideReveal::new(config);
    reveal.resize(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);

    let calls: Calls = Rc::default();
    let sink = calls.clone();
    reveal.set_delegate(move |r: bool, a: bool| sink.borrow_mut().push((r, a)));
    (reveal, calls)
}

/// Run a command on a presenter if there is one
pub fn present(presenter: &mut Presenter, cmd: Option<Cmd>) {
    if let Some(cmd) = cmd {
        presenter.execute(cmd);
    }
}

/// Assert two floats are within `1e-4`
pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {} to be close to {}",
        actual,
        expected
    );
}

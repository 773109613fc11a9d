//! Reveal notifications
//!
//! A single listener can observe every reveal transition just before it is
//! applied. Notifications are not deduplicated: asking to reveal an already
//! revealed panel still announces `will_reveal(true, ..)`.

use std::fmt;

pub trait RevealDelegate {
    /// Called synchronously before the reveal state changes
    ///
    /// `reveal` is the target state, `animated` whether the change animates.
    fn will_reveal(&mut self, reveal: bool, animated: bool);
}

impl<F> RevealDelegate for F
where
    F: FnMut(bool, bool),
{
    fn will_reveal(&mut self, reveal: bool, animated: bool) {
        self(reveal, animated)
    }
}

/// Holds at most one delegate
#[derive(Default)]
pub struct DelegateSlot {
    delegate: Option<Box<dyn RevealDelegate>>,
}

impl DelegateSlot {
    /// Install a delegate, replacing any previous one
    pub fn set(&mut self, delegate: impl RevealDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear(&mut self) {
        self.delegate = None;
    }

    pub fn is_set(&self) -> bool {
        self.delegate.is_some()
    }

    pub fn notify(&mut self, reveal: bool, animated: bool) {
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.will_reveal(reveal, animated);
        }
    }
}

impl fmt::Debug for DelegateSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegateSlot")
            .field("is_set", &self.is_set())
            .finish()
    }
}

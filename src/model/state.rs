//! Reveal state: where the front panel sits between hidden and revealed

/// Offset of the front panel, in `[0, reveal_width]`
///
/// `0` is hidden, `reveal_width` is revealed, anything in between is a drag in
/// progress. `is_revealed()` is exact equality with the upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealState {
    current_offset: f32,
    reveal_width: f32,
}

impl RevealState {
    /// Start hidden
    pub fn new(reveal_width: f32) -> Self {
        Self {
            current_offset: 0.0,
            reveal_width,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.current_offset == self.reveal_width
    }

    pub fn current_offset(&self) -> f32 {
        self.current_offset
    }

    pub fn reveal_width(&self) -> f32 {
        self.reveal_width
    }

    /// Offset of the resting position for `reveal`
    #[inline]
    pub fn bound(&self, reveal: bool) -> f32 {
        if reveal {
            self.reveal_width
        } else {
            0.0
        }
    }

    /// Fraction of the way to revealed, in `[0, 1]`
    pub fn progress(&self) -> f32 {
        self.current_offset / self.reveal_width
    }

    /// Discrete state used while the offset may be mid-drag
    ///
    /// Past the halfway point counts as revealed; exactly halfway does too.
    pub fn nearest_revealed(&self) -> bool {
        !(self.current_offset < self.reveal_width / 2.0)
    }

    /// Move to an intermediate offset, clamped to the valid range
    pub fn set_offset(&mut self, offset: f32) {
        self.current_offset = offset.clamp(0.0, self.reveal_width);
    }

    /// Jump to one of the two resting positions
    pub fn snap(&mut self, reveal: bool) {
        self.current_offset = self.bound(reveal);
    }

    /// Change the reveal width, keeping a revealed panel revealed
    pub fn set_reveal_width(&mut self, reveal_width: f32) {
        let was_revealed = self.is_revealed();
        self.reveal_width = reveal_width;
        if was_revealed {
            self.current_offset = reveal_width;
        } else {
            self.current_offset = self.current_offset.clamp(0.0, reveal_width);
        }
    }

    /// Panic if the offset escaped its bounds (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, context: &str) {
        assert!(
            (0.0..=self.reveal_width).contains(&self.current_offset),
            "[{}] reveal offset {} outside [0, {}]",
            context,
            self.current_offset,
            self.reveal_width
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_hidden() {
        let state = RevealState::new(250.0);
        assert!(!state.is_revealed());
        assert_eq!(state.current_offset(), 0.0);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_snap_revealed_hits_upper_bound_exactly() {
        let mut state = RevealState::new(250.0);
        state.snap(true);
        assert!(state.is_revealed());
        assert_eq!(state.current_offset(), 250.0);
        state.snap(false);
        assert!(!state.is_revealed());
    }

    #[test]
    fn test_set_offset_clamps() {
        let mut state = RevealState::new(250.0);
        state.set_offset(-10.0);
        assert_eq!(state.current_offset(), 0.0);
        state.set_offset(900.0);
        assert_eq!(state.current_offset(), 250.0);
        assert!(state.is_revealed());
    }

    #[test]
    fn test_nearest_revealed_tie_goes_to_revealed() {
        let mut state = RevealState::new(250.0);
        state.set_offset(125.0);
        assert!(state.nearest_revealed());
        state.set_offset(124.9);
        assert!(!state.nearest_revealed());
    }

    #[test]
    fn test_width_change_keeps_revealed() {
        let mut state = RevealState::new(250.0);
        state.snap(true);
        state.set_reveal_width(300.0);
        assert!(state.is_revealed());
        assert_eq!(state.current_offset(), 300.0);

        state.snap(false);
        state.set_reveal_width(200.0);
        assert!(!state.is_revealed());
    }
}

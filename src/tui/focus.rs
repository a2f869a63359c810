//! Focus ring over the form's data fields and its two action buttons.
//!
//! Indices `0..fields` address data fields, `fields` is Submit and
//! `fields + 1` is Cancel.

use clap::ValueEnum;

/// What sits at a given ring position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(usize),
    Action(Action),
}

/// The two buttons below the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Submit,
    Cancel,
}

/// Where backward navigation lands when it steps off index 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum WrapPolicy {
    /// Land on Submit. Matches the behaviour of earlier releases.
    #[default]
    Legacy,
    /// Land on Cancel, mirroring forward wrap.
    Symmetric,
}

/// A single movable focus position over `fields + 2` slots.
#[derive(Debug, Clone)]
pub struct FocusRing {
    fields: usize,
    index: usize,
    policy: WrapPolicy,
}

impl FocusRing {
    /// Create a ring focused on the first field.
    pub fn new(fields: usize, policy: WrapPolicy) -> Self {
        Self { fields, index: 0, policy }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of positions, buttons included.
    pub fn len(&self) -> usize {
        self.fields + 2
    }

    pub fn submit_index(&self) -> usize {
        self.fields
    }

    pub fn cancel_index(&self) -> usize {
        self.fields + 1
    }

    pub fn target(&self) -> FocusTarget {
        match self.index {
            i if i < self.fields => FocusTarget::Field(i),
            i if i == self.submit_index() => FocusTarget::Action(Action::Submit),
            _ => FocusTarget::Action(Action::Cancel),
        }
    }

    /// Index of the focused data field, if any.
    pub fn focused_field(&self) -> Option<usize> {
        match self.target() {
            FocusTarget::Field(i) => Some(i),
            FocusTarget::Action(_) => None,
        }
    }

    /// Step forward, wrapping from Cancel to the first field.
    pub fn next(&mut self) {
        self.index = if self.index >= self.cancel_index() { 0 } else { self.index + 1 };
    }

    /// Step backward. Off the low end the landing slot depends on the policy.
    pub fn prev(&mut self) {
        self.index = match (self.index, self.policy) {
            (0, WrapPolicy::Legacy) => self.submit_index(),
            (0, WrapPolicy::Symmetric) => self.cancel_index(),
            (i, _) => i - 1,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 6;

    #[test]
    fn test_full_forward_cycle_returns_to_start() {
        for start in 0..N + 2 {
            let mut ring = FocusRing::new(N, WrapPolicy::Legacy);
            for _ in 0..start {
                ring.next();
            }
            assert_eq!(ring.index(), start);
            for _ in 0..N + 2 {
                ring.next();
                assert!(ring.index() <= N + 1);
            }
            assert_eq!(ring.index(), start);
        }
    }

    #[test]
    fn test_forward_wraps_from_cancel_to_zero() {
        let mut ring = FocusRing::new(N, WrapPolicy::Legacy);
        for _ in 0..N + 1 {
            ring.next();
        }
        assert_eq!(ring.target(), FocusTarget::Action(Action::Cancel));
        ring.next();
        assert_eq!(ring.index(), 0);
    }

    #[test]
    fn test_legacy_backward_wrap_lands_on_submit() {
        let mut ring = FocusRing::new(N, WrapPolicy::Legacy);
        ring.prev();
        assert_eq!(ring.index(), N);
        assert_eq!(ring.target(), FocusTarget::Action(Action::Submit));
    }

    #[test]
    fn test_symmetric_backward_wrap_lands_on_cancel() {
        let mut ring = FocusRing::new(N, WrapPolicy::Symmetric);
        ring.prev();
        assert_eq!(ring.index(), N + 1);
        assert_eq!(ring.target(), FocusTarget::Action(Action::Cancel));
    }

    #[test]
    fn test_prev_steps_down_inside_range() {
        let mut ring = FocusRing::new(N, WrapPolicy::Legacy);
        ring.next();
        ring.next();
        ring.prev();
        assert_eq!(ring.index(), 1);
        assert_eq!(ring.focused_field(), Some(1));
    }

    #[test]
    fn test_targets() {
        let mut ring = FocusRing::new(2, WrapPolicy::Legacy);
        assert_eq!(ring.len(), 4);
        let mut seen = Vec::new();
        for _ in 0..ring.len() {
            seen.push(ring.target());
            ring.next();
        }
        assert_eq!(
            seen,
            vec![
                FocusTarget::Field(0),
                FocusTarget::Field(1),
                FocusTarget::Action(Action::Submit),
                FocusTarget::Action(Action::Cancel),
            ]
        );
    }
}

//! Recording [`Animator`] double.

use std::sync::Arc;

use astrelis_core::animation::{AnimationSpec, Animator};
use astrelis_core::math::Vec2;
use parking_lot::Mutex;

/// A recorded animator call.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimatorCall {
    SnapTo(Vec2),
    AnimateTo { target: Vec2, spec: AnimationSpec },
}

/// When `animate_to` completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionMode {
    /// The value jumps to the target inside `animate_to`.
    Instant,
    /// The animation stays running until [`MockAnimator::finish`] is called.
    Manual,
}

#[derive(Debug)]
struct MockAnimatorState {
    value: Vec2,
    pending_target: Option<Vec2>,
    mode: CompletionMode,
    calls: Vec<AnimatorCall>,
    updates: usize,
}

/// Cloneable animator double; all clones share state.
#[derive(Debug, Clone)]
pub struct MockAnimator {
    state: Arc<Mutex<MockAnimatorState>>,
}

impl MockAnimator {
    pub fn new(mode: CompletionMode) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockAnimatorState {
                value: Vec2::ZERO,
                pending_target: None,
                mode,
                calls: Vec::new(),
                updates: 0,
            })),
        }
    }

    /// Animations complete inside `animate_to`.
    pub fn instant() -> Self {
        Self::new(CompletionMode::Instant)
    }

    /// Animations stay in flight until [`finish`](Self::finish).
    pub fn manual() -> Self {
        Self::new(CompletionMode::Manual)
    }

    /// Complete the in-flight animation, landing on its target.
    ///
    /// Returns `false` if nothing was running.
    pub fn finish(&self) -> bool {
        let mut state = self.state.lock();
        match state.pending_target.take() {
            Some(target) => {
                state.value = target;
                true
            }
            None => false,
        }
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<AnimatorCall> {
        self.state.lock().calls.clone()
    }

    /// Targets passed to `animate_to`, in call order.
    pub fn animate_targets(&self) -> Vec<Vec2> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                AnimatorCall::AnimateTo { target, .. } => Some(*target),
                AnimatorCall::SnapTo(_) => None,
            })
            .collect()
    }

    /// Count `animate_to` calls.
    pub fn count_animate_calls(&self) -> usize {
        self.animate_targets().len()
    }

    /// Count `update` calls.
    pub fn count_updates(&self) -> usize {
        self.state.lock().updates
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }
}

impl Default for MockAnimator {
    fn default() -> Self {
        Self::instant()
    }
}

impl Animator for MockAnimator {
    fn value(&self) -> Vec2 {
        self.state.lock().value
    }

    fn snap_to(&mut self, value: Vec2) {
        let mut state = self.state.lock();
        state.calls.push(AnimatorCall::SnapTo(value));
        state.value = value;
        state.pending_target = None;
    }

    fn animate_to(&mut self, target: Vec2, spec: &AnimationSpec) {
        let mut state = self.state.lock();
        state.calls.push(AnimatorCall::AnimateTo {
            target,
            spec: *spec,
        });
        match state.mode {
            CompletionMode::Instant => {
                state.value = target;
                state.pending_target = None;
            }
            CompletionMode::Manual => state.pending_target = Some(target),
        }
    }

    fn update(&mut self, _dt: f32) {
        self.state.lock().updates += 1;
    }

    fn is_running(&self) -> bool {
        self.state.lock().pending_target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_mode_lands_immediately() {
        let mut animator = MockAnimator::instant();
        animator.animate_to(Vec2::new(4.0, 2.0), &AnimationSpec::Snap);

        assert!(!animator.is_running());
        assert_eq!(animator.value(), Vec2::new(4.0, 2.0));
        assert_eq!(animator.count_animate_calls(), 1);
    }

    #[test]
    fn test_manual_mode_waits_for_finish() {
        let handle = MockAnimator::manual();
        let mut animator = handle.clone();
        animator.snap_to(Vec2::ONE);
        animator.animate_to(Vec2::new(9.0, 9.0), &AnimationSpec::default());
        animator.update(0.016);

        assert!(animator.is_running());
        assert_eq!(animator.value(), Vec2::ONE);
        assert_eq!(handle.count_updates(), 1);

        assert!(handle.finish());
        assert!(!handle.finish());
        assert_eq!(animator.value(), Vec2::new(9.0, 9.0));
    }

    #[test]
    fn test_snap_cancels_pending() {
        let mut animator = MockAnimator::manual();
        animator.animate_to(Vec2::new(9.0, 9.0), &AnimationSpec::default());
        animator.snap_to(Vec2::ZERO);

        assert!(!animator.is_running());
        assert_eq!(
            animator.calls(),
            vec![
                AnimatorCall::AnimateTo {
                    target: Vec2::new(9.0, 9.0),
                    spec: AnimationSpec::default(),
                },
                AnimatorCall::SnapTo(Vec2::ZERO),
            ]
        );
    }
}

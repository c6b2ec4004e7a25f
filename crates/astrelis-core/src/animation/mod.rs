//! Animation primitives for settling values over host frames.
//!
//! The [`Animator`] trait is the capability consumers depend on: snap to a
//! value, or start animating toward a target and observe completion through
//! [`Animator::is_running`]. Animations are advanced by the host calling
//! [`Animator::update`] once per frame, so nothing here blocks or spawns.

mod easing;
mod value;

pub use easing::EasingFunction;
pub use value::AnimatedValue;

use crate::math::Vec2;

/// Stiffness used by [`AnimationSpec::default`].
pub const DEFAULT_SPRING_STIFFNESS: f32 = 1500.0;

/// Damping ratio used by [`AnimationSpec::default`] (critically damped, no bounce).
pub const DEFAULT_SPRING_DAMPING_RATIO: f32 = 1.0;

/// How an [`Animator`] should travel to its target.
///
/// Consumers treat this as opaque configuration and forward it verbatim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationSpec {
    /// Jump straight to the target.
    Snap,
    /// Interpolate over a fixed duration (seconds).
    Tween { duration: f32, easing: EasingFunction },
    /// Damped spring. A damping ratio of 1.0 is critically damped.
    Spring { stiffness: f32, damping_ratio: f32 },
}

impl AnimationSpec {
    pub fn tween(duration: f32) -> Self {
        AnimationSpec::Tween {
            duration,
            easing: EasingFunction::default(),
        }
    }

    pub fn spring(stiffness: f32, damping_ratio: f32) -> Self {
        AnimationSpec::Spring {
            stiffness,
            damping_ratio,
        }
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::spring(DEFAULT_SPRING_STIFFNESS, DEFAULT_SPRING_DAMPING_RATIO)
    }
}

/// An animatable 2D value.
pub trait Animator {
    /// Current (possibly mid-flight) value.
    fn value(&self) -> Vec2;

    /// Set the value immediately, cancelling any running animation.
    fn snap_to(&mut self, value: Vec2);

    /// Start animating from the current value toward `target`.
    ///
    /// Replaces any animation already in flight. Implementations may complete
    /// synchronously, in which case `is_running` is `false` on return.
    fn animate_to(&mut self, target: Vec2, spec: &AnimationSpec);

    /// Advance by `dt` seconds.
    fn update(&mut self, dt: f32);

    /// `true` while an animation started by `animate_to` has not completed.
    fn is_running(&self) -> bool;
}

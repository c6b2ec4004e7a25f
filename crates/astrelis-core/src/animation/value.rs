use super::{AnimationSpec, Animator, EasingFunction};
use crate::math::Vec2;

/// Maximum integration step for springs. Larger frame deltas are subdivided.
const MAX_SPRING_STEP: f32 = 0.004;

/// Distance (px) below which a spring counts as arrived.
const REST_DISTANCE: f32 = 0.01;

/// Speed (px/s) below which a spring counts as arrived.
const REST_VELOCITY: f32 = 0.5;

/// Longest frame a spring integrates. Longer deltas (a resumed host, a
/// debugger pause) are treated as this much time.
const MAX_SPRING_FRAME: f32 = 0.1;

/// Lower bound on spring stiffness; zero would never converge.
const MIN_STIFFNESS: f32 = 0.1;

/// Lower bound on the damping ratio; an undamped spring never comes to rest.
const MIN_DAMPING_RATIO: f32 = 0.1;

#[derive(Debug, Clone, PartialEq)]
enum Motion {
    Tween {
        from: Vec2,
        to: Vec2,
        duration: f32,
        elapsed: f32,
        easing: EasingFunction,
    },
    Spring {
        target: Vec2,
        velocity: Vec2,
        stiffness: f32,
        damping: f32,
    },
}

/// Frame-driven [`Animator`] supporting every [`AnimationSpec`].
///
/// Finished animations land exactly on their target value.
///
/// # Example
///
/// ```
/// use astrelis_core::animation::{AnimatedValue, AnimationSpec, Animator};
/// use astrelis_core::math::Vec2;
///
/// let mut value = AnimatedValue::new(Vec2::ZERO);
/// value.animate_to(Vec2::new(100.0, 0.0), &AnimationSpec::tween(0.2));
///
/// while value.is_running() {
///     value.update(1.0 / 60.0);
/// }
/// assert_eq!(value.value(), Vec2::new(100.0, 0.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimatedValue {
    value: Vec2,
    motion: Option<Motion>,
}

impl AnimatedValue {
    pub fn new(value: Vec2) -> Self {
        Self {
            value,
            motion: None,
        }
    }

    /// Where the running animation is heading, if any.
    pub fn target(&self) -> Option<Vec2> {
        match self.motion {
            Some(Motion::Tween { to, .. }) => Some(to),
            Some(Motion::Spring { target, .. }) => Some(target),
            None => None,
        }
    }

    fn step_spring(&mut self, dt: f32) {
        let Some(Motion::Spring {
            target,
            ref mut velocity,
            stiffness,
            damping,
        }) = self.motion
        else {
            return;
        };

        let dt = dt.min(MAX_SPRING_FRAME);
        let steps = (dt / MAX_SPRING_STEP).ceil().max(1.0) as u32;
        let step = dt / steps as f32;
        for _ in 0..steps {
            let acceleration = -stiffness * (self.value - target) - damping * *velocity;
            *velocity += acceleration * step;
            self.value += *velocity * step;
        }

        // A diverged spring lands on its target rather than running forever.
        let diverged = !self.value.is_finite() || !velocity.is_finite();
        if diverged || (self.value.distance(target) < REST_DISTANCE && velocity.length() < REST_VELOCITY) {
            self.value = target;
            self.motion = None;
        }
    }
}

impl Animator for AnimatedValue {
    fn value(&self) -> Vec2 {
        self.value
    }

    fn snap_to(&mut self, value: Vec2) {
        self.value = value;
        self.motion = None;
    }

    fn animate_to(&mut self, target: Vec2, spec: &AnimationSpec) {
        match *spec {
            AnimationSpec::Snap => self.snap_to(target),
            AnimationSpec::Tween { duration, .. } if duration <= 0.0 => self.snap_to(target),
            AnimationSpec::Tween { duration, easing } => {
                self.motion = Some(Motion::Tween {
                    from: self.value,
                    to: target,
                    duration,
                    elapsed: 0.0,
                    easing,
                });
            }
            AnimationSpec::Spring {
                stiffness,
                damping_ratio,
            } => {
                // Retargeting a running spring keeps its momentum.
                let velocity = match self.motion {
                    Some(Motion::Spring { velocity, .. }) => velocity,
                    _ => Vec2::ZERO,
                };
                let stiffness = stiffness.max(MIN_STIFFNESS);
                let damping = 2.0 * damping_ratio.max(MIN_DAMPING_RATIO) * stiffness.sqrt();

                self.motion = Some(Motion::Spring {
                    target,
                    velocity,
                    stiffness,
                    damping,
                });
            }
        }
    }

    fn update(&mut self, dt: f32) {
        if dt.is_nan() || dt <= 0.0 {
            return;
        }

        match self.motion {
            Some(Motion::Tween {
                from,
                to,
                duration,
                ref mut elapsed,
                easing,
            }) => {
                *elapsed += dt;
                if *elapsed >= duration {
                    self.value = to;
                    self.motion = None;
                } else {
                    let t = easing.apply(*elapsed / duration);
                    self.value = from.lerp(to, t);
                }
            }
            Some(Motion::Spring { .. }) => self.step_spring(dt),
            None => {}
        }
    }

    fn is_running(&self) -> bool {
        self.motion.is_some()
    }
}

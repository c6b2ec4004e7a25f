//! Test utilities for Astrelis crates.
//!
//! - [`MockAnimator`] - An [`Animator`](astrelis_core::animation::Animator) that
//!   records every call and completes either instantly or on demand
//! - [`CallRecorder`] - A cloneable log for asserting on callback invocations
//!
//! # Example
//!
//! ```rust
//! use astrelis_core::animation::{AnimationSpec, Animator};
//! use astrelis_core::math::Vec2;
//! use astrelis_test_utils::MockAnimator;
//!
//! let handle = MockAnimator::manual();
//! let mut animator = handle.clone();
//!
//! animator.animate_to(Vec2::new(10.0, 0.0), &AnimationSpec::default());
//! assert!(animator.is_running());
//!
//! handle.finish();
//! assert!(!animator.is_running());
//! assert_eq!(animator.value(), Vec2::new(10.0, 0.0));
//! ```
//!
//! # Shared handles
//!
//! Both types are handles over `Arc<parking_lot::Mutex<_>>`: clone one before
//! moving it into the code under test and keep the clone for assertions.

pub mod mock_animator;
pub mod recorder;

pub use mock_animator::{AnimatorCall, CompletionMode, MockAnimator};
pub use recorder::CallRecorder;

/// SIMD-accelerated math types from [`glam`].
///
/// Pointer positions, drag offsets and sizes are all [`Vec2`]s in root
/// coordinates (logical pixels, y pointing down).
///
/// # Examples
///
/// ```
/// use astrelis_core::math::Vec2;
///
/// let origin = Vec2::new(10.0, 20.0);
/// let pointer = Vec2::new(35.0, 20.0);
/// let drag_amount = pointer - origin;
/// assert_eq!(drag_amount, Vec2::new(25.0, 0.0));
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;

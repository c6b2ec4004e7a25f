//! Draggable item records and the snapshot handed to callbacks.

use astrelis_core::animation::AnimationSpec;
use astrelis_core::geometry::Rect;
use astrelis_core::math::Vec2;

use crate::registry::{Keyed, Placed};
use crate::strategy::DropStrategy;

/// An element that can be picked up by a pointer.
///
/// Upserted by the host on every layout pass of the owning element.
#[derive(Debug, Clone, PartialEq)]
pub struct DraggableItem<K, T> {
    pub key: K,
    pub data: T,
    /// Top-left corner in root coordinates.
    pub top_left: Vec2,
    pub size: Vec2,
    /// Targets this item may be dropped on. Empty means any target.
    pub drop_targets: Vec<K>,
    pub drop_strategy: DropStrategy,
    pub drop_animation_spec: AnimationSpec,
    pub size_drop_animation_spec: AnimationSpec,
    /// Disabled items are skipped when a drag starts.
    pub enabled: bool,
    /// Overrides the surface default when set.
    pub drag_after_long_press: Option<bool>,
    /// Overrides the surface default when set.
    pub require_first_down_unconsumed: Option<bool>,
}

impl<K, T> DraggableItem<K, T> {
    pub fn new(key: K, data: T) -> Self {
        Self {
            key,
            data,
            top_left: Vec2::ZERO,
            size: Vec2::ZERO,
            drop_targets: Vec::new(),
            drop_strategy: DropStrategy::default(),
            drop_animation_spec: AnimationSpec::default(),
            size_drop_animation_spec: AnimationSpec::default(),
            enabled: true,
            drag_after_long_press: None,
            require_first_down_unconsumed: None,
        }
    }

    pub fn with_layout(mut self, top_left: Vec2, size: Vec2) -> Self {
        self.top_left = top_left;
        self.size = size;
        self
    }

    pub fn with_drop_targets(mut self, drop_targets: impl IntoIterator<Item = K>) -> Self {
        self.drop_targets = drop_targets.into_iter().collect();
        self
    }

    pub fn with_drop_strategy(mut self, drop_strategy: DropStrategy) -> Self {
        self.drop_strategy = drop_strategy;
        self
    }

    pub fn with_drop_animation_spec(mut self, spec: AnimationSpec) -> Self {
        self.drop_animation_spec = spec;
        self
    }

    pub fn with_size_drop_animation_spec(mut self, spec: AnimationSpec) -> Self {
        self.size_drop_animation_spec = spec;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_drag_after_long_press(mut self, drag_after_long_press: bool) -> Self {
        self.drag_after_long_press = Some(drag_after_long_press);
        self
    }

    pub fn with_require_first_down_unconsumed(mut self, require: bool) -> Self {
        self.require_first_down_unconsumed = Some(require);
        self
    }

    pub fn rect(&self) -> Rect<f32> {
        Rect::from_top_left_size(self.top_left, self.size)
    }
}

impl<K: PartialEq, T> DraggableItem<K, T> {
    /// Whether this item may be dropped on `target`.
    pub fn accepts_target(&self, target: &K) -> bool {
        self.drop_targets.is_empty() || self.drop_targets.contains(target)
    }
}

impl<K, T> Keyed<K> for DraggableItem<K, T> {
    fn key(&self) -> &K {
        &self.key
    }
}

impl<K, T> Placed for DraggableItem<K, T> {
    fn place(&mut self, top_left: Vec2, size: Vec2) -> bool {
        if self.top_left == top_left && self.size == size {
            return false;
        }
        self.top_left = top_left;
        self.size = size;
        true
    }
}

/// Immutable view of the item being dragged.
///
/// `data` is copied when the drag starts and does not follow later upserts.
#[derive(Debug, Clone, PartialEq)]
pub struct DraggedItem<K, T> {
    key: K,
    data: T,
    drag_amount: Vec2,
}

impl<K, T> DraggedItem<K, T> {
    pub fn new(key: K, data: T, drag_amount: Vec2) -> Self {
        Self {
            key,
            data,
            drag_amount,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Pointer displacement since the drag started.
    pub fn drag_amount(&self) -> Vec2 {
        self.drag_amount
    }

    pub(crate) fn moved_by(&self, drag_amount: Vec2) -> Self
    where
        K: Clone,
        T: Clone,
    {
        Self {
            key: self.key.clone(),
            data: self.data.clone(),
            drag_amount,
        }
    }
}

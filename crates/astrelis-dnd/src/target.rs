//! Drop target records and drop-point alignment.

use std::fmt;
use std::rc::Rc;

use astrelis_core::geometry::Rect;
use astrelis_core::math::Vec2;

use crate::item::DraggedItem;
use crate::registry::{Keyed, Placed};

/// Callback invoked with the current dragged-item snapshot.
pub type DragCallback<K, T> = Rc<dyn Fn(&DraggedItem<K, T>)>;

/// Where a dropped item settles inside its target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DropAlignment {
    TopStart,
    TopCenter,
    TopEnd,
    CenterStart,
    #[default]
    Center,
    CenterEnd,
    BottomStart,
    BottomCenter,
    BottomEnd,
    /// Fixed offset from the target's top-left corner.
    Offset(Vec2),
}

impl DropAlignment {
    /// Offset of the item's top-left relative to the target's top-left.
    pub fn offset(&self, target_size: Vec2, item_size: Vec2) -> Vec2 {
        let free = target_size - item_size;
        let (fx, fy) = match self {
            Self::TopStart => (0.0, 0.0),
            Self::TopCenter => (0.5, 0.0),
            Self::TopEnd => (1.0, 0.0),
            Self::CenterStart => (0.0, 0.5),
            Self::Center => (0.5, 0.5),
            Self::CenterEnd => (1.0, 0.5),
            Self::BottomStart => (0.0, 1.0),
            Self::BottomCenter => (0.5, 1.0),
            Self::BottomEnd => (1.0, 1.0),
            Self::Offset(offset) => return *offset,
        };
        Vec2::new(free.x * fx, free.y * fy)
    }
}

/// A region that can receive dropped items.
#[derive(Clone)]
pub struct DropTarget<K, T> {
    pub key: K,
    pub top_left: Vec2,
    pub size: Vec2,
    /// Higher layers mask the lower ones they overlap.
    pub z_index: f32,
    pub drop_alignment: DropAlignment,
    /// Added on top of the aligned position.
    pub drop_offset: Vec2,
    pub drop_animation_enabled: bool,
    on_drop: Option<DragCallback<K, T>>,
    on_drag_enter: Option<DragCallback<K, T>>,
    on_drag_exit: Option<DragCallback<K, T>>,
}

impl<K, T> DropTarget<K, T> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            top_left: Vec2::ZERO,
            size: Vec2::ZERO,
            z_index: 0.0,
            drop_alignment: DropAlignment::default(),
            drop_offset: Vec2::ZERO,
            drop_animation_enabled: true,
            on_drop: None,
            on_drag_enter: None,
            on_drag_exit: None,
        }
    }

    pub fn with_layout(mut self, top_left: Vec2, size: Vec2) -> Self {
        self.top_left = top_left;
        self.size = size;
        self
    }

    pub fn with_z_index(mut self, z_index: f32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn with_drop_alignment(mut self, drop_alignment: DropAlignment) -> Self {
        self.drop_alignment = drop_alignment;
        self
    }

    pub fn with_drop_offset(mut self, drop_offset: Vec2) -> Self {
        self.drop_offset = drop_offset;
        self
    }

    pub fn with_drop_animation_enabled(mut self, enabled: bool) -> Self {
        self.drop_animation_enabled = enabled;
        self
    }

    pub fn on_drop(self, callback: impl Fn(&DraggedItem<K, T>) + 'static) -> Self {
        self.with_on_drop(Some(Rc::new(callback)))
    }

    pub fn on_drag_enter(self, callback: impl Fn(&DraggedItem<K, T>) + 'static) -> Self {
        self.with_on_drag_enter(Some(Rc::new(callback)))
    }

    pub fn on_drag_exit(self, callback: impl Fn(&DraggedItem<K, T>) + 'static) -> Self {
        self.with_on_drag_exit(Some(Rc::new(callback)))
    }

    /// Share an existing callback. Reusing the same `Rc` across layout passes
    /// keeps the record equal, so the upsert is a no-op.
    pub fn with_on_drop(mut self, callback: Option<DragCallback<K, T>>) -> Self {
        self.on_drop = callback;
        self
    }

    pub fn with_on_drag_enter(mut self, callback: Option<DragCallback<K, T>>) -> Self {
        self.on_drag_enter = callback;
        self
    }

    pub fn with_on_drag_exit(mut self, callback: Option<DragCallback<K, T>>) -> Self {
        self.on_drag_exit = callback;
        self
    }

    pub fn drop_callback(&self) -> Option<&DragCallback<K, T>> {
        self.on_drop.as_ref()
    }

    pub fn drag_enter_callback(&self) -> Option<&DragCallback<K, T>> {
        self.on_drag_enter.as_ref()
    }

    pub fn drag_exit_callback(&self) -> Option<&DragCallback<K, T>> {
        self.on_drag_exit.as_ref()
    }

    pub fn rect(&self) -> Rect<f32> {
        Rect::from_top_left_size(self.top_left, self.size)
    }

    /// Resting top-left for a dropped item of `item_size`.
    pub fn drop_top_left(&self, item_size: Vec2) -> Vec2 {
        self.top_left + self.drop_offset + self.drop_alignment.offset(self.size, item_size)
    }
}

fn same_callback<K, T>(a: &Option<DragCallback<K, T>>, b: &Option<DragCallback<K, T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

impl<K: PartialEq, T> PartialEq for DropTarget<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.top_left == other.top_left
            && self.size == other.size
            && self.z_index == other.z_index
            && self.drop_alignment == other.drop_alignment
            && self.drop_offset == other.drop_offset
            && self.drop_animation_enabled == other.drop_animation_enabled
            && same_callback(&self.on_drop, &other.on_drop)
            && same_callback(&self.on_drag_enter, &other.on_drag_enter)
            && same_callback(&self.on_drag_exit, &other.on_drag_exit)
    }
}

impl<K: fmt::Debug, T> fmt::Debug for DropTarget<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropTarget")
            .field("key", &self.key)
            .field("top_left", &self.top_left)
            .field("size", &self.size)
            .field("z_index", &self.z_index)
            .field("drop_alignment", &self.drop_alignment)
            .field("drop_offset", &self.drop_offset)
            .field("drop_animation_enabled", &self.drop_animation_enabled)
            .field("on_drop", &self.on_drop.is_some())
            .field("on_drag_enter", &self.on_drag_enter.is_some())
            .field("on_drag_exit", &self.on_drag_exit.is_some())
            .finish()
    }
}

impl<K, T> Keyed<K> for DropTarget<K, T> {
    fn key(&self) -> &K {
        &self.key
    }
}

impl<K, T> Placed for DropTarget<K, T> {
    fn place(&mut self, top_left: Vec2, size: Vec2) -> bool {
        if self.top_left == top_left && self.size == size {
            return false;
        }
        self.top_left = top_left;
        self.size = size;
        true
    }
}

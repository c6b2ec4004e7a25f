//! List reordering on top of drag-and-drop.
//!
//! Every [`ReorderableItem`] is registered twice under one key: as a draggable
//! item and as a drop target. Hovering another element fires its
//! `on_drag_enter`, which is where a list usually calls [`move_item`].

use std::fmt::{self, Debug};
use std::hash::Hash;
use std::rc::Rc;

use astrelis_core::animation::{AnimatedValue, AnimationSpec, Animator};
use astrelis_core::math::Vec2;

use crate::config::DragAndDropConfig;
use crate::item::{DraggableItem, DraggedItem};
use crate::pointer::PointerId;
use crate::state::{DragAndDropState, DragPhase};
use crate::strategy::DropStrategy;
use crate::target::{DragCallback, DropAlignment, DropTarget};

/// Errors from list edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    /// The dragged element is not in the list.
    ItemNotFound,
    /// The hovered element is not in the list.
    TargetNotFound,
}

impl fmt::Display for ReorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReorderError::ItemNotFound => write!(f, "Dragged element not found in list"),
            ReorderError::TargetNotFound => write!(f, "Target element not found in list"),
        }
    }
}

impl std::error::Error for ReorderError {}

pub type ReorderResult<T> = Result<T, ReorderError>;

/// Move `dragged` to the index `target` currently occupies.
///
/// Returns the new index of `dragged`. Moving an element onto itself is a no-op.
///
/// # Example
///
/// ```
/// use astrelis_dnd::reorder::move_item;
///
/// let mut list = vec!["a", "b", "c", "d"];
/// assert_eq!(move_item(&mut list, &"a", &"c"), Ok(2));
/// assert_eq!(list, ["b", "c", "a", "d"]);
/// ```
pub fn move_item<T: PartialEq>(list: &mut Vec<T>, dragged: &T, target: &T) -> ReorderResult<usize> {
    let to = list
        .iter()
        .position(|element| element == target)
        .ok_or(ReorderError::TargetNotFound)?;
    let from = list
        .iter()
        .position(|element| element == dragged)
        .ok_or(ReorderError::ItemNotFound)?;

    if from != to {
        let element = list.remove(from);
        list.insert(to, element);
    }
    Ok(to)
}

/// An element that is both draggable and a drop target for its siblings.
#[derive(Clone)]
pub struct ReorderableItem<K, T> {
    pub key: K,
    pub data: T,
    pub top_left: Vec2,
    pub size: Vec2,
    pub z_index: f32,
    /// Siblings this element may be dropped on. Empty means any.
    pub drop_targets: Vec<K>,
    pub drop_strategy: DropStrategy,
    pub drop_alignment: DropAlignment,
    pub drop_offset: Vec2,
    pub drop_animation_enabled: bool,
    pub drop_animation_spec: AnimationSpec,
    pub size_drop_animation_spec: AnimationSpec,
    pub enabled: bool,
    pub drag_after_long_press: Option<bool>,
    pub require_first_down_unconsumed: Option<bool>,
    on_drop: Option<DragCallback<K, T>>,
    on_drag_enter: Option<DragCallback<K, T>>,
    on_drag_exit: Option<DragCallback<K, T>>,
}

impl<K, T> ReorderableItem<K, T> {
    pub fn new(key: K, data: T) -> Self {
        Self {
            key,
            data,
            top_left: Vec2::ZERO,
            size: Vec2::ZERO,
            z_index: 0.0,
            drop_targets: Vec::new(),
            drop_strategy: DropStrategy::default(),
            drop_alignment: DropAlignment::default(),
            drop_offset: Vec2::ZERO,
            drop_animation_enabled: true,
            drop_animation_spec: AnimationSpec::default(),
            size_drop_animation_spec: AnimationSpec::default(),
            enabled: true,
            drag_after_long_press: None,
            require_first_down_unconsumed: None,
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

    pub fn with_drop_targets(mut self, drop_targets: impl IntoIterator<Item = K>) -> Self {
        self.drop_targets = drop_targets.into_iter().collect();
        self
    }

    pub fn with_drop_strategy(mut self, drop_strategy: DropStrategy) -> Self {
        self.drop_strategy = drop_strategy;
        self
    }

    pub fn with_drop_alignment(mut self, drop_alignment: DropAlignment) -> Self {
        self.drop_alignment = drop_alignment;
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

    pub fn with_drop_animation_enabled(mut self, enabled: bool) -> Self {
        self.drop_animation_enabled = enabled;
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

    pub fn on_drop(mut self, callback: impl Fn(&DraggedItem<K, T>) + 'static) -> Self {
        self.on_drop = Some(Rc::new(callback));
        self
    }

    pub fn on_drag_enter(mut self, callback: impl Fn(&DraggedItem<K, T>) + 'static) -> Self {
        self.on_drag_enter = Some(Rc::new(callback));
        self
    }

    pub fn on_drag_exit(mut self, callback: impl Fn(&DraggedItem<K, T>) + 'static) -> Self {
        self.on_drag_exit = Some(Rc::new(callback));
        self
    }

    /// Share callbacks across layout passes so repeated upserts stay no-ops.
    pub fn with_callbacks(
        mut self,
        on_drop: Option<DragCallback<K, T>>,
        on_drag_enter: Option<DragCallback<K, T>>,
        on_drag_exit: Option<DragCallback<K, T>>,
    ) -> Self {
        self.on_drop = on_drop;
        self.on_drag_enter = on_drag_enter;
        self.on_drag_exit = on_drag_exit;
        self
    }

    /// Split into the draggable item and the drop target registered for it.
    pub fn into_parts(self) -> (DraggableItem<K, T>, DropTarget<K, T>)
    where
        K: Clone,
    {
        let target = DropTarget::new(self.key.clone())
            .with_layout(self.top_left, self.size)
            .with_z_index(self.z_index)
            .with_drop_alignment(self.drop_alignment)
            .with_drop_offset(self.drop_offset)
            .with_drop_animation_enabled(self.drop_animation_enabled)
            .with_on_drop(self.on_drop)
            .with_on_drag_enter(self.on_drag_enter)
            .with_on_drag_exit(self.on_drag_exit);

        let item = DraggableItem {
            key: self.key,
            data: self.data,
            top_left: self.top_left,
            size: self.size,
            drop_targets: self.drop_targets,
            drop_strategy: self.drop_strategy,
            drop_animation_spec: self.drop_animation_spec,
            size_drop_animation_spec: self.size_drop_animation_spec,
            enabled: self.enabled,
            drag_after_long_press: self.drag_after_long_press,
            require_first_down_unconsumed: self.require_first_down_unconsumed,
        };

        (item, target)
    }
}

impl<K: Debug, T: Debug> Debug for ReorderableItem<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReorderableItem")
            .field("key", &self.key)
            .field("data", &self.data)
            .field("top_left", &self.top_left)
            .field("size", &self.size)
            .field("z_index", &self.z_index)
            .field("drop_strategy", &self.drop_strategy)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

/// Drag-and-drop state where every element doubles as a drop target.
pub struct ReorderState<K, T, A = AnimatedValue> {
    dnd: DragAndDropState<K, T, A>,
}

impl<K, T, A> Default for ReorderState<K, T, A>
where
    K: Eq + Hash + Clone + Debug,
    T: Clone + PartialEq,
    A: Animator + Default,
{
    fn default() -> Self {
        Self::new(DragAndDropConfig::default())
    }
}

impl<K, T, A> ReorderState<K, T, A>
where
    K: Eq + Hash + Clone + Debug,
    T: Clone + PartialEq,
    A: Animator,
{
    pub fn new(config: DragAndDropConfig) -> Self
    where
        A: Default,
    {
        Self {
            dnd: DragAndDropState::new(config),
        }
    }

    pub fn with_animators(config: DragAndDropConfig, position: A, size: A) -> Self {
        Self {
            dnd: DragAndDropState::with_animators(config, position, size),
        }
    }

    /// Register or refresh an element. Returns `true` if either record changed.
    pub fn upsert_item(&mut self, item: ReorderableItem<K, T>) -> bool {
        let (item, target) = item.into_parts();
        let item_changed = self.dnd.upsert_draggable_item(item);
        let target_changed = self.dnd.upsert_drop_target(target);
        item_changed || target_changed
    }

    pub fn place_item(&mut self, key: &K, top_left: Vec2, size: Vec2) -> bool {
        let item_moved = self.dnd.place_draggable_item(key, top_left, size);
        let target_moved = self.dnd.place_drop_target(key, top_left, size);
        item_moved || target_moved
    }

    /// Unregister an element. Returns `true` if it was registered.
    pub fn remove_item(&mut self, key: &K) -> bool {
        let item = self.dnd.remove_draggable_item(key);
        let target = self.dnd.remove_drop_target(key);
        item.is_some() || target.is_some()
    }

    pub fn handle_drag_start(&mut self, pointer: PointerId, position: Vec2) -> bool {
        self.dnd.handle_drag_start(pointer, position)
    }

    pub fn handle_drag_update(&mut self, position: Vec2) {
        self.dnd.handle_drag_update(position);
    }

    pub fn handle_drag_end(&mut self) {
        self.dnd.handle_drag_end();
    }

    pub fn handle_drag_cancel(&mut self) {
        self.dnd.handle_drag_cancel();
    }

    pub fn update(&mut self, dt: f32) -> bool {
        self.dnd.update(dt)
    }

    pub fn phase(&self) -> DragPhase {
        self.dnd.phase()
    }

    pub fn hovered_target(&self) -> Option<&K> {
        self.dnd.hovered_target()
    }

    pub fn dragged_item(&self) -> Option<&DraggedItem<K, T>> {
        self.dnd.dragged_item()
    }

    pub fn is_dragging_key(&self, key: &K) -> bool {
        self.dnd.is_dragging_key(key)
    }

    /// The underlying engine, for observables and gesture handling.
    pub fn dnd_state(&self) -> &DragAndDropState<K, T, A> {
        &self.dnd
    }

    pub fn dnd_state_mut(&mut self) -> &mut DragAndDropState<K, T, A> {
        &mut self.dnd
    }
}

impl<K: Debug, T, A: Animator> Debug for ReorderState<K, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReorderState").field("dnd", &self.dnd).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_forward_and_back() {
        let mut list = vec![1, 2, 3, 4];
        assert_eq!(move_item(&mut list, &1, &3), Ok(2));
        assert_eq!(list, vec![2, 3, 1, 4]);

        assert_eq!(move_item(&mut list, &4, &2), Ok(0));
        assert_eq!(list, vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_move_onto_self_is_a_no_op() {
        let mut list = vec!['a', 'b'];
        assert_eq!(move_item(&mut list, &'b', &'b'), Ok(1));
        assert_eq!(list, vec!['a', 'b']);
    }

    #[test]
    fn test_move_reports_missing_elements() {
        let mut list = vec![1, 2];
        assert_eq!(move_item(&mut list, &1, &9), Err(ReorderError::TargetNotFound));
        assert_eq!(move_item(&mut list, &9, &1), Err(ReorderError::ItemNotFound));
        assert_eq!(list, vec![1, 2]);
        assert_eq!(ReorderError::TargetNotFound.to_string(), "Target element not found in list");
    }

    #[test]
    fn test_item_registers_as_item_and_target() {
        let mut state: ReorderState<u32, &str> = ReorderState::default();
        let element = ReorderableItem::new(1, "one").with_layout(Vec2::ZERO, Vec2::splat(10.0));

        assert!(state.upsert_item(element.clone()));
        assert!(!state.upsert_item(element));
        assert!(state.dnd_state().items().contains_key(&1));
        assert!(state.dnd_state().targets().contains_key(&1));

        assert!(state.place_item(&1, Vec2::splat(5.0), Vec2::splat(10.0)));
        assert_eq!(state.dnd_state().targets().get(&1).map(|t| t.top_left), Some(Vec2::splat(5.0)));

        assert!(state.remove_item(&1));
        assert!(!state.remove_item(&1));
    }
}

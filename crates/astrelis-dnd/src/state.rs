//! The drag-and-drop state machine.
//!
//! One [`DragAndDropState`] serves one surface. It owns the item and target
//! registries, tracks the single active drag, hit-tests targets on every move
//! and sequences the settle animation after release.
//!
//! The engine never blocks: [`handle_drag_end`](DragAndDropState::handle_drag_end)
//! and [`handle_drag_cancel`](DragAndDropState::handle_drag_cancel) start the
//! settle animations and [`update`](DragAndDropState::update) drives them each
//! frame. The deferred `on_drop` fires, and the engine returns to idle, on the
//! frame both animators finish.

use std::fmt::{self, Debug};
use std::hash::Hash;

use astrelis_core::animation::{AnimatedValue, Animator};
use astrelis_core::geometry::Rect;
use astrelis_core::math::Vec2;
use astrelis_core::profiling::profile_function;

use crate::config::DragAndDropConfig;
use crate::item::{DraggableItem, DraggedItem};
use crate::pointer::PointerId;
use crate::registry::Registry;
use crate::strategy::DropCandidate;
use crate::target::{DragCallback, DropTarget};

/// Coarse engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    Idle,
    /// An item follows the pointer.
    Dragging,
    /// The pointer was released; the shadow is animating to its resting place.
    Settling,
}

/// Drop to deliver once the settle animation completes.
struct PendingDrop<K, T> {
    target: K,
    callback: Option<DragCallback<K, T>>,
}

struct DragSession<K, T> {
    pointer: PointerId,
    /// Copy of the item record taken at drag start.
    item: DraggableItem<K, T>,
    dragged: DraggedItem<K, T>,
    origin_pointer: Vec2,
    /// Live top-left of the dragged rectangle.
    position: Vec2,
    /// `Some` once the pointer has been released or the drag cancelled.
    settle: Option<Option<PendingDrop<K, T>>>,
}

/// Drag-and-drop engine for one surface.
///
/// `K` is the key shared by items and targets, `T` the payload carried by
/// items. `A` animates the floating shadow; tests substitute a synchronous
/// double.
///
/// # Example
///
/// ```
/// use astrelis_core::math::Vec2;
/// use astrelis_dnd::{DraggableItem, DragAndDropState, DropTarget, PointerId};
///
/// let mut state: DragAndDropState<&str, u32> = DragAndDropState::default();
/// state.upsert_draggable_item(
///     DraggableItem::new("card", 7).with_layout(Vec2::ZERO, Vec2::splat(100.0)),
/// );
/// state.upsert_drop_target(
///     DropTarget::new("bin").with_layout(Vec2::new(300.0, 0.0), Vec2::splat(100.0)),
/// );
///
/// assert!(state.handle_drag_start(PointerId(0), Vec2::new(50.0, 50.0)));
/// state.handle_drag_update(Vec2::new(350.0, 50.0));
/// assert_eq!(state.hovered_target(), Some(&"bin"));
///
/// state.handle_drag_end();
/// while state.update(1.0 / 60.0) {}
/// assert!(state.is_idle());
/// ```
pub struct DragAndDropState<K, T, A = AnimatedValue> {
    config: DragAndDropConfig,
    items: Registry<K, DraggableItem<K, T>>,
    targets: Registry<K, DropTarget<K, T>>,
    session: Option<DragSession<K, T>>,
    hovered_target: Option<K>,
    position: A,
    size: A,
}

impl<K, T, A> Default for DragAndDropState<K, T, A>
where
    K: Eq + Hash + Clone + Debug,
    T: Clone + PartialEq,
    A: Animator + Default,
{
    fn default() -> Self {
        Self::new(DragAndDropConfig::default())
    }
}

impl<K, T, A> DragAndDropState<K, T, A>
where
    K: Eq + Hash + Clone + Debug,
    T: Clone + PartialEq,
    A: Animator,
{
    /// Create an engine with default animators.
    pub fn new(config: DragAndDropConfig) -> Self
    where
        A: Default,
    {
        Self::with_animators(config, A::default(), A::default())
    }

    /// Create an engine driving the given position and size animators.
    pub fn with_animators(config: DragAndDropConfig, position: A, size: A) -> Self {
        Self {
            config,
            items: Registry::new(),
            targets: Registry::new(),
            session: None,
            hovered_target: None,
            position,
            size,
        }
    }

    // --- Registries ---

    /// Insert or replace a draggable item. Returns `true` if anything changed.
    pub fn upsert_draggable_item(&mut self, item: DraggableItem<K, T>) -> bool {
        self.items.upsert(item)
    }

    pub fn remove_draggable_item(&mut self, key: &K) -> Option<DraggableItem<K, T>> {
        self.items.remove(key)
    }

    /// Update an item's layout box after the host re-measured it.
    pub fn place_draggable_item(&mut self, key: &K, top_left: Vec2, size: Vec2) -> bool {
        self.items.place(key, top_left, size)
    }

    /// Insert or replace a drop target. Returns `true` if anything changed.
    pub fn upsert_drop_target(&mut self, target: DropTarget<K, T>) -> bool {
        self.targets.upsert(target)
    }

    /// Remove a drop target. A hovered target stops being hovered immediately.
    pub fn remove_drop_target(&mut self, key: &K) -> Option<DropTarget<K, T>> {
        let removed = self.targets.remove(key);
        if removed.is_some() && self.hovered_target.as_ref() == Some(key) {
            tracing::debug!(?key, "hovered drop target removed");
            self.hovered_target = None;
        }
        removed
    }

    pub fn place_drop_target(&mut self, key: &K, top_left: Vec2, size: Vec2) -> bool {
        self.targets.place(key, top_left, size)
    }

    pub fn items(&self) -> &Registry<K, DraggableItem<K, T>> {
        &self.items
    }

    pub fn targets(&self) -> &Registry<K, DropTarget<K, T>> {
        &self.targets
    }

    /// First enabled item whose box contains `point`, in insertion order.
    pub fn draggable_item_at(&self, point: Vec2) -> Option<&DraggableItem<K, T>> {
        self.items
            .iter()
            .find(|item| item.enabled && item.rect().contains(point))
    }

    // --- Drag lifecycle ---

    /// Start dragging the item under `position` on behalf of `pointer`.
    ///
    /// Returns `false` when the surface is disabled, another drag is in
    /// progress, or no item is under the pointer. None of these touch the
    /// current state.
    pub fn handle_drag_start(&mut self, pointer: PointerId, position: Vec2) -> bool {
        if !self.config.enabled {
            tracing::trace!(?pointer, "drag start ignored, surface disabled");
            return false;
        }
        if let Some(session) = &self.session {
            tracing::trace!(active = ?session.pointer, ?pointer, "drag start ignored, drag in progress");
            return false;
        }

        let Some(item) = self.draggable_item_at(position).cloned() else {
            tracing::debug!(?pointer, x = position.x, y = position.y, "no draggable item under pointer");
            return false;
        };

        self.position.snap_to(item.top_left);
        self.size.snap_to(item.size);
        self.hovered_target = None;

        tracing::debug!(key = ?item.key, ?pointer, "drag started");
        self.session = Some(DragSession {
            pointer,
            dragged: DraggedItem::new(item.key.clone(), item.data.clone(), Vec2::ZERO),
            origin_pointer: position,
            position: item.top_left,
            settle: None,
            item,
        });
        true
    }

    /// Follow the pointer and re-resolve the hovered target.
    ///
    /// Fires `on_drag_exit` on the old target and then `on_drag_enter` on the
    /// new one when the hovered key changes.
    pub fn handle_drag_update(&mut self, position: Vec2) {
        profile_function!();

        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.settle.is_some() {
            return;
        }

        let drag_amount = position - session.origin_pointer;
        let top_left = session.item.top_left + drag_amount;
        session.dragged = session.dragged.moved_by(drag_amount);
        session.position = top_left;
        self.position.snap_to(top_left);

        let dragged_rect = Rect::from_top_left_size(top_left, session.item.size);
        let hovered = resolve_hovered_target(&self.targets, &session.item, &dragged_rect);
        tracing::trace!(?hovered, x = top_left.x, y = top_left.y, "drag update");

        if hovered == self.hovered_target {
            return;
        }

        let snapshot = session.dragged.clone();
        let previous = std::mem::replace(&mut self.hovered_target, hovered.clone());
        tracing::debug!(?previous, current = ?hovered, "hovered target changed");

        let exit = previous
            .and_then(|key| self.targets.get(&key))
            .and_then(|target| target.drag_exit_callback().cloned());
        let enter = hovered
            .and_then(|key| self.targets.get(&key))
            .and_then(|target| target.drag_enter_callback().cloned());

        if let Some(exit) = exit {
            exit(&snapshot);
        }
        if let Some(enter) = enter {
            enter(&snapshot);
        }
    }

    /// Release the dragged item over the hovered target, if any.
    ///
    /// Animates the shadow to the target's drop point (or back to the item's
    /// origin when nothing is hovered), then fires `on_drop` and resets. A
    /// hovered target with `drop_animation_enabled == false` drops at once.
    pub fn handle_drag_end(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.settle.is_some() {
            return;
        }

        let target = self
            .hovered_target
            .as_ref()
            .and_then(|key| self.targets.get(key));
        let animate = target.is_none_or(|target| target.drop_animation_enabled);

        if animate {
            let item_size = session.item.size;
            let current = self.items.get(&session.item.key);
            let size_change = current.map_or(Vec2::ZERO, |current| current.size - item_size);
            let destination = target.map_or(session.item.top_left, |target| target.drop_top_left(item_size));

            self.position
                .animate_to(destination - size_change / 2.0, &session.item.drop_animation_spec);
            if let Some(current) = current {
                self.size
                    .animate_to(current.size, &session.item.size_drop_animation_spec);
            }
        }

        let pending = target.map(|target| PendingDrop {
            target: target.key.clone(),
            callback: target.drop_callback().cloned(),
        });
        tracing::debug!(
            key = ?session.item.key,
            drop_target = ?pending.as_ref().map(|drop| &drop.target),
            animate,
            "drag ended"
        );
        session.settle = Some(pending);

        self.finish_settle();
    }

    /// Abandon the drag and animate the shadow back to where it started.
    ///
    /// Never fires `on_drop`. Also used by the host for forced cancellation.
    pub fn handle_drag_cancel(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.settle.is_some() {
            return;
        }

        tracing::debug!(key = ?session.item.key, "drag cancelled");
        self.position
            .animate_to(session.item.top_left, &session.item.drop_animation_spec);
        session.settle = Some(None);

        self.finish_settle();
    }

    /// Advance the settle animations by `dt` seconds.
    ///
    /// Returns `true` while another frame is needed.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.phase() != DragPhase::Settling {
            return false;
        }

        self.position.update(dt);
        self.size.update(dt);
        self.finish_settle()
    }

    /// Completes the settle if both animators are done. Returns `true` while
    /// still settling.
    fn finish_settle(&mut self) -> bool {
        if self.phase() != DragPhase::Settling {
            return false;
        }
        if self.position.is_running() || self.size.is_running() {
            return true;
        }

        let Some(session) = self.session.take() else {
            return false;
        };
        self.hovered_target = None;

        if let Some(Some(drop)) = session.settle {
            tracing::debug!(key = ?session.item.key, drop_target = ?drop.target, "item dropped");
            if let Some(on_drop) = drop.callback {
                on_drop(&session.dragged);
            }
        }
        tracing::debug!(pointer = ?session.pointer, "drag settled");
        false
    }

    // --- Observables ---

    pub fn phase(&self) -> DragPhase {
        match &self.session {
            None => DragPhase::Idle,
            Some(session) if session.settle.is_some() => DragPhase::Settling,
            Some(_) => DragPhase::Dragging,
        }
    }

    /// No pointer, no dragged item, no hovered target.
    pub fn is_idle(&self) -> bool {
        self.session.is_none() && self.hovered_target.is_none()
    }

    /// Pointer that owns the engine. Held until the engine is idle again.
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.session.as_ref().map(|session| session.pointer)
    }

    pub fn hovered_target(&self) -> Option<&K> {
        self.hovered_target.as_ref()
    }

    /// Snapshot of the item being dragged, as passed to callbacks.
    pub fn dragged_item(&self) -> Option<&DraggedItem<K, T>> {
        self.session.as_ref().map(|session| &session.dragged)
    }

    /// The item record as it was when the drag started, for rendering the shadow.
    pub fn dragged_item_record(&self) -> Option<&DraggableItem<K, T>> {
        self.session.as_ref().map(|session| &session.item)
    }

    /// Top-left the dragged rectangle follows, before any settle animation.
    pub fn drag_position(&self) -> Option<Vec2> {
        self.session.as_ref().map(|session| session.position)
    }

    /// Animated top-left of the shadow.
    pub fn shadow_position(&self) -> Vec2 {
        self.position.value()
    }

    /// Animated size of the shadow.
    pub fn shadow_size(&self) -> Vec2 {
        self.size.value()
    }

    /// Whether `key` is the item currently being dragged.
    pub fn is_dragging_key(&self, key: &K) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| &session.item.key == key)
    }

    pub fn config(&self) -> &DragAndDropConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Disabling blocks new drags. A drag already in progress continues.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    pub fn items_revision(&self) -> u64 {
        self.items.revision()
    }

    pub fn targets_revision(&self) -> u64 {
        self.targets.revision()
    }
}

/// Targets that intersect `dragged` and are allowed for `item`, masked to the
/// highest z-index present, then narrowed by the item's strategy.
fn resolve_hovered_target<K, T>(
    targets: &Registry<K, DropTarget<K, T>>,
    item: &DraggableItem<K, T>,
    dragged: &Rect<f32>,
) -> Option<K>
where
    K: Eq + Hash + Clone + Debug,
{
    let hits: Vec<&DropTarget<K, T>> = targets
        .iter()
        .filter(|target| target.rect().intersects(dragged) && item.accepts_target(&target.key))
        .collect();

    let top_z = hits
        .iter()
        .map(|target| target.z_index)
        .fold(f32::NEG_INFINITY, f32::max);
    let layer: Vec<&DropTarget<K, T>> = hits
        .into_iter()
        .filter(|target| target.z_index == top_z)
        .collect();
    let candidates: Vec<DropCandidate> = layer
        .iter()
        .map(|target| DropCandidate::new(target.rect(), target.z_index))
        .collect();

    item.drop_strategy
        .select(dragged, &candidates)
        .and_then(|index| layer.get(index))
        .map(|target| target.key.clone())
}

impl<K: Debug, T, A: Animator> Debug for DragAndDropState<K, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragAndDropState")
            .field("config", &self.config)
            .field("items", &self.items.len())
            .field("targets", &self.targets.len())
            .field("active_pointer", &self.session.as_ref().map(|s| s.pointer))
            .field("active_item", &self.session.as_ref().map(|s| &s.item.key))
            .field("hovered_target", &self.hovered_target)
            .field("shadow_position", &self.position.value())
            .finish()
    }
}

//! Pointer gesture recognition for drag-and-drop.
//!
//! [`DragGestureRecognizer`] turns a raw pointer stream into calls on a
//! [`DragAndDropState`]. One session covers one pointer from down to up:
//!
//! 1. **WaitingForDown**: a down over an enabled item opens a session, as long
//!    as the engine is idle. Items that require an unconsumed first down
//!    ignore presses another handler already consumed.
//!    A consumed move while waiting abandons the session.
//! 2. **AwaitingStart**: the drag starts once the pointer moves past the slop
//!    for its device, or, for long-press items, once it has been held for the
//!    long-press timeout without leaving the slop. The drag picks up the item
//!    under the pointer at that moment.
//! 3. **Dragging**: moves of the owning pointer are forwarded; up ends the
//!    drag and cancel cancels it.
//!
//! Events are only consumed once the drag has started. A press that never
//! becomes a drag makes no engine calls and is left to other handlers.
//!
//! Long presses are timed from the `now` passed to [`process`] and [`tick`]; the
//! host should call [`tick`] every frame while [`phase`] is `AwaitingStart`.
//!
//! [`process`]: DragGestureRecognizer::process
//! [`tick`]: DragGestureRecognizer::tick
//! [`phase`]: DragGestureRecognizer::phase

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

use astrelis_core::animation::Animator;
use astrelis_core::math::Vec2;

use crate::config::GestureConfig;
use crate::pointer::{PointerEvent, PointerEventKind, PointerId, PointerType};
use crate::state::{DragAndDropState, DragPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    WaitingForDown,
    AwaitingStart,
    Dragging,
}

/// Whether the recognizer claimed an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureResponse {
    /// Not used; other handlers may react to it.
    Ignored,
    /// Used to drive a drag; other handlers should not react to it.
    Consumed,
}

impl GestureResponse {
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Session {
    Idle,
    Pending {
        pointer: PointerId,
        pointer_type: PointerType,
        down_position: Vec2,
        last_position: Vec2,
        down_time: Instant,
        long_press: bool,
    },
    Dragging {
        pointer: PointerId,
    },
}

/// Converts pointer events into drag-and-drop engine calls.
pub struct DragGestureRecognizer {
    config: GestureConfig,
    session: Session,
}

impl std::fmt::Debug for DragGestureRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragGestureRecognizer")
            .field("phase", &self.phase())
            .field("pointer", &self.pointer())
            .finish()
    }
}

impl Default for DragGestureRecognizer {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl DragGestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: Session::Idle,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn phase(&self) -> GesturePhase {
        match self.session {
            Session::Idle => GesturePhase::WaitingForDown,
            Session::Pending { .. } => GesturePhase::AwaitingStart,
            Session::Dragging { .. } => GesturePhase::Dragging,
        }
    }

    /// Pointer the current session tracks.
    pub fn pointer(&self) -> Option<PointerId> {
        match self.session {
            Session::Idle => None,
            Session::Pending { pointer, .. } | Session::Dragging { pointer } => Some(pointer),
        }
    }

    /// Feed one pointer event.
    pub fn process<K, T, A>(
        &mut self,
        event: &PointerEvent,
        now: Instant,
        state: &mut DragAndDropState<K, T, A>,
    ) -> GestureResponse
    where
        K: Eq + Hash + Clone + Debug,
        T: Clone + PartialEq,
        A: Animator,
    {
        self.resync(state);

        match self.session {
            Session::Idle => self.on_idle(event, now, state),
            Session::Pending { pointer, .. } if pointer == event.id => self.on_pending(event, now, state),
            Session::Dragging { pointer } if pointer == event.id => self.on_dragging(event, state),
            _ => GestureResponse::Ignored,
        }
    }

    /// Start a long-press drag whose timeout has elapsed.
    ///
    /// Returns `true` if a drag started.
    pub fn tick<K, T, A>(&mut self, now: Instant, state: &mut DragAndDropState<K, T, A>) -> bool
    where
        K: Eq + Hash + Clone + Debug,
        T: Clone + PartialEq,
        A: Animator,
    {
        self.resync(state);
        self.check_long_press(now, state)
    }

    /// Abort the session. A started drag is cancelled on the engine.
    pub fn cancel<K, T, A>(&mut self, state: &mut DragAndDropState<K, T, A>)
    where
        K: Eq + Hash + Clone + Debug,
        T: Clone + PartialEq,
        A: Animator,
    {
        if let Session::Dragging { pointer } = self.session
            && state.active_pointer() == Some(pointer)
        {
            tracing::debug!(?pointer, "gesture cancelled by host");
            state.handle_drag_cancel();
        }
        self.session = Session::Idle;
    }

    /// Drop a dragging session the engine no longer belongs to.
    fn resync<K, T, A>(&mut self, state: &DragAndDropState<K, T, A>)
    where
        K: Eq + Hash + Clone + Debug,
        T: Clone + PartialEq,
        A: Animator,
    {
        if let Session::Dragging { pointer } = self.session
            && (state.active_pointer() != Some(pointer) || state.phase() != DragPhase::Dragging)
        {
            tracing::trace!(?pointer, "engine left the drag, resetting gesture");
            self.session = Session::Idle;
        }
    }

    fn on_idle<K, T, A>(
        &mut self,
        event: &PointerEvent,
        now: Instant,
        state: &DragAndDropState<K, T, A>,
    ) -> GestureResponse
    where
        K: Eq + Hash + Clone + Debug,
        T: Clone + PartialEq,
        A: Animator,
    {
        if event.kind != PointerEventKind::Down || !state.is_enabled() || state.phase() != DragPhase::Idle {
            return GestureResponse::Ignored;
        }
        let Some(item) = state.draggable_item_at(event.position) else {
            return GestureResponse::Ignored;
        };

        let require_unconsumed = item
            .require_first_down_unconsumed
            .unwrap_or(state.config().require_first_down_unconsumed);
        if require_unconsumed && event.consumed {
            tracing::trace!(pointer = ?event.id, key = ?item.key, "down already consumed");
            return GestureResponse::Ignored;
        }

        let long_press = item
            .drag_after_long_press
            .unwrap_or(state.config().drag_after_long_press);
        tracing::trace!(pointer = ?event.id, key = ?item.key, long_press, "gesture armed");

        self.session = Session::Pending {
            pointer: event.id,
            pointer_type: event.pointer_type,
            down_position: event.position,
            last_position: event.position,
            down_time: now,
            long_press,
        };
        GestureResponse::Ignored
    }

    fn on_pending<K, T, A>(
        &mut self,
        event: &PointerEvent,
        now: Instant,
        state: &mut DragAndDropState<K, T, A>,
    ) -> GestureResponse
    where
        K: Eq + Hash + Clone + Debug,
        T: Clone + PartialEq,
        A: Animator,
    {
        let Session::Pending {
            pointer,
            pointer_type,
            down_position,
            ref mut last_position,
            long_press,
            ..
        } = self.session
        else {
            return GestureResponse::Ignored;
        };

        match event.kind {
            PointerEventKind::Move if event.consumed => {
                tracing::trace!(?pointer, "move consumed elsewhere, gesture abandoned");
                self.session = Session::Idle;
                GestureResponse::Ignored
            }
            PointerEventKind::Move => {
                *last_position = event.position;
                let slop = self.config.pointer_slop(pointer_type);
                let distance = (event.position - down_position).length();

                if long_press {
                    if self.check_long_press(now, state) {
                        return GestureResponse::Consumed;
                    }
                    if distance > slop {
                        tracing::trace!(?pointer, "long press abandoned, pointer moved");
                        self.session = Session::Idle;
                    }
                    GestureResponse::Ignored
                } else if distance > slop {
                    self.start_drag(pointer, event.position, state)
                } else {
                    GestureResponse::Ignored
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.session = Session::Idle;
                GestureResponse::Ignored
            }
            PointerEventKind::Down => GestureResponse::Ignored,
        }
    }

    fn on_dragging<K, T, A>(&mut self, event: &PointerEvent, state: &mut DragAndDropState<K, T, A>) -> GestureResponse
    where
        K: Eq + Hash + Clone + Debug,
        T: Clone + PartialEq,
        A: Animator,
    {
        match event.kind {
            PointerEventKind::Move => state.handle_drag_update(event.position),
            PointerEventKind::Up => {
                self.session = Session::Idle;
                state.handle_drag_end();
            }
            PointerEventKind::Cancel => {
                self.session = Session::Idle;
                state.handle_drag_cancel();
            }
            PointerEventKind::Down => return GestureResponse::Ignored,
        }
        GestureResponse::Consumed
    }

    fn check_long_press<K, T, A>(&mut self, now: Instant, state: &mut DragAndDropState<K, T, A>) -> bool
    where
        K: Eq + Hash + Clone + Debug,
        T: Clone + PartialEq,
        A: Animator,
    {
        let Session::Pending {
            pointer,
            last_position,
            down_time,
            long_press: true,
            ..
        } = self.session
        else {
            return false;
        };

        if now.saturating_duration_since(down_time) < self.config.long_press_timeout {
            return false;
        }
        self.start_drag(pointer, last_position, state).is_consumed()
    }

    /// Picks up the item under `position`. Drag amounts are measured from there.
    fn start_drag<K, T, A>(
        &mut self,
        pointer: PointerId,
        position: Vec2,
        state: &mut DragAndDropState<K, T, A>,
    ) -> GestureResponse
    where
        K: Eq + Hash + Clone + Debug,
        T: Clone + PartialEq,
        A: Animator,
    {
        if state.handle_drag_start(pointer, position) {
            self.session = Session::Dragging { pointer };
            GestureResponse::Consumed
        } else {
            self.session = Session::Idle;
            GestureResponse::Ignored
        }
    }
}

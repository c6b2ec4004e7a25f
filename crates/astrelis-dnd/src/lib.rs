//! Astrelis DnD - drag-and-drop and list reordering.
//!
//! The host registers [`DraggableItem`]s and [`DropTarget`]s from its layout
//! callbacks, feeds pointer events through a [`DragGestureRecognizer`], calls
//! [`DragAndDropState::update`] once per frame, and renders the floating
//! shadow from the engine's observables.
//!
//! ```
//! use std::time::Instant;
//!
//! use astrelis_core::math::Vec2;
//! use astrelis_dnd::prelude::*;
//!
//! let mut state: DragAndDropState<u32, &str> = DragAndDropState::default();
//! let mut gestures = DragGestureRecognizer::default();
//!
//! state.upsert_draggable_item(DraggableItem::new(1, "photo").with_layout(Vec2::ZERO, Vec2::splat(64.0)));
//! state.upsert_drop_target(
//!     DropTarget::new(2)
//!         .with_layout(Vec2::new(200.0, 0.0), Vec2::splat(64.0))
//!         .on_drop(|item| println!("dropped {}", item.data())),
//! );
//!
//! let pointer = PointerId(0);
//! let now = Instant::now();
//! gestures.process(&PointerEvent::down(pointer, Vec2::splat(32.0)), now, &mut state);
//! gestures.process(&PointerEvent::moved(pointer, Vec2::new(52.0, 32.0)), now, &mut state);
//! gestures.process(&PointerEvent::moved(pointer, Vec2::new(252.0, 32.0)), now, &mut state);
//! assert_eq!(state.hovered_target(), Some(&2));
//!
//! gestures.process(&PointerEvent::up(pointer, Vec2::new(252.0, 32.0)), now, &mut state);
//! while state.update(1.0 / 60.0) {}
//! assert!(state.is_idle());
//! ```

pub mod config;
pub mod gesture;
pub mod item;
pub mod pointer;
pub mod registry;
pub mod reorder;
pub mod state;
pub mod strategy;
pub mod target;

pub use config::{DragAndDropConfig, GestureConfig};
pub use gesture::{DragGestureRecognizer, GesturePhase, GestureResponse};
pub use item::{DraggableItem, DraggedItem};
pub use pointer::{PointerEvent, PointerEventKind, PointerId, PointerType};
pub use registry::{Keyed, Placed, Registry};
pub use reorder::{ReorderError, ReorderResult, ReorderState, ReorderableItem, move_item};
pub use state::{DragAndDropState, DragPhase};
pub use strategy::{DropCandidate, DropStrategy, SelectDropTarget};
pub use target::{DragCallback, DropAlignment, DropTarget};

/// Common imports for hosts.
pub mod prelude {
    pub use crate::{
        DragAndDropConfig, DragAndDropState, DragGestureRecognizer, DragPhase, DraggableItem, DraggedItem,
        DropAlignment, DropStrategy, DropTarget, GestureConfig, GestureResponse, PointerEvent, PointerId,
        PointerType, ReorderState, ReorderableItem,
    };
}

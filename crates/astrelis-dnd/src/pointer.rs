//! Pointer input records delivered by the host.

use astrelis_core::math::Vec2;

/// Identifies one pointer (finger, mouse, stylus) for the duration of its press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// Kind of device behind a pointer. Decides the slop threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerType {
    Mouse,
    Touch,
    Pen,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// The pointer was lost (capture stolen, window unfocused, ...).
    Cancel,
}

/// A single pointer change in root coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Vec2,
    pub pointer_type: PointerType,
    /// Set when another handler has already reacted to this event.
    pub consumed: bool,
}

impl PointerEvent {
    pub fn new(id: PointerId, kind: PointerEventKind, position: Vec2) -> Self {
        Self {
            id,
            kind,
            position,
            pointer_type: PointerType::default(),
            consumed: false,
        }
    }

    pub fn down(id: PointerId, position: Vec2) -> Self {
        Self::new(id, PointerEventKind::Down, position)
    }

    pub fn moved(id: PointerId, position: Vec2) -> Self {
        Self::new(id, PointerEventKind::Move, position)
    }

    pub fn up(id: PointerId, position: Vec2) -> Self {
        Self::new(id, PointerEventKind::Up, position)
    }

    pub fn cancel(id: PointerId, position: Vec2) -> Self {
        Self::new(id, PointerEventKind::Cancel, position)
    }

    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }

    pub fn with_consumed(mut self, consumed: bool) -> Self {
        self.consumed = consumed;
        self
    }
}

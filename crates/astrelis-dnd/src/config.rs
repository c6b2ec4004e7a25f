//! Surface and gesture configuration.

use std::time::Duration;

use crate::pointer::PointerType;

/// Touch slop in logical pixels.
pub const DEFAULT_TOUCH_SLOP: f32 = 18.0;

/// Mouse slop as a fraction of touch slop (0.125px against an 18px touch slop).
pub const MOUSE_TO_TOUCH_SLOP_RATIO: f32 = 0.125 / 18.0;

/// Hold time before a stationary press counts as a long press.
pub const DEFAULT_LONG_PRESS_TIMEOUT: Duration = Duration::from_millis(500);

/// Settings shared by every item on one drag-and-drop surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragAndDropConfig {
    /// When false, no new drag can start on the surface.
    pub enabled: bool,
    /// Default start condition for items that don't override it.
    pub drag_after_long_press: bool,
    /// Default for items that don't override it: a press another handler
    /// already consumed does not arm a drag.
    pub require_first_down_unconsumed: bool,
}

impl Default for DragAndDropConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            drag_after_long_press: false,
            require_first_down_unconsumed: false,
        }
    }
}

impl DragAndDropConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_drag_after_long_press(mut self, drag_after_long_press: bool) -> Self {
        self.drag_after_long_press = drag_after_long_press;
        self
    }

    pub fn with_require_first_down_unconsumed(mut self, require: bool) -> Self {
        self.require_first_down_unconsumed = require;
        self
    }
}

/// Thresholds for turning a press into a drag.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Movement (px) a touch pointer must cover before a drag starts (default: 18).
    pub touch_slop: f32,
    /// Mouse slop relative to `touch_slop`.
    pub mouse_slop_ratio: f32,
    /// Hold time for long-press drags (default: 500ms).
    pub long_press_timeout: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: DEFAULT_TOUCH_SLOP,
            mouse_slop_ratio: MOUSE_TO_TOUCH_SLOP_RATIO,
            long_press_timeout: DEFAULT_LONG_PRESS_TIMEOUT,
        }
    }
}

impl GestureConfig {
    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop.max(0.0);
        self
    }

    pub fn with_long_press_timeout(mut self, timeout: Duration) -> Self {
        self.long_press_timeout = timeout;
        self
    }

    /// Slop for a given device. Precision pointers get a much smaller threshold.
    pub fn pointer_slop(&self, pointer_type: PointerType) -> f32 {
        match pointer_type {
            PointerType::Mouse => self.touch_slop * self.mouse_slop_ratio,
            PointerType::Touch | PointerType::Pen | PointerType::Unknown => self.touch_slop,
        }
    }
}

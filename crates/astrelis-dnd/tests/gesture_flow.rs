//! Pointer streams driven through the gesture recognizer into the engine.

use std::time::{Duration, Instant};

use astrelis_core::math::Vec2;
use astrelis_dnd::{
    DragAndDropConfig, DragAndDropState, DragGestureRecognizer, DraggableItem, DropTarget, GestureConfig, GesturePhase,
    GestureResponse, PointerEvent, PointerId, PointerType,
};
use astrelis_test_utils::{CallRecorder, MockAnimator};

type Engine = DragAndDropState<u32, &'static str, MockAnimator>;

fn engine(position: &MockAnimator) -> Engine {
    let mut engine = DragAndDropState::with_animators(DragAndDropConfig::default(), position.clone(), MockAnimator::instant());
    engine.upsert_draggable_item(DraggableItem::new(1, "card").with_layout(Vec2::ZERO, Vec2::splat(50.0)));
    engine
}

#[test]
fn test_tap_makes_no_engine_calls() {
    let position = MockAnimator::instant();
    let mut engine = engine(&position);
    let mut gestures = DragGestureRecognizer::default();
    let now = Instant::now();
    let pointer = PointerId(1);

    let responses = [
        gestures.process(&PointerEvent::down(pointer, Vec2::splat(10.0)), now, &mut engine),
        gestures.process(&PointerEvent::moved(pointer, Vec2::new(12.0, 11.0)), now, &mut engine),
        gestures.process(&PointerEvent::up(pointer, Vec2::new(12.0, 11.0)), now, &mut engine),
    ];

    assert!(responses.iter().all(|response| *response == GestureResponse::Ignored));
    assert!(position.calls().is_empty());
    assert!(engine.is_idle());
}

#[test]
fn test_full_drag_consumes_and_drops() {
    let position = MockAnimator::instant();
    let mut engine = engine(&position);
    let drops = CallRecorder::new();
    let sink = drops.clone();
    engine.upsert_drop_target(
        DropTarget::new(2)
            .with_layout(Vec2::new(200.0, 0.0), Vec2::splat(50.0))
            .on_drop(move |item| sink.record((*item.key(), item.drag_amount()))),
    );

    let mut gestures = DragGestureRecognizer::default();
    let now = Instant::now();
    let pointer = PointerId(4);

    assert_eq!(
        gestures.process(&PointerEvent::down(pointer, Vec2::splat(25.0)), now, &mut engine),
        GestureResponse::Ignored
    );
    assert!(gestures
        .process(&PointerEvent::moved(pointer, Vec2::new(45.0, 25.0)), now, &mut engine)
        .is_consumed());
    assert_eq!(engine.active_pointer(), Some(pointer));
    assert_eq!(engine.dragged_item().map(|item| item.drag_amount()), Some(Vec2::ZERO));

    assert!(gestures
        .process(&PointerEvent::moved(pointer, Vec2::new(225.0, 25.0)), now, &mut engine)
        .is_consumed());
    assert_eq!(engine.hovered_target(), Some(&2));

    assert!(gestures
        .process(&PointerEvent::up(pointer, Vec2::new(225.0, 25.0)), now, &mut engine)
        .is_consumed());
    assert_eq!(gestures.phase(), GesturePhase::WaitingForDown);
    assert!(engine.is_idle());
    assert_eq!(drops.entries(), vec![(1, Vec2::new(180.0, 0.0))]);
}

#[test]
fn test_pointer_cancel_cancels_drag() {
    let position = MockAnimator::instant();
    let mut engine = engine(&position);
    let mut gestures = DragGestureRecognizer::default();
    let now = Instant::now();
    let pointer = PointerId(1);

    gestures.process(&PointerEvent::down(pointer, Vec2::splat(10.0)), now, &mut engine);
    gestures.process(&PointerEvent::moved(pointer, Vec2::splat(30.0)), now, &mut engine);
    gestures.process(&PointerEvent::moved(pointer, Vec2::splat(90.0)), now, &mut engine);
    let response = gestures.process(&PointerEvent::cancel(pointer, Vec2::splat(90.0)), now, &mut engine);

    assert!(response.is_consumed());
    assert_eq!(position.animate_targets(), vec![Vec2::ZERO]);
    assert!(engine.is_idle());
}

#[test]
fn test_mouse_uses_smaller_slop_than_touch() {
    let position = MockAnimator::instant();
    let mut engine = engine(&position);
    let mut touch = DragGestureRecognizer::default();
    let now = Instant::now();

    touch.process(&PointerEvent::down(PointerId(1), Vec2::splat(10.0)), now, &mut engine);
    touch.process(&PointerEvent::moved(PointerId(1), Vec2::new(15.0, 10.0)), now, &mut engine);
    assert_eq!(touch.phase(), GesturePhase::AwaitingStart);
    touch.process(&PointerEvent::up(PointerId(1), Vec2::new(15.0, 10.0)), now, &mut engine);

    let mut mouse = DragGestureRecognizer::default();
    mouse.process(
        &PointerEvent::down(PointerId(2), Vec2::splat(10.0)).with_pointer_type(PointerType::Mouse),
        now,
        &mut engine,
    );
    mouse.process(&PointerEvent::moved(PointerId(2), Vec2::new(15.0, 10.0)), now, &mut engine);
    assert_eq!(mouse.phase(), GesturePhase::Dragging);
}

#[test]
fn test_long_press_item_ignores_quick_drags() {
    let position = MockAnimator::instant();
    let mut engine = engine(&position);
    engine.upsert_draggable_item(
        DraggableItem::new(1, "card")
            .with_layout(Vec2::ZERO, Vec2::splat(50.0))
            .with_drag_after_long_press(true),
    );
    let mut gestures = DragGestureRecognizer::new(GestureConfig::default().with_long_press_timeout(Duration::from_millis(300)));
    let start = Instant::now();

    gestures.process(&PointerEvent::down(PointerId(1), Vec2::splat(10.0)), start, &mut engine);
    gestures.process(&PointerEvent::moved(PointerId(1), Vec2::new(12.0, 10.0)), start + Duration::from_millis(100), &mut engine);
    assert_eq!(gestures.phase(), GesturePhase::AwaitingStart);

    // Held long enough: the next move starts the drag even without a tick.
    let response = gestures.process(
        &PointerEvent::moved(PointerId(1), Vec2::new(14.0, 10.0)),
        start + Duration::from_millis(400),
        &mut engine,
    );
    assert!(response.is_consumed());
    assert_eq!(engine.dragged_item().map(|item| item.drag_amount()), Some(Vec2::ZERO));

    gestures.process(&PointerEvent::moved(PointerId(1), Vec2::new(20.0, 10.0)), start + Duration::from_millis(420), &mut engine);
    assert_eq!(engine.dragged_item().map(|item| item.drag_amount()), Some(Vec2::new(6.0, 0.0)));
}

#[test]
fn test_disabled_surface_ignores_presses() {
    let position = MockAnimator::instant();
    let mut engine = engine(&position);
    engine.set_enabled(false);
    let mut gestures = DragGestureRecognizer::default();
    let now = Instant::now();

    gestures.process(&PointerEvent::down(PointerId(1), Vec2::splat(10.0)), now, &mut engine);
    assert_eq!(gestures.phase(), GesturePhase::WaitingForDown);
}

#[test]
fn test_drag_starts_from_pointer_position_at_slop() {
    let position = MockAnimator::instant();
    let mut engine = engine(&position);
    let mut gestures = DragGestureRecognizer::default();
    let now = Instant::now();
    let pointer = PointerId(1);

    // Pressed near the right edge, slop crossed off the item: nothing to pick up.
    gestures.process(&PointerEvent::down(pointer, Vec2::new(45.0, 25.0)), now, &mut engine);
    let response = gestures.process(&PointerEvent::moved(pointer, Vec2::new(70.0, 25.0)), now, &mut engine);

    assert_eq!(response, GestureResponse::Ignored);
    assert_eq!(gestures.phase(), GesturePhase::WaitingForDown);
    assert!(engine.is_idle());
    assert!(position.calls().is_empty());
}

#[test]
fn test_movement_equal_to_slop_does_not_start() {
    let position = MockAnimator::instant();
    let mut engine = engine(&position);
    let mut gestures = DragGestureRecognizer::default();
    let now = Instant::now();
    let pointer = PointerId(1);

    gestures.process(&PointerEvent::down(pointer, Vec2::splat(10.0)), now, &mut engine);
    gestures.process(&PointerEvent::moved(pointer, Vec2::new(28.0, 10.0)), now, &mut engine);
    assert_eq!(gestures.phase(), GesturePhase::AwaitingStart);

    gestures.process(&PointerEvent::moved(pointer, Vec2::new(28.5, 10.0)), now, &mut engine);
    assert_eq!(gestures.phase(), GesturePhase::Dragging);
}

#[test]
fn test_consumed_down_is_skipped_when_required() {
    let position = MockAnimator::instant();
    let mut engine = DragAndDropState::with_animators(
        DragAndDropConfig::default().with_require_first_down_unconsumed(true),
        position.clone(),
        MockAnimator::instant(),
    );
    engine.upsert_draggable_item(DraggableItem::new(1, "card").with_layout(Vec2::ZERO, Vec2::splat(50.0)));
    engine.upsert_draggable_item(
        DraggableItem::new(2, "loose")
            .with_layout(Vec2::new(100.0, 0.0), Vec2::splat(50.0))
            .with_require_first_down_unconsumed(false),
    );
    let mut gestures = DragGestureRecognizer::default();
    let now = Instant::now();

    let consumed_down = PointerEvent::down(PointerId(1), Vec2::splat(10.0)).with_consumed(true);
    gestures.process(&consumed_down, now, &mut engine);
    assert_eq!(gestures.phase(), GesturePhase::WaitingForDown);

    gestures.process(&PointerEvent::down(PointerId(1), Vec2::splat(10.0)), now, &mut engine);
    assert_eq!(gestures.phase(), GesturePhase::AwaitingStart);
    gestures.process(&PointerEvent::up(PointerId(1), Vec2::splat(10.0)), now, &mut engine);

    // The per-item override accepts consumed presses.
    let consumed_down = PointerEvent::down(PointerId(2), Vec2::new(110.0, 10.0)).with_consumed(true);
    gestures.process(&consumed_down, now, &mut engine);
    assert_eq!(gestures.phase(), GesturePhase::AwaitingStart);
}

#[test]
fn test_consumed_down_arms_by_default() {
    let position = MockAnimator::instant();
    let mut engine = engine(&position);
    let mut gestures = DragGestureRecognizer::default();
    let now = Instant::now();

    gestures.process(&PointerEvent::down(PointerId(1), Vec2::splat(10.0)).with_consumed(true), now, &mut engine);
    assert_eq!(gestures.phase(), GesturePhase::AwaitingStart);
}

#[test]
fn test_consumed_move_abandons_pending_press() {
    let position = MockAnimator::instant();
    let mut engine = engine(&position);
    let mut gestures = DragGestureRecognizer::default();
    let now = Instant::now();
    let pointer = PointerId(1);

    gestures.process(&PointerEvent::down(pointer, Vec2::splat(10.0)), now, &mut engine);
    let response = gestures.process(&PointerEvent::moved(pointer, Vec2::splat(40.0)).with_consumed(true), now, &mut engine);

    assert_eq!(response, GestureResponse::Ignored);
    assert_eq!(gestures.phase(), GesturePhase::WaitingForDown);
    assert!(engine.is_idle());
}

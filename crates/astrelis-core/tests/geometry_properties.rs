//! Property tests for the rectangle utilities used by drag-and-drop hit-testing.
//!
//! Coordinates are drawn from small integer grids so that every value is
//! exactly representable and area comparisons are exact.

use astrelis_core::geometry::{Rect, overlap_area, point_in_rectangle, rectangles_intersect};
use astrelis_core::math::Vec2;
use proptest::prelude::*;

fn rect_strategy() -> impl Strategy<Value = Rect<f32>> {
    (-200i32..200, -200i32..200, 0i32..150, 0i32..150)
        .prop_map(|(x, y, w, h)| Rect::new(x as f32, y as f32, w as f32, h as f32))
}

proptest! {
    #[test]
    fn intersection_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(rectangles_intersect(&a, &b), rectangles_intersect(&b, &a));
    }

    #[test]
    fn overlap_area_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(overlap_area(&a, &b), overlap_area(&b, &a));
    }

    #[test]
    fn disjoint_rectangles_have_no_overlap(a in rect_strategy(), gap in 1i32..50) {
        let b = Rect::new(a.right() + gap as f32, a.y, a.width, a.height);

        prop_assert!(!rectangles_intersect(&a, &b));
        prop_assert_eq!(overlap_area(&a, &b), 0.0);
    }

    #[test]
    fn positive_overlap_implies_intersection(a in rect_strategy(), b in rect_strategy()) {
        if overlap_area(&a, &b) > 0.0 {
            prop_assert!(rectangles_intersect(&a, &b));
        }
    }

    #[test]
    fn overlap_never_exceeds_smaller_area(a in rect_strategy(), b in rect_strategy()) {
        let overlap = overlap_area(&a, &b);
        prop_assert!(overlap <= a.area().min(b.area()));
        prop_assert!(overlap >= 0.0);
    }

    #[test]
    fn corners_are_contained(r in rect_strategy()) {
        prop_assert!(point_in_rectangle(Vec2::new(r.x, r.y), &r));
        prop_assert!(point_in_rectangle(Vec2::new(r.right(), r.y), &r));
        prop_assert!(point_in_rectangle(Vec2::new(r.x, r.bottom()), &r));
        prop_assert!(point_in_rectangle(Vec2::new(r.right(), r.bottom()), &r));
    }

    #[test]
    fn self_overlap_is_own_area(r in rect_strategy()) {
        prop_assert_eq!(overlap_area(&r, &r), r.area());
    }
}

#[test]
fn test_documented_partial_overlap() {
    let item = Rect::new(0.0, 0.0, 100.0, 100.0);
    let target = Rect::new(50.0, 50.0, 100.0, 100.0);

    assert_eq!(overlap_area(&item, &target), 2500.0);
}

#[test]
fn test_documented_disjoint_pair() {
    let item = Rect::new(0.0, 0.0, 10.0, 10.0);
    let target = Rect::new(20.0, 20.0, 10.0, 10.0);

    assert!(!rectangles_intersect(&item, &target));
    assert_eq!(overlap_area(&item, &target), 0.0);
}

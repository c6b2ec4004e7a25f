//! Drop target selection policies.
//!
//! The engine hands a strategy only the targets that intersect the dragged
//! rectangle, are allowed for the dragged item, and share the highest z-index
//! among those hits. The strategy picks one winner from that layer.

use std::fmt;
use std::rc::Rc;

use astrelis_core::geometry::Rect;

/// A drop target as seen by a strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropCandidate {
    pub rect: Rect<f32>,
    pub z_index: f32,
}

impl DropCandidate {
    pub fn new(rect: Rect<f32>, z_index: f32) -> Self {
        Self { rect, z_index }
    }
}

/// User-supplied selection policy.
pub trait SelectDropTarget {
    /// Index into `candidates` of the chosen target, or `None` to hover nothing.
    fn select(&self, dragged: &Rect<f32>, candidates: &[DropCandidate]) -> Option<usize>;
}

impl<F> SelectDropTarget for F
where
    F: Fn(&Rect<f32>, &[DropCandidate]) -> Option<usize>,
{
    fn select(&self, dragged: &Rect<f32>, candidates: &[DropCandidate]) -> Option<usize> {
        self(dragged, candidates)
    }
}

/// How a dragged item chooses between overlapping drop targets.
#[derive(Clone, Default)]
pub enum DropStrategy {
    /// Largest overlap area. Z-index is scaled by the dragged area so a higher
    /// layer always outweighs any overlap difference.
    Surface,
    /// Largest overlap as a fraction of the dragged item's own area, plus z-index.
    #[default]
    SurfacePercentage,
    /// Nearest center. Z-index is not considered.
    CenterDistance,
    Custom(Rc<dyn SelectDropTarget>),
}

impl DropStrategy {
    pub fn custom(strategy: impl SelectDropTarget + 'static) -> Self {
        Self::Custom(Rc::new(strategy))
    }

    /// Pick a winner among `candidates`. Always `None` for an empty slice.
    ///
    /// Ties keep the earliest candidate.
    pub fn select(&self, dragged: &Rect<f32>, candidates: &[DropCandidate]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }

        match self {
            Self::Surface | Self::SurfacePercentage => {
                best_by(candidates, |c| self.score(dragged, c), |score, best| score > best)
            }
            Self::CenterDistance => {
                best_by(candidates, |c| self.score(dragged, c), |score, best| score < best)
            }
            Self::Custom(strategy) => strategy
                .select(dragged, candidates)
                .filter(|&index| index < candidates.len()),
        }
    }

    /// Raw score of one candidate.
    ///
    /// Higher is better for the surface strategies. For `CenterDistance` this is
    /// the squared center distance, so lower is better. `None` for `Custom`.
    pub fn score(&self, dragged: &Rect<f32>, candidate: &DropCandidate) -> Option<f32> {
        let dragged_area = dragged.area();
        match self {
            Self::Surface => {
                Some(dragged.overlap_area(&candidate.rect) + candidate.z_index * dragged_area)
            }
            Self::SurfacePercentage => {
                let fraction = if dragged_area > 0.0 {
                    dragged.overlap_area(&candidate.rect) / dragged_area
                } else {
                    0.0
                };
                Some(fraction + candidate.z_index)
            }
            Self::CenterDistance => Some(
                dragged
                    .center()
                    .distance_squared(candidate.rect.center()),
            ),
            Self::Custom(_) => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Surface => "surface",
            Self::SurfacePercentage => "surface_percentage",
            Self::CenterDistance => "center_distance",
            Self::Custom(_) => "custom",
        }
    }
}

fn best_by(
    candidates: &[DropCandidate],
    score: impl Fn(&DropCandidate) -> Option<f32>,
    beats: impl Fn(f32, f32) -> bool,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let Some(value) = score(candidate).filter(|v| v.is_finite()) else {
            continue;
        };
        match best {
            Some((_, best_value)) if !beats(value, best_value) => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

impl PartialEq for DropStrategy {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => Rc::ptr_eq(a, b),
            (Self::Surface, Self::Surface)
            | (Self::SurfacePercentage, Self::SurfacePercentage)
            | (Self::CenterDistance, Self::CenterDistance) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for DropStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface => write!(f, "Surface"),
            Self::SurfacePercentage => write!(f, "SurfacePercentage"),
            Self::CenterDistance => write!(f, "CenterDistance"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(x: f32, y: f32, w: f32, h: f32, z: f32) -> DropCandidate {
        DropCandidate::new(Rect::new(x, y, w, h), z)
    }

    #[test]
    fn test_empty_candidates_select_nothing() {
        let dragged = Rect::new(0.0, 0.0, 10.0, 10.0);
        for strategy in [
            DropStrategy::Surface,
            DropStrategy::SurfacePercentage,
            DropStrategy::CenterDistance,
        ] {
            assert_eq!(strategy.select(&dragged, &[]), None);
        }
    }

    #[test]
    fn test_surface_percentage_full_overlap_scores_one_plus_z() {
        let dragged = Rect::new(50.0, 50.0, 100.0, 100.0);
        let target = candidate(50.0, 50.0, 100.0, 100.0, 2.0);

        let score = DropStrategy::SurfacePercentage.score(&dragged, &target);
        assert_eq!(score, Some(3.0));
        assert_eq!(DropStrategy::SurfacePercentage.select(&dragged, &[target]), Some(0));
    }

    #[test]
    fn test_surface_prefers_larger_overlap() {
        let dragged = Rect::new(0.0, 0.0, 100.0, 100.0);
        let candidates = [
            candidate(90.0, 0.0, 100.0, 100.0, 0.0),
            candidate(40.0, 0.0, 100.0, 100.0, 0.0),
        ];

        assert_eq!(DropStrategy::Surface.select(&dragged, &candidates), Some(1));
    }

    #[test]
    fn test_surface_z_index_outweighs_area() {
        let dragged = Rect::new(0.0, 0.0, 100.0, 100.0);
        let candidates = [
            candidate(0.0, 0.0, 100.0, 100.0, 0.0),
            candidate(99.0, 99.0, 10.0, 10.0, 1.0),
        ];

        assert_eq!(DropStrategy::Surface.select(&dragged, &candidates), Some(1));
    }

    #[test]
    fn test_ties_keep_first_candidate() {
        let dragged = Rect::new(0.0, 0.0, 10.0, 10.0);
        let candidates = [
            candidate(0.0, 0.0, 10.0, 10.0, 0.0),
            candidate(0.0, 0.0, 10.0, 10.0, 0.0),
        ];

        assert_eq!(DropStrategy::Surface.select(&dragged, &candidates), Some(0));
        assert_eq!(DropStrategy::SurfacePercentage.select(&dragged, &candidates), Some(0));
        assert_eq!(DropStrategy::CenterDistance.select(&dragged, &candidates), Some(0));
    }

    #[test]
    fn test_center_distance_ignores_z_index() {
        let dragged = Rect::new(0.0, 0.0, 10.0, 10.0);
        let candidates = [
            candidate(8.0, 8.0, 10.0, 10.0, 5.0),
            candidate(1.0, 1.0, 10.0, 10.0, 0.0),
        ];

        assert_eq!(DropStrategy::CenterDistance.select(&dragged, &candidates), Some(1));
    }

    #[test]
    fn test_zero_area_dragged_item_stays_finite() {
        let dragged = Rect::new(5.0, 5.0, 0.0, 0.0);
        let candidates = [candidate(0.0, 0.0, 10.0, 10.0, 0.0), candidate(0.0, 0.0, 10.0, 10.0, 1.0)];

        assert_eq!(DropStrategy::SurfacePercentage.score(&dragged, &candidates[0]), Some(0.0));
        assert_eq!(DropStrategy::SurfacePercentage.select(&dragged, &candidates), Some(1));
    }

    #[test]
    fn test_non_finite_scores_are_skipped() {
        let dragged = Rect::new(0.0, 0.0, 10.0, 10.0);
        let candidates = [
            candidate(0.0, 0.0, 10.0, 10.0, f32::NAN),
            candidate(5.0, 5.0, 10.0, 10.0, 0.0),
        ];

        assert_eq!(DropStrategy::SurfacePercentage.select(&dragged, &candidates), Some(1));
    }

    #[test]
    fn test_custom_strategy_and_identity() {
        let last = DropStrategy::custom(|_: &Rect<f32>, candidates: &[DropCandidate]| {
            candidates.len().checked_sub(1)
        });
        let dragged = Rect::new(0.0, 0.0, 10.0, 10.0);
        let candidates = [candidate(0.0, 0.0, 1.0, 1.0, 0.0), candidate(0.0, 0.0, 1.0, 1.0, 0.0)];

        assert_eq!(last.select(&dragged, &candidates), Some(1));
        assert_eq!(last, last.clone());
        assert_ne!(last, DropStrategy::custom(|_: &Rect<f32>, _: &[DropCandidate]| None));
        assert_ne!(last, DropStrategy::Surface);
    }

    #[test]
    fn test_custom_out_of_range_index_is_dropped() {
        let broken = DropStrategy::custom(|_: &Rect<f32>, _: &[DropCandidate]| Some(7));
        let dragged = Rect::new(0.0, 0.0, 10.0, 10.0);

        assert_eq!(broken.select(&dragged, &[candidate(0.0, 0.0, 1.0, 1.0, 0.0)]), None);
    }
}

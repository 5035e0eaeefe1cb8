//! Spin Controller math — target planning, the rotation tween, and the
//! inverse winner lookup.
//!
//! The pointer sits at the top of the wheel, which is 270° in the canvas
//! angle convention (0° along +x, angles growing clockwise on screen).
//! A spin picks a winner index up front, computes a final rotation that
//! parks that segment's midpoint under the pointer after 6–9 extra full
//! turns, and eases toward it. The announced winner is *recomputed* from
//! the final rotation, so the tween must land on that rotation exactly.

use rand::Rng;

use crate::anim::ease_out_cubic;

/// Pointer angle in canvas convention, degrees.
pub const POINTER_ANGLE_DEG: f64 = 270.0;

/// Degrees spanned by one segment of an `n`-item wheel.
pub fn segment_angle(n: usize) -> f64 {
    360.0 / n as f64
}

/// A fully planned spin: fixed endpoints and duration, progressed by
/// elapsed time alone.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinPlan {
    pub winner_index: usize,
    pub start_rotation: f64,
    pub final_rotation: f64,
    pub duration_ms: f64,
}

impl SpinPlan {
    /// Plan a spin over `visible_count` segments starting from the current
    /// accumulated rotation. `None` when there is nothing to spin.
    pub fn plan(current_rotation: f64, visible_count: usize, rng: &mut impl Rng) -> Option<Self> {
        if visible_count == 0 {
            return None;
        }
        let winner_index = rng.gen_range(0..visible_count);
        let seg = segment_angle(visible_count);
        let target_mid = winner_index as f64 * seg + seg / 2.0;
        let full_turns = rng.gen_range(6..10) as f64;
        let final_rotation = full_turns * 360.0 + (POINTER_ANGLE_DEG - target_mid);
        let duration_ms = rng.gen_range(4000.0..6000.0);

        Some(Self {
            winner_index,
            start_rotation: current_rotation.rem_euclid(360.0),
            final_rotation,
            duration_ms,
        })
    }

    /// Rotation at `elapsed_ms`, cubic ease-out. Past the duration this
    /// returns `final_rotation` bit-exactly; the winner announcement
    /// inverts that value, so no interpolated approximation is allowed
    /// on the last frame.
    pub fn rotation_at(&self, elapsed_ms: f64) -> f64 {
        if self.finished(elapsed_ms) {
            return self.final_rotation;
        }
        let t = (elapsed_ms / self.duration_ms).max(0.0);
        let eased = ease_out_cubic(t);
        self.start_rotation + (self.final_rotation - self.start_rotation) * eased
    }

    pub fn finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

/// Which visible segment sits under the pointer at `final_rotation`.
/// Inverse of the formula in [`SpinPlan::plan`].
pub fn winner_at_pointer(final_rotation: f64, visible_count: usize) -> usize {
    debug_assert!(visible_count > 0);
    let seg = segment_angle(visible_count);
    let rot = final_rotation.rem_euclid(360.0);
    let angle_at_pointer = (POINTER_ANGLE_DEG - rot).rem_euclid(360.0);
    (angle_at_pointer / seg) as usize % visible_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn segments_partition_the_circle() {
        for n in 1..=50 {
            let seg = segment_angle(n);
            let total: f64 = (0..n).map(|_| seg).sum();
            assert!((total - 360.0).abs() < 1e-9, "n={}", n);
        }
    }

    #[test]
    fn planned_winner_survives_the_inverse_lookup() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..=50 {
            for _ in 0..20 {
                let current = rng.gen_range(0.0..100_000.0);
                let plan = SpinPlan::plan(current, n, &mut rng).unwrap();
                assert_eq!(
                    winner_at_pointer(plan.final_rotation, n),
                    plan.winner_index,
                    "n={}",
                    n
                );
            }
        }
    }

    #[test]
    fn inverse_handles_edge_rotations() {
        // Pointer at 270°: rotation 0 leaves segment floor(270/seg) on top.
        assert_eq!(winner_at_pointer(0.0, 4), 3);
        assert_eq!(winner_at_pointer(359.999_999, 4), 3);
        // Full turns are invisible to the inverse.
        assert_eq!(
            winner_at_pointer(17.0 * 360.0 + 90.0, 4),
            winner_at_pointer(90.0, 4)
        );
        // Negative accumulations still resolve to a valid index.
        let idx = winner_at_pointer(-45.0, 6);
        assert!(idx < 6);
    }

    #[test]
    fn single_item_always_wins() {
        let mut rng = StdRng::seed_from_u64(3);
        let plan = SpinPlan::plan(123.0, 1, &mut rng).unwrap();
        assert_eq!(plan.winner_index, 0);
        assert_eq!(winner_at_pointer(plan.final_rotation, 1), 0);
    }

    #[test]
    fn zero_items_cannot_spin() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(SpinPlan::plan(0.0, 0, &mut rng).is_none());
    }

    #[test]
    fn plan_ranges_match_the_physical_model() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let plan = SpinPlan::plan(731.5, 8, &mut rng).unwrap();
            assert!(plan.duration_ms >= 4000.0 && plan.duration_ms < 6000.0);
            // 6–9 full turns plus the pointer offset
            let offset = POINTER_ANGLE_DEG - (plan.winner_index as f64 + 0.5) * 45.0;
            let turns = (plan.final_rotation - offset) / 360.0;
            assert!((6.0..=9.0).contains(&turns));
            // Start rotation is normalized into [0, 360)
            assert!(plan.start_rotation >= 0.0 && plan.start_rotation < 360.0);
        }
    }

    #[test]
    fn tween_starts_at_start_and_lands_exactly_on_final() {
        let plan = SpinPlan {
            winner_index: 2,
            start_rotation: 31.5,
            final_rotation: 2430.0,
            duration_ms: 5000.0,
        };
        assert_eq!(plan.rotation_at(0.0), 31.5);
        assert!(!plan.finished(4999.9));
        assert!(plan.finished(5000.0));
        // Bit-exact landing: the inverse lookup depends on it.
        assert_eq!(plan.rotation_at(5000.0), 2430.0);
        assert_eq!(plan.rotation_at(9999.0), 2430.0);
    }

    #[test]
    fn tween_is_monotonic_and_decelerating() {
        let plan = SpinPlan {
            winner_index: 0,
            start_rotation: 0.0,
            final_rotation: 2300.0,
            duration_ms: 4000.0,
        };
        let mut prev = plan.rotation_at(0.0);
        for i in 1..=40 {
            let r = plan.rotation_at(i as f64 * 100.0);
            assert!(r >= prev);
            prev = r;
        }
        // Ease-out: first half covers most of the travel
        assert!(plan.rotation_at(2000.0) > 2300.0 * 0.8);
    }
}

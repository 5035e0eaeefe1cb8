//! Easing curves and the winner-reveal timeline.
//!
//! Everything here is a pure function of elapsed milliseconds so the
//! animation math is testable without a live display; the app drives it
//! from the frame loop with `Instant`-based elapsed times.

/// Quadratic ease-out: `1 - (1-t)^2`.
pub fn ease_out_quad(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Cubic ease-out: `1 - (1-t)^3`.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Back ease-out: overshoots past 1.0 before settling.
pub fn ease_out_back(t: f64) -> f64 {
    const C1: f64 = 1.70158;
    const C3: f64 = C1 + 1.0;
    1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
}

/// Total length of the winner reveal.
pub const WINNER_TOTAL_MS: f64 = 3200.0;
/// Pop-in phase: scale 1.0 → 1.6 with overshoot.
pub const WINNER_GROW_MS: f64 = 600.0;
/// Hold phase at full scale.
pub const WINNER_HOLD_MS: f64 = 2000.0;

/// Overlay scale at `elapsed` ms into the winner reveal, or `None` once
/// the reveal has finished (the overlay then deactivates at scale 1.0).
pub fn winner_scale_at(elapsed_ms: f64) -> Option<f64> {
    if elapsed_ms >= WINNER_TOTAL_MS {
        return None;
    }
    let scale = if elapsed_ms < WINNER_GROW_MS {
        1.0 + ease_out_back(elapsed_ms / WINNER_GROW_MS) * 0.6
    } else if elapsed_ms < WINNER_GROW_MS + WINNER_HOLD_MS {
        1.6
    } else {
        let shrink = WINNER_TOTAL_MS - WINNER_GROW_MS - WINNER_HOLD_MS;
        let t = (elapsed_ms - WINNER_GROW_MS - WINNER_HOLD_MS) / shrink;
        // Reversed progress through the quad curve, shrinking back to 1.0
        1.0 + ease_out_quad(1.0 - t) * 0.6
    };
    Some(scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for ease in [ease_out_quad, ease_out_cubic, ease_out_back] {
            assert!((ease(0.0)).abs() < 1e-12);
            assert!((ease(1.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn cubic_decelerates() {
        // Ease-out: covers more than half the distance in the first half.
        assert!(ease_out_cubic(0.5) > 0.5);
        assert!(ease_out_cubic(0.25) < ease_out_cubic(0.75));
    }

    #[test]
    fn back_ease_overshoots() {
        let peak = (1..100)
            .map(|i| ease_out_back(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn winner_grow_starts_at_one_and_pops() {
        assert!((winner_scale_at(0.0).unwrap() - 1.0).abs() < 1e-12);
        // Overshoot: somewhere in the grow phase scale exceeds 1.6
        let peak = (1..60)
            .map(|i| winner_scale_at(i as f64 * 10.0).unwrap())
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.6);
    }

    #[test]
    fn winner_hold_is_exactly_full_scale() {
        for ms in [600.0, 1200.0, 2599.9] {
            assert_eq!(winner_scale_at(ms).unwrap(), 1.6);
        }
    }

    #[test]
    fn winner_shrink_returns_toward_one() {
        let early = winner_scale_at(2700.0).unwrap();
        let late = winner_scale_at(3199.0).unwrap();
        assert!(early > late);
        assert!(late >= 1.0);
    }

    #[test]
    fn winner_finishes_at_total() {
        assert!(winner_scale_at(WINNER_TOTAL_MS).is_none());
        assert!(winner_scale_at(WINNER_TOTAL_MS + 1.0).is_none());
    }
}

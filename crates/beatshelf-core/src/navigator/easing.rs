//! Proportional-approach easing
//!
//! Stateless helper shared by the navigator and any other animation that
//! eases a value toward a target.

/// Remaining distance under which the approach snaps to the target, in
/// layout units. The snap guarantees termination in finitely many ticks
/// instead of an asymptotic approach.
pub const SNAP_EPSILON: f32 = 1.0;

/// Move `current` one tick toward `target` with exponential approach.
///
/// The step is `(target - current) * rate * dt`; once the remaining distance
/// drops below [`SNAP_EPSILON`], the value snaps to `target` exactly. With
/// `rate * dt < 1` intermediate values never overshoot.
pub fn approach(current: f32, target: f32, dt: f32, rate: f32) -> f32 {
    let remaining = target - current;
    if remaining.abs() < SNAP_EPSILON {
        return target;
    }
    current + remaining * rate * dt
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const RATE: f32 = 8.0;

    #[test]
    fn test_converges_in_finite_ticks() {
        let target = 500.0;
        let mut offset = 0.0;
        let mut ticks = 0;
        while offset != target {
            offset = approach(offset, target, DT, RATE);
            ticks += 1;
            assert!(ticks < 1_000, "did not converge");
        }
        assert_eq!(offset, target);
    }

    #[test]
    fn test_no_overshoot() {
        let target = 100.0;
        let mut offset = 0.0;
        loop {
            let next = approach(offset, target, DT, RATE);
            assert!(next > offset);
            assert!(next <= target);
            if next == target {
                break;
            }
            offset = next;
        }
    }

    #[test]
    fn test_approach_downward() {
        let mut offset = 50.0;
        while offset != -25.0 {
            let next = approach(offset, -25.0, DT, RATE);
            assert!(next < offset);
            offset = next;
        }
    }

    #[test]
    fn test_within_epsilon_snaps() {
        assert_eq!(approach(99.5, 100.0, DT, RATE), 100.0);
        assert_eq!(approach(100.0, 100.0, DT, RATE), 100.0);
    }
}

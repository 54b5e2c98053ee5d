use glam::{DVec2, DVec3};

use super::node::Transform;

/// Closed-form per-tick transform update.
///
/// Two time bases on purpose: `Orbit` is a function of wall-clock elapsed
/// seconds, `Spin` accumulates a fixed increment per tick (frame-rate
/// dependent, matching the classic `rotation.x += 0.01` idiom).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Animator {
    /// `x = center.x + sin(t)·amplitude.x`, `y = center.y + cos(t)·amplitude.y`.
    /// `z` stays at `center.z`.
    Orbit { center: DVec3, amplitude: DVec2 },
    /// `rotation += rate` each tick.
    Spin { rate: DVec3 },
}

impl Animator {
    /// Applies one tick of this animator to `transform`.
    ///
    /// `elapsed` is wall-clock seconds since the loop started.
    pub fn apply(&self, transform: &mut Transform, elapsed: f64) {
        match *self {
            Animator::Orbit { center, amplitude } => {
                let offset = orbit_offset(elapsed, amplitude);
                transform.position = DVec3::new(center.x + offset.x, center.y + offset.y, center.z);
            }
            Animator::Spin { rate } => {
                transform.rotation += rate;
            }
        }
    }
}

/// Sinusoidal orbit offset: `(sin(t)·ax, cos(t)·ay)`.
#[inline]
pub fn orbit_offset(t: f64, amplitude: DVec2) -> DVec2 {
    DVec2::new(t.sin() * amplitude.x, t.cos() * amplitude.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    const AMP: DVec2 = DVec2::new(0.5, 0.3);

    // ── orbit ─────────────────────────────────────────────────────────────

    #[test]
    fn orbit_offset_is_periodic() {
        for &t in &[0.0, 0.3, 1.7, 12.9, 400.0] {
            let a = orbit_offset(t, AMP);
            let b = orbit_offset(t + TAU, AMP);
            assert!((a.x - b.x).abs() < 1e-9, "x at t={t}");
            assert!((a.y - b.y).abs() < 1e-9, "y at t={t}");
        }
    }

    #[test]
    fn orbit_offset_stays_within_amplitude() {
        let mut t = 0.0;
        while t < 20.0 {
            let o = orbit_offset(t, AMP);
            assert!(o.x.abs() <= 0.5 + 1e-12);
            assert!(o.y.abs() <= 0.3 + 1e-12);
            t += 0.37;
        }
    }

    #[test]
    fn orbit_pins_z_to_center() {
        let animator = Animator::Orbit {
            center: DVec3::new(0.0, 0.0, 2.0),
            amplitude: AMP,
        };
        let mut transform = Transform::default();
        animator.apply(&mut transform, 1.0);
        assert_eq!(transform.position.z, 2.0);
        assert!((transform.position.x - 1.0f64.sin() * 0.5).abs() < 1e-12);
        assert!((transform.position.y - 1.0f64.cos() * 0.3).abs() < 1e-12);
    }

    // ── spin ──────────────────────────────────────────────────────────────

    #[test]
    fn spin_accumulates_exactly() {
        let animator = Animator::Spin {
            rate: DVec3::new(0.01, 0.0, 0.0),
        };
        let mut transform = Transform::default();
        for _ in 0..10 {
            animator.apply(&mut transform, 0.0);
        }
        assert!((transform.rotation.x - 0.10).abs() < 1e-9);
    }

    #[test]
    fn spin_is_monotonic_for_positive_rate() {
        let animator = Animator::Spin {
            rate: DVec3::new(0.01, 0.02, 0.0),
        };
        let mut transform = Transform::default();
        let mut prev = transform.rotation;
        for _ in 0..50 {
            animator.apply(&mut transform, 0.0);
            assert!(transform.rotation.x >= prev.x);
            assert!(transform.rotation.y >= prev.y);
            prev = transform.rotation;
        }
    }

    #[test]
    fn spin_leaves_position_alone() {
        let animator = Animator::Spin {
            rate: DVec3::new(0.0, 0.01, 0.0),
        };
        let mut transform = Transform {
            position: DVec3::new(2.0, 0.0, 0.0),
            ..Transform::default()
        };
        animator.apply(&mut transform, 5.0);
        assert_eq!(transform.position, DVec3::new(2.0, 0.0, 0.0));
    }
}

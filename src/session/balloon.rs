use crate::config::SessionConfig;

/// The balloon the user lifts with their breath
///
/// Coordinates are canvas pixels with y growing downward, so lifting the
/// balloon decreases `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balloon {
    /// Vertical position of the balloon centre
    pub y: f32,
    /// Fixed horizontal position
    pub x: f32,
    /// Fixed radius
    pub radius: f32,
}

impl Balloon {
    /// Balloon resting at the bottom of the canvas
    pub fn at_rest(config: &SessionConfig) -> Self {
        Self {
            y: config.rest_y,
            x: config.center_x(),
            radius: config.balloon_radius,
        }
    }

    /// Raise the balloon by `amount`, only while it is still below the target.
    ///
    /// Returns whether the balloon moved.
    pub fn lift(&mut self, amount: f32, target_y: f32) -> bool {
        if !amount.is_finite() || amount <= 0.0 || self.y <= target_y {
            return false;
        }
        self.y -= amount;
        true
    }

    /// Snap onto the target line once within `tolerance` of it.
    ///
    /// Returns whether the target has been reached.
    pub fn settle(&mut self, target_y: f32, tolerance: f32) -> bool {
        if self.y <= target_y + tolerance {
            self.y = target_y;
            true
        } else {
            false
        }
    }
}

/// Next target line: one step above the balloon, never above the top margin
pub fn next_target(balloon_y: f32, config: &SessionConfig) -> f32 {
    (balloon_y - config.target_step).max(config.top_margin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lift_moves_by_exact_amount() {
        let config = SessionConfig::default();
        let mut balloon = Balloon::at_rest(&config);

        assert!(balloon.lift(0.8, 380.0));
        assert_eq!(balloon.y, 500.0 - 0.8);
    }

    #[test]
    fn test_lift_stops_at_target() {
        let mut balloon = Balloon {
            y: 380.0,
            x: 400.0,
            radius: 40.0,
        };
        assert!(!balloon.lift(0.8, 380.0));
        assert_eq!(balloon.y, 380.0);
    }

    #[test]
    fn test_non_finite_lift_ignored() {
        let config = SessionConfig::default();
        let mut balloon = Balloon::at_rest(&config);
        assert!(!balloon.lift(f32::NAN, 380.0));
        assert!(!balloon.lift(f32::INFINITY, 380.0));
        assert_eq!(balloon.y, 500.0);
    }

    #[test]
    fn test_settle_clamps_within_tolerance() {
        let mut balloon = Balloon {
            y: 381.6,
            x: 400.0,
            radius: 40.0,
        };
        assert!(balloon.settle(380.0, 2.0));
        assert_eq!(balloon.y, 380.0);

        let mut far = Balloon { y: 382.5, ..balloon };
        assert!(!far.settle(380.0, 2.0));
        assert_eq!(far.y, 382.5);
    }

    #[test]
    fn test_next_target_clamped_to_margin() {
        let config = SessionConfig::default();
        assert_eq!(next_target(500.0, &config), 380.0);
        assert_eq!(next_target(260.0, &config), 140.0);
        assert_eq!(next_target(140.0, &config), 100.0);
        assert_eq!(next_target(100.0, &config), 100.0);
    }
}

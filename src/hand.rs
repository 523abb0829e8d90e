//! Per-hand animation state.
//!
//! A hand either wanders at a constant angular velocity (idle) or travels
//! towards a target angle (time readout). While travelling it keeps its
//! velocity until it is close enough to ease in by linear interpolation, and
//! speeds up if it would otherwise arrive after the minute turns over.
//!
//! Angles are in degrees, velocities in degrees per frame.

use rand::Rng;

use crate::config::DisplayConfig;

const FULL_TURN: f64 = 360.0;

/// Upper bound on the turns added to or removed from a target by [`unify`].
pub const UNIFY_MAX_STEPS: usize = 5;

/// Like `f64::signum`, but zero for zero.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Shifts `target` by whole turns so that a hand at `current` moving with
/// `velocity` reaches it without reversing.
///
/// A stationary hand has no direction, so its target is returned unchanged.
/// At most [`UNIFY_MAX_STEPS`] turns are applied; a target still behind the
/// hand after that is returned as is.
pub fn unify(current: f64, mut target: f64, velocity: f64) -> f64 {
    if velocity == 0.0 {
        return target;
    }
    let direction = sign(velocity);
    for _ in 0..UNIFY_MAX_STEPS {
        let offset = sign(target - current);
        if offset == direction {
            break;
        }
        target -= FULL_TURN * offset;
    }
    target
}

/// Folds an angle into `(-360, 360]`.
pub fn normalize_angle(angle: f64) -> f64 {
    if angle > FULL_TURN || angle <= -FULL_TURN {
        angle % FULL_TURN
    } else {
        angle
    }
}

/// Tuning shared by every hand while the time readout is assembling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approach {
    pub lerp_within_degrees: f64,
    pub acceleration_step: f64,
    pub frame_rate: f64,
}

impl From<&DisplayConfig> for Approach {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            lerp_within_degrees: config.lerp_within_degrees,
            acceleration_step: config.acceleration_step,
            frame_rate: f64::from(config.frame_rate),
        }
    }
}

/// Outcome of [`interpolation_gate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gate {
    pub interpolate: bool,
    /// Velocity to carry into the next frame.
    pub velocity: f64,
}

/// Decides whether a hand eases in by interpolation this frame.
///
/// Hands without a velocity, or already within
/// [`Approach::lerp_within_degrees`] of the target, interpolate. Others keep
/// moving at constant velocity, accelerating by one step when they cannot
/// cover the remaining distance with a second to spare before the deadline.
pub fn interpolation_gate(
    current: f64,
    target: f64,
    velocity: f64,
    frames_remaining: f64,
    approach: &Approach,
) -> Gate {
    let distance = target - current;
    if velocity == 0.0 || distance.abs() <= approach.lerp_within_degrees {
        return Gate {
            interpolate: true,
            velocity,
        };
    }

    let reachable = velocity * (frames_remaining - approach.frame_rate);
    let velocity = if distance.abs() > reachable.abs() {
        velocity + approach.acceleration_step * sign(velocity)
    } else {
        velocity
    };
    Gate {
        interpolate: false,
        velocity,
    }
}

/// One hand of a clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hand {
    angle: f64,
    target: f64,
    velocity: f64,
    interpolating: bool,
    lerp_factor: f64,
}

impl Hand {
    /// A stationary hand resting at `angle`.
    pub const fn at_rest(angle: f64) -> Self {
        Self {
            angle,
            target: angle,
            velocity: 0.0,
            interpolating: false,
            lerp_factor: 0.0,
        }
    }

    pub const fn angle(&self) -> f64 {
        self.angle
    }

    pub const fn target(&self) -> f64 {
        self.target
    }

    pub const fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Whether the last readout step eased in by interpolation.
    pub const fn interpolating(&self) -> bool {
        self.interpolating
    }

    pub const fn lerp_factor(&self) -> f64 {
        self.lerp_factor
    }

    /// Sets a new target, unified against the current angle and velocity.
    pub fn assign_target(&mut self, target: f64) {
        self.target = unify(self.angle, target, self.velocity);
    }

    pub fn set_lerp_factor(&mut self, factor: f64) {
        self.lerp_factor = factor;
    }

    /// Draws a fresh idle velocity: magnitude uniform in `[min, max)`,
    /// direction chosen by a coin flip.
    pub fn randomize_velocity<R: Rng>(&mut self, rng: &mut R, min: f64, max: f64) {
        let speed = rng.gen_range(min..max);
        self.velocity = if rng.gen_bool(0.5) { -speed } else { speed };
        self.interpolating = false;
    }

    /// Advances one frame towards the target.
    ///
    /// The angle is not normalized here: unification may have placed the
    /// target beyond a full turn.
    pub fn step_time_readout(&mut self, frames_remaining: f64, approach: &Approach) {
        let gate = interpolation_gate(self.angle, self.target, self.velocity, frames_remaining, approach);
        self.velocity = gate.velocity;
        self.interpolating = gate.interpolate;
        self.angle = if gate.interpolate {
            self.angle + (self.target - self.angle) * self.lerp_factor
        } else {
            self.angle + self.velocity
        };
    }

    /// Advances one frame of free rotation.
    pub fn step_idle(&mut self) {
        self.interpolating = false;
        self.angle = normalize_angle(self.angle + self.velocity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const APPROACH: Approach = Approach {
        lerp_within_degrees: 45.0,
        acceleration_step: 0.005,
        frame_rate: 30.0,
    };

    #[test]
    fn unify_keeps_target_without_velocity() {
        assert_eq!(unify(10.0, -225.0, 0.0), -225.0);
    }

    #[test]
    fn unify_matches_direction_of_travel() {
        // Clockwise (positive) hand at 10° heading for -225° goes the long
        // way round to 135°.
        assert_eq!(unify(10.0, -225.0, 1.5), 135.0);
        // Counter-clockwise hand at -10° heading for 0° winds to -360°.
        assert_eq!(unify(-10.0, 0.0, -2.0), -360.0);
        // Already ahead: unchanged.
        assert_eq!(unify(-300.0, -270.0, 0.7), -270.0);
    }

    #[test]
    fn unify_result_lies_ahead_of_the_hand() {
        let currents = [-359.0, -200.0, -0.5, 0.0, 17.0, 359.0, 700.0];
        let targets = [0.0, -45.0, -90.0, -180.0, -225.0, -270.0];
        for &current in &currents {
            for &target in &targets {
                for &velocity in &[-3.0, -0.7, 0.7, 3.0] {
                    let unified = unify(current, target, velocity);
                    if unified != current {
                        assert_eq!(sign(unified - current), sign(velocity));
                    }
                    assert_eq!((unified - target) % FULL_TURN, 0.0);
                }
            }
        }
    }

    #[test]
    fn unify_gives_up_after_five_turns() {
        // Six turns behind: five corrections are not enough.
        let unified = unify(0.0, -6.0 * FULL_TURN - 10.0, 1.0);
        assert_eq!(unified, -FULL_TURN - 10.0);
    }

    #[test]
    fn unify_leaves_target_at_current_angle() {
        assert_eq!(unify(-90.0, -90.0, 2.0), -90.0);
    }

    #[test]
    fn gate_interpolates_when_close_for_any_velocity() {
        for &velocity in &[-3.0, 0.0, 0.5, 3.0] {
            for &distance in &[-45.0, -10.0, 0.0, 30.0, 45.0] {
                let gate = interpolation_gate(100.0, 100.0 + distance, velocity, 200.0, &APPROACH);
                assert!(gate.interpolate);
                assert_eq!(gate.velocity, velocity);
            }
        }
    }

    #[test]
    fn gate_interpolates_when_stationary() {
        let gate = interpolation_gate(0.0, -270.0, 0.0, 60.0, &APPROACH);
        assert!(gate.interpolate);
    }

    #[test]
    fn gate_accelerates_hands_that_would_be_late() {
        // 300° to cover at 1°/frame with 210 - 30 = 180 usable frames.
        let gate = interpolation_gate(0.0, 300.0, 1.0, 210.0, &APPROACH);
        assert!(!gate.interpolate);
        assert!((gate.velocity - 1.005).abs() < 1e-12);

        let gate = interpolation_gate(0.0, -300.0, -1.0, 210.0, &APPROACH);
        assert!((gate.velocity + 1.005).abs() < 1e-12);
    }

    #[test]
    fn gate_keeps_velocity_when_on_schedule() {
        let gate = interpolation_gate(0.0, 100.0, 1.0, 210.0, &APPROACH);
        assert!(!gate.interpolate);
        assert_eq!(gate.velocity, 1.0);
    }

    #[test]
    fn idle_step_stays_normalized() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut hand = Hand::at_rest(355.0);
        hand.randomize_velocity(&mut rng, 2.0, 3.0);
        for _ in 0..2_000 {
            hand.step_idle();
            assert!(hand.angle() > -360.0 && hand.angle() <= 360.0);
        }
    }

    #[test]
    fn normalize_folds_long_windings() {
        assert_eq!(normalize_angle(361.0), 1.0);
        assert_eq!(normalize_angle(-361.0), -1.0);
        assert_eq!(normalize_angle(360.0), 360.0);
        assert_eq!(normalize_angle(-360.0), 0.0);
        assert_eq!(normalize_angle(1085.0), 5.0);
        assert_eq!(normalize_angle(-45.0), -45.0);
    }

    #[test]
    fn readout_step_moves_at_velocity_then_eases_in() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut hand = Hand::at_rest(0.0);
        hand.randomize_velocity(&mut rng, 2.0, 2.5);
        let velocity = hand.velocity();
        hand.assign_target(-90.0);
        hand.set_lerp_factor(0.04);
        assert_eq!(sign(hand.target() - hand.angle()), sign(velocity));

        hand.step_time_readout(1_800.0, &APPROACH);
        assert!(!hand.interpolating());
        assert!((hand.angle() - velocity).abs() < 1e-12);

        for _ in 0..1_000 {
            hand.step_time_readout(1_800.0, &APPROACH);
        }
        assert!(hand.interpolating());
        assert!((hand.angle() - hand.target()).abs() < 1.0);
    }

    #[test]
    fn randomized_velocities_cover_both_directions() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut hand = Hand::at_rest(0.0);
        let (mut forward, mut backward) = (0, 0);
        for _ in 0..200 {
            hand.randomize_velocity(&mut rng, 0.5, 3.0);
            let speed = hand.velocity().abs();
            assert!((0.5..3.0).contains(&speed));
            if hand.velocity() > 0.0 {
                forward += 1;
            } else {
                backward += 1;
            }
        }
        assert!(forward > 0 && backward > 0);
    }
}

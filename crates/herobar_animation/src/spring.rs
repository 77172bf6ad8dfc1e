//! Spring physics animation
//!
//! RK4-integrated spring physics. Configurations can be given as raw
//! stiffness/damping/mass or as a damping ratio plus response time, the way
//! platform transition APIs describe springs.

use std::f32::consts::PI;

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Create a new spring configuration
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Spring described by a damping ratio and a response time in seconds
    ///
    /// A ratio of 1.0 is critically damped; below 1.0 overshoots. The
    /// response is the period of the undamped oscillation.
    pub fn from_damping_ratio(damping_ratio: f32, response: f32) -> Self {
        let response = response.max(f32::EPSILON);
        let omega = 2.0 * PI / response;
        Self {
            stiffness: omega * omega,
            damping: 2.0 * damping_ratio * omega,
            mass: 1.0,
        }
    }

    /// A stiff, snappy spring
    pub fn stiff() -> Self {
        Self {
            stiffness: 400.0,
            damping: 30.0,
            mass: 1.0,
        }
    }

    /// A gentle, slow spring
    pub fn gentle() -> Self {
        Self {
            stiffness: 120.0,
            damping: 14.0,
            mass: 1.0,
        }
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Damping as a fraction of critical damping
    pub fn damping_ratio(&self) -> f32 {
        self.damping / self.critical_damping()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::stiff()
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    rest_epsilon: f32,
    rest_velocity: f32,
}

impl Spring {
    /// Spring at rest on `initial`, settling within half a point
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            rest_epsilon: 0.5,
            rest_velocity: 5.0,
        }
    }

    /// Spring over a normalized `0.0..=1.0` range with matching rest thresholds
    pub fn unit(config: SpringConfig) -> Self {
        let mut spring = Self::new(config, 0.0).with_rest_thresholds(1e-3, 1e-2);
        spring.set_target(1.0);
        spring
    }

    /// Override the settling thresholds
    pub fn with_rest_thresholds(mut self, epsilon: f32, velocity: f32) -> Self {
        self.rest_epsilon = epsilon;
        self.rest_velocity = velocity;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to the target and stop
    pub fn snap_to_target(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    /// Check if the spring has settled (within epsilon of target with minimal velocity)
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.rest_epsilon
            && self.velocity.abs() < self.rest_velocity
    }

    /// Step the spring simulation using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.snap_to_target();
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_to_target() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(100.0);

        // Simulate for 2 seconds at 60fps
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!((spring.value() - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_damping_ratio_round_trip() {
        let config = SpringConfig::from_damping_ratio(0.85, 0.4);
        assert!((config.damping_ratio() - 0.85).abs() < 1e-4);
        assert!(config.is_underdamped());

        let critical = SpringConfig::from_damping_ratio(1.0, 0.4);
        assert!((critical.damping - critical.critical_damping()).abs() < 1e-3);
    }

    #[test]
    fn test_unit_spring_settles_within_a_second() {
        let mut spring = Spring::unit(SpringConfig::from_damping_ratio(0.85, 0.4));
        for _ in 0..60 {
            spring.step(1.0 / 60.0);
        }
        assert!(spring.is_settled());
        assert!((spring.value() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_spring_inherits_velocity() {
        let mut spring = Spring::new(SpringConfig::gentle(), 0.0);
        spring.set_target(100.0);

        for _ in 0..10 {
            spring.step(1.0 / 60.0);
        }

        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        // Change target mid-flight - velocity should continue
        spring.set_target(50.0);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_spring_rk4_stability() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(1000.0);

        for _ in 0..100 {
            spring.step(0.1);
            assert!(spring.value() < 2000.0);
            assert!(spring.value() > -500.0);
        }
    }
}

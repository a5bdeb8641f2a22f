//! Physical ranging parameters for the ultrasonic front end.

/// Immutable propagation parameters used to turn raw echo timings into
/// range measurements. Passed explicitly to whatever drives the ranging
/// hardware; the solver itself never reads them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangingConfig {
    /// Microseconds for sound to travel one centimeter.
    pub us_per_cm: f64,
    /// Longest path (cm) a ping can travel and still be detected.
    pub max_ping_distance: f64,
}

impl Default for RangingConfig {
    fn default() -> Self {
        // Speed of sound at room temperature; HC-SR04 detection ceiling.
        Self {
            us_per_cm: 29.386_699_6,
            max_ping_distance: 1000.0,
        }
    }
}

impl RangingConfig {
    /// Convert an echo time of flight (µs) to a range (cm).
    ///
    /// Returns `None` for times outside the detectable window; an
    /// out-of-range echo is a missed ping, not a measurement.
    pub fn echo_to_range(&self, echo_us: f64) -> Option<f64> {
        let range = echo_us / self.us_per_cm;
        if (0.0..=self.max_ping_distance).contains(&range) {
            Some(range)
        } else {
            None
        }
    }
}

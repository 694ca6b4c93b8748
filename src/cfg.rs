use hifitime::{Duration, Unit};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn default_stale_threshold() -> Duration {
    5.0 * Unit::Minute
}

fn default_initial_accuracy_m() -> f64 {
    100.0
}

fn default_initial_max_age() -> Duration {
    5.0 * Unit::Minute
}

/// Arbitration thresholds. [Config::default] matches the values every
/// deployment so far has been operating with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Maximum age beyond which a fix is no longer trusted for accuracy
    /// comparison. Once the held estimate has aged past this threshold,
    /// any fresher reading displaces it, whatever its accuracy claims.
    #[cfg_attr(feature = "serde", serde(default = "default_stale_threshold"))]
    pub stale_threshold: Duration,

    /// Horizontal accuracy (in meters, inclusive) a reading must satisfy
    /// to qualify as an acceptable initial fix.
    #[cfg_attr(feature = "serde", serde(default = "default_initial_accuracy_m"))]
    pub initial_accuracy_m: f64,

    /// Maximum age (strict) a reading may have to qualify as an
    /// acceptable initial fix.
    #[cfg_attr(feature = "serde", serde(default = "default_initial_max_age"))]
    pub initial_max_age: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stale_threshold: default_stale_threshold(),
            initial_accuracy_m: default_initial_accuracy_m(),
            initial_max_age: default_initial_max_age(),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with updated staleness threshold.
    pub fn with_stale_threshold(&self, dt: Duration) -> Self {
        let mut s = *self;
        s.stale_threshold = dt;
        s
    }

    /// Copies and returns [Config] with updated initial fix accuracy
    /// requirement, in meters.
    pub fn with_initial_accuracy_m(&self, accuracy_m: f64) -> Self {
        let mut s = *self;
        s.initial_accuracy_m = accuracy_m;
        s
    }

    /// Copies and returns [Config] with updated initial fix age limit.
    pub fn with_initial_max_age(&self, max_age: Duration) -> Self {
        let mut s = *self;
        s.initial_max_age = max_age;
        s
    }
}

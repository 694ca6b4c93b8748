//! Location fix
use hifitime::{Duration, Epoch};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::position::Position;

/// One position observation reported by a location source, proposed to the
/// [Arbiter](crate::prelude::Arbiter) for arbitration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fix {
    /// Production [Epoch] at the source, not receipt time.
    pub epoch: Epoch,

    /// Observed [Position].
    pub position: Position,

    /// Estimated horizontal accuracy in meters, smaller is more precise.
    /// `None` when the source does not qualify its observations, which is
    /// a distinct state from "infinitely inaccurate".
    pub accuracy_m: Option<f64>,
}

impl Fix {
    /// Builds a new [Fix] without accuracy qualification.
    /// ## Input
    /// - epoch: production [Epoch] at the source
    /// - position: observed [Position]
    pub fn new(epoch: Epoch, position: Position) -> Self {
        Self {
            epoch,
            position,
            accuracy_m: None,
        }
    }

    /// Copies and returns [Fix] with horizontal accuracy, in meters.
    pub fn with_accuracy_m(&self, accuracy_m: f64) -> Self {
        let mut s = *self;
        s.accuracy_m = Some(accuracy_m);
        s
    }

    /// Age of this [Fix] at `now`. Negative when the source clock runs
    /// ahead of `now`.
    pub fn age(&self, now: Epoch) -> Duration {
        now - self.epoch
    }

    /// True if this [Fix] has not aged past `threshold` at `now`.
    pub(crate) fn is_fresh(&self, now: Epoch, threshold: Duration) -> bool {
        self.age(now) <= threshold
    }
}

impl std::fmt::Display for Fix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.accuracy_m {
            Some(accuracy_m) => write!(f, "{} ({}) ±{:.1}m", self.epoch, self.position, accuracy_m),
            None => write!(f, "{} ({}) unqualified", self.epoch, self.position),
        }
    }
}

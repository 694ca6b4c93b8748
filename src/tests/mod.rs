//! Shared test infrastructure
use std::sync::{Arc, Mutex, Once};

use hifitime::{Duration, Epoch};
use log::LevelFilter;
use nalgebra::Vector3;

use crate::prelude::{Fix, Position, WallClock};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// Reference instant all dated test scenarios are built around.
pub fn t0() -> Epoch {
    Epoch::from_gregorian_utc_at_midnight(2020, 1, 1)
}

/// Reference [Position]. Arbitration never interprets coordinates, one
/// point is enough for every scenario.
pub fn reference_position() -> Position {
    Position::from_ecef_m(Vector3::new(4696989.0, 723994.0, 4239679.0))
}

/// Builds a [Fix] aged `age` relative to `now`, with optional accuracy.
pub fn fix_aged(now: Epoch, age: Duration, accuracy_m: Option<f64>) -> Fix {
    let fix = Fix::new(now - age, reference_position());
    match accuracy_m {
        Some(accuracy_m) => fix.with_accuracy_m(accuracy_m),
        None => fix,
    }
}

/// Settable [WallClock], for deterministic dating of the public
/// submission path.
#[derive(Clone)]
pub struct StaticClock {
    now: Arc<Mutex<Epoch>>,
}

impl StaticClock {
    pub fn new(now: Epoch) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn set(&self, now: Epoch) {
        *self.now.lock().unwrap() = now;
    }
}

impl WallClock for StaticClock {
    fn now(&self) -> Epoch {
        *self.now.lock().unwrap()
    }
}

//! Best fix arbitration
use std::sync::Mutex;

use hifitime::Epoch;
use log::debug;

use crate::{
    cfg::Config,
    fix::Fix,
    time::{SystemClock, WallClock},
};


/// [Arbiter] maintains the best known [Fix] across all attached sources.
/// It is the sole owner of that estimate: live readings flow in through
/// [Arbiter::submit] and consumers snapshot it with [Arbiter::current],
/// safely from any number of delivery contexts at once.
pub struct Arbiter {
    /// Arbitration thresholds.
    pub cfg: Config,
    /// [WallClock] dating each decision.
    clock: Box<dyn WallClock>,
    /// Best known [Fix]. None until a first submission is retained.
    held: Mutex<Option<Fix>>,
}

impl Arbiter {
    /// Creates a new [Arbiter] holding no estimate, dating its decisions
    /// with the operating system clock.
    /// ## Input
    /// - cfg: arbitration [Config]
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            clock: Box::new(SystemClock),
            held: Mutex::new(None),
        }
    }

    /// Returns [Arbiter] dating its decisions with a custom [WallClock].
    pub fn with_clock<C: WallClock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Proposes a candidate [Fix], possibly absent ("no reading available
    /// from this source right now", a valid input treated as a no-op).
    /// The candidate replaces the held estimate when it wins arbitration
    /// at the current instant, and is discarded otherwise. Never fails.
    pub fn submit(&self, candidate: Option<Fix>) {
        self.submit_dated(candidate, self.clock.now());
    }

    /// [Arbiter::submit] with an explicit date, for data replay scenarios
    /// where "now" is not the operating system clock.
    pub fn submit_dated(&self, candidate: Option<Fix>, now: Epoch) {
        let candidate = match candidate {
            Some(fix) => fix,
            None => {
                debug!("empty submission: nothing to arbitrate");
                return;
            },
        };

        let mut held = self.held.lock().unwrap_or_else(|e| e.into_inner());

        let previous = match *held {
            Some(fix) => fix,
            None => {
                debug!("{} retained as first fix", candidate);
                *held = Some(candidate);
                return;
            },
        };

        let candidate_fresh = candidate.is_fresh(now, self.cfg.stale_threshold);
        let held_fresh = previous.is_fresh(now, self.cfg.stale_threshold);

        // Accuracies compare as soon as one side is qualified:
        // the qualified side wins, ties go to the candidate.
        let accuracy_comparable = candidate.accuracy_m.is_some() || previous.accuracy_m.is_some();

        let candidate_more_accurate = match (candidate.accuracy_m, previous.accuracy_m) {
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (Some(candidate_m), Some(previous_m)) => candidate_m <= previous_m,
            (None, None) => false,
        };

        debug!("candidate: {} (fresh: {})", candidate, candidate_fresh);
        debug!("held: {} (fresh: {})", previous, held_fresh);

        if accuracy_comparable && candidate_more_accurate && candidate_fresh {
            debug!("{} new best fix", candidate);
            *held = Some(candidate);
        } else if candidate_fresh && !held_fresh {
            // recency outranks accuracy once the held estimate went stale
            debug!("{} new best fix (held estimate went stale)", candidate);
            *held = Some(candidate);
        } else {
            debug!("{} discarded", candidate);
        }
    }

    /// Returns a snapshot of the best known [Fix], None if no submission
    /// was ever retained.
    pub fn current(&self) -> Option<Fix> {
        *self.held.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Unconditionally replaces the held estimate, bypassing arbitration.
    /// Intended for applications restoring a persisted fix at startup.
    pub fn seed(&self, fix: Option<Fix>) {
        let mut held = self.held.lock().unwrap_or_else(|e| e.into_inner());
        *held = fix;
    }

    /// True if `candidate` is good enough to act on immediately, for
    /// callers deciding whether to stop waiting on a first fix: accuracy
    /// qualified and within [Config::initial_accuracy_m] (inclusive), age
    /// below [Config::initial_max_age] (strict). Independent of the held
    /// estimate, never mutates state.
    pub fn acceptable_initial_fix(&self, candidate: Option<Fix>, now: Epoch) -> bool {
        match candidate {
            Some(fix) => match fix.accuracy_m {
                Some(accuracy_m) => {
                    accuracy_m <= self.cfg.initial_accuracy_m
                        && fix.age(now) < self.cfg.initial_max_age
                },
                None => {
                    debug!("{} not acceptable: unqualified accuracy", fix);
                    false
                },
            },
            None => false,
        }
    }
}

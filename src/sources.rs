//! Source binding and the platform capability it consumes
use std::sync::Arc;

use hifitime::{Duration, Unit};
use itertools::Itertools;
use log::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{arbiter::Arbiter, error::Error, fix::Fix};

/// Identifies one location source on the platform ("gps", "network", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourceId(String);

impl SourceId {
    /// Builds a new [SourceId] from its platform name.
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Returns the platform name of this source.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Live delivery rate policy, honored by the platform as advisory,
/// not exact.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UpdateRate {
    /// Minimum time between two deliveries.
    pub min_interval: Duration,
    /// Minimum distance between two deliveries, in meters.
    pub min_distance_m: f64,
}

impl UpdateRate {
    /// Deliver every reading the source produces. This is the rate of
    /// choice when waiting on a first usable fix.
    pub fn continuous() -> Self {
        Self {
            min_interval: Duration::ZERO,
            min_distance_m: 0.0,
        }
    }

    /// Power conserving rate: at most one delivery per five minutes and
    /// fifty meters of displacement.
    pub fn power_saving() -> Self {
        Self {
            min_interval: 5.0 * Unit::Minute,
            min_distance_m: 50.0,
        }
    }
}

impl Default for UpdateRate {
    fn default() -> Self {
        Self::continuous()
    }
}

impl std::fmt::Display for UpdateRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "every {} / {:.0}m", self.min_interval, self.min_distance_m)
    }
}

/// Source availability, as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceStatus {
    /// Source is delivering readings.
    Available,
    /// Source lost its ability to fix, presumably for a short time.
    TemporarilyUnavailable,
    /// Source is out of service.
    OutOfService,
}

/// Availability notifications the platform may emit alongside readings.
/// Every hook defaults to a no-op: none of them carries arbitration
/// logic, applications override what they want surfaced.
pub trait SourceEvents {
    /// A source was switched on.
    fn source_enabled(&self, _source: &SourceId) {}

    /// A source was switched off.
    fn source_disabled(&self, _source: &SourceId) {}

    /// A source changed [SourceStatus].
    fn status_changed(&self, _source: &SourceId, _status: SourceStatus) {}
}

/// The one inbound port live readings flow through. [Arbiter] is the
/// intended sink; delivery recorders may stand in when auditing a
/// platform.
pub trait FixSink: Send + Sync {
    /// Push one reading, possibly absent ("no fix available right now").
    fn submit(&self, fix: Option<Fix>);
}

impl FixSink for Arbiter {
    fn submit(&self, fix: Option<Fix>) {
        Arbiter::submit(self, fix)
    }
}

/// Platform location capability consumed by [SourceBinding]: enumerate
/// sources, recall their last reading, wire live deliveries into a
/// [FixSink].
pub trait SourceProvider {
    /// Sources currently enabled on the platform.
    fn enabled_sources(&self) -> Result<Vec<SourceId>, Error>;

    /// Last reading this source retained, if any. Non blocking, best
    /// effort: None on a fresh install that never obtained a fix, which
    /// is not an error.
    fn last_known_fix(&self, source: &SourceId) -> Option<Fix>;

    /// Begin pushing future readings of `source` into `sink`, honoring
    /// `rate` as advisory.
    fn register_live_updates(
        &mut self,
        source: &SourceId,
        rate: UpdateRate,
        sink: Arc<dyn FixSink>,
    ) -> Result<(), Error>;

    /// Stop all deliveries into `sink`, whichever sources feed it.
    /// Idempotent.
    fn unregister_live_updates(&mut self, sink: &Arc<dyn FixSink>);
}

/// [SourceBinding] subscribes an [Arbiter] to every enabled source of a
/// [SourceProvider]: seeds it with each source's last known [Fix], then
/// forwards live readings until detached.
pub struct SourceBinding {
    /// The bound [Arbiter].
    arbiter: Arc<Arbiter>,
}

impl SourceBinding {
    /// Binds `arbiter` as the sink of all future attachments.
    pub fn new(arbiter: Arc<Arbiter>) -> Self {
        Self { arbiter }
    }

    /// Returns a shared handle to the bound [Arbiter].
    pub fn arbiter(&self) -> Arc<Arbiter> {
        self.arbiter.clone()
    }

    /// Subscribes the bound [Arbiter] to every source `provider`
    /// currently reports enabled: submits the source's last known [Fix]
    /// first (possibly absent), then registers for live updates at
    /// `rate`. Capability failures propagate unmodified, no retry is
    /// attempted here.
    pub fn attach<P: SourceProvider>(
        &self,
        provider: &mut P,
        rate: UpdateRate,
    ) -> Result<(), Error> {
        let sink: Arc<dyn FixSink> = self.arbiter.clone();

        for source in provider.enabled_sources()?.into_iter().unique() {
            self.arbiter.submit(provider.last_known_fix(&source));
            provider.register_live_updates(&source, rate, sink.clone())?;
            info!("{} attached ({})", source, rate);
        }

        Ok(())
    }

    /// Cancels all live deliveries into the bound [Arbiter]. Idempotent
    /// and safe to call without a prior [SourceBinding::attach]; the last
    /// reading delivered before this call is the source's final
    /// contribution.
    pub fn detach<P: SourceProvider>(&self, provider: &mut P) {
        let sink: Arc<dyn FixSink> = self.arbiter.clone();
        provider.unregister_live_updates(&sink);
        debug!("detached from all sources");
    }
}

use hifitime::Epoch;

/// [WallClock] dates arbitration decisions. Implement it when the
/// operating system clock is not the desired time reference, typically
/// when replaying recorded data or in deterministic test setups.
pub trait WallClock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Epoch;
}

/// [SystemClock] reads the operating system clock. This is the reference
/// all live deployments should date their readings against.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> Epoch {
        Epoch::now().unwrap_or_else(|e| panic!("system clock not available: {}", e))
    }
}

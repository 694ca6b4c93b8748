use thiserror::Error;

/// Failure surfaced by the platform location capability, type erased so it
/// crosses this crate without modification.
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// Arbitration itself never fails: absent readings and readings lacking
/// accuracy are valid, explicitly handled inputs. The only failure mode
/// surfaced by this crate comes from the source capability.
#[derive(Debug, Error)]
pub enum Error {
    /// The source capability failed to enumerate or register sources.
    /// Forwarded to the caller as is: retry intervals and fallback source
    /// selection are application level decisions.
    #[error(transparent)]
    Source(#[from] SourceError),
}

#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod arbiter;
mod cfg;
mod error;
mod fix;
mod position;
mod sources;
mod time;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::arbiter::Arbiter;
    pub use crate::cfg::Config;
    pub use crate::fix::Fix;
    pub use crate::position::Position;
    pub use crate::sources::{
        FixSink, SourceBinding, SourceEvents, SourceId, SourceProvider, SourceStatus, UpdateRate,
    };
    pub use crate::time::{SystemClock, WallClock};
    // re-export
    pub use hifitime::{Duration, Epoch, Unit};
    pub use nalgebra::Vector3;
}

// pub export
pub use error::{Error, SourceError};

//! sl-overview: per-product statistics over live simulation telemetry.
//!
//! The simulation side exposes a [`WorldSnapshot`]: actor states, active
//! traders, and route metrics behind opaque path handles. The
//! [`OverviewAggregator`] groups producer actors by product and condenses
//! each group into one [`ProductStats`] record per update.

pub mod aggregate;
pub mod snapshot;
pub mod stats;

pub use aggregate::OverviewAggregator;
pub use snapshot::{
    ActiveTrader, ActorKind, ActorState, ActorStatus, PathId, PathMetrics, StorageSlot,
    WorldSnapshot,
};
pub use stats::{InputDetail, ProductStats, StatusCounts};

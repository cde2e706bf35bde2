//! Snapshot input model consumed from the running simulation.

use std::collections::HashMap;

use sl_core::{ProductId, Real};

/// Coarse actor classification; the overview only aggregates producers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActorKind {
    #[default]
    Producer,
    Trader,
}

/// Producer status as reported by the simulation.
///
/// The set is open on the simulation side; anything the overview does not
/// track arrives as `Other` and is counted as idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActorStatus {
    Producing,
    MissingInputs,
    #[default]
    Idle,
    Other,
}

/// Fill state of one storage slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorageSlot {
    pub current: Real,
    pub capacity: Real,
    /// Soft ceiling the producer aims to stay under; output slots only.
    pub ideal_max: Option<Real>,
}

impl StorageSlot {
    /// current / capacity, or 0 for a slot with no usable capacity.
    pub fn fill(&self) -> Real {
        if self.capacity > 0.0 {
            self.current / self.capacity
        } else {
            0.0
        }
    }
}

/// Point-in-time state of one simulation actor.
#[derive(Debug, Clone, Default)]
pub struct ActorState {
    pub kind: ActorKind,
    /// Product this actor produces; producers without one are skipped.
    pub product_id: Option<ProductId>,
    pub status: ActorStatus,
    pub output_storage: HashMap<ProductId, StorageSlot>,
    pub input_storage: HashMap<ProductId, StorageSlot>,
    /// Ticks this actor has been watched for.
    pub observed_ticks: u64,
    /// Ticks spent actually producing within the observed window.
    pub producing_ticks: u64,
    pub sell_prices: HashMap<ProductId, Real>,
}

impl ActorState {
    /// Last observed sell price for `product`, or 0 when the actor has none.
    pub fn sell_price(&self, product: ProductId) -> Real {
        self.sell_prices.get(&product).copied().unwrap_or(0.0)
    }
}

/// Opaque handle to a trade route owned by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathId(pub u64);

/// A trader currently moving `product_id` along a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveTrader {
    pub product_id: ProductId,
    pub path: PathId,
}

/// Route cost figures for one trade path.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PathMetrics {
    /// Route length in tiles.
    pub route_length: Real,
    /// Total fuel cost over the whole route.
    pub fuel_cost: Real,
}

/// Read-only view of the live simulation, polled by the overview.
pub trait WorldSnapshot {
    fn actor_states(&self) -> &[ActorState];
    fn active_traders(&self) -> &[ActiveTrader];
    /// Metrics for a route handle taken from
    /// [`active_traders`](WorldSnapshot::active_traders).
    fn path_metrics(&self, path: PathId) -> PathMetrics;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_guards_against_zero_capacity() {
        let slot = StorageSlot {
            current: 5.0,
            capacity: 0.0,
            ideal_max: None,
        };
        assert_eq!(slot.fill(), 0.0);

        let slot = StorageSlot {
            current: 5.0,
            capacity: 20.0,
            ideal_max: None,
        };
        assert_eq!(slot.fill(), 0.25);
    }

    #[test]
    fn sell_price_defaults_to_zero() {
        let actor = ActorState::default();
        assert_eq!(actor.sell_price(ProductId::from_index(0)), 0.0);
    }
}

//! Producer telemetry aggregation.

use std::collections::HashMap;

use sl_core::{ProductId, Real};
use sl_graph::{EconomyGraph, Product};

use crate::snapshot::{ActorKind, ActorState, ActorStatus, StorageSlot, WorldSnapshot};
use crate::stats::{InputDetail, ProductStats, StatusCounts};

/// Condenses actor snapshots into per-product statistics.
///
/// Holds nothing between calls except the latest result; every
/// [`update`](Self::update) recomputes it wholesale.
#[derive(Debug, Default)]
pub struct OverviewAggregator {
    latest: HashMap<ProductId, ProductStats>,
}

impl OverviewAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Result of the most recent [`update`](Self::update).
    pub fn latest(&self) -> &HashMap<ProductId, ProductStats> {
        &self.latest
    }

    /// Recompute statistics from a fresh snapshot.
    ///
    /// Only producer actors with a product id are counted; groups whose
    /// product no longer exists in the graph are dropped.
    pub fn update(
        &mut self,
        snapshot: &impl WorldSnapshot,
        graph: &EconomyGraph,
    ) -> &HashMap<ProductId, ProductStats> {
        let mut groups: HashMap<ProductId, Vec<&ActorState>> = HashMap::new();
        for actor in snapshot.actor_states() {
            if actor.kind != ActorKind::Producer {
                continue;
            }
            let Some(product_id) = actor.product_id else {
                continue;
            };
            groups.entry(product_id).or_default().push(actor);
        }

        let mut stats = HashMap::with_capacity(groups.len());
        for (product_id, actors) in groups {
            let Some(product) = graph.product(product_id) else {
                continue;
            };
            stats.insert(
                product_id,
                group_stats(product_id, product, &actors, snapshot, graph),
            );
        }
        self.latest = stats;
        &self.latest
    }
}

/// Status bucket of one producer, first match wins: a full output slot
/// trumps surplus, which trumps whatever the actor reports.
fn classify(actor: &ActorState, product: ProductId) -> Bucket {
    if let Some(slot) = actor.output_storage.get(&product) {
        if slot.capacity > 0.0 && slot.current >= slot.capacity {
            return Bucket::OutputFull;
        }
        if let Some(ideal_max) = slot.ideal_max {
            if slot.current > ideal_max {
                return Bucket::OutputSurplus;
            }
        }
    }
    match actor.status {
        ActorStatus::Producing => Bucket::Producing,
        ActorStatus::MissingInputs => Bucket::MissingInputs,
        ActorStatus::Idle | ActorStatus::Other => Bucket::Idle,
    }
}

enum Bucket {
    Producing,
    Idle,
    OutputFull,
    OutputSurplus,
    MissingInputs,
}

fn group_stats(
    product_id: ProductId,
    product: &Product,
    actors: &[&ActorState],
    snapshot: &impl WorldSnapshot,
    graph: &EconomyGraph,
) -> ProductStats {
    let group_size = actors.len();
    let mut counts = StatusCounts::default();
    let mut output_fill_sum = 0.0;
    let mut sell_price_sum = 0.0;
    let mut uptime_sum = 0.0;

    for actor in actors {
        match classify(actor, product_id) {
            Bucket::Producing => counts.producing += 1,
            Bucket::Idle => counts.idle += 1,
            Bucket::OutputFull => counts.output_full += 1,
            Bucket::OutputSurplus => counts.output_surplus += 1,
            Bucket::MissingInputs => counts.missing_inputs += 1,
        }
        // Missing or zero-capacity output slots still count, at fill 0.
        output_fill_sum += actor
            .output_storage
            .get(&product_id)
            .map_or(0.0, StorageSlot::fill);
        sell_price_sum += actor.sell_price(product_id);
        uptime_sum += if actor.observed_ticks > 0 {
            actor.producing_ticks as Real / actor.observed_ticks as Real
        } else {
            0.0
        };
    }

    // Input fills: per-input means skip actors without a usable slot; the
    // overall mean runs over every non-skipped slot ratio.
    let mut input_details = HashMap::with_capacity(product.inputs.len());
    let mut overall_sum = 0.0;
    let mut overall_slots = 0usize;
    for input in &product.inputs {
        let mut sum = 0.0;
        let mut slots = 0usize;
        for actor in actors {
            if let Some(slot) = actor.input_storage.get(&input.product_id) {
                if slot.capacity > 0.0 {
                    sum += slot.fill();
                    slots += 1;
                }
            }
        }
        overall_sum += sum;
        overall_slots += slots;

        let name = graph
            .product(input.product_id)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        input_details.insert(
            input.product_id,
            InputDetail {
                name,
                avg_fill_pct: mean(sum, slots),
            },
        );
    }

    // Transport: totals over this product's active traders.
    let mut transport_count = 0usize;
    let mut total_route_length = 0.0;
    let mut total_fuel_cost = 0.0;
    for trader in snapshot.active_traders() {
        if trader.product_id != product_id {
            continue;
        }
        let metrics = snapshot.path_metrics(trader.path);
        transport_count += 1;
        total_route_length += metrics.route_length;
        total_fuel_cost += metrics.fuel_cost;
    }
    let avg_route_length = mean(total_route_length, transport_count);
    let avg_fuel_cost = if total_route_length > 0.0 {
        // Fuel cost is per tile.
        total_fuel_cost / total_route_length
    } else {
        0.0
    };

    ProductStats {
        factory_count: group_size,
        avg_input_fill_pct: mean(overall_sum, overall_slots),
        avg_output_fill_pct: mean(output_fill_sum, group_size),
        avg_sell_price: mean(sell_price_sum, group_size),
        avg_uptime_pct: mean(uptime_sum, group_size),
        transport_count,
        avg_route_length,
        avg_transport_cost: avg_fuel_cost * avg_route_length,
        avg_fuel_cost,
        status_counts: counts,
        input_details,
    }
}

fn mean(sum: Real, n: usize) -> Real {
    if n > 0 { sum / n as Real } else { 0.0 }
}

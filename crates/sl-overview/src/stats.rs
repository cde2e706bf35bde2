//! Per-product statistics records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sl_core::{ProductId, Real};

/// Producer status buckets for one product group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub producing: usize,
    pub idle: usize,
    pub output_full: usize,
    pub output_surplus: usize,
    pub missing_inputs: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.producing + self.idle + self.output_full + self.output_surplus + self.missing_inputs
    }
}

/// Fill detail for one recipe input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDetail {
    /// Display name of the input product.
    pub name: String,
    /// Mean fill ratio over the actors holding a usable slot for it.
    pub avg_fill_pct: Real,
}

/// Aggregated statistics for one product type.
///
/// Fill, uptime and price figures are means over the producer group;
/// transport figures are derived from the product's active traders. Every
/// ratio that would divide by zero reports 0 instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductStats {
    pub factory_count: usize,
    pub avg_input_fill_pct: Real,
    pub avg_output_fill_pct: Real,
    pub avg_sell_price: Real,
    pub avg_uptime_pct: Real,
    pub transport_count: usize,
    pub avg_route_length: Real,
    pub avg_transport_cost: Real,
    pub avg_fuel_cost: Real,
    pub status_counts: StatusCounts,
    pub input_details: HashMap<ProductId, InputDetail>,
}

//! Depth-stratified random DAG generation.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use sl_core::{ProductId, round_to_tenth};
use sl_graph::{EconomyGraph, ProductInput};

use crate::catalog::IconDef;
use crate::error::{GenError, GenResult};

/// Generation parameters: target size, layering and degree constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenParams {
    /// Target number of products; the result may fall short when the
    /// constraints make further progress impossible.
    pub num_nodes: usize,
    /// Deepest layer to emit; raw materials sit at depth 0.
    pub max_depth: u32,
    /// Fewest inputs a non-raw product draws.
    pub min_inputs: usize,
    /// Most inputs a non-raw product draws.
    pub max_inputs: usize,
}

impl GenParams {
    fn check(&self) -> GenResult<()> {
        if self.num_nodes == 0 {
            return Err(GenError::InvalidParams {
                what: "num_nodes must be positive",
            });
        }
        if self.min_inputs > self.max_inputs {
            return Err(GenError::InvalidParams {
                what: "min_inputs exceeds max_inputs",
            });
        }
        Ok(())
    }
}

/// Produces random economies from an icon catalog.
///
/// Every product at depth `d > 0` consumes only products from strictly
/// shallower layers, so the output is acyclic without ever rolling back.
pub struct RandomEconomyGenerator<R: Rng> {
    icons: Vec<IconDef>,
    rng: R,
}

impl RandomEconomyGenerator<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn from_entropy(icons: Vec<IconDef>) -> Self {
        Self::new(icons, StdRng::from_entropy())
    }
}

impl<R: Rng> RandomEconomyGenerator<R> {
    pub fn new(icons: Vec<IconDef>, rng: R) -> Self {
        Self { icons, rng }
    }

    /// Generate a random economy.
    ///
    /// Per-slot failures degrade (half the inputs, then skip) rather than
    /// abort; an impossible combination of constraints yields a smaller
    /// graph, never an error.
    pub fn generate(&mut self, params: GenParams) -> GenResult<EconomyGraph> {
        params.check()?;

        let mut icons = self.icons.clone();
        icons.shuffle(&mut self.rng);
        let mut cursor = 0usize;

        let mut graph = EconomyGraph::new();
        let depth_count = params.max_depth as usize + 1;
        let mut layers: Vec<Vec<ProductId>> = vec![Vec::new(); depth_count];
        let mut emitted = 0usize;

        // Depth 0: raw materials.
        let raw_target = (params.num_nodes / depth_count).max(1);
        for _ in 0..raw_target {
            if emitted >= params.num_nodes {
                break;
            }
            let icon = next_icon(&icons, &mut cursor);
            if let Ok(id) = graph.add_product(icon.name, icon.path, Vec::new()) {
                layers[0].push(id);
                emitted += 1;
            }
        }

        // One pass per deeper layer, each slot drawing from the union of
        // all shallower layers.
        if params.max_depth > 0 {
            let layer_target = (params.num_nodes.saturating_sub(layers[0].len())
                / params.max_depth as usize)
                .max(1);
            for depth in 1..depth_count {
                for _ in 0..layer_target {
                    if emitted >= params.num_nodes {
                        break;
                    }
                    let pool: Vec<ProductId> =
                        layers[..depth].iter().flatten().copied().collect();
                    let inputs = self.pick_inputs(&pool, &params);
                    let icon = next_icon(&icons, &mut cursor);
                    if let Some(id) = add_with_retry(&mut graph, &icon, &inputs) {
                        layers[depth].push(id);
                        emitted += 1;
                    }
                }
            }
        }

        // Top-up: fill the remaining budget at random depths until an add
        // fails outright.
        while emitted < params.num_nodes {
            let depth = self.rng.gen_range(0..=params.max_depth) as usize;
            let inputs = if depth == 0 {
                Vec::new()
            } else {
                let mut pool: Vec<ProductId> =
                    layers[..depth].iter().flatten().copied().collect();
                if pool.is_empty() {
                    pool = layers[0].clone();
                }
                self.pick_inputs(&pool, &params)
            };
            let icon = next_icon(&icons, &mut cursor);
            let added = match graph.add_product(icon.name.clone(), icon.path.clone(), inputs.clone())
            {
                Ok(id) => Some(id),
                Err(err) => {
                    debug!(%err, "top-up slot degraded to a single input");
                    graph
                        .add_product(
                            icon.name.clone(),
                            icon.path.clone(),
                            inputs.into_iter().take(1).collect(),
                        )
                        .ok()
                }
            };
            match added {
                Some(id) => {
                    layers[depth].push(id);
                    emitted += 1;
                }
                None => break,
            }
        }

        debug!(
            products = graph.len(),
            target = params.num_nodes,
            "random economy generated"
        );
        Ok(graph)
    }

    /// Draw a recipe: an input count uniform in `[min, max]` (clamped to
    /// the pool), distinct inputs without replacement, tenth-rounded
    /// amounts in `[1.0, 10.0]`.
    fn pick_inputs(&mut self, pool: &[ProductId], params: &GenParams) -> Vec<ProductInput> {
        let want = self
            .rng
            .gen_range(params.min_inputs..=params.max_inputs)
            .min(pool.len());
        let chosen: Vec<ProductId> = pool.choose_multiple(&mut self.rng, want).copied().collect();
        chosen
            .into_iter()
            .map(|product_id| ProductInput {
                product_id,
                amount: round_to_tenth(self.rng.gen_range(1.0..=10.0)),
            })
            .collect()
    }
}

/// Round-robin over the shuffled catalog; blank entries fall back to the
/// placeholder so generated products always validate.
fn next_icon(icons: &[IconDef], cursor: &mut usize) -> IconDef {
    if icons.is_empty() {
        return IconDef::placeholder();
    }
    let mut icon = icons[*cursor % icons.len()].clone();
    *cursor += 1;
    if icon.name.trim().is_empty() {
        icon.name = IconDef::placeholder().name;
    }
    icon
}

/// A failed slot retries once with the first half of its inputs, then is
/// skipped.
fn add_with_retry(
    graph: &mut EconomyGraph,
    icon: &IconDef,
    inputs: &[ProductInput],
) -> Option<ProductId> {
    match graph.add_product(icon.name.clone(), icon.path.clone(), inputs.to_vec()) {
        Ok(id) => Some(id),
        Err(err) => {
            debug!(%err, "product slot degraded to half of its inputs");
            let half = inputs[..inputs.len() / 2].to_vec();
            graph
                .add_product(icon.name.clone(), icon.path.clone(), half)
                .ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(icons: Vec<IconDef>) -> RandomEconomyGenerator<StdRng> {
        RandomEconomyGenerator::new(icons, StdRng::seed_from_u64(7))
    }

    #[test]
    fn rejects_zero_nodes() {
        let err = seeded(vec![])
            .generate(GenParams {
                num_nodes: 0,
                max_depth: 2,
                min_inputs: 1,
                max_inputs: 2,
            })
            .unwrap_err();
        assert!(matches!(err, GenError::InvalidParams { .. }));
    }

    #[test]
    fn rejects_inverted_degree_bounds() {
        let err = seeded(vec![])
            .generate(GenParams {
                num_nodes: 5,
                max_depth: 2,
                min_inputs: 3,
                max_inputs: 1,
            })
            .unwrap_err();
        assert!(matches!(err, GenError::InvalidParams { .. }));
    }

    #[test]
    fn empty_catalog_uses_placeholder() {
        let graph = seeded(vec![])
            .generate(GenParams {
                num_nodes: 4,
                max_depth: 1,
                min_inputs: 1,
                max_inputs: 1,
            })
            .unwrap();
        assert!(!graph.is_empty());
        assert!(graph.products().iter().all(|p| p.name == "Product"));
    }

    #[test]
    fn depth_zero_yields_only_raw_materials() {
        let graph = seeded(vec![IconDef::new("Ore", "ore.png")])
            .generate(GenParams {
                num_nodes: 5,
                max_depth: 0,
                min_inputs: 1,
                max_inputs: 3,
            })
            .unwrap();
        assert_eq!(graph.len(), 5);
        assert!(graph.products().iter().all(|p| p.is_raw_material()));
    }

    #[test]
    fn same_seed_same_economy() {
        let icons = vec![
            IconDef::new("Ore", "ore.png"),
            IconDef::new("Coal", "coal.png"),
            IconDef::new("Iron", "iron.png"),
        ];
        let params = GenParams {
            num_nodes: 8,
            max_depth: 2,
            min_inputs: 1,
            max_inputs: 2,
        };
        let a = RandomEconomyGenerator::new(icons.clone(), StdRng::seed_from_u64(42))
            .generate(params)
            .unwrap();
        let b = RandomEconomyGenerator::new(icons, StdRng::seed_from_u64(42))
            .generate(params)
            .unwrap();
        assert_eq!(a.products(), b.products());
    }
}

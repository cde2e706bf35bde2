//! Randomized invariant checks for the economy graph.

use std::collections::BTreeSet;

use proptest::prelude::*;
use sl_core::ProductId;
use sl_graph::{EconomyGraph, ProductInput};

/// Build a graph from compact specs: each entry adds one product whose
/// inputs are drawn deterministically from the products added before it.
fn build(specs: &[(u8, u16)]) -> (EconomyGraph, Vec<ProductId>) {
    let mut graph = EconomyGraph::new();
    let mut ids: Vec<ProductId> = Vec::new();
    for &(fan_in, pick) in specs {
        let mut chosen = BTreeSet::new();
        if !ids.is_empty() {
            for j in 0..usize::from(fan_in % 4) {
                chosen.insert((usize::from(pick) + j * 7) % ids.len());
            }
        }
        let inputs: Vec<ProductInput> = chosen
            .into_iter()
            .map(|slot| ProductInput {
                product_id: ids[slot],
                amount: 1.0 + slot as f64,
            })
            .collect();
        let id = graph
            .add_product(format!("P{}", ids.len()), "", inputs)
            .expect("inputs only reference earlier products");
        ids.push(id);
    }
    (graph, ids)
}

proptest! {
    #[test]
    fn toposort_is_a_permutation(specs in proptest::collection::vec((any::<u8>(), any::<u16>()), 1..40)) {
        let (graph, ids) = build(&specs);
        let mut order = graph.topological_sort();
        let mut expected = ids.clone();
        order.sort();
        expected.sort();
        prop_assert_eq!(order, expected);
    }

    #[test]
    fn inputs_are_strictly_shallower(specs in proptest::collection::vec((any::<u8>(), any::<u16>()), 1..40)) {
        let (graph, _) = build(&specs);
        let depths = graph.depths();
        for product in graph.products() {
            for input in &product.inputs {
                prop_assert!(depths[&input.product_id] < depths[&product.id]);
            }
        }
    }

    #[test]
    fn delete_leaves_a_consistent_graph(specs in proptest::collection::vec((any::<u8>(), any::<u16>()), 1..30)) {
        let (mut graph, ids) = build(&specs);
        // Inputs only point backwards, so deleting newest-first empties the
        // graph one legal delete at a time.
        for &id in ids.iter().rev() {
            let _ = graph.delete_product(id);
        }
        prop_assert_eq!(graph.topological_sort().len(), graph.len());
    }
}

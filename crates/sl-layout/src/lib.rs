//! sl-layout: depth-layered 2D placement for economy graphs.
//!
//! Columns follow the depth projection of the graph: raw materials in the
//! leftmost column, each deeper layer one column further right. Within a
//! layer, products stack vertically in insertion order, centered on y = 0.
//! The visualizer consumes the written positions and the bounding box; the
//! exact pixel geometry is its business, not ours.

use std::collections::BTreeMap;

use sl_core::{ProductId, Real};
use sl_graph::{EconomyGraph, Position};

/// Spacing knobs for the layered layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Horizontal distance between consecutive depth layers.
    pub column_spacing: Real,
    /// Vertical distance between products within a layer.
    pub row_spacing: Real,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            column_spacing: 6.0,
            row_spacing: 3.0,
        }
    }
}

/// Axis-aligned bounds of all placed products.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min_x: Real,
    pub max_x: Real,
    pub min_y: Real,
    pub max_y: Real,
}

/// Assign a position to every product, with default spacing.
pub fn calculate_layout(graph: &mut EconomyGraph) {
    calculate_layout_with(graph, &LayoutOptions::default())
}

/// Assign a position to every product: x from the depth layer, y from the
/// slot within the layer, z always 0.
pub fn calculate_layout_with(graph: &mut EconomyGraph, options: &LayoutOptions) {
    let depths = graph.depths();

    let mut layers: BTreeMap<u32, Vec<ProductId>> = BTreeMap::new();
    for product in graph.products() {
        layers.entry(depths[&product.id]).or_default().push(product.id);
    }

    for (depth, members) in &layers {
        let x = Real::from(*depth) * options.column_spacing;
        let mid = (members.len() as Real - 1.0) / 2.0;
        for (row, &id) in members.iter().enumerate() {
            let y = (row as Real - mid) * options.row_spacing;
            graph.set_position(id, Position { x, y, z: 0.0 });
        }
    }
}

/// Bounds over all placed products; zero for an empty or unplaced graph.
pub fn bounding_box(graph: &EconomyGraph) -> BoundingBox {
    let mut bounds: Option<BoundingBox> = None;
    for product in graph.products() {
        let Some(position) = product.position else {
            continue;
        };
        let entry = bounds.get_or_insert(BoundingBox {
            min_x: position.x,
            max_x: position.x,
            min_y: position.y,
            max_y: position.y,
        });
        entry.min_x = entry.min_x.min(position.x);
        entry.max_x = entry.max_x.max(position.x);
        entry.min_y = entry.min_y.min(position.y);
        entry.max_y = entry.max_y.max(position.y);
    }
    bounds.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_graph::ProductInput;

    fn input(id: ProductId, amount: f64) -> ProductInput {
        ProductInput {
            product_id: id,
            amount,
        }
    }

    #[test]
    fn columns_follow_depth() {
        let mut graph = EconomyGraph::new();
        let ore = graph.add_product("Ore", "", vec![]).unwrap();
        let iron = graph.add_product("Iron", "", vec![input(ore, 1.0)]).unwrap();
        let steel = graph
            .add_product("Steel", "", vec![input(iron, 1.0)])
            .unwrap();

        calculate_layout(&mut graph);

        let x_of = |id| graph.product(id).unwrap().position.unwrap().x;
        assert_eq!(x_of(ore), 0.0);
        assert_eq!(x_of(iron), 6.0);
        assert_eq!(x_of(steel), 12.0);
    }

    #[test]
    fn layers_are_centered_vertically() {
        let mut graph = EconomyGraph::new();
        let a = graph.add_product("A", "", vec![]).unwrap();
        let b = graph.add_product("B", "", vec![]).unwrap();
        let c = graph.add_product("C", "", vec![]).unwrap();

        calculate_layout(&mut graph);

        let y_of = |id| graph.product(id).unwrap().position.unwrap().y;
        assert_eq!(y_of(a), -3.0);
        assert_eq!(y_of(b), 0.0);
        assert_eq!(y_of(c), 3.0);
    }

    #[test]
    fn every_product_gets_a_position() {
        let mut graph = EconomyGraph::new();
        let a = graph.add_product("A", "", vec![]).unwrap();
        let b = graph.add_product("B", "", vec![input(a, 1.0)]).unwrap();
        graph
            .add_product("C", "", vec![input(a, 1.0), input(b, 1.0)])
            .unwrap();

        calculate_layout_with(
            &mut graph,
            &LayoutOptions {
                column_spacing: 10.0,
                row_spacing: 4.0,
            },
        );
        assert!(graph.products().iter().all(|p| p.position.is_some()));
    }

    #[test]
    fn bounding_box_covers_all_positions() {
        let mut graph = EconomyGraph::new();
        let a = graph.add_product("A", "", vec![]).unwrap();
        let b = graph.add_product("B", "", vec![]).unwrap();
        let c = graph.add_product("C", "", vec![input(a, 1.0)]).unwrap();
        let _ = (b, c);

        calculate_layout(&mut graph);
        let bounds = bounding_box(&graph);

        for product in graph.products() {
            let position = product.position.unwrap();
            assert!((bounds.min_x..=bounds.max_x).contains(&position.x));
            assert!((bounds.min_y..=bounds.max_y).contains(&position.y));
        }
    }

    #[test]
    fn empty_graph_has_zero_bounds() {
        let graph = EconomyGraph::new();
        assert_eq!(bounding_box(&graph), BoundingBox::default());
    }
}

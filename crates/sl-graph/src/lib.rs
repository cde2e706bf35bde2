//! sl-graph: recipe DAG model for supplyline.
//!
//! Provides:
//! - `Product` recipe records with validation
//! - `EconomyGraph`: ordered product storage enforcing a cycle-free
//!   dependency invariant, with Kahn topological sort and memoized depths
//!
//! # Example
//!
//! ```
//! use sl_graph::{EconomyGraph, ProductInput};
//!
//! let mut graph = EconomyGraph::new();
//! let ore = graph.add_product("Ore", "", vec![]).unwrap();
//! let iron = graph
//!     .add_product("Iron", "", vec![ProductInput { product_id: ore, amount: 2.0 }])
//!     .unwrap();
//!
//! assert_eq!(graph.topological_sort(), vec![ore, iron]);
//! assert_eq!(graph.depths()[&iron], 1);
//! ```

pub mod error;
pub mod graph;
pub mod product;
pub(crate) mod cycle;

// Re-exports for ergonomics
pub use error::{GraphError, GraphResult, ProductError};
pub use graph::EconomyGraph;
pub use product::{Position, Product, ProductInput};

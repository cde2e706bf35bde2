//! sl-gen: random economy generation.
//!
//! Produces depth-stratified recipe DAGs: products at depth `d` only
//! consume products from strictly shallower layers, so every generated
//! graph is acyclic by construction. The generator is generic over its
//! random source, which keeps test output reproducible from a seed.

pub mod catalog;
pub mod error;
pub mod generator;

pub use catalog::IconDef;
pub use error::{GenError, GenResult};
pub use generator::{GenParams, RandomEconomyGenerator};

//! sl-core: shared identifiers and numeric primitives for supplyline.

pub mod ids;
pub mod numeric;

pub use ids::ProductId;
pub use numeric::{Real, positive_finite, round_to_tenth};

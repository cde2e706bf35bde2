//! Product records: the recipe vertices of the economy graph.

use sl_core::{ProductId, Real, positive_finite};

use crate::error::ProductError;

/// One recipe ingredient: `amount` units of the product `product_id`.
///
/// Input order is preserved for display, but a well-formed recipe lists
/// each ingredient at most once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductInput {
    pub product_id: ProductId,
    pub amount: Real,
}

/// Placement assigned by the layout pass; the graph itself never writes it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

/// A product: one output produced from an ordered list of inputs.
///
/// Products are created and owned by [`EconomyGraph`](crate::EconomyGraph);
/// `id` is assigned by the graph on insertion and never reused.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub image_path: String,
    pub inputs: Vec<ProductInput>,
    pub position: Option<Position>,
}

impl Product {
    /// Check self-consistency: a non-blank name and usable input amounts.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }
        for (index, input) in self.inputs.iter().enumerate() {
            if !positive_finite(input.amount) {
                return Err(ProductError::BadInputAmount {
                    index,
                    amount: input.amount,
                });
            }
        }
        Ok(())
    }

    /// True when the product consumes nothing (a raw material, depth 0).
    pub fn is_raw_material(&self) -> bool {
        self.inputs.is_empty()
    }
}

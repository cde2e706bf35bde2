//! Cycle detection over recipe edges.

use std::collections::HashMap;

use sl_core::ProductId;

use crate::product::Product;

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// Find a product lying on a dependency cycle, if any exists.
///
/// Recipe edges run from each input to its consumer; a cycle means some
/// product transitively consumes itself. The walk follows consumer -> input
/// (the reverse orientation), which leaves cycle existence unchanged, and
/// keeps an explicit recursion stack so both the outgoing edges of a
/// rewired product and back-edges into it are covered by one sweep.
pub(crate) fn find_cycle(
    products: &[Product],
    index: &HashMap<ProductId, usize>,
) -> Option<ProductId> {
    let mut marks = vec![Mark::Unvisited; products.len()];
    for start in 0..products.len() {
        if marks[start] == Mark::Unvisited {
            if let Some(hit) = visit(start, products, index, &mut marks) {
                return Some(hit);
            }
        }
    }
    None
}

fn visit(
    at: usize,
    products: &[Product],
    index: &HashMap<ProductId, usize>,
    marks: &mut [Mark],
) -> Option<ProductId> {
    marks[at] = Mark::OnStack;
    for input in &products[at].inputs {
        let Some(&next) = index.get(&input.product_id) else {
            // Dangling inputs are reported by the callers' reference checks.
            continue;
        };
        match marks[next] {
            Mark::OnStack => return Some(products[next].id),
            Mark::Unvisited => {
                if let Some(hit) = visit(next, products, index, marks) {
                    return Some(hit);
                }
            }
            Mark::Done => {}
        }
    }
    marks[at] = Mark::Done;
    None
}

//! The economy graph: an ordered, cycle-free collection of products.

use std::collections::{HashMap, VecDeque};

use sl_core::ProductId;

use crate::cycle;
use crate::error::{GraphError, GraphResult};
use crate::product::{Position, Product, ProductInput};

/// Ordered map of products enforcing a cycle-free dependency invariant.
///
/// Iteration follows insertion order. Ids come from a monotonic counter and
/// are never reused; deletions leave gaps. Every mutation either succeeds
/// with all invariants intact or leaves the graph exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct EconomyGraph {
    nodes: Vec<Product>,
    index: HashMap<ProductId, usize>,
    next_node_id: u32,
    fuel_product_id: Option<ProductId>,
}

impl EconomyGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.nodes
    }

    /// Look up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&slot| &self.nodes[slot])
    }

    /// Id the next inserted product will receive.
    pub fn next_node_id(&self) -> u32 {
        self.next_node_id
    }

    /// The distinguished fuel product, if one is set.
    pub fn fuel_product_id(&self) -> Option<ProductId> {
        self.fuel_product_id
    }

    /// True when `id` is the distinguished fuel product.
    pub fn is_fuel(&self, id: ProductId) -> bool {
        self.fuel_product_id == Some(id)
    }

    /// Add a product, assigning it the next free id.
    ///
    /// Every referenced input must already exist. The insertion runs
    /// through the same cycle check as any other mutation, even though a
    /// fresh product has no consumers yet.
    pub fn add_product(
        &mut self,
        name: impl Into<String>,
        image_path: impl Into<String>,
        inputs: Vec<ProductInput>,
    ) -> GraphResult<ProductId> {
        let id = ProductId::from_index(self.next_node_id);
        let product = Product {
            id,
            name: name.into(),
            image_path: image_path.into(),
            inputs,
            position: None,
        };
        product.validate()?;
        self.check_inputs_exist(&product.inputs)?;

        // Speculative insert, then verify the whole graph stays acyclic.
        self.index.insert(id, self.nodes.len());
        self.nodes.push(product);
        if let Some(at) = cycle::find_cycle(&self.nodes, &self.index) {
            self.nodes.pop();
            self.index.remove(&id);
            return Err(GraphError::Cycle(at));
        }
        self.next_node_id += 1;
        Ok(id)
    }

    /// Replace a product's name, image path and recipe.
    ///
    /// Transactional: the product is swapped speculatively and swapped back
    /// in full before a `Cycle` error is returned. Placement survives the
    /// update untouched.
    pub fn update_product(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        image_path: impl Into<String>,
        inputs: Vec<ProductInput>,
    ) -> GraphResult<()> {
        let &slot = self.index.get(&id).ok_or(GraphError::UnknownNode(id))?;
        if inputs.iter().any(|input| input.product_id == id) {
            return Err(GraphError::SelfLoop(id));
        }
        let candidate = Product {
            id,
            name: name.into(),
            image_path: image_path.into(),
            inputs,
            position: self.nodes[slot].position,
        };
        candidate.validate()?;
        self.check_inputs_exist(&candidate.inputs)?;

        let previous = std::mem::replace(&mut self.nodes[slot], candidate);
        if let Some(at) = cycle::find_cycle(&self.nodes, &self.index) {
            self.nodes[slot] = previous;
            return Err(GraphError::Cycle(at));
        }
        Ok(())
    }

    /// Remove a product that nothing else consumes.
    ///
    /// Returns `Ok(false)` when the id is already absent. Deleting the
    /// fuel product clears the fuel designation with it.
    pub fn delete_product(&mut self, id: ProductId) -> GraphResult<bool> {
        let Some(&slot) = self.index.get(&id) else {
            return Ok(false);
        };
        if let Some(dependent) = self
            .nodes
            .iter()
            .find(|p| p.inputs.iter().any(|input| input.product_id == id))
        {
            return Err(GraphError::HasDependents {
                id,
                dependent: dependent.id,
            });
        }

        self.nodes.remove(slot);
        self.index.remove(&id);
        for (moved, product) in self.nodes.iter().enumerate().skip(slot) {
            self.index.insert(product.id, moved);
        }
        if self.fuel_product_id == Some(id) {
            self.fuel_product_id = None;
        }
        Ok(true)
    }

    /// Set or clear the distinguished fuel product.
    pub fn set_fuel_product(&mut self, id: Option<ProductId>) -> GraphResult<()> {
        if let Some(id) = id {
            if !self.index.contains_key(&id) {
                return Err(GraphError::UnknownNode(id));
            }
        }
        self.fuel_product_id = id;
        Ok(())
    }

    /// Overwrite a product's placement. Returns false when `id` is absent.
    ///
    /// This is the only mutable access collaborators get; recipe edits must
    /// go through [`update_product`](Self::update_product).
    pub fn set_position(&mut self, id: ProductId, position: Position) -> bool {
        match self.index.get(&id) {
            Some(&slot) => {
                self.nodes[slot].position = Some(position);
                true
            }
            None => false,
        }
    }

    /// Kahn's algorithm over recipe edges (input -> consumer).
    ///
    /// Zero-in-degree products are seeded in insertion order and drained
    /// through a FIFO queue, so the result is deterministic for a given
    /// insertion history. The cycle-free invariant guarantees every product
    /// appears exactly once.
    pub fn topological_sort(&self) -> Vec<ProductId> {
        let mut in_degree: HashMap<ProductId, usize> = self
            .nodes
            .iter()
            .map(|p| (p.id, p.inputs.len()))
            .collect();

        let mut successors: HashMap<ProductId, Vec<ProductId>> = HashMap::new();
        for product in &self.nodes {
            for input in &product.inputs {
                successors
                    .entry(input.product_id)
                    .or_default()
                    .push(product.id);
            }
        }

        let mut queue: VecDeque<ProductId> = self
            .nodes
            .iter()
            .filter(|p| p.inputs.is_empty())
            .map(|p| p.id)
            .collect();

        let mut order = Vec::with_capacity(self.nodes.len());
        while let Some(id) = queue.pop_front() {
            order.push(id);
            if let Some(consumers) = successors.get(&id) {
                for &consumer in consumers {
                    let degree = in_degree.get_mut(&consumer).unwrap();
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(consumer);
                    }
                }
            }
        }

        debug_assert_eq!(order.len(), self.nodes.len());
        order
    }

    /// Depth of every product: 0 for raw materials, otherwise
    /// 1 + the maximum depth over the recipe's inputs.
    pub fn depths(&self) -> HashMap<ProductId, u32> {
        let mut memo = HashMap::with_capacity(self.nodes.len());
        for product in &self.nodes {
            self.depth_of(product.id, &mut memo);
        }
        memo
    }

    fn depth_of(&self, id: ProductId, memo: &mut HashMap<ProductId, u32>) -> u32 {
        if let Some(&depth) = memo.get(&id) {
            return depth;
        }
        let depth = match self.product(id) {
            Some(product) => product
                .inputs
                .iter()
                .map(|input| self.depth_of(input.product_id, memo) + 1)
                .max()
                .unwrap_or(0),
            None => 0,
        };
        memo.insert(id, depth);
        depth
    }

    /// Reset to an empty graph; the id counter restarts as well.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.next_node_id = 0;
        self.fuel_product_id = None;
    }

    /// Install a bulk-loaded product set, replacing the current contents.
    ///
    /// The whole set is validated (duplicate ids, unresolved or
    /// self-referential inputs, cycles, fuel resolution) before anything is
    /// touched, so a failed load leaves the previous graph intact. The id
    /// counter is restored from `next_node_id` but never allowed to fall at
    /// or below an existing id.
    pub fn load_parts(
        &mut self,
        products: Vec<Product>,
        next_node_id: u32,
        fuel_product_id: Option<ProductId>,
    ) -> GraphResult<()> {
        let mut index = HashMap::with_capacity(products.len());
        for (slot, product) in products.iter().enumerate() {
            product.validate()?;
            if index.insert(product.id, slot).is_some() {
                return Err(GraphError::DuplicateId(product.id));
            }
        }
        for product in &products {
            for input in &product.inputs {
                if input.product_id == product.id {
                    return Err(GraphError::SelfLoop(product.id));
                }
                if !index.contains_key(&input.product_id) {
                    return Err(GraphError::UnknownInput(input.product_id));
                }
            }
        }
        if let Some(at) = cycle::find_cycle(&products, &index) {
            return Err(GraphError::Cycle(at));
        }
        if let Some(fuel) = fuel_product_id {
            if !index.contains_key(&fuel) {
                return Err(GraphError::UnknownNode(fuel));
            }
        }

        let min_next = products
            .iter()
            .map(|p| p.id.index() + 1)
            .max()
            .unwrap_or(0);
        self.next_node_id = next_node_id.max(min_next);
        self.nodes = products;
        self.index = index;
        self.fuel_product_id = fuel_product_id;
        Ok(())
    }

    fn check_inputs_exist(&self, inputs: &[ProductInput]) -> GraphResult<()> {
        for input in inputs {
            if !self.index.contains_key(&input.product_id) {
                return Err(GraphError::UnknownInput(input.product_id));
            }
        }
        Ok(())
    }
}

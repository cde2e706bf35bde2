//! The economy editor and its change subscriptions.

use rand::Rng;

use sl_core::ProductId;
use sl_gen::{GenParams, GenResult, IconDef, RandomEconomyGenerator};
use sl_graph::{EconomyGraph, GraphResult, ProductInput};
use sl_project::ProjectResult;

/// Handle returned by [`EconomyEditor::subscribe`]; pass it back to cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type ChangeListener = Box<dyn FnMut(&EconomyGraph)>;

/// Owns the current graph and mediates every mutation.
///
/// Each mutation is a pass-through to [`EconomyGraph`]; on success all
/// subscribers are notified with the updated graph before the call returns.
#[derive(Default)]
pub struct EconomyEditor {
    graph: EconomyGraph,
    subscribers: Vec<(SubscriptionId, ChangeListener)>,
    next_subscription: u64,
}

impl EconomyEditor {
    /// Editor over an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor adopting an existing graph.
    pub fn with_graph(graph: EconomyGraph) -> Self {
        Self {
            graph,
            ..Self::default()
        }
    }

    /// Read-only view of the current graph.
    pub fn graph(&self) -> &EconomyGraph {
        &self.graph
    }

    /// Register a change listener; it runs after every successful mutation,
    /// in subscription order.
    pub fn subscribe(&mut self, listener: impl FnMut(&EconomyGraph) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    /// Cancel a subscription. Returns false when the handle is stale.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn add_product(
        &mut self,
        name: impl Into<String>,
        image_path: impl Into<String>,
        inputs: Vec<ProductInput>,
    ) -> GraphResult<ProductId> {
        let id = self.graph.add_product(name, image_path, inputs)?;
        self.notify();
        Ok(id)
    }

    pub fn update_product(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        image_path: impl Into<String>,
        inputs: Vec<ProductInput>,
    ) -> GraphResult<()> {
        self.graph.update_product(id, name, image_path, inputs)?;
        self.notify();
        Ok(())
    }

    /// Delete a product. `Ok(false)` means the id was already absent;
    /// nothing changed and nobody is notified.
    pub fn delete_product(&mut self, id: ProductId) -> GraphResult<bool> {
        let deleted = self.graph.delete_product(id)?;
        if deleted {
            self.notify();
        }
        Ok(deleted)
    }

    pub fn set_fuel_product(&mut self, id: Option<ProductId>) -> GraphResult<()> {
        self.graph.set_fuel_product(id)?;
        self.notify();
        Ok(())
    }

    /// Drop every product.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.notify();
    }

    /// Swap in a different graph wholesale.
    pub fn replace_graph(&mut self, graph: EconomyGraph) {
        self.graph = graph;
        self.notify();
    }

    /// Replace the current graph with one parsed from document text.
    pub fn load_document(&mut self, text: &str) -> ProjectResult<()> {
        sl_project::load_into(&mut self.graph, text)?;
        self.notify();
        Ok(())
    }

    /// Replace the current graph with a freshly generated random economy.
    pub fn generate_random<R: Rng>(
        &mut self,
        icons: Vec<IconDef>,
        params: GenParams,
        rng: R,
    ) -> GenResult<()> {
        self.graph = RandomEconomyGenerator::new(icons, rng).generate(params)?;
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        let graph = &self.graph;
        for (_, listener) in &mut self.subscribers {
            listener(graph);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn record_into(log: Rc<RefCell<Vec<usize>>>, tag: usize) -> impl FnMut(&EconomyGraph) {
        move |graph| log.borrow_mut().push(tag * 100 + graph.len())
    }

    #[test]
    fn subscribers_run_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut editor = EconomyEditor::new();
        editor.subscribe(record_into(Rc::clone(&log), 1));
        editor.subscribe(record_into(Rc::clone(&log), 2));

        editor.add_product("A", "", vec![]).unwrap();
        assert_eq!(*log.borrow(), vec![101, 201]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut editor = EconomyEditor::new();
        let sub = editor.subscribe(record_into(Rc::clone(&log), 1));

        editor.add_product("A", "", vec![]).unwrap();
        assert!(editor.unsubscribe(sub));
        editor.add_product("B", "", vec![]).unwrap();

        assert_eq!(*log.borrow(), vec![101]);
        assert!(!editor.unsubscribe(sub));
    }

    #[test]
    fn failed_mutations_do_not_notify() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut editor = EconomyEditor::new();
        editor.subscribe(record_into(Rc::clone(&log), 1));

        assert!(editor.add_product("  ", "", vec![]).is_err());
        assert!(editor.set_fuel_product(Some(ProductId::from_index(9))).is_err());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn deleting_nothing_does_not_notify() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut editor = EconomyEditor::new();
        editor.subscribe(record_into(Rc::clone(&log), 1));

        assert!(!editor.delete_product(ProductId::from_index(3)).unwrap());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn replace_and_load_notify_with_the_new_graph() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut editor = EconomyEditor::new();
        editor.subscribe(record_into(Rc::clone(&log), 1));

        let mut other = EconomyGraph::new();
        other.add_product("X", "", vec![]).unwrap();
        other.add_product("Y", "", vec![]).unwrap();
        editor.replace_graph(other);

        editor
            .load_document(
                r#"{"version": 2, "nodes": [{"id": 0, "name": "Ore", "imagePath": "", "inputs": []}], "nextNodeId": 1, "fuelProductId": null}"#,
            )
            .unwrap();

        assert_eq!(*log.borrow(), vec![102, 101]);
        assert_eq!(editor.graph().len(), 1);
    }

    #[test]
    fn generate_random_installs_a_graph() {
        use rand::SeedableRng;

        let mut editor = EconomyEditor::new();
        editor
            .generate_random(
                vec![IconDef::new("Ore", "")],
                GenParams {
                    num_nodes: 6,
                    max_depth: 2,
                    min_inputs: 1,
                    max_inputs: 2,
                },
                rand::rngs::StdRng::seed_from_u64(11),
            )
            .unwrap();
        assert_eq!(editor.graph().len(), 6);
    }
}
